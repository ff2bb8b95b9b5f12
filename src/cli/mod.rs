//! Command-line interface module
//!
//! Declares the global options and the per-resource sub-commands

pub mod args;
pub mod changes;
pub mod interfaces;
pub mod networks;

pub use args::*;
pub use changes::*;
pub use interfaces::*;
pub use networks::*;
