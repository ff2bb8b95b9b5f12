//! Option callbacks
//!
//! Pure functions that turn raw flag values into normalized request fields.
//! Every failure is a [`TransformError`](crate::error::TransformError) raised
//! before any request is sent.

pub mod attributes;
pub mod bulk;
pub mod choices;
pub mod site;

pub use attributes::*;
pub use bulk::*;
pub use choices::*;
pub use site::*;
