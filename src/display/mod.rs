//! Result presentation
//!
//! Static display tables choose and label the fields printed for each
//! resource; the renderer turns a result set into text.

pub mod fields;
pub mod render;

pub use fields::*;
pub use render::*;
