//! Format implementations
//!
//! Serializers that turn a rendered [`OutputNode`](crate::output::OutputNode) tree into text.

pub mod icons;
pub mod json;
pub mod treeviz;

pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
