//! Error types for output format operations

use thiserror::Error;

/// Errors raised while turning an output tree into a serialized form.
///
/// Rendering itself never fails; absent input is `None`, unsupported nodes are skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
