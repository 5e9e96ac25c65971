//! Error type for the codegen crate.
//!
//! Export itself never fails: [`crate::export::export`] folds every
//! [`CodegenError`] into a placeholder comment via
//! [`CodegenError::placeholder`]. The error type exists for the lower-level
//! entry points (registry dispatch, IR decoding) that callers may drive
//! directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a codegen request could not produce output.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// No emitter is registered under the requested target id or label.
    #[error("Framework {0} not supported yet.")]
    UnknownTarget(String),

    /// The target is registered but has no working emitter yet.
    #[error("{0} code generation with states not implemented in this version.")]
    NotImplemented(&'static str),

    /// The IR could not be encoded or decoded.
    #[error("invalid IR JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodegenError {
    /// Grepable error code, one per variant.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTarget(_) => "E_UNKNOWN_TARGET",
            Self::NotImplemented(_) => "E_NOT_IMPLEMENTED",
            Self::Json(_) => "E_IR_JSON",
        }
    }

    /// Render the error as a line comment suitable as export output.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("// {self}")
    }
}
