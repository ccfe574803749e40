//! Error types for the data processing core.
//!
//! Malformed rows and empty lines are not errors: the parser filters them.
//! The variants here cover the few conditions a caller has to react to.
//!
//! Errors are serializable so a UI shell can forward them as
//! `{code, message}` pairs.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// The main error type for the processing core.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text contained no non-empty line, so there is no header.
    #[error("Input contains no header line")]
    EmptyInput,

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

impl AnalysisError {
    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for processing operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
