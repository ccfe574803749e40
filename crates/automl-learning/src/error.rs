//! Error types for the automl-learning crate.
//!
//! Simulated training itself cannot fail. Errors come from configuration
//! and from selecting a best model out of an empty result list.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for automl-learning operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LearningError {
    /// Invalid training configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Best-model selection was asked to choose from no results.
    #[error("No model results to select from")]
    NoResults,
}

impl LearningError {
    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::NoResults => "NO_RESULTS",
        }
    }
}

impl Serialize for LearningError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LearningError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
