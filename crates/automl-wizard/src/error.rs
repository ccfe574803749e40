//! Error type for wizard transitions.
//!
//! Guards that the processing core leaves to its caller live here: an empty
//! dataset blocks progression, and analysis or training need a target.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use automl_learning::LearningError;
use automl_processing::AnalysisError;

use crate::step::WizardStep;

#[derive(Error, Debug)]
pub enum WizardError {
    /// The loaded text produced no data rows.
    #[error("The dataset contains no data rows")]
    EmptyDataset,

    /// Analysis or training was requested before a target was chosen.
    #[error("No target column selected")]
    MissingTarget,

    /// The requested target column is not part of the dataset.
    #[error("Column '{0}' not found in dataset")]
    UnknownColumn(String),

    /// Navigation to a step whose prerequisites are missing.
    #[error("{step} is not available: {reason}")]
    StepUnavailable {
        step: WizardStep,
        reason: &'static str,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Learning(#[from] LearningError),
}

impl WizardError {
    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::MissingTarget => "MISSING_TARGET",
            Self::UnknownColumn(_) => "UNKNOWN_COLUMN",
            Self::StepUnavailable { .. } => "STEP_UNAVAILABLE",
            Self::Analysis(e) => e.error_code(),
            Self::Learning(e) => e.error_code(),
        }
    }
}

impl Serialize for WizardError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("WizardError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;
