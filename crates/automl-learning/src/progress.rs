//! Progress reporting for simulated training.
//!
//! A [`Trainer`](crate::Trainer) walks through every [`TrainingStage`] in
//! order and sends one [`ProgressUpdate`] per stage to the optional
//! [`ProgressCallback`].
//!
//! # Example
//!
//! ```
//! use automl_learning::{ProgressUpdate, Trainer, TrainingConfig};
//!
//! let trainer = Trainer::builder()
//!     .config(TrainingConfig::immediate())
//!     .on_progress(|update: ProgressUpdate| {
//!         println!("{:.0}% - {}", update.progress * 100.0, update.message);
//!     })
//!     .build();
//! # let _ = trainer;
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stage of a training run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStage {
    #[default]
    PreparingData,
    FeatureEngineering,
    /// The simulated training delay is spent here.
    TrainingModels,
    EvaluatingPerformance,
    PreparingVisualizations,
    /// Terminal stage. Results are available.
    Complete,
}

impl TrainingStage {
    /// All stages in execution order.
    pub const ALL: [TrainingStage; 6] = [
        TrainingStage::PreparingData,
        TrainingStage::FeatureEngineering,
        TrainingStage::TrainingModels,
        TrainingStage::EvaluatingPerformance,
        TrainingStage::PreparingVisualizations,
        TrainingStage::Complete,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStage::PreparingData => "preparing_data",
            TrainingStage::FeatureEngineering => "feature_engineering",
            TrainingStage::TrainingModels => "training_models",
            TrainingStage::EvaluatingPerformance => "evaluating_performance",
            TrainingStage::PreparingVisualizations => "preparing_visualizations",
            TrainingStage::Complete => "complete",
        }
    }

    /// Label shown next to the progress bar.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingStage::PreparingData => "Preparing data",
            TrainingStage::FeatureEngineering => "Feature engineering",
            TrainingStage::TrainingModels => "Training models",
            TrainingStage::EvaluatingPerformance => "Evaluating performance",
            TrainingStage::PreparingVisualizations => "Preparing visualizations",
            TrainingStage::Complete => "Complete",
        }
    }

    /// Overall progress reported when this stage starts, from 0.0 to 1.0.
    ///
    /// Strictly increasing along [`ALL`](Self::ALL).
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self {
            TrainingStage::PreparingData => 0.10,
            TrainingStage::FeatureEngineering => 0.25,
            TrainingStage::TrainingModels => 0.65,
            TrainingStage::EvaluatingPerformance => 0.80,
            TrainingStage::PreparingVisualizations => 0.90,
            TrainingStage::Complete => 1.0,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrainingStage::Complete)
    }
}

impl fmt::Display for TrainingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing an unknown [`TrainingStage`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrainingStageError {
    invalid_value: String,
}

impl ParseTrainingStageError {
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseTrainingStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid training stage: '{}'", self.invalid_value)
    }
}

impl std::error::Error for ParseTrainingStageError {}

impl FromStr for TrainingStage {
    type Err = ParseTrainingStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseTrainingStageError {
                invalid_value: s.to_string(),
            })
    }
}

/// A progress update sent while training runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub stage: TrainingStage,

    /// Overall progress from 0.0 to 1.0.
    pub progress: f64,

    /// Human-readable status message.
    pub message: String,

    /// Number of models in the catalog being trained, once known.
    pub model_count: Option<usize>,
}

impl ProgressUpdate {
    /// Update announcing the start of `stage`.
    pub fn for_stage(stage: TrainingStage) -> Self {
        Self {
            stage,
            progress: stage.progress(),
            message: stage.display_name().to_string(),
            model_count: None,
        }
    }

    pub fn with_model_count(mut self, count: usize) -> Self {
        self.model_count = Some(count);
        self
    }
}

impl Default for ProgressUpdate {
    fn default() -> Self {
        Self::for_stage(TrainingStage::default())
    }
}

/// Callback receiving [`ProgressUpdate`]s.
///
/// Must be `Send + Sync` so a trainer can be moved onto another task.
pub type ProgressCallback = Arc<dyn Fn(ProgressUpdate) + Send + Sync>;
