//! Simulated training runs.
//!
//! [`Trainer::train`] waits for the configured delay and then resolves with
//! the literal catalog for the requested task kind. There is no partial
//! result and no cancellation: one call is one unit of work.
//!
//! # Example
//!
//! ```
//! use automl_learning::{Trainer, TrainingConfig};
//! use automl_processing::TaskKind;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let trainer = Trainer::new(TrainingConfig::immediate());
//! let result = trainer.train(TaskKind::Regression).await;
//! assert_eq!(result.model_results.len(), 5);
//! # });
//! ```

use tracing::{debug, info};

use automl_processing::TaskKind;

use crate::catalog::catalog_for;
use crate::config::TrainingConfig;
use crate::progress::{ProgressCallback, ProgressUpdate, TrainingStage};
use crate::types::TrainingResult;

/// Train models for `task` with `config` and no progress reporting.
pub async fn train_models(task: TaskKind, config: &TrainingConfig) -> TrainingResult {
    Trainer::new(config.clone()).train(task).await
}

/// Runs simulated training.
///
/// Use [`Trainer::builder()`] to attach a progress callback.
#[derive(Clone, Default)]
pub struct Trainer {
    config: TrainingConfig,
    progress_callback: Option<ProgressCallback>,
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("config", &self.config)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

static_assertions::assert_impl_all!(Trainer: Send, Sync);
static_assertions::assert_impl_all!(TrainingResult: Send, Sync);

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    pub fn builder() -> TrainerBuilder {
        TrainerBuilder::default()
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run training for `task`.
    ///
    /// Reports every [`TrainingStage`] in order, sleeps for the configured
    /// delay during [`TrainingStage::TrainingModels`], and returns the
    /// catalog for `task`.
    pub async fn train(&self, task: TaskKind) -> TrainingResult {
        info!(task = %task, delay_ms = self.config.delay_ms, "Starting simulated training");

        let result = catalog_for(task);
        let model_count = result.model_results.len();

        for stage in TrainingStage::ALL {
            let update = match stage {
                TrainingStage::PreparingData | TrainingStage::FeatureEngineering => {
                    ProgressUpdate::for_stage(stage)
                }
                _ => ProgressUpdate::for_stage(stage).with_model_count(model_count),
            };
            self.report(update);

            if stage == TrainingStage::TrainingModels && !self.config.delay().is_zero() {
                tokio::time::sleep(self.config.delay()).await;
            }
        }

        info!(task = %task, models = model_count, "Training complete");
        result
    }

    fn report(&self, update: ProgressUpdate) {
        debug!(stage = update.stage.as_str(), progress = update.progress, "Training progress");
        if let Some(callback) = &self.progress_callback {
            callback(update);
        }
    }
}

/// Builder for [`Trainer`].
#[derive(Default)]
pub struct TrainerBuilder {
    config: TrainingConfig,
    progress_callback: Option<ProgressCallback>,
}

impl TrainerBuilder {
    /// Set the training configuration (default: [`TrainingConfig::default`]).
    pub fn config(mut self, config: TrainingConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the progress callback.
    ///
    /// Called synchronously once per stage; keep it fast.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'static,
    {
        self.progress_callback = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn build(self) -> Trainer {
        Trainer {
            config: self.config,
            progress_callback: self.progress_callback,
        }
    }
}
