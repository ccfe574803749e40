//! automl-learning: simulated model training for the AutoML wizard.
//!
//! Training here is a placeholder. A run waits for a configurable delay and
//! then returns one of two fixed result sets, chosen by the task kind the
//! target column implies. No data is consumed.
//!
//! # Features
//!
//! - **Fixed Catalogs**: five models per task kind with literal metrics
//! - **Async Training**: [`Trainer::train`] resolves after an injectable delay
//! - **Progress Reporting**: one [`ProgressUpdate`] per [`TrainingStage`]
//! - **Selection**: best model by accuracy or R², ranked feature importance
//!
//! # Quick Start
//!
//! ```
//! use automl_learning::{rank_feature_importance, select_best_model, train_models, TrainingConfig};
//! use automl_processing::TaskKind;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let result = train_models(TaskKind::Classification, &TrainingConfig::immediate()).await;
//!
//! let best = select_best_model(&result.model_results, TaskKind::Classification)?;
//! assert_eq!(best.model_name, "XGBoost");
//!
//! let ranked = rank_feature_importance(&result.feature_importance);
//! assert_eq!(ranked[0].feature, "Age");
//! # Ok::<(), automl_learning::LearningError>(())
//! # }).unwrap();
//! ```
//!
//! # Thread Safety
//!
//! [`Trainer`] and [`TrainingResult`] are `Send + Sync`. A trainer holds no
//! mutable state, so one instance can serve any number of runs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod progress;
pub mod selection;
pub mod trainer;
pub mod types;

pub use catalog::catalog_for;
pub use config::{TrainingConfig, TrainingConfigBuilder};
pub use error::LearningError;
pub use progress::{ParseTrainingStageError, ProgressCallback, ProgressUpdate, TrainingStage};
pub use selection::{rank_feature_importance, select_best_model};
pub use trainer::{Trainer, TrainerBuilder, train_models};
pub use types::{FeatureImportance, ModelMetrics, ModelResult, TrainingResult};
