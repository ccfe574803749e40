//! AutoML Wizard
//!
//! The wizard walks a user through six steps: upload a CSV, preview it, pick
//! a target column, inspect the analysis, train models and review results.
//! [`WizardState`] carries the data between steps; the parsing and training
//! themselves live in `automl-processing` and `automl-learning`.
//!
//! # Example
//!
//! ```
//! use automl_learning::{Trainer, TrainingConfig};
//! use automl_wizard::{WizardState, WizardStep, demo};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut state = WizardState::new();
//! state.load_dataset(demo::DEMO_FILE_NAME, demo::DEMO_CSV)?;
//! state.select_target("purchased")?;
//!
//! let report = state.analyze(&mut StdRng::seed_from_u64(7))?;
//! assert_eq!(report.target_distribution.len(), 2);
//!
//! let best = state.train(&Trainer::new(TrainingConfig::immediate())).await?;
//! assert_eq!(best.model_name, "XGBoost");
//! assert_eq!(state.current_step(), WizardStep::Results);
//! # Ok::<(), automl_wizard::WizardError>(())
//! # }).unwrap();
//! ```

pub mod demo;
pub mod error;
pub mod report;
pub mod state;
pub mod step;

pub use error::{Result, WizardError};
pub use state::{AnalysisReport, PREVIEW_PAGE_SIZE, PreviewPage, WizardState};
pub use step::WizardStep;
