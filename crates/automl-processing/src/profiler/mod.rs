//! Dataset profiling for the analysis screens.
//!
//! This module provides:
//! - Task inference from the selected target column
//! - Value distributions with fixed-width binning
//! - Placeholder correlation cells for numeric columns
//! - Dataset and target summaries

mod correlation;
mod distribution;
mod summary;
mod task;

pub use correlation::{generate_correlation_data, generate_correlation_data_random};
pub use distribution::{DistributionBuilder, build_distribution};
pub use summary::{summarize_dataset, summarize_target};
pub use task::infer_task;
