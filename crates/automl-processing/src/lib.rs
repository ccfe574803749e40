//! Data Processing Core for the AutoML Wizard
//!
//! A small, dependency-light library that turns a raw CSV text blob into
//! typed rows, infers column types, and produces the chart-ready aggregates
//! the wizard screens consume.
//!
//! # Overview
//!
//! - **CSV Parsing**: Header-driven parsing with malformed-row tolerance
//! - **Type Inference**: Sample-window inference of `number`, `boolean`, `string`
//! - **Task Inference**: Maps a target column to classification or regression
//! - **Distributions**: Value counts with fixed-width binning for wide numeric ranges
//! - **Correlation Placeholders**: Mock correlation cells for numeric columns
//! - **Summaries**: Dataset and target overviews for the analysis screen
//!
//! # Quick Start
//!
//! ```rust
//! use automl_processing::{build_distribution, infer_task, parse_csv, TaskKind};
//!
//! let text = "age,label\n22,No\n35,Yes\n41,Yes\n";
//! let dataset = parse_csv(text)?;
//!
//! let target = dataset.column("label").expect("label column");
//! assert_eq!(infer_task(target), TaskKind::Classification);
//!
//! let buckets = build_distribution(&dataset.rows, "label");
//! assert_eq!(buckets.len(), 2);
//! # Ok::<(), automl_processing::AnalysisError>(())
//! ```
//!
//! # Configuration
//!
//! Use [`AnalysisConfig`] to change the sampling window or the binning policy:
//!
//! ```rust
//! use automl_processing::{AnalysisConfig, CsvParser, DistributionBuilder};
//!
//! let config = AnalysisConfig::builder()
//!     .type_sample_rows(25)
//!     .bin_count(20)
//!     .include_max_in_last_bin(false)
//!     .build()?;
//!
//! let parser = CsvParser::new(config.clone());
//! let builder = DistributionBuilder::new(config);
//! # let _ = (parser, builder);
//! # Ok::<(), automl_processing::ConfigValidationError>(())
//! ```
//!
//! # Statelessness
//!
//! Every function in this crate is a pure function of its arguments. There is
//! no module-level mutable state; the wizard shell owns the current dataset and
//! passes it in explicitly.

pub mod config;
pub mod error;
pub mod parser;
pub mod profiler;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{AnalysisError, Result as AnalysisResult};
pub use parser::{CsvParser, parse_csv};
pub use profiler::{
    DistributionBuilder, build_distribution, generate_correlation_data,
    generate_correlation_data_random, infer_task, summarize_dataset, summarize_target,
};
pub use types::{
    BucketValue, Column, ColumnType, CorrelationCell, DatasetSummary, DistributionBucket,
    ParsedDataset, Row, TargetSummary, TaskKind,
};
pub use utils::{is_boolean_literal, parse_finite_number};
