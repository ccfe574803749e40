//! Configuration for parsing and aggregation.
//!
//! The defaults reproduce the wizard's fixed behaviour: a 10-row type
//! sampling window and 10 bins once a numeric column has more than 15
//! distinct values.

use serde::{Deserialize, Serialize};

/// Default number of data lines examined for type inference.
pub const DEFAULT_TYPE_SAMPLE_ROWS: usize = 10;

/// Default distinct-value count that must be exceeded before binning.
pub const DEFAULT_BINNING_THRESHOLD: usize = 15;

/// Default number of fixed-width bins.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Configuration for the parser and the distribution builder.
///
/// Use [`AnalysisConfig::builder()`] to create a validated configuration.
///
/// # Example
///
/// ```rust
/// use automl_processing::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .binning_threshold(30)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.bin_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of data lines after the header that feed type inference.
    /// Lines outside this window never change a column's type.
    /// Default: 10
    pub type_sample_rows: usize,

    /// A numeric column is binned only when its distinct value count
    /// exceeds this threshold.
    /// Default: 15
    pub binning_threshold: usize,

    /// Number of fixed-width bins.
    /// Default: 10
    pub bin_count: usize,

    /// Whether the last bin is closed on the right (`[start, max]`).
    /// When false every bin is half-open and values equal to the maximum
    /// fall outside all bins.
    /// Default: true
    pub include_max_in_last_bin: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            type_sample_rows: DEFAULT_TYPE_SAMPLE_ROWS,
            binning_threshold: DEFAULT_BINNING_THRESHOLD,
            bin_count: DEFAULT_BIN_COUNT,
            include_max_in_last_bin: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.type_sample_rows == 0 {
            return Err(ConfigValidationError::ZeroSampleRows);
        }

        if self.bin_count == 0 {
            return Err(ConfigValidationError::ZeroBinCount);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid type_sample_rows: 0 (must be at least 1)")]
    ZeroSampleRows,

    #[error("Invalid bin_count: 0 (must be at least 1)")]
    ZeroBinCount,
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    type_sample_rows: Option<usize>,
    binning_threshold: Option<usize>,
    bin_count: Option<usize>,
    include_max_in_last_bin: Option<bool>,
}

impl AnalysisConfigBuilder {
    /// Set how many data lines feed type inference.
    pub fn type_sample_rows(mut self, rows: usize) -> Self {
        self.type_sample_rows = Some(rows);
        self
    }

    /// Set the distinct-value count that must be exceeded before binning.
    pub fn binning_threshold(mut self, threshold: usize) -> Self {
        self.binning_threshold = Some(threshold);
        self
    }

    /// Set the number of fixed-width bins.
    pub fn bin_count(mut self, count: usize) -> Self {
        self.bin_count = Some(count);
        self
    }

    /// Close the last bin on the right so the maximum value is counted.
    pub fn include_max_in_last_bin(mut self, include: bool) -> Self {
        self.include_max_in_last_bin = Some(include);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            type_sample_rows: self.type_sample_rows.unwrap_or(DEFAULT_TYPE_SAMPLE_ROWS),
            binning_threshold: self.binning_threshold.unwrap_or(DEFAULT_BINNING_THRESHOLD),
            bin_count: self.bin_count.unwrap_or(DEFAULT_BIN_COUNT),
            include_max_in_last_bin: self.include_max_in_last_bin.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
