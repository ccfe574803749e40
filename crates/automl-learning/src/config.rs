//! Configuration for simulated training.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use automl_learning::TrainingConfig;
//!
//! let config = TrainingConfig::builder()
//!     .delay(Duration::from_millis(250))
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.delay(), Duration::from_millis(250));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LearningError;

/// Default simulated training time in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Upper bound accepted for the simulated training time (10 minutes).
pub const MAX_DELAY_MS: u64 = 600_000;

/// Configuration for the [`Trainer`](crate::Trainer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// How long training pretends to run, in milliseconds (default: 2000).
    ///
    /// Zero resolves immediately, which is what tests use.
    pub delay_ms: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl TrainingConfig {
    /// Create a new builder for `TrainingConfig`.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }

    /// Configuration with no delay.
    #[must_use]
    pub fn immediate() -> Self {
        Self { delay_ms: 0 }
    }

    /// Simulated training time.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::InvalidConfig`] if `delay_ms` exceeds
    /// [`MAX_DELAY_MS`].
    pub fn validate(&self) -> Result<(), LearningError> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(LearningError::InvalidConfig(format!(
                "delay_ms must be at most {}, got {}",
                MAX_DELAY_MS, self.delay_ms
            )));
        }
        Ok(())
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Default)]
pub struct TrainingConfigBuilder {
    delay_ms: Option<u64>,
}

impl TrainingConfigBuilder {
    /// Set the simulated training time.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay_ms = Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Set the simulated training time in milliseconds.
    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<TrainingConfig, LearningError> {
        let config = TrainingConfig {
            delay_ms: self.delay_ms.unwrap_or(DEFAULT_DELAY_MS),
        };
        config.validate()?;
        Ok(config)
    }
}
