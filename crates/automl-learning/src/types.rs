//! Result types returned by simulated training.
//!
//! - [`ModelResult`]: one trained model with its metric set
//! - [`ModelMetrics`]: classification or regression metrics, never both
//! - [`FeatureImportance`]: one feature's importance score
//! - [`TrainingResult`]: everything a training run produces

use serde::{Deserialize, Serialize};

use automl_processing::TaskKind;

/// Evaluation metrics of one model.
///
/// The two variants are mutually exclusive, so a result can never mix
/// classification and regression fields. Serialized untagged, which makes
/// the metric names appear directly next to `model_name` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelMetrics {
    /// Classification metrics, each in `[0, 1]`.
    Classification {
        accuracy: f64,
        precision: f64,
        recall: f64,
        f1_score: f64,
    },

    /// Regression metrics. `rmse` and `mae` are non-negative; `r2` is
    /// typically at most 1.
    Regression { rmse: f64, mae: f64, r2: f64 },
}

impl ModelMetrics {
    /// Task kind these metrics belong to.
    #[must_use]
    pub fn task_kind(&self) -> TaskKind {
        match self {
            Self::Classification { .. } => TaskKind::Classification,
            Self::Regression { .. } => TaskKind::Regression,
        }
    }

    /// Score used to rank models: accuracy for classification, R² for
    /// regression. Higher is better in both cases.
    #[must_use]
    pub fn primary_score(&self) -> f64 {
        match self {
            Self::Classification { accuracy, .. } => *accuracy,
            Self::Regression { r2, .. } => *r2,
        }
    }

    /// Name of [`primary_score`](Self::primary_score).
    #[must_use]
    pub fn primary_score_name(&self) -> &'static str {
        match self {
            Self::Classification { .. } => "accuracy",
            Self::Regression { .. } => "r2",
        }
    }
}

/// One trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub model_name: String,
    #[serde(flatten)]
    pub metrics: ModelMetrics,
}

impl ModelResult {
    /// Create a classification result.
    pub fn classification(
        model_name: impl Into<String>,
        accuracy: f64,
        precision: f64,
        recall: f64,
        f1_score: f64,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            metrics: ModelMetrics::Classification {
                accuracy,
                precision,
                recall,
                f1_score,
            },
        }
    }

    /// Create a regression result.
    pub fn regression(model_name: impl Into<String>, rmse: f64, mae: f64, r2: f64) -> Self {
        Self {
            model_name: model_name.into(),
            metrics: ModelMetrics::Regression { rmse, mae, r2 },
        }
    }

    #[must_use]
    pub fn task_kind(&self) -> TaskKind {
        self.metrics.task_kind()
    }
}

/// Importance score of one input feature.
///
/// Scores are not normalized and need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

impl FeatureImportance {
    pub fn new(feature: impl Into<String>, importance: f64) -> Self {
        Self {
            feature: feature.into(),
            importance,
        }
    }
}

/// Output of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Task the models were trained for.
    pub task_kind: TaskKind,

    /// One entry per model, in catalog order.
    pub model_results: Vec<ModelResult>,

    /// Feature importance in catalog order. Use
    /// [`rank_feature_importance`](crate::rank_feature_importance) for
    /// display order.
    pub feature_importance: Vec<FeatureImportance>,
}
