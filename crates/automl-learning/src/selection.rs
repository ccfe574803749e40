//! Choosing the best model and ordering feature importance for display.

use automl_processing::TaskKind;
use tracing::debug;

use crate::error::LearningError;
use crate::types::{FeatureImportance, ModelResult};

/// Pick the best model for `task`.
///
/// Classification models are ranked by accuracy and regression models by
/// R². Results whose metrics belong to the other task are ignored. Ties go
/// to the earliest result.
///
/// # Errors
///
/// Returns [`LearningError::NoResults`] if no result matches `task`.
pub fn select_best_model(
    results: &[ModelResult],
    task: TaskKind,
) -> Result<&ModelResult, LearningError> {
    let mut best: Option<&ModelResult> = None;

    for result in results.iter().filter(|r| r.task_kind() == task) {
        let better = match best {
            Some(current) => result.metrics.primary_score() > current.metrics.primary_score(),
            None => true,
        };
        if better {
            best = Some(result);
        }
    }

    let best = best.ok_or(LearningError::NoResults)?;
    debug!(
        model = %best.model_name,
        metric = best.metrics.primary_score_name(),
        score = best.metrics.primary_score(),
        "Selected best model"
    );
    Ok(best)
}

/// Feature importance sorted by descending importance.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_feature_importance(features: &[FeatureImportance]) -> Vec<FeatureImportance> {
    let mut ranked = features.to_vec();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    ranked
}
