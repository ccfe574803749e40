//! Integration tests for simulated training.

use automl_learning::{
    ModelMetrics, ProgressUpdate, Trainer, TrainingConfig, TrainingStage, rank_feature_importance,
    select_best_model, train_models,
};
use automl_processing::{TaskKind, infer_task, parse_csv};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Helper Functions
// ============================================================================

const CSV: &str = "sqft,bedrooms,price\n1200,2,250000\n1800,3,340000\n950,1,180000\n";

fn task_for(target: &str) -> TaskKind {
    let dataset = parse_csv(CSV).expect("CSV should parse");
    infer_task(dataset.column(target).expect("column exists"))
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[tokio::test]
async fn test_numeric_target_trains_regression_models() {
    let task = task_for("price");
    assert_eq!(task, TaskKind::Regression);

    let result = train_models(task, &TrainingConfig::immediate()).await;
    for model in &result.model_results {
        assert!(
            matches!(model.metrics, ModelMetrics::Regression { .. }),
            "{} should carry regression metrics",
            model.model_name
        );
    }

    let best = select_best_model(&result.model_results, task).unwrap();
    assert_eq!(best.model_name, "XGBoost");
}

#[tokio::test]
async fn test_results_are_identical_across_runs() {
    let config = TrainingConfig::immediate();
    let first = train_models(TaskKind::Classification, &config).await;
    let second = train_models(TaskKind::Classification, &config).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_ranked_importance_for_display() {
    let result = train_models(TaskKind::Classification, &TrainingConfig::immediate()).await;
    let ranked = rank_feature_importance(&result.feature_importance);

    let top3: Vec<&str> = ranked.iter().take(3).map(|f| f.feature.as_str()).collect();
    assert_eq!(top3, vec!["Age", "Income", "Education"]);
    assert_eq!(ranked.len(), result.feature_importance.len());
}

// ============================================================================
// Progress and Timing Tests
// ============================================================================

#[tokio::test]
async fn test_callback_invoked_once_per_stage() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let trainer = Trainer::builder()
        .config(TrainingConfig::immediate())
        .on_progress(move |_: ProgressUpdate| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    trainer.train(TaskKind::Regression).await;
    trainer.train(TaskKind::Classification).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2 * TrainingStage::ALL.len());
}

#[tokio::test]
async fn test_progress_is_monotonic() {
    let progress = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&progress);

    Trainer::builder()
        .config(TrainingConfig::immediate())
        .on_progress(move |update| sink.lock().unwrap().push(update.progress))
        .build()
        .train(TaskKind::Classification)
        .await;

    let progress = progress.lock().unwrap();
    assert!(progress.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(progress.last().copied(), Some(1.0));
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_elapses_before_results() {
    let config = TrainingConfig::builder()
        .delay(Duration::from_millis(750))
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let result = train_models(TaskKind::Regression, &config).await;

    assert!(start.elapsed() >= Duration::from_millis(750));
    assert_eq!(result.model_results.len(), 5);
}

#[tokio::test]
async fn test_trainer_can_run_on_spawned_task() {
    let trainer = Trainer::new(TrainingConfig::immediate());
    let handle = tokio::spawn(async move { trainer.train(TaskKind::Classification).await });
    let result = handle.await.unwrap();
    assert_eq!(result.task_kind, TaskKind::Classification);
}
