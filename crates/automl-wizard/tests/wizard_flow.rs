//! End-to-end wizard runs on the bundled demo dataset.

use automl_learning::{ModelMetrics, Trainer, TrainingConfig};
use automl_processing::{AnalysisConfig, BucketValue, ColumnType, TaskKind};
use automl_wizard::{WizardError, WizardState, WizardStep, demo};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Helper Functions
// ============================================================================

fn demo_state() -> WizardState {
    let mut state = WizardState::new();
    state
        .load_dataset(demo::DEMO_FILE_NAME, demo::DEMO_CSV)
        .expect("demo dataset should load");
    state
}

fn trainer() -> Trainer {
    Trainer::new(TrainingConfig::immediate())
}

// ============================================================================
// Full Wizard Runs
// ============================================================================

#[tokio::test]
async fn test_demo_classification_run() {
    let mut state = demo_state();

    let types: Vec<(&str, ColumnType)> = state
        .columns()
        .iter()
        .map(|c| (c.name.as_str(), c.column_type))
        .collect();
    assert_eq!(
        types,
        vec![
            ("age", ColumnType::Number),
            ("gender", ColumnType::String),
            ("income", ColumnType::Number),
            ("education", ColumnType::String),
            ("purchased", ColumnType::String),
        ]
    );

    assert_eq!(state.select_target("purchased").unwrap(), TaskKind::Classification);

    let report = state.analyze(&mut StdRng::seed_from_u64(11)).unwrap();
    let counts: Vec<(String, usize)> = report
        .target_distribution
        .iter()
        .map(|b| (b.value.to_string(), b.count))
        .collect();
    assert_eq!(
        counts,
        vec![("No".to_string(), 6), ("Yes".to_string(), 9)]
    );
    assert_eq!(report.correlation.len(), 4);
    assert_eq!(report.dataset.categorical_columns, 3);

    state.go_to(WizardStep::Training).unwrap();
    let best = state.train(&trainer()).await.unwrap();
    assert_eq!(best.model_name, "XGBoost");
    assert!(matches!(
        best.metrics,
        ModelMetrics::Classification { accuracy, .. } if accuracy == 0.95
    ));
    assert_eq!(state.current_step(), WizardStep::Results);
}

#[tokio::test]
async fn test_demo_regression_run() {
    let mut state = demo_state();
    assert_eq!(state.select_target("income").unwrap(), TaskKind::Regression);

    let report = state.analyze(&mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(report.target.range, Some((45000.0, 95000.0)));
    // 15 distinct incomes stay below the binning threshold
    assert_eq!(report.target_distribution.len(), 15);
    assert!(
        report
            .target_distribution
            .iter()
            .all(|b| matches!(b.value, BucketValue::Number(_)))
    );

    let best = state.train(&trainer()).await.unwrap();
    assert_eq!(best.model_name, "XGBoost");
    assert_eq!(best.metrics.primary_score(), 0.91);
    assert_eq!(state.ranked_feature_importance()[0].feature, "Square Footage");
}

#[tokio::test]
async fn test_start_new_analysis() {
    let mut state = demo_state();
    state.select_target("purchased").unwrap();
    state.train(&trainer()).await.unwrap();

    state.reset();
    assert_eq!(state.current_step(), WizardStep::Upload);
    assert!(matches!(
        state.go_to(WizardStep::Results),
        Err(WizardError::StepUnavailable { .. })
    ));

    state
        .load_dataset("tiny.csv", "flag,value\ntrue,1\nfalse,2\n")
        .unwrap();
    assert_eq!(state.select_target("flag").unwrap(), TaskKind::Classification);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_binning_reaches_analysis() {
    let config = AnalysisConfig::builder()
        .binning_threshold(5)
        .bin_count(4)
        .build()
        .unwrap();
    let mut state = WizardState::with_config(config);
    state
        .load_dataset(demo::DEMO_FILE_NAME, demo::DEMO_CSV)
        .unwrap();
    state.select_target("age").unwrap();

    let report = state.analyze(&mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(report.target_distribution.len(), 4);
    assert_eq!(
        report.target_distribution[0].value,
        BucketValue::Text("22.0-29.5".to_string())
    );
    assert_eq!(
        report
            .target_distribution
            .iter()
            .map(|b| b.count)
            .sum::<usize>(),
        15
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut state = demo_state();
    state.select_target("purchased").unwrap();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["current_step"], "analysis");
    assert_eq!(json["file_name"], "demo_customer_data.csv");
    assert_eq!(json["task_kind"], "classification");
    assert_eq!(json["target"]["is_target"], true);
    assert_eq!(json["rows"].as_array().unwrap().len(), 15);
}
