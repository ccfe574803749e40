//! Wizard State Management
//!
//! [`WizardState`] owns everything the wizard screens share: the loaded
//! dataset, the selected target, the implied task kind and the training
//! results. It is an ordinary value owned by the caller. The processing and
//! learning crates stay pure; every call here hands them their inputs
//! explicitly.
//!
//! # Transitions
//!
//! ```text
//! Upload ──load_dataset──► Preview ──► TargetSelection ──select_target──► Analysis
//!    ▲                                                                      │
//!    │                                                                   train
//!    └────────────────────────── reset ◄────────── Results ◄── Training ◄───┘
//! ```
//!
//! Loading a dataset replaces the previous one completely and clears the
//! target and any results. Selecting a target clears previous results.

use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use automl_learning::{
    FeatureImportance, ModelResult, Trainer, TrainingResult, rank_feature_importance,
    select_best_model,
};
use automl_processing::{
    AnalysisConfig, Column, CorrelationCell, CsvParser, DatasetSummary, DistributionBucket,
    DistributionBuilder, Row, TargetSummary, TaskKind, generate_correlation_data, infer_task,
    summarize_dataset, summarize_target,
};

use crate::error::{Result, WizardError};
use crate::step::WizardStep;

/// Rows shown per preview page.
pub const PREVIEW_PAGE_SIZE: usize = 10;

// ============================================================================
// VIEW TYPES
// ============================================================================

/// One page of the data preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewPage<'a> {
    /// 1-based page number after clamping.
    pub page: usize,
    /// `ceil(total_rows / PREVIEW_PAGE_SIZE)`; zero for an empty dataset.
    pub total_pages: usize,
    pub total_rows: usize,
    pub rows: &'a [Row],
}

/// Everything the analysis screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub dataset: DatasetSummary,
    pub target: TargetSummary,
    pub target_distribution: Vec<DistributionBucket>,
    /// Placeholder values; see [`generate_correlation_data`].
    pub correlation: Vec<CorrelationCell>,
}

// ============================================================================
// WIZARD STATE
// ============================================================================

/// Shared state of one wizard session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WizardState {
    current_step: WizardStep,
    file_name: Option<String>,
    rows: Vec<Row>,
    columns: Vec<Column>,
    target: Option<Column>,
    task_kind: Option<TaskKind>,
    model_results: Vec<ModelResult>,
    feature_importance: Vec<FeatureImportance>,
    best_model: Option<ModelResult>,
    loaded_at: Option<DateTime<Local>>,
    trained_at: Option<DateTime<Local>>,
    #[serde(skip)]
    config: AnalysisConfig,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that parses and aggregates with `config`.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Parse `text` and make it the current dataset.
    ///
    /// On success the previous dataset, target and results are discarded and
    /// the wizard moves to [`WizardStep::Preview`].
    ///
    /// # Errors
    ///
    /// - [`WizardError::Analysis`] when the text has no header line
    /// - [`WizardError::EmptyDataset`] when no data row survives parsing
    ///
    /// The state is left untouched on error.
    pub fn load_dataset(&mut self, file_name: impl Into<String>, text: &str) -> Result<()> {
        let file_name = file_name.into();
        let dataset = CsvParser::new(self.config.clone()).parse(text)?;

        if dataset.is_empty() {
            debug!(file = %file_name, "Rejected dataset without data rows");
            return Err(WizardError::EmptyDataset);
        }

        info!(
            file = %file_name,
            rows = dataset.row_count(),
            columns = dataset.columns.len(),
            "Dataset loaded"
        );

        *self = Self {
            current_step: WizardStep::Preview,
            file_name: Some(file_name),
            rows: dataset.rows,
            columns: dataset.columns,
            loaded_at: Some(Local::now()),
            config: self.config.clone(),
            ..Self::default()
        };
        Ok(())
    }

    /// Make `name` the single target column and derive the task kind.
    ///
    /// Any previous target flag and any training results are cleared. The
    /// wizard moves to [`WizardStep::Analysis`].
    pub fn select_target(&mut self, name: &str) -> Result<TaskKind> {
        if self.rows.is_empty() {
            return Err(WizardError::EmptyDataset);
        }

        let index = self
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| WizardError::UnknownColumn(name.to_string()))?;

        for column in &mut self.columns {
            column.is_target = None;
        }
        self.columns[index].is_target = Some(true);

        let target = self.columns[index].clone();
        let task = infer_task(&target);
        info!(target = %target.name, task = %task, "Target selected");

        self.target = Some(target);
        self.task_kind = Some(task);
        self.clear_results();
        self.current_step = WizardStep::Analysis;
        Ok(task)
    }

    /// Build the analysis screen for the current target.
    ///
    /// `rng` drives the correlation placeholder, so a seeded generator gives
    /// reproducible output.
    pub fn analyze<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AnalysisReport> {
        let target = self.target.as_ref().ok_or(WizardError::MissingTarget)?;

        let report = AnalysisReport {
            dataset: summarize_dataset(&self.rows, &self.columns),
            target: summarize_target(&self.rows, target),
            target_distribution: DistributionBuilder::new(self.config.clone())
                .build(&self.rows, &target.name),
            correlation: generate_correlation_data(&self.columns, rng),
        };

        debug!(
            buckets = report.target_distribution.len(),
            correlation_cells = report.correlation.len(),
            "Analysis ready"
        );
        Ok(report)
    }

    /// Run training for the current task kind and store the results.
    ///
    /// The wizard is on [`WizardStep::Training`] while the trainer runs and
    /// on [`WizardStep::Results`] afterwards.
    pub async fn train(&mut self, trainer: &Trainer) -> Result<&ModelResult> {
        let task = self.task_kind.ok_or(WizardError::MissingTarget)?;

        let previous_step = self.current_step;
        self.current_step = WizardStep::Training;
        let result = trainer.train(task).await;
        self.store_training_result(result, previous_step)
    }

    /// Store `result` and move to [`WizardStep::Results`]. When no best model
    /// can be selected the wizard returns to `previous_step` unchanged.
    fn store_training_result(
        &mut self,
        result: TrainingResult,
        previous_step: WizardStep,
    ) -> Result<&ModelResult> {
        let best = match select_best_model(&result.model_results, result.task_kind) {
            Ok(best) => best.clone(),
            Err(e) => {
                self.current_step = previous_step;
                return Err(e.into());
            }
        };

        info!(best_model = %best.model_name, "Training results stored");

        self.model_results = result.model_results;
        self.feature_importance = result.feature_importance;
        self.trained_at = Some(Local::now());
        self.current_step = WizardStep::Results;
        Ok(&*self.best_model.insert(best))
    }

    /// Start a new analysis: back to [`WizardStep::Upload`] with nothing
    /// loaded. The analysis configuration is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
        debug!("Wizard reset");
    }

    /// Navigate to `step` if its prerequisites are met.
    pub fn go_to(&mut self, step: WizardStep) -> Result<()> {
        if let Some(reason) = self.missing_prerequisite(step) {
            return Err(WizardError::StepUnavailable { step, reason });
        }
        self.current_step = step;
        Ok(())
    }

    /// Whether [`go_to`](Self::go_to) would accept `step`.
    pub fn can_visit(&self, step: WizardStep) -> bool {
        self.missing_prerequisite(step).is_none()
    }

    fn missing_prerequisite(&self, step: WizardStep) -> Option<&'static str> {
        match step {
            WizardStep::Upload => None,
            WizardStep::Preview | WizardStep::TargetSelection if self.rows.is_empty() => {
                Some("no dataset loaded")
            }
            WizardStep::Analysis | WizardStep::Training if self.target.is_none() => {
                Some("no target column selected")
            }
            WizardStep::Results if self.best_model.is_none() => Some("no training results yet"),
            _ => None,
        }
    }

    fn clear_results(&mut self) {
        self.model_results.clear();
        self.feature_importance.clear();
        self.best_model = None;
        self.trained_at = None;
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// Rows of the 1-based `page`, clamped to the available pages.
    pub fn preview_page(&self, page: usize) -> PreviewPage<'_> {
        let total_rows = self.rows.len();
        let total_pages = total_rows.div_ceil(PREVIEW_PAGE_SIZE);
        let page = page.clamp(1, total_pages.max(1));

        let start = ((page - 1) * PREVIEW_PAGE_SIZE).min(total_rows);
        let end = (start + PREVIEW_PAGE_SIZE).min(total_rows);

        PreviewPage {
            page,
            total_pages,
            total_rows,
            rows: &self.rows[start..end],
        }
    }

    /// Columns paired with the task kind each would imply as target.
    pub fn target_candidates(&self) -> Vec<(&Column, TaskKind)> {
        self.columns.iter().map(|c| (c, infer_task(c))).collect()
    }

    /// The best model of the last training run.
    pub fn selected_result(&self) -> Option<&ModelResult> {
        self.best_model.as_ref()
    }

    /// Feature importance in display order.
    pub fn ranked_feature_importance(&self) -> Vec<FeatureImportance> {
        rank_feature_importance(&self.feature_importance)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn target(&self) -> Option<&Column> {
        self.target.as_ref()
    }

    pub fn task_kind(&self) -> Option<TaskKind> {
        self.task_kind
    }

    pub fn model_results(&self) -> &[ModelResult] {
        &self.model_results
    }

    pub fn feature_importance(&self) -> &[FeatureImportance] {
        &self.feature_importance
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn trained_at(&self) -> Option<DateTime<Local>> {
        self.trained_at
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn has_dataset(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automl_learning::{LearningError, TrainingConfig};
    use automl_processing::ColumnType;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CSV: &str = "score,grade,passed\n91,A,true\n78,B,false\n55,C,false\n";

    fn loaded() -> WizardState {
        let mut state = WizardState::new();
        state.load_dataset("grades.csv", CSV).unwrap();
        state
    }

    fn immediate() -> Trainer {
        Trainer::new(TrainingConfig::immediate())
    }

    // ==================== load_dataset ====================

    #[test]
    fn test_load_moves_to_preview() {
        let state = loaded();
        assert_eq!(state.current_step(), WizardStep::Preview);
        assert_eq!(state.file_name(), Some("grades.csv"));
        assert_eq!(state.rows().len(), 3);
        assert!(state.loaded_at().is_some());
        assert!(state.target().is_none());
        assert!(state.columns().iter().all(|c| c.is_target.is_none()));
    }

    #[test]
    fn test_header_only_is_rejected_and_state_kept() {
        let mut state = loaded();
        let result = state.load_dataset("empty.csv", "a,b\n\n");

        assert!(matches!(result, Err(WizardError::EmptyDataset)));
        assert_eq!(state.file_name(), Some("grades.csv"));
        assert_eq!(state.rows().len(), 3);
    }

    #[test]
    fn test_blank_text_is_a_parse_error() {
        let mut state = WizardState::new();
        let error = state.load_dataset("blank.csv", "   \n").unwrap_err();
        assert_eq!(error.error_code(), "EMPTY_INPUT");
        assert_eq!(state.current_step(), WizardStep::Upload);
    }

    #[tokio::test]
    async fn test_reload_replaces_everything() {
        let mut state = loaded();
        state.select_target("score").unwrap();
        state.train(&immediate()).await.unwrap();

        state.load_dataset("other.csv", "x,y\n1,2\n").unwrap();

        assert_eq!(state.file_name(), Some("other.csv"));
        assert_eq!(state.columns().len(), 2);
        assert!(state.target().is_none());
        assert!(state.task_kind().is_none());
        assert!(state.model_results().is_empty());
        assert!(state.selected_result().is_none());
        assert!(state.trained_at().is_none());
    }

    // ==================== select_target ====================

    #[test]
    fn test_select_numeric_target_is_regression() {
        let mut state = loaded();
        assert_eq!(state.select_target("score").unwrap(), TaskKind::Regression);
        assert_eq!(state.current_step(), WizardStep::Analysis);
        assert_eq!(state.target().unwrap().column_type, ColumnType::Number);
    }

    #[test]
    fn test_only_one_target_flag() {
        let mut state = loaded();
        state.select_target("grade").unwrap();
        state.select_target("passed").unwrap();

        let flagged: Vec<&str> = state
            .columns()
            .iter()
            .filter(|c| c.is_target())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["passed"]);
        assert_eq!(state.task_kind(), Some(TaskKind::Classification));
    }

    #[test]
    fn test_unknown_target() {
        let mut state = loaded();
        let error = state.select_target("missing").unwrap_err();
        assert!(matches!(error, WizardError::UnknownColumn(ref name) if name == "missing"));
        assert!(state.target().is_none());
    }

    #[test]
    fn test_select_target_without_dataset() {
        let mut state = WizardState::new();
        assert!(matches!(
            state.select_target("score"),
            Err(WizardError::EmptyDataset)
        ));
    }

    // ==================== analyze ====================

    #[test]
    fn test_analyze_requires_target() {
        let state = loaded();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            state.analyze(&mut rng),
            Err(WizardError::MissingTarget)
        ));
    }

    #[test]
    fn test_analyze_report() {
        let mut state = loaded();
        state.select_target("grade").unwrap();

        let report = state.analyze(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(report.dataset.row_count, 3);
        assert_eq!(report.dataset.numeric_columns, 1);
        assert_eq!(report.target.name, "grade");
        assert_eq!(report.target.unique_values, 3);
        assert_eq!(report.target_distribution.len(), 3);
        assert_eq!(report.correlation.len(), 1);
    }

    // ==================== train ====================

    #[tokio::test]
    async fn test_train_requires_target() {
        let mut state = loaded();
        assert!(matches!(
            state.train(&immediate()).await,
            Err(WizardError::MissingTarget)
        ));
        assert_eq!(state.current_step(), WizardStep::Preview);
    }

    #[tokio::test]
    async fn test_train_stores_results() {
        let mut state = loaded();
        state.select_target("passed").unwrap();

        let best = state.train(&immediate()).await.unwrap().model_name.clone();
        assert_eq!(best, "XGBoost");
        assert_eq!(state.current_step(), WizardStep::Results);
        assert_eq!(state.model_results().len(), 5);
        assert_eq!(state.selected_result().unwrap().model_name, "XGBoost");
        assert_eq!(state.ranked_feature_importance()[0].feature, "Age");
        assert!(state.trained_at().is_some());
    }

    #[test]
    fn test_failed_selection_restores_step() {
        let mut state = loaded();
        state.select_target("passed").unwrap();
        state.current_step = WizardStep::Training;

        let empty = TrainingResult {
            task_kind: TaskKind::Classification,
            model_results: Vec::new(),
            feature_importance: Vec::new(),
        };
        let result = state.store_training_result(empty, WizardStep::Analysis);

        assert!(matches!(
            result,
            Err(WizardError::Learning(LearningError::NoResults))
        ));
        assert_eq!(state.current_step(), WizardStep::Analysis);
        assert!(state.model_results().is_empty());
        assert!(state.selected_result().is_none());
        assert!(state.trained_at().is_none());
    }

    #[tokio::test]
    async fn test_changing_target_clears_results() {
        let mut state = loaded();
        state.select_target("passed").unwrap();
        state.train(&immediate()).await.unwrap();

        state.select_target("score").unwrap();
        assert!(state.model_results().is_empty());
        assert!(!state.can_visit(WizardStep::Results));
    }

    // ==================== navigation ====================

    #[test]
    fn test_navigation_guards() {
        let mut state = WizardState::new();
        assert!(state.go_to(WizardStep::Upload).is_ok());

        let error = state.go_to(WizardStep::Preview).unwrap_err();
        assert!(matches!(
            error,
            WizardError::StepUnavailable {
                step: WizardStep::Preview,
                ..
            }
        ));

        state.load_dataset("grades.csv", CSV).unwrap();
        assert!(state.go_to(WizardStep::TargetSelection).is_ok());
        assert!(state.go_to(WizardStep::Analysis).is_err());
        assert_eq!(state.current_step(), WizardStep::TargetSelection);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let config = AnalysisConfig::builder().bin_count(4).build().unwrap();
        let mut state = WizardState::with_config(config.clone());
        state.load_dataset("grades.csv", CSV).unwrap();
        state.select_target("score").unwrap();
        state.train(&immediate()).await.unwrap();

        state.reset();

        assert_eq!(state.current_step(), WizardStep::Upload);
        assert!(!state.has_dataset());
        assert!(state.columns().is_empty());
        assert!(state.selected_result().is_none());
        assert_eq!(state.config(), &config);
    }

    // ==================== preview ====================

    #[test]
    fn test_preview_pages() {
        let mut text = String::from("n\n");
        for i in 0..23 {
            text.push_str(&format!("{}\n", i));
        }
        let mut state = WizardState::new();
        state.load_dataset("n.csv", &text).unwrap();

        let first = state.preview_page(1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.len(), 10);

        let last = state.preview_page(3);
        assert_eq!(last.rows.len(), 3);
        assert_eq!(last.rows[0].get("n"), Some("20"));

        assert_eq!(state.preview_page(0).page, 1);
        assert_eq!(state.preview_page(99).page, 3);
    }

    #[test]
    fn test_preview_of_empty_state() {
        let state = WizardState::new();
        let page = state.preview_page(5);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_target_candidates() {
        let state = loaded();
        let candidates: Vec<(&str, TaskKind)> = state
            .target_candidates()
            .into_iter()
            .map(|(c, t)| (c.name.as_str(), t))
            .collect();
        assert_eq!(
            candidates,
            vec![
                ("score", TaskKind::Regression),
                ("grade", TaskKind::Classification),
                ("passed", TaskKind::Classification),
            ]
        );
    }
}
