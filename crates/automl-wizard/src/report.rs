//! Plain-text rendering of the wizard screens for the terminal.

use std::fmt::Write;

use automl_learning::{FeatureImportance, ModelMetrics, ModelResult};
use automl_processing::{Column, TaskKind};

use crate::state::{AnalysisReport, PreviewPage};
use crate::step::WizardStep;

const RULE_WIDTH: usize = 72;
const CELL_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;

/// Section header for `step`.
pub fn render_step_header(step: WizardStep) -> String {
    format!("\n{}\n{}\n{}", "=".repeat(RULE_WIDTH), step, "=".repeat(RULE_WIDTH))
}

/// Preview table: column names with types, then the page's rows.
pub fn render_preview(columns: &[Column], page: &PreviewPage<'_>) -> String {
    let mut out = String::new();

    for column in columns {
        let _ = write!(out, "{:<CELL_WIDTH$}", truncate(&column.name, CELL_WIDTH - 1));
    }
    out.push('\n');
    for column in columns {
        let _ = write!(out, "{:<CELL_WIDTH$}", format!("({})", column.column_type));
    }
    out.push('\n');
    out.push_str(&"-".repeat(CELL_WIDTH * columns.len()));
    out.push('\n');

    for row in page.rows {
        for column in columns {
            let value = row.get(&column.name).unwrap_or("");
            let _ = write!(out, "{:<CELL_WIDTH$}", truncate(value, CELL_WIDTH - 1));
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "Page {} of {} ({} rows)",
        page.page,
        page.total_pages.max(1),
        page.total_rows
    );
    out
}

/// Candidate target columns with the task each implies.
pub fn render_target_candidates(candidates: &[(&Column, TaskKind)]) -> String {
    let mut out = String::from("Choose a target column with --target:\n");
    for (column, task) in candidates {
        let _ = writeln!(
            out,
            "  {:<24} {:<8} -> {}",
            column.name,
            column.column_type,
            task.display_name()
        );
    }
    out
}

/// Dataset overview, target summary, distribution bars and correlation cells.
pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let dataset = &report.dataset;
    let target = &report.target;

    let _ = writeln!(out, "DATASET OVERVIEW");
    let _ = writeln!(out, "  Rows:                {}", dataset.row_count);
    let _ = writeln!(out, "  Columns:             {}", dataset.column_count);
    let _ = writeln!(out, "  Numeric columns:     {}", dataset.numeric_columns);
    let _ = writeln!(out, "  Categorical columns: {}", dataset.categorical_columns);
    let _ = writeln!(out, "  Boolean columns:     {}", dataset.boolean_columns);
    let _ = writeln!(out);

    let _ = writeln!(out, "TARGET");
    let _ = writeln!(out, "  Column:        {} ({})", target.name, target.column_type);
    let _ = writeln!(out, "  Task:          {}", target.task_kind.display_name());
    let _ = writeln!(out, "  Unique values: {}", target.unique_values);
    if let Some((min, max)) = target.range {
        let _ = writeln!(out, "  Range:         {} to {}", min, max);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "DISTRIBUTION");
    let peak = report
        .target_distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bucket in &report.target_distribution {
        let width = if peak == 0 {
            0
        } else {
            bucket.count * BAR_WIDTH / peak
        };
        let _ = writeln!(
            out,
            "  {:<16} {:>5} {}",
            truncate(&bucket.value.to_string(), 16),
            bucket.count,
            "#".repeat(width)
        );
    }

    if !report.correlation.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "CORRELATION (placeholder values)");
        for cell in &report.correlation {
            let _ = writeln!(out, "  {:<16} {:<16} {:>6.2}", cell.x, cell.y, cell.correlation);
        }
    }

    out
}

/// Model comparison with the best model marked, then ranked feature importance.
pub fn render_results(
    results: &[ModelResult],
    best: Option<&ModelResult>,
    ranked_features: &[FeatureImportance],
) -> String {
    let mut out = String::from("MODEL COMPARISON\n");

    for result in results {
        let marker = if best.is_some_and(|b| b.model_name == result.model_name) {
            "*"
        } else {
            " "
        };
        let metrics = match result.metrics {
            ModelMetrics::Classification {
                accuracy,
                precision,
                recall,
                f1_score,
            } => format!(
                "accuracy {:.2}  precision {:.2}  recall {:.2}  f1 {:.2}",
                accuracy, precision, recall, f1_score
            ),
            ModelMetrics::Regression { rmse, mae, r2 } => {
                format!("rmse {:.2}  mae {:.2}  r2 {:.2}", rmse, mae, r2)
            }
        };
        let _ = writeln!(out, "{} {:<24} {}", marker, result.model_name, metrics);
    }

    if let Some(best) = best {
        let _ = writeln!(
            out,
            "\nBest model: {} ({} {:.2})",
            best.model_name,
            best.metrics.primary_score_name(),
            best.metrics.primary_score()
        );
    }

    let _ = writeln!(out, "\nFEATURE IMPORTANCE");
    for feature in ranked_features {
        let width = (feature.importance.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "  {:<18} {:>5.2} {}",
            feature.feature,
            feature.importance,
            "#".repeat(width)
        );
    }

    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}~", kept)
    }
}
