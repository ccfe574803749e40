//! Dataset and target overviews for the analysis screen.

use std::collections::HashSet;

use crate::types::{Column, ColumnType, DatasetSummary, Row, TargetSummary};
use crate::utils::parse_finite_number;

/// Count rows and columns, and columns per inferred type.
pub fn summarize_dataset(rows: &[Row], columns: &[Column]) -> DatasetSummary {
    let mut summary = DatasetSummary {
        row_count: rows.len(),
        column_count: columns.len(),
        ..Default::default()
    };

    for column in columns {
        match column.column_type {
            ColumnType::Number => summary.numeric_columns += 1,
            ColumnType::String => summary.categorical_columns += 1,
            ColumnType::Boolean => summary.boolean_columns += 1,
            ColumnType::Unknown => summary.unknown_columns += 1,
        }
    }

    summary
}

/// Describe the target column.
///
/// Distinct values are counted by raw string form. `range` is computed only
/// for `number` targets, over the values that parse as finite numbers, and is
/// `None` when there are none.
pub fn summarize_target(rows: &[Row], column: &Column) -> TargetSummary {
    let values: Vec<&str> = rows
        .iter()
        .filter_map(|row| row.get(&column.name))
        .collect();

    let unique_values = values.iter().collect::<HashSet<_>>().len();

    let range = if column.is_numeric() {
        values
            .iter()
            .filter_map(|v| parse_finite_number(v))
            .fold(None, |acc: Option<(f64, f64)>, n| match acc {
                Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
                None => Some((n, n)),
            })
    } else {
        None
    };

    TargetSummary {
        name: column.name.clone(),
        column_type: column.column_type,
        task_kind: column.column_type.task_kind(),
        unique_values,
        range,
    }
}
