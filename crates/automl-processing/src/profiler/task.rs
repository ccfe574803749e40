//! Target-driven task inference.

use tracing::debug;

use crate::types::{Column, TaskKind};

/// Map a target column to the learning task it implies.
///
/// `number` targets are regression problems; every other inferred type
/// (`string`, `boolean`, `unknown`) is classification. Total, no error path.
pub fn infer_task(column: &Column) -> TaskKind {
    let task = column.column_type.task_kind();
    debug!(column = %column.name, column_type = %column.column_type, task = %task, "Inferred task kind");
    task
}
