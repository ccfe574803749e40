//! Sample-window type inference for parsed columns.
//!
//! Precedence, per sampled value:
//! - empty value: no change
//! - finite number: `unknown -> number`, every other state unchanged
//! - `true`/`false` literal: `unknown -> boolean`, every other state unchanged
//! - anything else: `string`, regardless of the current state
//!
//! So `string` is sticky, and `number`/`boolean` never overwrite each other:
//! the first concrete category seen in the window wins between those two.

use crate::types::ColumnType;
use crate::utils::{is_boolean_literal, parse_finite_number};

/// Apply one sampled value to a column's current type.
pub(crate) fn observe_value(current: ColumnType, value: &str) -> ColumnType {
    if value.is_empty() {
        return current;
    }

    if parse_finite_number(value).is_some() {
        match current {
            ColumnType::Unknown => ColumnType::Number,
            other => other,
        }
    } else if is_boolean_literal(value) {
        match current {
            ColumnType::Unknown => ColumnType::Boolean,
            other => other,
        }
    } else {
        ColumnType::String
    }
}

/// Tracks the evolving type of every column while the sample window is open.
#[derive(Debug, Clone)]
pub(crate) struct ColumnTypeTracker {
    types: Vec<ColumnType>,
}

impl ColumnTypeTracker {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            types: vec![ColumnType::Unknown; width],
        }
    }

    /// Feed one accepted row; `fields` must be as wide as the header.
    pub(crate) fn observe_row(&mut self, fields: &[&str]) {
        for (slot, value) in self.types.iter_mut().zip(fields) {
            *slot = observe_value(*slot, value);
        }
    }

    pub(crate) fn finish(self) -> Vec<ColumnType> {
        self.types
    }
}
