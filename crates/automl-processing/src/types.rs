use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Column Schema
// ============================================================================

/// Inferred type of a column.
///
/// Assigned once at parse time from the sample window and never re-inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Every sampled value parsed as a finite number.
    Number,
    /// At least one sampled value was neither numeric nor a boolean literal.
    String,
    /// Sampled values were `true`/`false` literals.
    Boolean,
    /// No sampled value decided the type (e.g. header-only input).
    #[default]
    Unknown,
}

impl ColumnType {
    /// Lowercase name used in previews and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Unknown => "unknown",
        }
    }

    /// Task kind a target of this type implies.
    pub fn task_kind(&self) -> TaskKind {
        match self {
            Self::Number => TaskKind::Regression,
            Self::String | Self::Boolean | Self::Unknown => TaskKind::Classification,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column of the parsed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Set only on the column the user picked as prediction target.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_target: Option<bool>,
}

impl Column {
    /// Create a column with no target flag.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            is_target: None,
        }
    }

    /// Copy of this column flagged as the prediction target.
    pub fn as_target(&self) -> Self {
        Self {
            is_target: Some(true),
            ..self.clone()
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.column_type == ColumnType::Number
    }

    pub fn is_target(&self) -> bool {
        self.is_target.unwrap_or(false)
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One data row: column name to raw (trimmed) string value.
///
/// Values are never coerced; numeric interpretation happens in the
/// consumers that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    /// Raw value stored for `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Output of the CSV parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDataset {
    /// Every accepted data row, in file order.
    pub rows: Vec<Row>,
    /// One entry per header field, in header order.
    pub columns: Vec<Column>,
}

impl ParsedDataset {
    /// Look up a column by name (first match in header order).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// Task Kind
// ============================================================================

/// Learning task implied by the target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Classification,
    Regression,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
        }
    }

    /// Capitalized name for UI labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Regression => "Regression",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Chart Aggregates
// ============================================================================

/// Value of a distribution bucket: a number when the raw value parsed as a
/// finite number, otherwise the raw string or a bin label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketValue {
    Number(f64),
    Text(String),
}

impl BucketValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for BucketValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One bar of a value distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub value: BucketValue,
    pub count: usize,
}

/// One cell of the correlation heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationCell {
    pub x: String,
    pub y: String,
    /// Always within `[-1, 1]`; exactly `1` on the diagonal.
    pub correlation: f64,
}

// ============================================================================
// Summaries
// ============================================================================

/// Dataset overview shown on the analysis screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub numeric_columns: usize,
    /// Columns inferred as `string` (shown as "categorical").
    pub categorical_columns: usize,
    pub boolean_columns: usize,
    pub unknown_columns: usize,
}

/// Overview of the selected target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub task_kind: TaskKind,
    /// Number of distinct raw string values.
    pub unique_values: usize,
    /// `(min, max)` over finite values; only for numeric targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
}

// ============================================================================
// Tests
// ============================================================================
