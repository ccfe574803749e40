//! Placeholder correlation matrix.
//!
//! The values are random, not statistics computed from the data. Only the
//! shape is meaningful: one cell per ordered pair of numeric columns, with
//! `1.0` on the diagonal.

use rand::Rng;
use tracing::debug;

use crate::types::{Column, CorrelationCell};

/// Generate correlation cells for the numeric columns using `rng`.
///
/// For `k` numeric columns the result has `k * k` cells in row-major order
/// over the numeric columns as they appear in `columns`. Off-diagonal values
/// are drawn independently from `[-1, 1)`, so the matrix is not symmetric.
/// Non-numeric columns never appear. With no numeric column the result is
/// empty.
pub fn generate_correlation_data<R: Rng + ?Sized>(
    columns: &[Column],
    rng: &mut R,
) -> Vec<CorrelationCell> {
    let numeric: Vec<&str> = columns
        .iter()
        .filter(|c| c.is_numeric())
        .map(|c| c.name.as_str())
        .collect();

    let mut cells = Vec::with_capacity(numeric.len() * numeric.len());
    for (i, x) in numeric.iter().enumerate() {
        for (j, y) in numeric.iter().enumerate() {
            let correlation = if i == j {
                1.0
            } else {
                rng.gen_range(-1.0..1.0)
            };
            cells.push(CorrelationCell {
                x: (*x).to_string(),
                y: (*y).to_string(),
                correlation,
            });
        }
    }

    debug!(numeric_columns = numeric.len(), cells = cells.len(), "Generated correlation cells");
    cells
}

/// Generate correlation cells with the thread-local RNG.
///
/// Two calls on the same columns give different off-diagonal values.
pub fn generate_correlation_data_random(columns: &[Column]) -> Vec<CorrelationCell> {
    generate_correlation_data(columns, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("age", ColumnType::Number),
            Column::new("gender", ColumnType::String),
            Column::new("income", ColumnType::Number),
            Column::new("active", ColumnType::Boolean),
            Column::new("score", ColumnType::Number),
        ]
    }

    #[test]
    fn test_cell_count_is_square_of_numeric_columns() {
        let mut rng = StdRng::seed_from_u64(7);
        let cells = generate_correlation_data(&columns(), &mut rng);
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_only_numeric_columns_appear() {
        let mut rng = StdRng::seed_from_u64(7);
        let cells = generate_correlation_data(&columns(), &mut rng);
        for cell in &cells {
            for name in [&cell.x, &cell.y] {
                assert!(["age", "income", "score"].contains(&name.as_str()));
            }
        }
    }

    #[test]
    fn test_row_major_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let cells = generate_correlation_data(&columns(), &mut rng);
        let pairs: Vec<(&str, &str)> = cells
            .iter()
            .take(4)
            .map(|c| (c.x.as_str(), c.y.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("age", "age"),
                ("age", "income"),
                ("age", "score"),
                ("income", "age")
            ]
        );
    }

    #[test]
    fn test_diagonal_is_one_and_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let cells = generate_correlation_data(&columns(), &mut rng);
        for cell in &cells {
            if cell.x == cell.y {
                assert_eq!(cell.correlation, 1.0);
            } else {
                assert!((-1.0..=1.0).contains(&cell.correlation));
            }
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = generate_correlation_data(&columns(), &mut StdRng::seed_from_u64(99));
        let b = generate_correlation_data(&columns(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_calls_differ() {
        let a = generate_correlation_data_random(&columns());
        let b = generate_correlation_data_random(&columns());

        let off_diagonal = |cells: &[CorrelationCell]| -> Vec<f64> {
            cells
                .iter()
                .filter(|c| c.x != c.y)
                .map(|c| c.correlation)
                .collect()
        };
        assert_eq!(off_diagonal(&a).len(), 6);
        assert_ne!(off_diagonal(&a), off_diagonal(&b));
    }

    #[test]
    fn test_no_numeric_columns_yields_empty() {
        let columns = vec![
            Column::new("a", ColumnType::String),
            Column::new("b", ColumnType::Unknown),
        ];
        assert!(generate_correlation_data_random(&columns).is_empty());
    }

    #[test]
    fn test_single_numeric_column() {
        let columns = vec![Column::new("x", ColumnType::Number)];
        let cells = generate_correlation_data_random(&columns);
        assert_eq!(
            cells,
            vec![CorrelationCell {
                x: "x".to_string(),
                y: "x".to_string(),
                correlation: 1.0,
            }]
        );
    }
}
