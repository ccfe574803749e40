//! Value distributions for chart display.
//!
//! Values are counted by their raw string form. A bucket carries a numeric
//! value when that string parses as a finite number.
//!
//! When every distinct value is numeric and there are more than
//! [`AnalysisConfig::binning_threshold`] of them, the per-value buckets are
//! replaced by [`AnalysisConfig::bin_count`] fixed-width bins spanning
//! `[min, max]`, labelled `"<start>-<end>"` with one decimal. All bins are
//! emitted, empty ones included. Bins are half-open `[start, end)`; the last
//! one is closed on the right unless `include_max_in_last_bin` is off, in
//! which case values equal to `max` are counted in no bin.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::types::{BucketValue, DistributionBucket, Row};
use crate::utils::parse_finite_number;

/// Build the distribution of `column` with the default configuration.
pub fn build_distribution(rows: &[Row], column: &str) -> Vec<DistributionBucket> {
    DistributionBuilder::default().build(rows, column)
}

/// Aggregates a column into value/count buckets.
#[derive(Debug, Clone, Default)]
pub struct DistributionBuilder {
    config: AnalysisConfig,
}

impl DistributionBuilder {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Count the values of `column` across `rows`.
    ///
    /// Rows without a value for `column` are not counted.
    pub fn build(&self, rows: &[Row], column: &str) -> Vec<DistributionBucket> {
        let counts = count_values(rows, column);

        let numeric: Option<Vec<(f64, usize)>> = counts
            .iter()
            .map(|(value, count)| parse_finite_number(value).map(|n| (n, *count)))
            .collect();

        if let Some(values) = numeric
            && values.len() > self.config.binning_threshold
        {
            debug!(
                column,
                distinct = values.len(),
                bins = self.config.bin_count,
                "Binning numeric distribution"
            );
            return self.bin(&values);
        }

        counts
            .into_iter()
            .map(|(value, count)| DistributionBucket {
                value: match parse_finite_number(&value) {
                    Some(n) => BucketValue::Number(n),
                    None => BucketValue::Text(value),
                },
                count,
            })
            .collect()
    }

    fn bin(&self, values: &[(f64, usize)]) -> Vec<DistributionBucket> {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(v, _)| {
                (lo.min(v), hi.max(v))
            });

        // Distinct strings such as "1" and "1.0" can still share one number
        if max <= min {
            warn!(value = min, "Numeric range has zero width; emitting a single bucket");
            return single_bucket(values, min, max);
        }

        let bin_count = self.config.bin_count;
        // Dividing first keeps the width finite when max - min overflows
        let bin_size = max / bin_count as f64 - min / bin_count as f64;
        if !bin_size.is_finite() {
            warn!(min, max, "Numeric range is too wide to bin; emitting a single bucket");
            return single_bucket(values, min, max);
        }

        // Shared edges keep adjacent bins contiguous; the last edge is exactly max
        let edges: Vec<f64> = (0..=bin_count)
            .map(|i| {
                if i == bin_count {
                    return max;
                }
                let edge = min + i as f64 * bin_size;
                if edge.is_finite() {
                    edge
                } else {
                    // i * bin_size alone can overflow near the ends of f64
                    (min / 2.0 + i as f64 * (bin_size / 2.0)) * 2.0
                }
            })
            .collect();

        let last = bin_count - 1;
        let mut counts = vec![0usize; bin_count];
        let mut dropped = 0usize;

        for &(value, count) in values {
            let slot = (0..bin_count).find(|&i| {
                let (start, end) = (edges[i], edges[i + 1]);
                value >= start
                    && (value < end || (i == last && self.config.include_max_in_last_bin))
            });
            match slot {
                Some(i) => counts[i] += count,
                None => dropped += count,
            }
        }

        if dropped > 0 {
            debug!(dropped, max, "Values equal to max fall outside the half-open bins");
        }

        edges
            .windows(2)
            .zip(counts)
            .map(|(edge, count)| DistributionBucket {
                value: BucketValue::Text(bin_label(edge[0], edge[1])),
                count,
            })
            .collect()
    }
}

fn single_bucket(values: &[(f64, usize)], min: f64, max: f64) -> Vec<DistributionBucket> {
    vec![DistributionBucket {
        value: BucketValue::Text(bin_label(min, max)),
        count: values.iter().map(|&(_, count)| count).sum(),
    }]
}

/// Count occurrences per raw string value, in first-seen order.
fn count_values(rows: &[Row], column: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in rows.iter().filter_map(|row| row.get(column)) {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts
}

fn bin_label(start: f64, end: f64) -> String {
    format!("{:.1}-{:.1}", start, end)
}
