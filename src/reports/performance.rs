//! The per-position average performance report.

use std::collections::HashMap;

use crate::model::Developer;

/// One output row of the performance report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub position: String,
    /// Arithmetic mean of `performance` across the position, rounded to 2
    /// decimal places.
    pub average_performance: f64,
}

/// Rounds to 2 decimal places, half away from zero (f64 `round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Groups records by position and computes each group's average performance.
///
/// Single pass: a (sum, count) accumulator per position, created on first
/// encounter. Rows come back sorted by average descending; the sort is
/// stable, so tied averages keep the order their positions were first seen
/// in the input. Empty input yields an empty report.
pub fn generate(records: &[Developer]) -> Vec<ReportRow> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    // first-seen position order, so tied averages stay deterministic
    let mut order: Vec<&str> = Vec::new();

    for dev in records {
        match totals.get_mut(dev.position.as_str()) {
            Some((sum, count)) => {
                *sum += dev.performance;
                *count += 1;
            }
            None => {
                order.push(&dev.position);
                totals.insert(&dev.position, (dev.performance, 1));
            }
        }
    }

    let mut rows: Vec<ReportRow> = order
        .into_iter()
        .map(|position| {
            let (sum, count) = totals[position];
            ReportRow {
                position: position.to_string(),
                average_performance: round2(sum / count as f64),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.average_performance.total_cmp(&a.average_performance));
    rows
}
