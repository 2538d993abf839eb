//! Weighted aggregation of metric scores into the net score.

use crate::Result;
use ohno::bail;
use std::time::Instant;

/// Number of quality metrics feeding the net score.
pub const METRIC_COUNT: usize = 5;

/// Fixed metric weights: equal weighting across the five metrics.
pub const WEIGHTS: [f64; METRIC_COUNT] = [0.2; METRIC_COUNT];

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Combine metric scores under the given weights.
///
/// Returns the net score together with the aggregation step's own elapsed
/// time, reported separately from the upstream scorer latencies. Weights
/// that do not sum to 1.0 would silently push the net score out of [0, 1],
/// so they are rejected here.
pub fn aggregate(scores: &[f64; METRIC_COUNT], weights: &[f64; METRIC_COUNT]) -> Result<(f64, f64)> {
    let started = Instant::now();

    let weight_sum: f64 = weights.iter().sum();
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        bail!("metric weights must sum to 1.0, got {weight_sum}");
    }

    let net = scores.iter().zip(weights).map(|(score, weight)| score * weight).sum();
    Ok((net, started.elapsed().as_secs_f64()))
}
