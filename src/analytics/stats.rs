// Descriptive statistics over a prop value sequence.
//
// Every function is total: empty input produces 0, and the ratio-based
// metrics return 0 rather than dividing by a zero mean.

use crate::props::Line;

/// Threshold below which a mean is treated as zero.
const MEAN_EPSILON: f64 = 1e-9;

/// Arithmetic mean. 0 for an empty sequence.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median. Even-length sequences average the two middle elements; 0 for an
/// empty sequence.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (N denominator, not N-1): the window is
/// the full universe being graded, not a sample. 0 for an empty sequence.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Consistency score: `round((1 - stddev/mean) * 100)`. Higher is steadier;
/// can go negative when the spread exceeds the mean. 0 when the mean is 0.
pub fn consistency(values: &[f64]) -> i32 {
    let avg = mean(values);
    if avg.abs() < MEAN_EPSILON {
        return 0;
    }
    ((1.0 - std_dev(values) / avg) * 100.0).round() as i32
}

/// Volatility score: `round((stddev/mean) * 100)`, the complement of
/// [`consistency`]. 0 when the mean is 0.
pub fn volatility(values: &[f64]) -> i32 {
    let avg = mean(values);
    if avg.abs() < MEAN_EPSILON {
        return 0;
    }
    (std_dev(values) / avg * 100.0).round() as i32
}

/// Percentile rank of the line within the sequence: the rounded percentage
/// of values at or below it. 0 for an empty sequence.
pub fn percentile(values: &[f64], line: Line) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let below = values.iter().filter(|&&v| v <= line).count();
    (below as f64 / values.len() as f64 * 100.0).round() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_input_is_all_zeros() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(consistency(&[]), 0);
        assert_eq!(volatility(&[]), 0);
        assert_eq!(percentile(&[], 10.0), 0);
    }

    #[test]
    fn mean_and_median_basic() {
        assert!(approx_eq(mean(&[25.0, 18.0, 30.0, 12.0, 20.0]), 21.0));
        assert!(approx_eq(median(&[25.0, 18.0, 30.0, 12.0, 20.0]), 20.0));
        // Even length averages the middle pair.
        assert!(approx_eq(median(&[1.0, 3.0]), 2.0));
        assert!(approx_eq(median(&[4.0, 1.0, 3.0, 2.0]), 2.5));
    }

    #[test]
    fn mean_median_std_dev_are_order_invariant() {
        let a = [25.0, 18.0, 30.0, 12.0, 20.0];
        let b = [12.0, 30.0, 20.0, 25.0, 18.0];
        assert!(approx_eq(mean(&a), mean(&b)));
        assert!(approx_eq(median(&a), median(&b)));
        assert!(approx_eq(std_dev(&a), std_dev(&b)));
    }

    #[test]
    fn std_dev_uses_population_form() {
        // Variance of [2, 4, 4, 2] about mean 3 is 1 with an N denominator.
        assert!(approx_eq(std_dev(&[2.0, 4.0, 4.0, 2.0]), 1.0));
        assert_eq!(std_dev(&[4.0, 4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn consistency_and_volatility_are_complements() {
        let values = [2.0, 4.0, 4.0, 2.0]; // mean 3, stddev 1
        assert_eq!(consistency(&values), 67);
        assert_eq!(volatility(&values), 33);
        assert_eq!(consistency(&[4.0, 4.0, 4.0]), 100);
        assert_eq!(volatility(&[4.0, 4.0, 4.0]), 0);
    }

    #[test]
    fn zero_mean_is_guarded() {
        let zeros = [0.0, 0.0, 0.0];
        assert_eq!(consistency(&zeros), 0);
        assert_eq!(volatility(&zeros), 0);
    }

    #[test]
    fn percentile_counts_at_or_below_the_line() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(percentile(&values, 20.0), 67);
        assert_eq!(percentile(&values, 9.0), 0);
        assert_eq!(percentile(&values, 30.0), 100);
    }
}
