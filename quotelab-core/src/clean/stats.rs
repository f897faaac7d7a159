//! Order statistics for the cleaner.
//!
//! Quantiles use linear interpolation between order statistics. Callers
//! filter out NaN before computing; these functions assume readable values.

/// Linear-interpolated quantile of pre-sorted values, `p` in `[0, 1]`.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Linear-interpolated quantile; `None` for an empty value set.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    assert!((0.0..=1.0).contains(&p), "quantile must be in [0, 1]");
    if values.is_empty() {
        return None;
    }
    Some(quantile_sorted(&sorted_copy(values), p))
}

/// Median of the value set; `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Tukey fences: `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    pub lower: f64,
    pub upper: f64,
}

impl IqrFences {
    /// Fences for a value set; `None` when the set is empty.
    ///
    /// A single value collapses the fences onto itself, so clipping a lone
    /// observation is a no-op.
    pub fn from_values(values: &[f64]) -> Option<IqrFences> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted_copy(values);
        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        Some(IqrFences {
            lower: q1 - 1.5 * iqr,
            upper: q3 + 1.5 * iqr,
        })
    }

    /// Clip a value into the fences; in-range values come back unchanged.
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 0.75), Some(3.25));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
    }

    #[test]
    fn quantile_does_not_require_sorted_input() {
        let values = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(quantile(&values, 0.5), Some(3.0));
    }

    #[test]
    fn median_of_empty_set_is_undefined() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn median_of_single_value_is_itself() {
        assert_eq!(median(&[42.0]), Some(42.0));
    }

    #[test]
    fn fences_for_known_set() {
        // sorted: [10, 11, 12, 13, 100] -> Q1 = 11, Q3 = 13, IQR = 2
        let fences = IqrFences::from_values(&[10.0, 12.0, 11.0, 13.0, 100.0]).unwrap();
        assert_eq!(fences.lower, 8.0);
        assert_eq!(fences.upper, 16.0);
        assert_eq!(fences.clip(100.0), 16.0);
        assert_eq!(fences.clip(12.0), 12.0);
        assert_eq!(fences.clip(5.0), 8.0);
    }

    #[test]
    fn single_value_fences_collapse() {
        let fences = IqrFences::from_values(&[150.25]).unwrap();
        assert_eq!(fences.lower, 150.25);
        assert_eq!(fences.upper, 150.25);
        assert_eq!(fences.clip(150.25), 150.25);
    }

    #[test]
    fn empty_set_has_no_fences() {
        assert_eq!(IqrFences::from_values(&[]), None);
    }
}
