use foundation::ordering::stable_total_cmp_f64;

pub struct Statistics;

impl Statistics {
    /// Arithmetic mean. `None` on an empty slice rather than a non-finite
    /// division artifact.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        Some(sum / values.len() as f64)
    }

    /// Median over a sorted copy of the input; the caller's slice is never
    /// reordered. Odd length takes the middle element, even length the mean
    /// of the two central elements. `None` on an empty slice.
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| stable_total_cmp_f64(*a, *b));
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(sorted[mid])
        } else {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }

    /// Bessel-corrected sample standard deviation (divides by n − 1).
    /// `None` with fewer than two samples.
    pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let mut sum_sq = 0.0;
        for &v in values {
            let d = v - mean;
            sum_sq += d * d;
        }
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn mean_median_stddev_of_three_scores() {
        let values = [70.0, 80.0, 90.0];
        assert!((Statistics::mean(&values).unwrap() - 80.0).abs() < 1e-9);
        assert!((Statistics::median(&values).unwrap() - 80.0).abs() < 1e-9);
        assert!((Statistics::sample_std_dev(&values).unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn even_length_median_averages_the_center() {
        let values = [70.0, 80.0, 90.0, 100.0];
        assert!((Statistics::median(&values).unwrap() - 85.0).abs() < 1e-9);
    }

    #[test]
    fn median_sorts_a_copy_of_unsorted_input() {
        let values = [90.0, 70.0, 100.0, 80.0];
        assert!((Statistics::median(&values).unwrap() - 85.0).abs() < 1e-9);
        // Caller's sequence is untouched.
        assert_eq!(values, [90.0, 70.0, 100.0, 80.0]);
    }

    #[test]
    fn degenerate_inputs_are_signaled() {
        assert!(Statistics::mean(&[]).is_none());
        assert!(Statistics::median(&[]).is_none());
        assert!(Statistics::sample_std_dev(&[]).is_none());
        assert!(Statistics::sample_std_dev(&[85.0]).is_none());
    }

    #[test]
    fn single_value_mean_and_median() {
        assert_eq!(Statistics::mean(&[85.0]), Some(85.0));
        assert_eq!(Statistics::median(&[85.0]), Some(85.0));
    }
}
