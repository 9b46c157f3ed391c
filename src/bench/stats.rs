//! Summary statistics over benchmark samples.
//!
//! Every function returns `None` on an empty slice instead of producing a
//! NaN; the geometric and harmonic means are additionally undefined when any
//! sample is zero or negative, and return `None` there too.

/// The arithmetic mean of `samples`, or `None` if empty.
pub fn arithmetic_mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for &sample in samples {
        sum += sample;
    }
    Some(sum / samples.len() as f64)
}

/// The geometric mean of `samples`, or `None` if empty or any sample is not
/// strictly positive.
pub fn geometric_mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    // Accumulate in log space so tiny timings do not underflow the product.
    let mut log_sum = 0.0;
    for &sample in samples {
        if sample <= 0.0 {
            return None;
        }
        log_sum += sample.ln();
    }
    Some((log_sum / samples.len() as f64).exp())
}

/// The harmonic mean of `samples`, or `None` if empty or any sample is not
/// strictly positive.
pub fn harmonic_mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut reciprocal_sum = 0.0;
    for &sample in samples {
        if sample <= 0.0 {
            return None;
        }
        reciprocal_sum += 1.0 / sample;
    }
    Some(samples.len() as f64 / reciprocal_sum)
}

/// The population variance (divided by *n*, not *n* − 1) of `samples`, or
/// `None` if empty.
pub fn variance(samples: &[f64]) -> Option<f64> {
    let mean = arithmetic_mean(samples)?;
    let mut sum = 0.0;
    for &sample in samples {
        let deviation = sample - mean;
        sum += deviation * deviation;
    }
    Some(sum / samples.len() as f64)
}

/// The population standard deviation of `samples`, or `None` if empty.
pub fn std_deviation(samples: &[f64]) -> Option<f64> {
    variance(samples).map(f64::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() < 1e-12,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn known_values() {
        let samples = [2.0, 4.0, 6.0];
        assert_close(arithmetic_mean(&samples), 4.0);
        assert_close(variance(&samples), 8.0 / 3.0);
        assert_close(std_deviation(&samples), (8.0f64 / 3.0).sqrt());
        assert_close(geometric_mean(&samples), 48.0f64.powf(1.0 / 3.0));
        assert_close(harmonic_mean(&samples), 3.0 / (1.0 / 2.0 + 1.0 / 4.0 + 1.0 / 6.0));
    }

    #[test]
    fn single_sample_is_its_own_mean() {
        let samples = [5.0];
        assert_close(arithmetic_mean(&samples), 5.0);
        assert_close(geometric_mean(&samples), 5.0);
        assert_close(harmonic_mean(&samples), 5.0);
        assert_close(variance(&samples), 0.0);
    }

    #[test]
    fn empty_input_is_undefined() {
        assert_eq!(arithmetic_mean(&[]), None);
        assert_eq!(geometric_mean(&[]), None);
        assert_eq!(harmonic_mean(&[]), None);
        assert_eq!(variance(&[]), None);
        assert_eq!(std_deviation(&[]), None);
    }

    #[test]
    fn nonpositive_samples_void_the_product_means() {
        assert_eq!(geometric_mean(&[1.0, 0.0, 2.0]), None);
        assert_eq!(harmonic_mean(&[1.0, 0.0, 2.0]), None);
        assert_eq!(geometric_mean(&[-1.0]), None);
        // ...but not the additive ones
        assert_close(arithmetic_mean(&[1.0, 0.0, 2.0]), 1.0);
        assert!(variance(&[1.0, 0.0, 2.0]).is_some());
    }
}
