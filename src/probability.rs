//! Helpers over Born-rule probability distributions.

/// Sums the probabilities.
pub fn sum(probabilities: &[f64]) -> f64 {
	probabilities.iter().sum()
}

/// Gets the largest probability, `None` if there are none.
pub fn max(probabilities: &[f64]) -> Option<f64> {
	probabilities.iter().copied().reduce(f64::max)
}

/// Gets the smallest probability, `None` if there are none.
pub fn min(probabilities: &[f64]) -> Option<f64> {
	probabilities.iter().copied().reduce(f64::min)
}
