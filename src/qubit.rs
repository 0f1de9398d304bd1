//! Normalized quantum states of one or more qubits.
//!
//! A [Qubit] wraps the state vector of a register of `n` qubits, `2^n` amplitudes in the basis `|0...0⟩, ..., |1...1⟩`.
//! The qubit at index 0 is the most significant bit of the basis index, matching the order of [tensor_product].
//!
//! Measurement mutates the qubit it's called on, so it needs exclusive access to it. Every other operation reads its
//! inputs and returns a new value.

use num::{Complex, One, Zero};
use rand::{
	Rng,
	distr::{Distribution, weighted::WeightedIndex},
};
use tracing::{debug, trace, warn};

use crate::{
	Matrix, Vector,
	config::ApplyConfig,
	error::{AlgebraError, AlgebraResult},
};

/// State of a register of qubits, always normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Qubit {
	state: Vector,
}

/// Computes `1/sqrt(Σ |amplitude|^2)`.
fn normalization_factor(state: &Vector) -> AlgebraResult<f64> {
	let sum: f64 = state.values().iter().map(|z| z.norm_sqr()).sum();
	trace!(sum, "normalising state");
	if sum <= 0.0 || !sum.is_finite() {
		return Err(AlgebraError::DegenerateState);
	}
	return Ok(1.0 / sum.sqrt());
}

/// Gets the basis indices where `bit` is 0, for a register of `dimension` amplitudes.
///
/// The indices come in blocks of `dimension / 2^(bit+1)`, alternately kept and skipped.
fn zero_indices(dimension: usize, bit: usize) -> Vec<usize> {
	let block = dimension >> (bit + 1);
	return (0..dimension).filter(|i| (i / block) % 2 == 0).collect();
}

fn one_indices(dimension: usize, bit: usize) -> Vec<usize> {
	let block = dimension >> (bit + 1);
	return (0..dimension).filter(|i| (i / block) % 2 == 1).collect();
}

impl Qubit {
	/// Creates a qubit from its amplitudes and normalizes them.
	///
	/// # Errors
	///
	/// * [AlgebraError::EmptyOperands] if there are no amplitudes.
	/// * [AlgebraError::InvalidBitWidth] if the number of amplitudes isn't a power of 2.
	/// * [AlgebraError::DegenerateState] if all the amplitudes are zero.
	///
	/// # Examples
	/// ```
	/// use num::Complex;
	/// use qualvec::Qubit;
	/// let plus = Qubit::new(vec![Complex::from(1.0), Complex::from(1.0)]).unwrap();
	/// assert!((plus.probabilities()[0] - 0.5).abs() < 1e-12);
	/// ```
	pub fn new(amplitudes: Vec<Complex<f64>>) -> AlgebraResult<Self> {
		return Self::from_vector(Vector::new(amplitudes)?);
	}

	/// Creates a qubit from real amplitudes and normalizes them.
	pub fn from_real(amplitudes: &[f64]) -> AlgebraResult<Self> {
		return Self::from_vector(Vector::from_real(amplitudes)?);
	}

	/// Creates a qubit whose state is the normalized `vector`.
	pub fn from_vector(vector: Vector) -> AlgebraResult<Self> {
		if !vector.dimension().is_power_of_two() {
			return Err(AlgebraError::InvalidBitWidth {
				dimension: vector.dimension(),
			});
		}
		let z = normalization_factor(&vector)?;
		return Ok(Self {
			state: vector.multiply(Complex::from(z)),
		});
	}

	fn basis(amplitudes: [f64; 2], bit_count: usize) -> Self {
		let single = Vector::from_values(amplitudes.iter().map(|x| Complex::from(*x)).collect());
		Self {
			state: Vector::tensor_product_n(&single, bit_count),
		}
	}

	/// Creates `|0...0⟩` on `bit_count` qubits, a `bit_count` of 0 is treated as 1.
	pub fn zero(bit_count: usize) -> Self {
		Self::basis([1.0, 0.0], bit_count)
	}

	/// Creates `|1...1⟩` on `bit_count` qubits, a `bit_count` of 0 is treated as 1.
	pub fn one(bit_count: usize) -> Self {
		Self::basis([0.0, 1.0], bit_count)
	}

	/// Gets the number of qubits in the register.
	pub fn bit_width(&self) -> usize {
		self.state.dimension().trailing_zeros() as usize
	}

	/// Gets the number of amplitudes, `2^bit_width`.
	pub fn dimension(&self) -> usize {
		self.state.dimension()
	}

	/// Gets the state vector.
	pub fn state(&self) -> &Vector {
		&self.state
	}

	/// Gets the amplitudes of each basis state, in order.
	pub fn amplitudes(&self) -> &[Complex<f64>] {
		self.state.values()
	}

	/// Gets the probability of observing each basis state, `|amplitude|^2`, in order.
	pub fn probabilities(&self) -> Vec<f64> {
		self.state.values().iter().map(|z| z.norm_sqr()).collect()
	}

	/// Checks whether the register is in `|0...0⟩`.
	pub fn is_zero(&self, eps: Option<f64>) -> bool {
		self.equals(&Self::zero(self.bit_width()), eps)
	}

	/// Checks whether the register is in `|1...1⟩`.
	pub fn is_one(&self, eps: Option<f64>) -> bool {
		self.equals(&Self::one(self.bit_width()), eps)
	}

	/// Checks whether the state vectors are equal, see [Vector::equals].
	pub fn equals(&self, rhs: &Self, eps: Option<f64>) -> bool {
		self.state.equals(&rhs.state, eps)
	}

	fn paired_probabilities(&self, rhs: &Self) -> AlgebraResult<impl Iterator<Item = (f64, f64)>> {
		if self.dimension() != rhs.dimension() {
			return Err(AlgebraError::DimensionMismatch {
				expected: self.dimension(),
				found:    rhs.dimension(),
			});
		}
		return Ok(self.probabilities().into_iter().zip(rhs.probabilities()));
	}

	/// Computes the classical fidelity `Σ sqrt(p_i * q_i)` of both probability distributions.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the registers don't have the same size.
	pub fn fidelity(&self, rhs: &Self) -> AlgebraResult<f64> {
		return Ok(self.paired_probabilities(rhs)?.map(|(p, q)| (p * q).sqrt()).sum());
	}

	/// Computes the trace distance `Σ |p_i - q_i| / 2` of both probability distributions.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the registers don't have the same size.
	pub fn trace_distance(&self, rhs: &Self) -> AlgebraResult<f64> {
		return Ok(self.paired_probabilities(rhs)?.map(|(p, q)| (p - q).abs()).sum::<f64>() / 2.0);
	}

	/// Computes the state of the composite register `self ⊗ rhs`.
	pub fn tensor_product(&self, rhs: &Self) -> Self {
		Self {
			state: self.state.tensor_product(&rhs.state),
		}
	}

	/// Applies a gate on the whole register, without checking it's unitary.
	///
	/// # Errors
	///
	/// * [AlgebraError::NotSquare] if the matrix isn't square.
	/// * [AlgebraError::DimensionMismatch] if its size isn't the dimension of the register.
	pub fn apply(&self, gate: &Matrix) -> AlgebraResult<Self> {
		return self.apply_with(gate, &ApplyConfig::default());
	}

	/// Applies a gate on the whole register.
	///
	/// Outside of strict mode the state isn't normalized again, applying a matrix that isn't unitary leaves a state
	/// whose probabilities don't sum to 1.
	///
	/// # Errors
	///
	/// * [AlgebraError::NotSquare] if the matrix isn't square.
	/// * [AlgebraError::DimensionMismatch] if its size isn't the dimension of the register.
	/// * [AlgebraError::NotUnitary] in strict mode, if the matrix isn't unitary within the configured tolerance.
	pub fn apply_with(&self, gate: &Matrix, config: &ApplyConfig) -> AlgebraResult<Self> {
		let (rows, columns) = gate.dimension();
		if rows != columns {
			return Err(AlgebraError::NotSquare { rows, columns });
		}
		if config.strict && !gate.is_unitary(Some(config.tolerance))? {
			warn!(tolerance = config.tolerance, "refusing to apply a non-unitary matrix");
			return Err(AlgebraError::NotUnitary {
				tolerance: config.tolerance,
			});
		}
		return Ok(Self {
			state: self.state.apply(gate)?,
		});
	}

	/// Returns the qubit with its state scaled back to unit norm.
	///
	/// # Errors
	///
	/// [AlgebraError::DegenerateState] if all the amplitudes are zero.
	pub fn normalise(&self) -> AlgebraResult<Self> {
		let z = normalization_factor(&self.state)?;
		return Ok(Self {
			state: self.state.multiply(Complex::from(z)),
		});
	}

	fn ensure_bit(&self, bit: usize) -> AlgebraResult<()> {
		if bit >= self.bit_width() {
			return Err(AlgebraError::BitOutOfRange {
				bit,
				bit_width: self.bit_width(),
			});
		}
		return Ok(());
	}

	/// Gets the basis states where qubit `bit` is 0, with the probability of observing each of them.
	///
	/// # Errors
	///
	/// [AlgebraError::BitOutOfRange] if `bit` isn't a qubit of the register.
	pub fn probability_zero_at(&self, bit: usize) -> AlgebraResult<Vec<(usize, f64)>> {
		self.ensure_bit(bit)?;
		let probabilities = self.probabilities();
		return Ok(zero_indices(self.dimension(), bit).into_iter().map(|i| (i, probabilities[i])).collect());
	}

	/// Gets the basis states where qubit `bit` is 1, with the probability of observing each of them.
	///
	/// # Errors
	///
	/// [AlgebraError::BitOutOfRange] if `bit` isn't a qubit of the register.
	pub fn probability_one_at(&self, bit: usize) -> AlgebraResult<Vec<(usize, f64)>> {
		self.ensure_bit(bit)?;
		let probabilities = self.probabilities();
		return Ok(one_indices(self.dimension(), bit).into_iter().map(|i| (i, probabilities[i])).collect());
	}

	/// Measures a single qubit of the register, collapsing the state.
	///
	/// Returns [Qubit::one] or [Qubit::zero] (on a single qubit) depending on the outcome. The register itself keeps the
	/// amplitudes consistent with the outcome, normalized, the other qubits staying in superposition.
	///
	/// # Arguments
	///
	/// * `bit` - The index of the qubit to measure, 0 being the most significant.
	/// * `rng` - The source of randomness deciding the outcome.
	///
	/// # Errors
	///
	/// * [AlgebraError::BitOutOfRange] if `bit` isn't a qubit of the register.
	/// * [AlgebraError::DegenerateState] if the collapsed state has no amplitude left.
	///
	/// The register is left untouched on error.
	pub fn measure_at<R: Rng + ?Sized>(&mut self, bit: usize, rng: &mut R) -> AlgebraResult<Self> {
		let probability_zero: f64 = self.probability_zero_at(bit)?.iter().map(|(_, p)| p).sum();
		let probability_one: f64 = self.probability_one_at(bit)?.iter().map(|(_, p)| p).sum();
		let r: f64 = rng.random();

		// A branch with no amplitude is never observed, whatever the draw
		let outcome_one = probability_zero <= 0.0 || (probability_one > 0.0 && r > probability_zero);
		debug!(bit, probability_zero, probability_one, r, outcome_one, "measured qubit");
		let (discarded, outcome) = if outcome_one {
			(zero_indices(self.dimension(), bit), Self::one(1))
		}
		else {
			(one_indices(self.dimension(), bit), Self::zero(1))
		};

		let mut collapsed = self.state.clone();
		let amplitudes = collapsed.values_mut();
		for i in discarded {
			amplitudes[i] = Complex::zero();
		}
		let z = normalization_factor(&collapsed)?;
		self.state = collapsed.multiply(Complex::from(z));
		return Ok(outcome);
	}

	/// Measures a single qubit with the thread-local generator, see [Qubit::measure_at].
	pub fn measure_at_random(&mut self, bit: usize) -> AlgebraResult<Self> {
		return self.measure_at(bit, &mut rand::rng());
	}

	/// Measures the whole register, collapsing it onto a single basis state.
	///
	/// Returns the index of the basis state observed.
	///
	/// # Errors
	///
	/// [AlgebraError::DegenerateState] if no basis state has a non-zero probability.
	pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AlgebraResult<usize> {
		let probabilities = self.probabilities();
		let distribution = WeightedIndex::new(&probabilities).map_err(|_| AlgebraError::DegenerateState)?;
		let index = distribution.sample(rng);
		debug!(index, probability = probabilities[index], "measured register");

		let amplitudes = self.state.values_mut();
		for (i, amplitude) in amplitudes.iter_mut().enumerate() {
			*amplitude = if i == index { Complex::one() } else { Complex::zero() };
		}
		return Ok(index);
	}

	/// Measures the whole register with the thread-local generator, see [Qubit::measure].
	pub fn measure_random(&mut self) -> AlgebraResult<usize> {
		return self.measure(&mut rand::rng());
	}
}

/// Computes the state of the register made of all the `qubits`, folding [Qubit::tensor_product] from left to right.
///
/// # Errors
///
/// [AlgebraError::EmptyOperands] if `qubits` is empty.
pub fn tensor_product(qubits: &[&Qubit]) -> AlgebraResult<Qubit> {
	let (first, rest) = qubits.split_first().ok_or(AlgebraError::EmptyOperands)?;
	return Ok(rest.iter().fold((*first).clone(), |product, qubit| product.tensor_product(qubit)));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partition_matches_bit_of_index() {
		for nb_qubits in 1..=5 {
			let dimension = 1 << nb_qubits;
			for bit in 0..nb_qubits {
				let zeros = zero_indices(dimension, bit);
				let ones = one_indices(dimension, bit);
				assert_eq!(zeros.len(), dimension / 2);
				assert_eq!(ones.len(), dimension / 2);
				for i in zeros {
					assert_eq!((i >> (nb_qubits - 1 - bit)) & 1, 0);
				}
				for i in ones {
					assert_eq!((i >> (nb_qubits - 1 - bit)) & 1, 1);
				}
			}
		}
	}

	#[test]
	fn partition_of_two_qubits() {
		assert_eq!(zero_indices(4, 0), vec![0, 1]);
		assert_eq!(zero_indices(4, 1), vec![0, 2]);
		assert_eq!(one_indices(4, 0), vec![2, 3]);
		assert_eq!(one_indices(4, 1), vec![1, 3]);
	}

	#[test]
	fn degenerate_state() {
		let zero = Vector::zero(2).unwrap();
		assert_eq!(normalization_factor(&zero), Err(AlgebraError::DegenerateState));
	}
}
