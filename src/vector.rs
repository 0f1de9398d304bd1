//! Complex vectors over a fixed basis, where index order is basis-state order.

use num::{Complex, Zero};

use crate::{
	Matrix,
	error::{AlgebraError, AlgebraResult},
	matrix::epsilon,
};

/// A non-empty vector of complex amplitudes.
///
/// Operations never mutate the vector, they return a new one.
#[derive(Clone, PartialEq)]
pub struct Vector {
	values: Vec<Complex<f64>>,
}

impl std::fmt::Debug for Vector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Vector [")?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}+{}i", value.re, value.im)?;
		}
		write!(f, "]")?;
		return Ok(());
	}
}

impl Vector {
	/// Creates a vector holding exactly the given amplitudes, in order.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyOperands] if `values` is empty.
	pub fn new(values: Vec<Complex<f64>>) -> AlgebraResult<Self> {
		if values.is_empty() {
			return Err(AlgebraError::EmptyOperands);
		}
		return Ok(Self { values });
	}

	/// Creates a vector from real amplitudes.
	pub fn from_real(values: &[f64]) -> AlgebraResult<Self> {
		return Self::new(values.iter().map(|x| Complex::from(*x)).collect());
	}

	/// Wraps values already known to be non-empty.
	pub(crate) fn from_values(values: Vec<Complex<f64>>) -> Self {
		debug_assert!(!values.is_empty());
		Self { values }
	}

	/// Creates a vector of `n` zeros.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyOperands] if `n` is 0.
	pub fn zero(n: usize) -> AlgebraResult<Self> {
		return Self::new(vec![Complex::zero(); n]);
	}

	/// Gets the number of amplitudes.
	pub fn dimension(&self) -> usize {
		self.values.len()
	}

	/// Gets the amplitudes.
	pub fn values(&self) -> &[Complex<f64>] {
		&self.values
	}

	pub(crate) fn values_mut(&mut self) -> &mut [Complex<f64>] {
		&mut self.values
	}

	pub fn get(&self, index: usize) -> Option<Complex<f64>> {
		self.values.get(index).copied()
	}

	fn ensure_same_dimension(&self, rhs: &Self) -> AlgebraResult<()> {
		if self.dimension() != rhs.dimension() {
			return Err(AlgebraError::DimensionMismatch {
				expected: self.dimension(),
				found:    rhs.dimension(),
			});
		}
		return Ok(());
	}

	/// Conjugates every amplitude.
	pub fn conjugate(&self) -> Self {
		Self {
			values: self.values.iter().map(|z| z.conj()).collect(),
		}
	}

	/// Adds two vectors of the same length elementwise.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the lengths differ.
	pub fn add(&self, rhs: &Self) -> AlgebraResult<Self> {
		self.ensure_same_dimension(rhs)?;
		return Ok(Self {
			values: self.values.iter().zip(rhs.values.iter()).map(|(a, b)| a + b).collect(),
		});
	}

	/// Multiplies every amplitude by a scalar.
	pub fn multiply(&self, scalar: Complex<f64>) -> Self {
		Self {
			values: self.values.iter().map(|z| scalar * z).collect(),
		}
	}

	/// Multiplies two vectors of the same length elementwise.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the lengths differ.
	pub fn multiply_elementwise(&self, rhs: &Self) -> AlgebraResult<Self> {
		self.ensure_same_dimension(rhs)?;
		return Ok(Self {
			values: self.values.iter().zip(rhs.values.iter()).map(|(a, b)| a * b).collect(),
		});
	}

	/// Computes the kronecker product of the vector with `rhs`.
	///
	/// The result has `self.dimension() * rhs.dimension()` amplitudes, with `self[i] * rhs[j]` at `i * rhs.dimension() + j`.
	pub fn tensor_product(&self, rhs: &Self) -> Self {
		let dim_a = self.dimension();
		let dim_b = rhs.dimension();
		let mut values = vec![Complex::zero(); dim_a * dim_b];

		for i in 0..dim_a {
			for j in 0..dim_b {
				values[i * dim_b + j] = self.values[i] * rhs.values[j];
			}
		}

		return Self { values };
	}

	/// Computes `Σ self[i] * conj(rhs[i])`.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the lengths differ.
	pub fn inner_product(&self, rhs: &Self) -> AlgebraResult<Complex<f64>> {
		self.ensure_same_dimension(rhs)?;
		return Ok(self.values.iter().zip(rhs.values.iter()).map(|(a, b)| a * b.conj()).sum());
	}

	/// Checks whether the inner product with `rhs` is zero, within `eps` (exact if `None`).
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the lengths differ.
	pub fn is_orthogonal(&self, rhs: &Self, eps: Option<f64>) -> AlgebraResult<bool> {
		let product = self.inner_product(rhs)?;
		return Ok(product.norm() <= epsilon(eps));
	}

	/// Computes the length of the vector, `sqrt(<v, v>)`. Doesn't modify the vector.
	pub fn norm(&self) -> f64 {
		self.values.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
	}

	/// Checks whether the norm is 1, within `eps` (exact if `None`).
	pub fn is_unit(&self, eps: Option<f64>) -> bool {
		(self.norm() - 1.0).abs() <= epsilon(eps)
	}

	/// Computes `vector ⊗ vector ⊗ ...` with `n` factors, `n` being 0 or 1 returns the vector unchanged.
	pub fn tensor_product_n(vector: &Self, n: usize) -> Self {
		let mut product = vector.clone();
		for _ in 1..n {
			product = product.tensor_product(vector);
		}
		return product;
	}

	/// Folds the kronecker product over all the vectors, from left to right.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyOperands] if `vectors` is empty.
	pub fn tensor_product_all(vectors: &[&Self]) -> AlgebraResult<Self> {
		let (first, rest) = vectors.split_first().ok_or(AlgebraError::EmptyOperands)?;
		return Ok(rest.iter().fold((*first).clone(), |product, vector| product.tensor_product(vector)));
	}

	/// Computes the matrix-vector product `matrix * self`.
	///
	/// The result has as many amplitudes as the matrix has rows.
	///
	/// # Errors
	///
	/// [AlgebraError::DimensionMismatch] if the matrix doesn't have as many columns as the vector has amplitudes.
	pub fn apply(&self, matrix: &Matrix) -> AlgebraResult<Self> {
		let (rows, columns) = matrix.dimension();
		if columns != self.dimension() {
			return Err(AlgebraError::DimensionMismatch {
				expected: self.dimension(),
				found:    columns,
			});
		}

		let mut values = vec![Complex::zero(); rows];
		for i in 0..rows {
			for j in 0..columns {
				values[i] += matrix[(i, j)] * self.values[j];
			}
		}
		return Ok(Self { values });
	}

	/// Checks whether 2 vectors are equal within a tolerance.
	///
	/// # Arguments
	///
	/// * `rhs` - The other vector to compare with.
	/// * `eps` - The largest magnitude of difference tolerated between 2 amplitudes, exact equality if `None`.
	pub fn equals(&self, rhs: &Self, eps: Option<f64>) -> bool {
		if self.dimension() != rhs.dimension() {
			return false;
		}
		let eps = epsilon(eps);
		return self.values.iter().zip(rhs.values.iter()).all(|(a, b)| (a - b).norm() <= eps);
	}
}

impl std::ops::Index<usize> for Vector {
	type Output = Complex<f64>;

	fn index(&self, index: usize) -> &Self::Output {
		return &self.values[index];
	}
}
