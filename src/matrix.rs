//! Rectangular matrices of complex numbers.

use num::{Complex, One, Zero};

use crate::error::{AlgebraError, AlgebraResult};

/// Resolves an optional tolerance, defaulting to exact equality.
///
/// Every closeness check of the crate (`equals`, `is_hermitian`, `is_unitary`, ...) takes its tolerance through this.
pub fn epsilon(eps: Option<f64>) -> f64 {
	eps.unwrap_or(0.0)
}

/// A non-empty matrix of complex numbers where every row has the same length.
#[derive(Clone, PartialEq)]
pub struct Matrix {
	values:  Vec<Complex<f64>>,
	rows:    usize,
	columns: usize,
}

impl std::fmt::Debug for Matrix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f)?;
		for i in 0..self.rows {
			for j in 0..self.columns {
				write!(f, "{}+{}i ", self[(i, j)].re, self[(i, j)].im)?;
			}
			writeln!(f)?;
		}
		return Ok(());
	}
}

impl Matrix {
	/// Allocates a matrix of zeros without checking the shape, callers make sure it's not empty.
	fn zeroed(rows: usize, columns: usize) -> Self {
		Self {
			values: vec![Complex::zero(); rows * columns],
			rows,
			columns,
		}
	}

	/// Wraps row-major values, callers make sure there are exactly `rows * columns` of them and both are non-zero.
	pub(crate) fn from_row_major(rows: usize, columns: usize, values: Vec<Complex<f64>>) -> Self {
		debug_assert!(rows > 0 && columns > 0 && values.len() == rows * columns);
		Self { values, rows, columns }
	}

	/// Creates a matrix filled with zeros.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyMatrix] if either side is 0.
	pub fn zero(rows: usize, columns: usize) -> AlgebraResult<Self> {
		if rows == 0 || columns == 0 {
			return Err(AlgebraError::EmptyMatrix);
		}
		return Ok(Self::zeroed(rows, columns));
	}

	/// Creates the identity matrix of shape `size_side * size_side`.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyMatrix] if `size_side` is 0.
	pub fn identity(size_side: usize) -> AlgebraResult<Self> {
		let mut result = Self::zero(size_side, size_side)?;
		for i in 0..size_side {
			result[(i, i)] = Complex::one();
		}
		return Ok(result);
	}

	/// Creates a matrix from its rows.
	///
	/// # Arguments
	///
	/// * `rows` - The rows of the matrix, top to bottom. They must all have the same, non-zero, length.
	///
	/// # Errors
	///
	/// * [AlgebraError::EmptyMatrix] if there are no rows or the rows have no columns.
	/// * [AlgebraError::NonRectangularMatrix] if a row's length differs from the first one's.
	pub fn from_rows(rows: &[Vec<Complex<f64>>]) -> AlgebraResult<Self> {
		let columns = match rows.first() {
			Some(first) if !first.is_empty() => first.len(),
			_ => return Err(AlgebraError::EmptyMatrix),
		};

		let mut values = Vec::with_capacity(rows.len() * columns);
		for (row, entries) in rows.iter().enumerate() {
			if entries.len() != columns {
				return Err(AlgebraError::NonRectangularMatrix {
					row,
					expected: columns,
					found: entries.len(),
				});
			}
			values.extend_from_slice(entries);
		}

		return Ok(Self {
			values,
			rows: rows.len(),
			columns,
		});
	}

	/// Creates a matrix from rows of real numbers.
	pub fn from_real(rows: &[Vec<f64>]) -> AlgebraResult<Self> {
		let rows: Vec<Vec<Complex<f64>>> =
			rows.iter().map(|row| row.iter().map(|x| Complex::from(*x)).collect()).collect();
		return Self::from_rows(&rows);
	}

	/// Gets the number of rows and columns, in that order.
	pub fn dimension(&self) -> (usize, usize) {
		(self.rows, self.columns)
	}

	pub fn is_square(&self) -> bool {
		self.rows == self.columns
	}

	/// Copies the matrix back into a list of rows.
	pub fn rows(&self) -> Vec<Vec<Complex<f64>>> {
		self.values.chunks(self.columns).map(|row| row.to_vec()).collect()
	}

	fn ensure_square(&self) -> AlgebraResult<usize> {
		if !self.is_square() {
			return Err(AlgebraError::NotSquare {
				rows:    self.rows,
				columns: self.columns,
			});
		}
		return Ok(self.rows);
	}

	fn ensure_same_dimension(&self, rhs: &Self) -> AlgebraResult<()> {
		if self.rows != rhs.rows {
			return Err(AlgebraError::DimensionMismatch {
				expected: self.rows,
				found:    rhs.rows,
			});
		}
		if self.columns != rhs.columns {
			return Err(AlgebraError::DimensionMismatch {
				expected: self.columns,
				found:    rhs.columns,
			});
		}
		return Ok(());
	}

	/// Swaps rows and columns.
	pub fn transpose(&self) -> Self {
		let mut result = Self::zeroed(self.columns, self.rows);
		for i in 0..self.rows {
			for j in 0..self.columns {
				result[(j, i)] = self[(i, j)];
			}
		}
		return result;
	}

	/// Conjugates every element, keeping the shape.
	pub fn conjugate(&self) -> Self {
		Self {
			values:  self.values.iter().map(|z| z.conj()).collect(),
			rows:    self.rows,
			columns: self.columns,
		}
	}

	/// Computes the conjugate transpose (adjoint) of the matrix.
	pub fn dagger(&self) -> Self {
		return self.transpose().conjugate();
	}

	/// Checks whether 2 matrices are equal within a tolerance.
	///
	/// # Arguments
	///
	/// * `rhs` - The other matrix to compare with.
	/// * `eps` - The largest magnitude of difference tolerated between 2 elements, exact equality if `None`.
	pub fn equals(&self, rhs: &Self, eps: Option<f64>) -> bool {
		if self.dimension() != rhs.dimension() {
			return false;
		}
		let eps = epsilon(eps);
		return self.values.iter().zip(rhs.values.iter()).all(|(a, b)| (a - b).norm() <= eps);
	}

	/// Checks whether the matrix is equal to its own adjoint.
	///
	/// # Errors
	///
	/// [AlgebraError::NotSquare] if the matrix isn't square.
	pub fn is_hermitian(&self, eps: Option<f64>) -> AlgebraResult<bool> {
		self.ensure_square()?;
		return Ok(self.equals(&self.dagger(), eps));
	}

	/// Checks whether `M * M†` is the identity within a tolerance.
	///
	/// # Errors
	///
	/// [AlgebraError::NotSquare] if the matrix isn't square.
	pub fn is_unitary(&self, eps: Option<f64>) -> AlgebraResult<bool> {
		let size_side = self.ensure_square()?;
		let product = self.apply(&self.dagger())?;
		let eps = epsilon(eps);

		for i in 0..size_side {
			for j in 0..size_side {
				let expected: Complex<f64> = if i == j { Complex::one() } else { Complex::zero() };
				if (product[(i, j)] - expected).norm() > eps {
					return Ok(false);
				}
			}
		}
		return Ok(true);
	}

	/// Multiplies the matrix with `rhs` on its right, i.e. computes `self * rhs`.
	///
	/// # Errors
	///
	/// * [AlgebraError::NotSquare] if either matrix isn't square.
	/// * [AlgebraError::DimensionMismatch] if they don't have the same size.
	pub fn apply(&self, rhs: &Self) -> AlgebraResult<Self> {
		let size_side = self.ensure_square()?;
		rhs.ensure_square()?;
		self.ensure_same_dimension(rhs)?;

		let mut result = Self::zeroed(size_side, size_side);
		for i in 0..size_side {
			for j in 0..size_side {
				for k in 0..size_side {
					result[(i, j)] += self[(i, k)] * rhs[(k, j)];
				}
			}
		}
		return Ok(result);
	}

	/// Multiplies every element by a scalar.
	pub fn multiply(&self, scalar: Complex<f64>) -> Self {
		Self {
			values:  self.values.iter().map(|z| scalar * z).collect(),
			rows:    self.rows,
			columns: self.columns,
		}
	}

	fn zip_with(&self, rhs: &Self, op: impl Fn(Complex<f64>, Complex<f64>) -> Complex<f64>) -> AlgebraResult<Self> {
		self.ensure_same_dimension(rhs)?;
		return Ok(Self {
			values:  self.values.iter().zip(rhs.values.iter()).map(|(a, b)| op(*a, *b)).collect(),
			rows:    self.rows,
			columns: self.columns,
		});
	}

	/// Adds two matrices of the same dimension elementwise.
	pub fn add(&self, rhs: &Self) -> AlgebraResult<Self> {
		return self.zip_with(rhs, |a, b| a + b);
	}

	/// Subtracts `rhs` from the matrix elementwise.
	pub fn subtract(&self, rhs: &Self) -> AlgebraResult<Self> {
		return self.zip_with(rhs, |a, b| a - b);
	}

	/// Sums the diagonal.
	///
	/// # Errors
	///
	/// [AlgebraError::NotSquare] if the matrix isn't square.
	pub fn trace(&self) -> AlgebraResult<Complex<f64>> {
		let size_side = self.ensure_square()?;
		return Ok((0..size_side).map(|i| self[(i, i)]).sum());
	}

	/// Computes the kronecker product of the matrix with `rhs`.
	///
	/// The block at block-row `i` and block-column `j` is `self[(i, j)] * rhs`.
	pub fn tensor_product(&self, rhs: &Self) -> Self {
		let mut result = Self::zeroed(self.rows * rhs.rows, self.columns * rhs.columns);
		for i in 0..self.rows {
			for j in 0..self.columns {
				for k in 0..rhs.rows {
					for l in 0..rhs.columns {
						result[(i * rhs.rows + k, j * rhs.columns + l)] = self[(i, j)] * rhs[(k, l)];
					}
				}
			}
		}
		return result;
	}

	/// Computes `matrix ⊗ matrix ⊗ ...` with `n` factors, `n` being 0 or 1 returns the matrix unchanged.
	pub fn tensor_product_n(matrix: &Self, n: usize) -> Self {
		let mut product = matrix.clone();
		for _ in 1..n {
			product = product.tensor_product(matrix);
		}
		return product;
	}

	/// Folds the kronecker product over all the matrices, from left to right.
	///
	/// # Errors
	///
	/// [AlgebraError::EmptyOperands] if `matrices` is empty.
	pub fn tensor_product_all(matrices: &[&Self]) -> AlgebraResult<Self> {
		let (first, rest) = matrices.split_first().ok_or(AlgebraError::EmptyOperands)?;
		return Ok(rest.iter().fold((*first).clone(), |product, matrix| product.tensor_product(matrix)));
	}
}

impl std::ops::Index<(usize, usize)> for Matrix {
	type Output = Complex<f64>;
	fn index(&self, index: (usize, usize)) -> &Self::Output {
		return &self.values[index.0 * self.columns + index.1];
	}
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		return &mut self.values[index.0 * self.columns + index.1];
	}
}

impl std::ops::Mul<Complex<f64>> for Matrix {
	type Output = Matrix;

	fn mul(self, rhs: Complex<f64>) -> Self::Output {
		return self.multiply(rhs);
	}
}

impl std::ops::MulAssign<Complex<f64>> for Matrix {
	fn mul_assign(&mut self, rhs: Complex<f64>) {
		for value in self.values.iter_mut() {
			*value *= rhs;
		}
	}
}
