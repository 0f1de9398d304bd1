//! Standard quantum gates, as [matrices](crate::Matrix) ready to be applied on a [Qubit](crate::Qubit).
//!
//! Gates on several qubits follow the register order: the first qubit is the most significant bit of the basis index.
//! Use [Matrix::tensor_product] to build a gate acting on a larger register, e.g. `hadamard() ⊗ identity()`.

use num::Complex;

use crate::Matrix;

fn single(values: [Complex<f64>; 4]) -> Matrix {
	Matrix::from_row_major(2, 2, values.to_vec())
}

/// Creates a gate which does nothing on a single qubit.
pub fn identity() -> Matrix {
	single([Complex::from(1.0), Complex::from(0.0), Complex::from(0.0), Complex::from(1.0)])
}

/// Creates an X-gate on a single qubit.
pub fn pauli_x() -> Matrix {
	single([Complex::from(0.0), Complex::from(1.0), Complex::from(1.0), Complex::from(0.0)])
}

/// Creates a Y-gate on a single qubit.
pub fn pauli_y() -> Matrix {
	single([Complex::from(0.0), -Complex::i(), Complex::i(), Complex::from(0.0)])
}

/// Creates a Z-gate on a single qubit.
pub fn pauli_z() -> Matrix {
	single([Complex::from(1.0), Complex::from(0.0), Complex::from(0.0), Complex::from(-1.0)])
}

/// Creates an H or Hadamard gate on a single qubit.
pub fn hadamard() -> Matrix {
	single([Complex::from(1.0), Complex::from(1.0), Complex::from(1.0), Complex::from(-1.0)])
		* Complex::from(1.0 / 2.0f64.sqrt())
}

/// Creates a phase shift gate on a single qubit.
///
/// # Arguments
///
/// * `angle` - The angle with which to shift the phase of `|1⟩`.
pub fn phase_shift(angle: f64) -> Matrix {
	single([
		Complex::from(1.0),
		Complex::from(0.0),
		Complex::from(0.0),
		Complex::from_polar(1.0, angle),
	])
}

/// Creates an S-gate on a single qubit.
pub fn s() -> Matrix {
	phase_shift(std::f64::consts::FRAC_PI_2)
}

/// Creates a T-gate on a single qubit.
pub fn t() -> Matrix {
	phase_shift(std::f64::consts::FRAC_PI_4)
}

/// Creates a rotation around the x-axis on a single qubit.
pub fn rx(angle: f64) -> Matrix {
	let half_theta = angle / 2.0;
	let cos_half_theta = Complex::from(half_theta.cos());
	let minus_i_sin_half_theta = -Complex::<f64>::i() * half_theta.sin();
	single([cos_half_theta, minus_i_sin_half_theta, minus_i_sin_half_theta, cos_half_theta])
}

/// Creates a rotation around the y-axis on a single qubit.
pub fn ry(angle: f64) -> Matrix {
	let half_theta = angle / 2.0;
	let cos_half_theta = Complex::from(half_theta.cos());
	let sin_half_theta = Complex::from(half_theta.sin());
	single([cos_half_theta, -sin_half_theta, sin_half_theta, cos_half_theta])
}

/// Creates a rotation around the z-axis on a single qubit.
pub fn rz(angle: f64) -> Matrix {
	let half_theta = angle / 2.0;
	single([
		Complex::from_polar(1.0, -half_theta),
		Complex::from(0.0),
		Complex::from(0.0),
		Complex::from_polar(1.0, half_theta),
	])
}

fn permutation(targets: [usize; 4]) -> Matrix {
	let mut values = vec![Complex::from(0.0); 16];
	for (column, row) in targets.iter().enumerate() {
		values[row * 4 + column] = Complex::from(1.0);
	}
	return Matrix::from_row_major(4, 4, values);
}

/// Creates a controlled-X gate on 2 qubits, the first one controlling the second one.
pub fn cnot() -> Matrix {
	permutation([0b00, 0b01, 0b11, 0b10])
}

/// Creates a swap gate on 2 qubits.
pub fn swap() -> Matrix {
	permutation([0b00, 0b10, 0b01, 0b11])
}
