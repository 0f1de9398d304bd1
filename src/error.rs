//! Errors raised when an operation's shape or state preconditions don't hold.

use thiserror::Error;

/// Result of a fallible algebra or qubit operation.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Precondition violations detected by vector, matrix and qubit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
	#[error("dimension mismatch: expected {expected}, found {found}")]
	DimensionMismatch { expected: usize, found: usize },

	#[error("matrix has no rows")]
	EmptyMatrix,

	#[error("row {row} has {found} columns, expected {expected}")]
	NonRectangularMatrix { row: usize, expected: usize, found: usize },

	#[error("matrix is {rows}x{columns}, expected a square matrix")]
	NotSquare { rows: usize, columns: usize },

	#[error("cannot normalise a state whose amplitudes are all zero")]
	DegenerateState,

	#[error("state dimension {dimension} is not a power of two")]
	InvalidBitWidth { dimension: usize },

	#[error("bit {bit} is out of range for a register of {bit_width} bits")]
	BitOutOfRange { bit: usize, bit_width: usize },

	#[error("at least one operand is required")]
	EmptyOperands,

	#[error("matrix is not unitary within tolerance {tolerance}")]
	NotUnitary { tolerance: f64 },
}
