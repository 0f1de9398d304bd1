//! How gates are applied to qubits.

/// Tolerance used to check unitarity when none is given.
pub const DEFAULT_UNITARY_TOLERANCE: f64 = 1e-9;

/// Configuration of [Qubit::apply_with](crate::Qubit::apply_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplyConfig {
	/// Refuse matrices that aren't unitary, since they would break the normalization of the state.
	pub strict:    bool,
	/// Tolerance of the unitarity check in strict mode.
	pub tolerance: f64,
}

impl Default for ApplyConfig {
	fn default() -> Self {
		Self {
			strict:    false,
			tolerance: DEFAULT_UNITARY_TOLERANCE,
		}
	}
}

impl ApplyConfig {
	/// Default configuration with the unitarity check turned on.
	pub fn strict() -> Self {
		Self {
			strict: true,
			..Self::default()
		}
	}

	/// Same configuration, the unitarity check allowing `tolerance` instead.
	pub fn with_tolerance(self, tolerance: f64) -> Self {
		Self { tolerance, ..self }
	}
}
