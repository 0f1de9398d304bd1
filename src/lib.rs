//! Complex vector and matrix algebra, and simulation of qubit registers built on top of it.
//!
//! ```
//! use qualvec::{Qubit, gates};
//! let flipped = Qubit::zero(1).apply(&gates::pauli_x()).unwrap();
//! assert!(flipped.is_one(Some(1e-9)));
//! ```

pub mod config;
pub mod error;
pub mod gates;
pub mod matrix;
pub mod probability;
pub mod qubit;
pub mod vector;

pub use config::ApplyConfig;
pub use error::{AlgebraError, AlgebraResult};
pub use matrix::{Matrix, epsilon};
pub use qubit::{Qubit, tensor_product};
pub use vector::Vector;
