//! Exact algebra of Pauli and Majorana operators in the symplectic
//! representation.
//!
//! Both kinds of operator are stored as a pair of equal-length bit vectors (the
//! X- and Z-type occupations) together with a coefficient drawn from the four
//! complex units {+1, -1, +i, -i}. Because the coefficient group is discrete,
//! all arithmetic here is exact: there is no floating point anywhere on the
//! path from two operators to their product.
//!
//! Operators are immutable values. Multiplication, negation, duality, and
//! cloning all return fresh operators that own their bit vectors, and every
//! read-only query (weights, Hermiticity, commutation) may be run from any
//! number of threads at once.
//!
//! # Example
//! ```
//! use symplectic_ops::{
//!     bits::BitVector,
//!     coef::Coefficient,
//!     majorana::MajoranaOp,
//!     operator::QuantumOperator,
//! };
//!
//! // γ'_0 and γ_0 on a single fermionic mode
//! let left = MajoranaOp::new(
//!     BitVector::zeros(1),
//!     BitVector::from_indices(1, [0]).unwrap(),
//!     Coefficient::PlusI,
//! ).unwrap();
//! let right = MajoranaOp::new(
//!     BitVector::from_indices(1, [0]).unwrap(),
//!     BitVector::zeros(1),
//!     Coefficient::PlusOne,
//! ).unwrap();
//!
//! // reordering into γ_0 γ'_0 costs a sign
//! let prod = left.multiply(&right).unwrap();
//! assert_eq!(prod.coef(), Coefficient::MinusI);
//! assert_eq!(prod.weight(), 2);
//! assert!(!left.commutes_with(&right).unwrap());
//! ```

pub mod error;
pub mod coef;
pub mod bits;
pub mod operator;
pub mod pauli;
pub mod majorana;

pub use crate::{
    bits::BitVector,
    coef::Coefficient,
    error::{ OpError, OpKind, OpResult },
    majorana::MajoranaOp,
    operator::{ QuantumOp, QuantumOperator, Symplectic },
    pauli::{ Pauli, PauliOp },
};
