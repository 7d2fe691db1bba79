//! Error type shared by all fallible operations in this crate.
//!
//! Every failure here is a deterministic function of the inputs, so nothing is
//! ever retried or recovered internally: it is handed straight back to the
//! caller.

use std::fmt;
use num_complex::Complex64 as C64;
use thiserror::Error;

/// Tag identifying the concrete algebra of an operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Qubit tensor algebra; see [`PauliOp`][crate::pauli::PauliOp].
    Pauli,
    /// Fermionic mode algebra; see [`MajoranaOp`][crate::majorana::MajoranaOp].
    Majorana,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pauli => write!(f, "Pauli"),
            Self::Majorana => write!(f, "Majorana"),
        }
    }
}

/// Returned by any operation whose preconditions are not met.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OpError {
    /// Two bit vectors that must share a length do not.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A primitive expecting a bit vector was handed none.
    #[error("null/missing bit vector")]
    MissingVector,

    /// Operands belong to incompatible algebras.
    #[error("type mismatch: expected {expected} operand, found {found}")]
    TypeMismatch { expected: OpKind, found: OpKind },

    /// A complex number that is not exactly one of 1, -1, i, -i.
    #[error("invalid coefficient value: {0}")]
    InvalidCoefficient(C64),

    /// A bit index at or past the end of a vector.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type OpResult<T> = Result<T, OpError>;
