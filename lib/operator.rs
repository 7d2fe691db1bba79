//! Shared machinery for operators in the symplectic representation.
//!
//! An operator on *N* qubits or fermionic modes is stored as a pair of
//! length-*N* bit vectors marking which sites carry an X-type (γ) and which
//! carry a Z-type (γ') factor, together with an overall [`Coefficient`]. The
//! concrete algebras ([`PauliOp`] and [`MajoranaOp`]) share this storage
//! through [`Symplectic`] and the [`QuantumOperator`] trait, and differ only in
//! how products, Hermiticity, and commutation are evaluated.
//!
//! Operators are values: every transformation returns a new operator and
//! leaves its inputs untouched.

use std::hash::{ Hash, Hasher };
use itertools::Itertools;
use rand::Rng;
use rustc_hash::FxHasher;
use tracing::debug;
use crate::{
    bits::BitVector,
    coef::Coefficient,
    error::{ OpError, OpKind, OpResult },
    majorana::MajoranaOp,
    pauli::PauliOp,
};

/// Occupation pair plus coefficient, with both occupations of equal length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symplectic {
    x: BitVector,
    z: BitVector,
    coef: Coefficient,
}

impl Symplectic {
    /// Create a new representation, taking ownership of both occupations.
    ///
    /// Fails if `x` and `z` have different lengths.
    pub fn new(x: BitVector, z: BitVector, coef: Coefficient)
        -> OpResult<Self>
    {
        if x.len() != z.len() {
            debug!(
                x_len = x.len(),
                z_len = z.len(),
                "rejected occupation pair of unequal length"
            );
            return Err(OpError::LengthMismatch { left: x.len(), right: z.len() });
        }
        Ok(Self { x, z, coef })
    }

    /// Sample uniformly random occupations and coefficient on `n` sites.
    pub fn gen<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        let x = BitVector::gen(n, 0.5, rng);
        let z = BitVector::gen(n, 0.5, rng);
        let coef = Coefficient::gen(rng);
        Self { x, z, coef }
    }

    /// Return the number of sites.
    pub fn num_modes(&self) -> usize { self.x.len() }

    /// Return the X-type occupation.
    pub fn occupied_x(&self) -> &BitVector { &self.x }

    /// Return the Z-type occupation.
    pub fn occupied_z(&self) -> &BitVector { &self.z }

    /// Return the coefficient.
    pub fn coef(&self) -> Coefficient { self.coef }

    /// Number of X-type factors plus number of Z-type factors.
    pub fn weight(&self) -> usize { self.x.weight() + self.z.weight() }

    /// Number of sites carrying any factor at all.
    pub fn reduced_weight(&self) -> usize {
        self.x.or_weight(&self.z)
            .unwrap_or_else(|_| unreachable!("occupations share a length"))
    }

    /// Return `true` if no site is occupied.
    pub fn is_identity(&self) -> bool {
        self.x.weight() == 0 && self.z.weight() == 0
    }

    /// Interleave the two occupations as X<sub>0</sub>, Z<sub>0</sub>,
    /// X<sub>1</sub>, Z<sub>1</sub>, ....
    pub fn zipped_occupations(&self) -> BitVector {
        self.x.iter().interleave(self.z.iter()).collect()
    }

    pub(crate) fn rescaled(&self, c: Coefficient) -> Self {
        Self { x: self.x.clone(), z: self.z.clone(), coef: self.coef * c }
    }

    pub(crate) fn swapped(&self) -> Self {
        Self { x: self.z.clone(), z: self.x.clone(), coef: self.coef }
    }

    // site-wise XOR of both occupations, with the naive coefficient product
    pub(crate) fn product(&self, rhs: &Self) -> OpResult<Self> {
        let x = self.x.xor(&rhs.x)?;
        let z = self.z.xor(&rhs.z)?;
        Ok(Self { x, z, coef: self.coef * rhs.coef })
    }
}

/// Common interface to the concrete operator algebras.
pub trait QuantumOperator: Clone + Sized {
    /// Which algebra this is.
    const KIND: OpKind;

    /// Wrap an already validated representation.
    fn from_symplectic(s: Symplectic) -> Self;

    /// Borrow the underlying representation.
    fn symplectic(&self) -> &Symplectic;

    /// Compute `self · rhs`.
    fn multiply(&self, rhs: &Self) -> OpResult<Self>;

    /// Return `true` if `self` equals its own conjugate transpose.
    fn is_hermitian(&self) -> bool;

    /// Build the canonical Hermitian operator with the given occupations.
    fn create_hermitian(x: BitVector, z: BitVector) -> OpResult<Self>;

    fn num_modes(&self) -> usize { self.symplectic().num_modes() }

    fn occupied_x(&self) -> &BitVector { self.symplectic().occupied_x() }

    fn occupied_z(&self) -> &BitVector { self.symplectic().occupied_z() }

    fn coef(&self) -> Coefficient { self.symplectic().coef() }

    fn weight(&self) -> usize { self.symplectic().weight() }

    fn reduced_weight(&self) -> usize { self.symplectic().reduced_weight() }

    fn is_identity(&self) -> bool { self.symplectic().is_identity() }

    fn zipped_occupations(&self) -> BitVector {
        self.symplectic().zipped_occupations()
    }

    /// Multiply by a coefficient; occupations are copied unchanged.
    fn multiply_coef(&self, c: Coefficient) -> Self {
        Self::from_symplectic(self.symplectic().rescaled(c))
    }

    /// Multiply by -1.
    fn negate(&self) -> Self { self.multiply_coef(Coefficient::MinusOne) }

    /// Swap the roles of the X- and Z-type occupations.
    fn dual(&self) -> Self {
        Self::from_symplectic(self.symplectic().swapped())
    }

    /// Structural fingerprint: equal operators always share it.
    fn ident(&self) -> u64 {
        let mut hasher = FxHasher::default();
        Self::KIND.hash(&mut hasher);
        self.symplectic().hash(&mut hasher);
        hasher.finish()
    }
}

macro_rules! impl_operator_sugar {
    ( $op:ident ) => {
        impl std::ops::Neg for $op {
            type Output = Self;

            fn neg(self) -> Self::Output {
                <$op as $crate::operator::QuantumOperator>::negate(&self)
            }
        }

        impl std::ops::Neg for &$op {
            type Output = $op;

            fn neg(self) -> Self::Output {
                <$op as $crate::operator::QuantumOperator>::negate(self)
            }
        }

        impl std::ops::Mul<$crate::coef::Coefficient> for $op {
            type Output = Self;

            fn mul(self, c: $crate::coef::Coefficient) -> Self::Output {
                <$op as $crate::operator::QuantumOperator>::multiply_coef(&self, c)
            }
        }

        impl std::ops::Mul<$crate::coef::Coefficient> for &$op {
            type Output = $op;

            fn mul(self, c: $crate::coef::Coefficient) -> Self::Output {
                <$op as $crate::operator::QuantumOperator>::multiply_coef(self, c)
            }
        }
    }
}
pub(crate) use impl_operator_sugar;

/// An operator of either algebra.
///
/// Binary operations require both operands to be of the same variant and
/// return [`OpError::TypeMismatch`] otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QuantumOp {
    Pauli(PauliOp),
    Majorana(MajoranaOp),
}

impl From<PauliOp> for QuantumOp {
    fn from(op: PauliOp) -> Self { Self::Pauli(op) }
}

impl From<MajoranaOp> for QuantumOp {
    fn from(op: MajoranaOp) -> Self { Self::Majorana(op) }
}

fn mismatch(expected: OpKind, found: OpKind) -> OpError {
    debug!(%expected, %found, "rejected operand of the wrong algebra");
    OpError::TypeMismatch { expected, found }
}

impl QuantumOp {
    /// Return the algebra of `self`.
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Pauli(_) => OpKind::Pauli,
            Self::Majorana(_) => OpKind::Majorana,
        }
    }

    /// Return `true` if `self` is `Pauli`.
    pub fn is_pauli(&self) -> bool { matches!(self, Self::Pauli(..)) }

    /// Return `true` if `self` is `Majorana`.
    pub fn is_majorana(&self) -> bool { matches!(self, Self::Majorana(..)) }

    pub fn as_pauli(&self) -> Option<&PauliOp> {
        match self {
            Self::Pauli(op) => Some(op),
            Self::Majorana(_) => None,
        }
    }

    pub fn as_majorana(&self) -> Option<&MajoranaOp> {
        match self {
            Self::Pauli(_) => None,
            Self::Majorana(op) => Some(op),
        }
    }

    pub fn symplectic(&self) -> &Symplectic {
        match self {
            Self::Pauli(op) => op.symplectic(),
            Self::Majorana(op) => op.symplectic(),
        }
    }

    pub fn num_modes(&self) -> usize { self.symplectic().num_modes() }

    pub fn occupied_x(&self) -> &BitVector { self.symplectic().occupied_x() }

    pub fn occupied_z(&self) -> &BitVector { self.symplectic().occupied_z() }

    pub fn coef(&self) -> Coefficient { self.symplectic().coef() }

    pub fn weight(&self) -> usize { self.symplectic().weight() }

    pub fn reduced_weight(&self) -> usize {
        self.symplectic().reduced_weight()
    }

    pub fn zipped_occupations(&self) -> BitVector {
        self.symplectic().zipped_occupations()
    }

    /// Compute `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> OpResult<Self> {
        match (self, rhs) {
            (Self::Pauli(a), Self::Pauli(b)) => a.multiply(b).map(Self::Pauli),
            (Self::Majorana(a), Self::Majorana(b))
                => a.multiply(b).map(Self::Majorana),
            (lhs, rhs) => Err(mismatch(lhs.kind(), rhs.kind())),
        }
    }

    pub fn multiply_coef(&self, c: Coefficient) -> Self {
        match self {
            Self::Pauli(op) => Self::Pauli(op.multiply_coef(c)),
            Self::Majorana(op) => Self::Majorana(op.multiply_coef(c)),
        }
    }

    pub fn negate(&self) -> Self { self.multiply_coef(Coefficient::MinusOne) }

    pub fn dual(&self) -> Self {
        match self {
            Self::Pauli(op) => Self::Pauli(op.dual()),
            Self::Majorana(op) => Self::Majorana(op.dual()),
        }
    }

    pub fn is_hermitian(&self) -> bool {
        match self {
            Self::Pauli(op) => op.is_hermitian(),
            Self::Majorana(op) => op.is_hermitian(),
        }
    }

    /// Return `true` if `self` and `rhs` commute.
    ///
    /// Only defined between two Majorana operators; a Pauli operand on
    /// either side is a type mismatch.
    pub fn commutes_with(&self, rhs: &Self) -> OpResult<bool> {
        match (self, rhs) {
            (Self::Majorana(a), Self::Majorana(b)) => a.commutes_with(b),
            (Self::Majorana(_), other) | (other, _)
                => Err(mismatch(OpKind::Majorana, other.kind())),
        }
    }

    pub fn ident(&self) -> u64 {
        match self {
            Self::Pauli(op) => op.ident(),
            Self::Majorana(op) => op.ident(),
        }
    }
}

impl std::fmt::Display for QuantumOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pauli(op) => std::fmt::Display::fmt(op, f),
            Self::Majorana(op) => std::fmt::Display::fmt(op, f),
        }
    }
}
