//! *N*-qubit Pauli operators in the symplectic representation.
//!
//! A Pauli operator is stored as `coef · ⊗ₖ X^{x[k]} Z^{z[k]}`, so a qubit with
//! both bits set carries the product `XZ` (= -i Y). Products are computed
//! site-wise by XOR with the coefficients multiplied directly; no reordering
//! sign is tracked.

use std::fmt;
use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use rand::Rng;
use crate::{
    bits::BitVector,
    coef::Coefficient,
    error::{ OpKind, OpResult },
    operator::{ impl_operator_sugar, QuantumOperator, Symplectic },
};

/// A single-qubit Pauli label, carrying no phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// Both X and Z bits set
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Pauli {
    /// Convert from a pair of (X, Z) occupation bits.
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Self::I,
            (true,  false) => Self::X,
            (true,  true ) => Self::Y,
            (false, true ) => Self::Z,
        }
    }

    /// Convert to a pair of (X, Z) occupation bits.
    pub fn to_bits(self) -> (bool, bool) {
        match self {
            Self::I => (false, false),
            Self::X => (true,  false),
            Self::Y => (true,  true ),
            Self::Z => (false, true ),
        }
    }
}

static MAT_I: Lazy<na::DMatrix<C64>> = Lazy::new(|| na::DMatrix::identity(2, 2));

static MAT_X: Lazy<na::DMatrix<C64>> = Lazy::new(|| {
    let (o, l) = (C64::new(0.0, 0.0), C64::new(1.0, 0.0));
    na::DMatrix::from_row_slice(2, 2, &[o, l, l, o])
});

static MAT_Z: Lazy<na::DMatrix<C64>> = Lazy::new(|| {
    let (o, l) = (C64::new(0.0, 0.0), C64::new(1.0, 0.0));
    na::DMatrix::from_row_slice(2, 2, &[l, o, o, -l])
});

// X·Z, the single-qubit factor for a site with both bits set
static MAT_XZ: Lazy<na::DMatrix<C64>> = Lazy::new(|| &*MAT_X * &*MAT_Z);

/// An *N*-qubit Pauli operator with a coefficient in {±1, ±i}.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PauliOp(Symplectic);

impl PauliOp {
    /// Create a new operator, taking ownership of both occupations.
    ///
    /// Fails if `x` and `z` have different lengths.
    pub fn new(x: BitVector, z: BitVector, coef: Coefficient)
        -> OpResult<Self>
    {
        Symplectic::new(x, z, coef).map(Self)
    }

    /// Like [`Self::new`], with the default coefficient
    /// ([`DEFAULT_COEFFICIENT`][crate::coef::DEFAULT_COEFFICIENT]).
    pub fn from_bits(x: BitVector, z: BitVector) -> OpResult<Self> {
        Self::new(x, z, Coefficient::default())
    }

    /// Create a new operator from a list of single-qubit labels.
    pub fn from_paulis<'a, I>(ops: I, coef: Coefficient) -> Self
    where I: IntoIterator<Item = &'a Pauli>
    {
        let (x, z): (Vec<bool>, Vec<bool>)
            = ops.into_iter().map(|p| p.to_bits()).unzip();
        Self::new(x.into(), z.into(), coef)
            .unwrap_or_else(|_| unreachable!("unzipped halves share a length"))
    }

    /// Sample a uniformly random operator on `n` qubits.
    pub fn gen<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self(Symplectic::gen(n, rng))
    }

    /// Return the single-qubit labels of `self`, discarding the coefficient.
    pub fn paulis(&self) -> Vec<Pauli> {
        self.occupied_x().iter()
            .zip(self.occupied_z().iter())
            .map(|(x, z)| Pauli::from_bits(x, z))
            .collect()
    }

    /// Represent `self` as a dense `2^N × 2^N` matrix, with qubit 0 as the
    /// leftmost tensor factor.
    ///
    /// This grows exponentially with `N` and is only meant for small systems.
    pub fn as_matrix(&self) -> na::DMatrix<C64> {
        let init = na::DMatrix::from_element(1, 1, self.coef().as_complex());
        self.paulis().into_iter()
            .fold(init, |acc, p| {
                let factor: &na::DMatrix<C64> = match p {
                    Pauli::I => &*MAT_I,
                    Pauli::X => &*MAT_X,
                    Pauli::Y => &*MAT_XZ,
                    Pauli::Z => &*MAT_Z,
                };
                acc.kronecker(factor)
            })
    }
}

impl QuantumOperator for PauliOp {
    const KIND: OpKind = OpKind::Pauli;

    fn from_symplectic(s: Symplectic) -> Self { Self(s) }

    fn symplectic(&self) -> &Symplectic { &self.0 }

    fn multiply(&self, rhs: &Self) -> OpResult<Self> {
        self.0.product(&rhs.0).map(Self)
    }

    fn is_hermitian(&self) -> bool {
        // (XZ)† = -XZ on every doubly occupied site
        let overlap
            = self.occupied_x().and_weight(self.occupied_z())
            .unwrap_or_else(|_| unreachable!("occupations share a length"));
        if overlap % 2 == 0 {
            self.coef().is_real()
        } else {
            self.coef().is_imag()
        }
    }

    fn create_hermitian(x: BitVector, z: BitVector) -> OpResult<Self> {
        let overlap = x.and_weight(&z)?;
        let coef = if overlap % 2 == 0 {
            Coefficient::PlusOne
        } else {
            Coefficient::PlusI
        };
        Self::new(x, z, coef)
    }
}

impl_operator_sugar!(PauliOp);

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef(), f)?;
        write!(f, " ")?;
        self.paulis().into_iter()
            .try_for_each(|p| fmt::Display::fmt(&p, f))
    }
}
