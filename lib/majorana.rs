//! Products of Majorana fermion operators on *N* modes.
//!
//! Each mode *k* hosts two Majorana operators, γ<sub>*k*</sub> and
//! γ'<sub>*k*</sub>, marked by the X- and Z-type occupations respectively. An
//! operator is the coefficient times the product of all marked γ's in the
//! normal order γ<sub>0</sub> γ'<sub>0</sub> γ<sub>1</sub> γ'<sub>1</sub> ...,
//! which is the order of [`QuantumOperator::zipped_occupations`].
//!
//! Unlike Pauli operators, distinct Majorana factors anticommute, so products
//! pick up a sign from the exchange parity of the two normal-ordered strings.

use std::fmt;
use rand::Rng;
use crate::{
    bits::BitVector,
    coef::Coefficient,
    error::{ OpKind, OpResult },
    operator::{ impl_operator_sugar, QuantumOperator, Symplectic },
};

// w (w - 1) / 2 pairwise swaps reverse a string of w factors
fn reversal_is_odd(w: usize) -> bool {
    (w * w.saturating_sub(1) / 2) % 2 == 1
}

/// A product of Majorana operators with a coefficient in {±1, ±i}.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MajoranaOp(Symplectic);

impl MajoranaOp {
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

    /// Sample a uniformly random operator on `n` modes.
    pub fn gen<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self(Symplectic::gen(n, rng))
    }

    /// Return `true` if `self` and `rhs` commute.
    ///
    /// Two Majorana strings of weights *p* and *q* sharing *m* factors commute
    /// iff *pq* + *m* is even. Fails if the operators act on different numbers
    /// of modes.
    pub fn commutes_with(&self, rhs: &Self) -> OpResult<bool> {
        let overlap_x = self.occupied_x().and_weight(rhs.occupied_x())?;
        let overlap_z = self.occupied_z().and_weight(rhs.occupied_z())?;
        let product = self.weight() * rhs.weight();
        Ok((overlap_x + overlap_z + product) % 2 == 0)
    }
}

impl QuantumOperator for MajoranaOp {
    const KIND: OpKind = OpKind::Majorana;

    fn from_symplectic(s: Symplectic) -> Self { Self(s) }

    fn symplectic(&self) -> &Symplectic { &self.0 }

    fn multiply(&self, rhs: &Self) -> OpResult<Self> {
        let mut prod = self.0.product(&rhs.0)?;
        let odd
            = self.zipped_occupations()
            .exchange_parity_with(&rhs.zipped_occupations())?;
        if odd { prod = prod.rescaled(Coefficient::MinusOne); }
        Ok(Self(prod))
    }

    fn is_hermitian(&self) -> bool {
        if reversal_is_odd(self.weight()) {
            self.coef().is_imag()
        } else {
            self.coef().is_real()
        }
    }

    fn create_hermitian(x: BitVector, z: BitVector) -> OpResult<Self> {
        let w = x.weight() + z.weight();
        let coef = if reversal_is_odd(w) {
            Coefficient::PlusI
        } else {
            Coefficient::PlusOne
        };
        Self::new(x, z, coef)
    }
}

impl_operator_sugar!(MajoranaOp);

impl fmt::Display for MajoranaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef(), f)?;
        write!(f, " x:{} z:{}", self.occupied_x(), self.occupied_z())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::{ rngs::StdRng, SeedableRng };
    use crate::coef::Coefficient::*;

    fn op(n: usize, x: &[usize], z: &[usize], coef: Coefficient)
        -> MajoranaOp
    {
        MajoranaOp::new(
            BitVector::from_indices(n, x.iter().copied()).unwrap(),
            BitVector::from_indices(n, z.iter().copied()).unwrap(),
            coef,
        ).unwrap()
    }

    fn from_bools(x: &[bool], z: &[bool], coef: Coefficient) -> MajoranaOp {
        MajoranaOp::new(x.into(), z.into(), coef).unwrap()
    }

    #[test]
    fn multiply_odd_parity_flips_sign() {
        let left = op(1, &[], &[0], PlusI);
        let right = op(1, &[0], &[], PlusOne);
        let left_copy = left.clone();
        let right_copy = right.clone();
        let prod = left.multiply(&right).unwrap();
        assert_eq!(prod, op(1, &[0], &[0], MinusI));
        assert_eq!(left, left_copy);
        assert_eq!(right, right_copy);
    }

    #[test]
    fn multiply_even_parity_keeps_sign() {
        let left = op(2, &[0], &[], PlusI);
        let right = op(2, &[1], &[], MinusOne);
        let prod = left.multiply(&right).unwrap();
        assert_eq!(prod, op(2, &[0, 1], &[], MinusI));
    }

    #[test]
    fn multiply_in_reverse_order() {
        // γ0 γ'0 = -γ'0 γ0
        let g = op(1, &[0], &[], PlusOne);
        let gp = op(1, &[], &[0], PlusOne);
        let ab = g.multiply(&gp).unwrap();
        let ba = gp.multiply(&g).unwrap();
        assert_eq!(ab.coef(), PlusOne);
        assert_eq!(ba, -ab);
        assert!(!g.commutes_with(&gp).unwrap());
    }

    #[test]
    fn squares_are_scalar() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let a = MajoranaOp::gen(8, &mut rng);
            let sq = a.multiply(&a).unwrap();
            assert!(sq.is_identity());
            // γ-strings square to ±1; the sign is the reversal parity
            let base = a.multiply_coef(a.coef().conj());
            let expected = if reversal_is_odd(a.weight()) {
                MinusOne
            } else {
                PlusOne
            };
            assert_eq!(base.multiply(&base).unwrap().coef(), expected);
        }
    }

    #[test]
    fn multiply_length_mismatch() {
        assert!(op(2, &[0], &[], PlusOne).multiply(&op(3, &[0], &[], PlusOne))
            .is_err());
        assert!(op(2, &[0], &[], PlusOne)
            .commutes_with(&op(3, &[0], &[], PlusOne))
            .is_err());
    }

    #[test]
    fn coefficient_ops() {
        let a = op(3, &[1], &[2], PlusI);
        let b = a.multiply_coef(MinusOne);
        assert_eq!(b.coef(), MinusI);
        assert_eq!(b.occupied_x(), a.occupied_x());
        assert!(!std::ptr::eq(a.occupied_x(), b.occupied_x()));
        assert!(!std::ptr::eq(a.occupied_z(), b.occupied_z()));
        assert_eq!(a.clone() * MinusOne, b);
        assert_eq!(op(1, &[], &[], PlusI).negate().coef(), MinusI);
    }

    #[test]
    fn dual_and_clone() {
        let a = op(2, &[0], &[1], MinusOne);
        let d = a.dual();
        assert_eq!(d, op(2, &[1], &[0], MinusOne));
        let c = a.clone();
        assert_eq!(c, a);
        assert!(!std::ptr::eq(a.occupied_z(), c.occupied_z()));
    }

    #[test]
    fn hermitian_by_weight() {
        let cases = [
            (&[true][..], &[false][..], PlusOne, true),
            (&[true], &[false], PlusI, false),
            (&[true, true], &[false, false], PlusI, true),
            (&[true, true], &[false, false], PlusOne, false),
        ];
        for (x, z, coef, expected) in cases {
            assert_eq!(from_bools(x, z, coef).is_hermitian(), expected);
        }
        assert!(op(0, &[], &[], MinusOne).is_hermitian());
    }

    #[test]
    fn commutation() {
        let cases: [(&[bool], &[bool], &[bool], &[bool], bool); 4] = [
            (&[], &[], &[], &[], true),
            (&[true], &[false], &[false], &[true], false),
            (&[true], &[false], &[true], &[false], true),
            (&[true, true], &[false, false], &[false, true], &[false, false], false),
        ];
        for (lx, lz, rx, rz, expected) in cases {
            let left = from_bools(lx, lz, PlusOne);
            let right = from_bools(rx, rz, PlusOne);
            assert_eq!(left.commutes_with(&right), Ok(expected));
        }
    }

    #[test]
    fn create_hermitian_coefficient() {
        let a = MajoranaOp::create_hermitian(
            BitVector::from_indices(2, [0]).unwrap(),
            BitVector::from_indices(2, [1]).unwrap(),
        ).unwrap();
        assert_eq!(a.coef(), PlusI);
        assert!(a.is_hermitian());
        assert_eq!(
            format!("{}", a),
            "+i x:10 z:01",
        );
    }

    proptest! {
        #[test]
        fn involutions(seed in any::<u64>(), n in 0..40_usize) {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = MajoranaOp::gen(n, &mut rng);
            prop_assert_eq!(a.dual().dual(), a.clone());
            prop_assert_eq!(a.negate().negate(), a.clone());
        }

        #[test]
        fn created_hermitian_is_hermitian(seed in any::<u64>(), n in 0..40_usize) {
            let mut rng = StdRng::seed_from_u64(seed);
            let x = BitVector::gen(n, 0.5, &mut rng);
            let z = BitVector::gen(n, 0.5, &mut rng);
            let a = MajoranaOp::create_hermitian(x, z).unwrap();
            prop_assert!(a.is_hermitian());
        }

        #[test]
        fn commutation_matches_products(seed in any::<u64>(), n in 1..16_usize) {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = MajoranaOp::gen(n, &mut rng);
            let b = MajoranaOp::gen(n, &mut rng);
            let ab = a.multiply(&b).unwrap();
            let ba = b.multiply(&a).unwrap();
            prop_assert_eq!(a.commutes_with(&b).unwrap(), ab == ba);
            prop_assert_eq!(b.commutes_with(&a).unwrap(), ab == ba);
        }
    }
}
