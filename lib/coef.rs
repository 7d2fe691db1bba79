//! The four-element group {+1, -1, +i, -i} of operator coefficients.
//!
//! Coefficients are isomorphic to ℤ<sub>4</sub> under multiplication: `+i` and
//! `-i` generate the group, `-1` has order two, and `+1` is the identity. All
//! arithmetic is performed by exact case analysis, never through floating
//! point.

use std::{
    fmt,
    ops::{ Div, DivAssign, Mul, MulAssign, Neg },
};
use num_complex::Complex64 as C64;
use rand::Rng;
use crate::error::{ OpError, OpResult };

/// Coefficient assigned by operator constructors that do not take one.
pub const DEFAULT_COEFFICIENT: Coefficient = Coefficient::PlusI;

/// A complex unit lying on the real or imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coefficient {
    /// +1
    PlusOne,
    /// -1
    MinusOne,
    /// +i
    PlusI,
    /// -i
    MinusI,
}

/// Creates a [`Self::PlusI`].
impl Default for Coefficient {
    fn default() -> Self { DEFAULT_COEFFICIENT }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PlusOne => write!(f, "+1"),
            Self::MinusOne => write!(f, "-1"),
            Self::PlusI => write!(f, "+i"),
            Self::MinusI => write!(f, "-i"),
        }
    }
}

impl Coefficient {
    /// All four group elements, in order of increasing exponent on **i**.
    pub const ALL: [Self; 4] =
        [Self::PlusOne, Self::PlusI, Self::MinusOne, Self::MinusI];

    /// Convert to the exponent *k* such that `self` = **i**<sup>*k*</sup>.
    pub fn to_int(&self) -> i8 {
        match self {
            Self::PlusOne  => 0,
            Self::PlusI    => 1,
            Self::MinusOne => 2,
            Self::MinusI   => 3,
        }
    }

    /// Convert from an exponent on **i** (modulo 4).
    pub fn from_int(i: i32) -> Self {
        match i.rem_euclid(4) {
            0 => Self::PlusOne,
            1 => Self::PlusI,
            2 => Self::MinusOne,
            3 => Self::MinusI,
            _ => unreachable!(),
        }
    }

    /// Return `true` for ±1.
    pub fn is_real(&self) -> bool {
        matches!(self, Self::PlusOne | Self::MinusOne)
    }

    /// Return `true` for ±i.
    pub fn is_imag(&self) -> bool {
        matches!(self, Self::PlusI | Self::MinusI)
    }

    /// Complex conjugate, which is also the group inverse.
    pub fn conj(self) -> Self {
        match self {
            Self::PlusI => Self::MinusI,
            Self::MinusI => Self::PlusI,
            real => real,
        }
    }

    /// Exact complex value.
    pub fn as_complex(self) -> C64 {
        match self {
            Self::PlusOne  => C64::new(1.0, 0.0),
            Self::MinusOne => C64::new(-1.0, 0.0),
            Self::PlusI    => C64::new(0.0, 1.0),
            Self::MinusI   => C64::new(0.0, -1.0),
        }
    }

    /// Convert from a complex number, which must be exactly one of 1, -1, i,
    /// -i.
    pub fn from_complex(z: C64) -> OpResult<Self> {
        match (z.re, z.im) {
            (re, im) if re == 1.0 && im == 0.0 => Ok(Self::PlusOne),
            (re, im) if re == -1.0 && im == 0.0 => Ok(Self::MinusOne),
            (re, im) if re == 0.0 && im == 1.0 => Ok(Self::PlusI),
            (re, im) if re == 0.0 && im == -1.0 => Ok(Self::MinusI),
            _ => Err(OpError::InvalidCoefficient(z)),
        }
    }

    /// Raise to an integer power.
    ///
    /// The exponent is first reduced into `0..4`, so negative powers give
    /// inverses and `pow(0)` is always `PlusOne`.
    pub fn pow(self, k: i32) -> Self {
        match (self, k.rem_euclid(4)) {
            (_, 0) => Self::PlusOne,
            (c, 1) => c,
            (Self::PlusOne, _) => Self::PlusOne,
            (Self::MinusOne, 2) => Self::PlusOne,
            (Self::MinusOne, _) => Self::MinusOne,
            (Self::PlusI, 2) | (Self::MinusI, 2) => Self::MinusOne,
            (Self::PlusI, _) => Self::MinusI,
            (Self::MinusI, _) => Self::PlusI,
        }
    }

    /// Sample a coefficient uniformly.
    pub fn gen<R>(rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self::ALL[rng.gen_range(0..4_usize)]
    }
}

impl From<Coefficient> for C64 {
    fn from(c: Coefficient) -> Self { c.as_complex() }
}

impl TryFrom<C64> for Coefficient {
    type Error = OpError;

    fn try_from(z: C64) -> Result<Self, Self::Error> { Self::from_complex(z) }
}

impl Mul for Coefficient {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        use Coefficient::*;
        match (self, rhs) {
            (PlusOne,  c       ) => c,
            (c,        PlusOne ) => c,
            (MinusOne, MinusOne) => PlusOne,
            (MinusOne, PlusI   ) => MinusI,
            (MinusOne, MinusI  ) => PlusI,
            (PlusI,    MinusOne) => MinusI,
            (PlusI,    PlusI   ) => MinusOne,
            (PlusI,    MinusI  ) => PlusOne,
            (MinusI,   MinusOne) => PlusI,
            (MinusI,   PlusI   ) => PlusOne,
            (MinusI,   MinusI  ) => MinusOne,
        }
    }
}

impl MulAssign for Coefficient {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

impl Div for Coefficient {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output { self * rhs.conj() }
}

impl DivAssign for Coefficient {
    fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
}

impl Neg for Coefficient {
    type Output = Self;

    fn neg(self) -> Self::Output { self * Self::MinusOne }
}

#[cfg(test)]
mod test {
    use super::*;
    use Coefficient::*;

    #[test]
    fn complex_values() {
        let cases = [
            (PlusOne, C64::new(1.0, 0.0)),
            (MinusOne, C64::new(-1.0, 0.0)),
            (PlusI, C64::new(0.0, 1.0)),
            (MinusI, C64::new(0.0, -1.0)),
        ];
        for (c, z) in cases {
            assert_eq!(c.as_complex(), z);
            assert_eq!(Coefficient::from_complex(z), Ok(c));
            assert_eq!(C64::from(Coefficient::try_from(z).unwrap()), z);
        }
    }

    #[test]
    fn invalid_complex_values() {
        let bad = [
            C64::new(2.0, 0.0),
            C64::new(0.5, 0.0),
            C64::new(1.0, 1.0),
            C64::new(0.0, 2.0),
        ];
        for z in bad {
            assert_eq!(
                Coefficient::from_complex(z),
                Err(OpError::InvalidCoefficient(z)),
            );
        }
    }

    #[test]
    fn negative_zero_is_accepted() {
        assert_eq!(Coefficient::from_complex(C64::new(-0.0, 1.0)), Ok(PlusI));
        assert_eq!(Coefficient::from_complex(C64::new(1.0, -0.0)), Ok(PlusOne));
    }

    #[test]
    fn powers() {
        let cases = [
            (PlusOne, 0, PlusOne),
            (MinusOne, 0, PlusOne),
            (PlusI, 1, PlusI),
            (MinusI, 1, MinusI),
            (PlusI, 2, MinusOne),
            (MinusI, 2, MinusOne),
            (PlusI, 3, MinusI),
            (MinusI, 3, PlusI),
            (MinusOne, 3, MinusOne),
            (MinusOne, 5, MinusOne),
            (PlusI, -1, MinusI),
            (MinusI, -2, MinusOne),
            (PlusI, -4, PlusOne),
        ];
        for (c, k, expected) in cases {
            assert_eq!(c.pow(k), expected, "{c}^{k}");
        }
        for c in Coefficient::ALL {
            assert_eq!(c.pow(0), PlusOne);
        }
    }

    #[test]
    fn pow_matches_repeated_product() {
        for c in Coefficient::ALL {
            let mut acc = PlusOne;
            for k in 0..12 {
                assert_eq!(c.pow(k), acc);
                acc *= c;
            }
        }
    }

    #[test]
    fn multiplication_table() {
        let table = [
            (PlusOne, PlusOne, PlusOne),
            (PlusOne, MinusOne, MinusOne),
            (PlusOne, PlusI, PlusI),
            (PlusOne, MinusI, MinusI),
            (MinusOne, PlusOne, MinusOne),
            (MinusOne, MinusOne, PlusOne),
            (MinusOne, PlusI, MinusI),
            (MinusOne, MinusI, PlusI),
            (PlusI, PlusOne, PlusI),
            (PlusI, MinusOne, MinusI),
            (PlusI, PlusI, MinusOne),
            (PlusI, MinusI, PlusOne),
            (MinusI, PlusOne, MinusI),
            (MinusI, MinusOne, PlusI),
            (MinusI, PlusI, PlusOne),
            (MinusI, MinusI, MinusOne),
        ];
        for (a, b, expected) in table {
            assert_eq!(a * b, expected, "{a} * {b}");
            // agrees with the complex product
            assert_eq!((a * b).as_complex(), a.as_complex() * b.as_complex());
        }
    }

    #[test]
    fn group_laws() {
        for a in Coefficient::ALL {
            assert_eq!(a * a.conj(), PlusOne);
            assert_eq!(a / a, PlusOne);
            assert_eq!(-(-a), a);
            assert_eq!(Coefficient::from_int(i32::from(a.to_int())), a);
            assert!(a.is_real() ^ a.is_imag());
            for b in Coefficient::ALL {
                assert_eq!(a * b, b * a);
                for c in Coefficient::ALL {
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }
        }
    }

    #[test]
    fn default_is_plus_i() {
        assert_eq!(Coefficient::default(), PlusI);
        assert_eq!(format!("{}", Coefficient::default()), "+i");
    }
}
