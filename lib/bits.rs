//! Fixed-length bit vectors packed into `u32` words.
//!
//! Bit *k* lives in word `k >> 5` at position `k & 31`. Bits past the logical
//! length in the final word ("padding") are kept clear by every constructor and
//! mutator, but all counting and comparison routines mask the final word anyway
//! so that storage beyond `len` can never leak into a result.
//!
//! None of the primitives here mutate their inputs or allocate scratch space;
//! they read the packed words in place, so any number of threads may call them
//! concurrently on shared vectors.

use std::{
    fmt,
    hash::{ Hash, Hasher },
};
use itertools::Itertools;
use rand::Rng;
use crate::error::{ OpError, OpResult };

const PW: [u32; 32] = [ // PW[i] = 2^i
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768,
    65536, 131072, 262144, 524288, 1048576, 2097152, 4194304, 8388608, 16777216,
    33554432, 67108864, 134217728, 268435456, 536870912, 1073741824, 2147483648
];

// number of u32 words needed for `len` bits
fn num_words(len: usize) -> usize { (len + 31) >> 5 }

/// An ordered sequence of booleans with a length fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct BitVector {
    len: usize,
    words: Vec<u32>,
}

impl BitVector {
    /// Create a new vector of `len` cleared bits.
    pub fn zeros(len: usize) -> Self {
        Self { len, words: vec![0; num_words(len)] }
    }

    /// Create a new vector of `len` bits with exactly the bits at `indices`
    /// set.
    ///
    /// Fails if any index is not less than `len`.
    pub fn from_indices<I>(len: usize, indices: I) -> OpResult<Self>
    where I: IntoIterator<Item = usize>
    {
        let mut v = Self::zeros(len);
        indices.into_iter()
            .try_for_each(|k| v.set(k, true).map(|_| ()))?;
        Ok(v)
    }

    /// Sample a random vector in which each bit is set independently with
    /// probability `p`.
    ///
    /// *Panics if `p` is not a valid probability.*
    pub fn gen<R>(len: usize, p: f64, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        (0..len).map(|_| rng.gen_bool(p)).collect()
    }

    /// Return the number of bits.
    pub fn len(&self) -> usize { self.len }

    /// Return `true` if `self` holds no bits at all.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Return the `k`-th bit, or `None` if `k` is out of bounds.
    pub fn get(&self, k: usize) -> Option<bool> {
        (k < self.len).then(|| self.words[k >> 5] & PW[k & 31] != 0)
    }

    /// Set the `k`-th bit.
    pub fn set(&mut self, k: usize, b: bool) -> OpResult<&mut Self> {
        if k >= self.len {
            return Err(OpError::IndexOutOfBounds { index: k, len: self.len });
        }
        if b {
            self.words[k >> 5] |= PW[k & 31];
        } else {
            self.words[k >> 5] &= !PW[k & 31];
        }
        Ok(self)
    }

    /// Iterate over all bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|k| self.words[k >> 5] & PW[k & 31] != 0)
    }

    /// Iterate over the indices of all set bits in increasing order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.masked_words()
            .enumerate()
            .flat_map(|(j, mut w)| {
                std::iter::from_fn(move || {
                    (w != 0).then(|| {
                        let b = w.trailing_zeros() as usize;
                        w &= w - 1;
                        (j << 5) + b
                    })
                })
            })
    }

    // mask selecting the live bits of the final word
    fn last_mask(&self) -> u32 {
        match self.len & 31 {
            0 => u32::MAX,
            r => PW[r] - 1,
        }
    }

    // packed words with any padding in the final word cleared
    fn masked_words(&self)
        -> impl DoubleEndedIterator<Item = u32> + ExactSizeIterator + '_
    {
        let last = self.words.len().saturating_sub(1);
        let mask = self.last_mask();
        self.words.iter()
            .enumerate()
            .map(move |(j, &w)| if j == last { w & mask } else { w })
    }

    fn check_len(&self, other: &Self) -> OpResult<()> {
        if self.len == other.len {
            Ok(())
        } else {
            Err(OpError::LengthMismatch { left: self.len, right: other.len })
        }
    }

    /// Count the set bits.
    pub fn weight(&self) -> usize {
        self.masked_words()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Count the set bits of `self & other` without forming the intersection.
    pub fn and_weight(&self, other: &Self) -> OpResult<usize> {
        self.check_len(other)?;
        let w: usize
            = self.masked_words().zip(other.masked_words())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum();
        Ok(w)
    }

    /// Count the set bits of `self | other` without forming the union.
    pub fn or_weight(&self, other: &Self) -> OpResult<usize> {
        self.check_len(other)?;
        let w: usize
            = self.masked_words().zip(other.masked_words())
            .map(|(a, b)| (a | b).count_ones() as usize)
            .sum();
        Ok(w)
    }

    /// Return `true` if `self` and `other` have the same length and agree at
    /// every position.
    pub fn value_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (
                self.len == other.len
                && self.masked_words().zip(other.masked_words())
                    .all(|(a, b)| a == b)
            )
    }

    /// Return a new vector equal to `self ^ other`.
    pub fn xor(&self, other: &Self) -> OpResult<Self> {
        self.check_len(other)?;
        let words: Vec<u32>
            = self.masked_words().zip(other.masked_words())
            .map(|(a, b)| a ^ b)
            .collect();
        Ok(Self { len: self.len, words })
    }

    /// Return a new vector of twice the length holding `self` and `other`
    /// interleaved: `self[0], other[0], self[1], other[1], ...`.
    pub fn interleave(&self, other: &Self) -> OpResult<Self> {
        self.check_len(other)?;
        Ok(self.iter().interleave(other.iter()).collect())
    }

    /// Compute the parity of the permutation needed to exchange a product of
    /// anticommuting factors indexed by `self` with one indexed by `other`.
    ///
    /// Returns `true` (odd) iff the number of pairs (*a*, *b*) with `self[a]`,
    /// `other[b]`, and *a* > *b* is odd. The count is taken in a single pass
    /// from the highest word down, carrying the number of `self` bits already
    /// seen above the current word.
    pub fn exchange_parity_with(&self, other: &Self) -> OpResult<bool> {
        self.check_len(other)?;
        let mut above: u32 = 0; // parity of `self` bits in higher words
        let mut parity: u32 = 0;
        for (sj, oj) in self.masked_words().zip(other.masked_words()).rev() {
            let mut rem = oj;
            while rem != 0 {
                let b = rem.trailing_zeros();
                // `self` bits strictly above b within this word
                let higher = (sj >> b) >> 1;
                parity ^= above ^ (higher.count_ones() & 1);
                rem &= rem - 1;
            }
            above ^= sj.count_ones() & 1;
        }
        Ok(parity & 1 == 1)
    }
}

/// Count the set bits of a possibly absent vector.
///
/// Fails with [`OpError::MissingVector`] on `None`.
pub fn weight(v: Option<&BitVector>) -> OpResult<usize> {
    v.map(BitVector::weight).ok_or(OpError::MissingVector)
}

/// Count the set bits of `a & b`.
pub fn and_weight(a: &BitVector, b: &BitVector) -> OpResult<usize> {
    a.and_weight(b)
}

/// Count the set bits of `a | b`.
pub fn or_weight(a: &BitVector, b: &BitVector) -> OpResult<usize> {
    a.or_weight(b)
}

/// Compare two possibly absent vectors by value.
///
/// Two absent vectors are equal; an absent vector never equals a present one.
pub fn value_eq(a: Option<&BitVector>, b: Option<&BitVector>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.value_eq(b),
        _ => false,
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool { self.value_eq(other) }
}

impl Eq for BitVector { }

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.masked_words().for_each(|w| w.hash(state));
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = bool>
    {
        let mut len: usize = 0;
        let mut words: Vec<u32> = Vec::new();
        for b in iter {
            if len & 31 == 0 { words.push(0); }
            if b { words[len >> 5] |= PW[len & 31]; }
            len += 1;
        }
        Self { len, words }
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self { bits.iter().copied().collect() }
}

impl<const N: usize> From<[bool; N]> for BitVector {
    fn from(bits: [bool; N]) -> Self { bits.into_iter().collect() }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self { bits.into_iter().collect() }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter()
            .try_for_each(|b| write!(f, "{}", if b { '1' } else { '0' }))
    }
}
