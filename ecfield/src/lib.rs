#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod fp;
mod fp2;
mod int;
mod modulus;

pub use crate::{
    error::{Error, Result},
    fp::{FpElt, PrimeField, SqrtAlgorithm},
    fp2::{Fp2Elt, QuadraticExtension},
    int::{is_probable_prime, parse_int},
};
pub use num_bigint::{self, BigInt, BigUint};
pub use rand_core;
pub use subtle;

use alloc::vec::Vec;
use core::{fmt, hash::Hash};
use rand_core::RngCore;
use subtle::{Choice, CtOption};

/// Operations of a finite field of large prime characteristic.
///
/// Elements are plain values: every operation takes its operands by reference
/// and returns a fresh, fully reduced element.
pub trait Field: Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Send + Sync {
    /// Field element type.
    type Elt: Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync;

    /// Human readable name given at construction.
    fn name(&self) -> &str;

    /// Characteristic of the field.
    fn p(&self) -> &BigUint;

    /// Number of elements of the field, `p^ext`.
    fn order(&self) -> BigUint;

    /// Extension degree over the prime field.
    fn ext(&self) -> u32;

    /// Bit length of the characteristic.
    fn bit_len(&self) -> u64 {
        self.p().bits()
    }

    /// Additive identity.
    fn zero(&self) -> Self::Elt;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elt;

    /// Fixed generator of the field as a vector space over the prime field
    /// (`1` for a prime field, `i` for the quadratic extension).
    fn generator(&self) -> Self::Elt;

    /// Embed an integer, reducing it modulo `p`.
    fn elt(&self, n: impl Into<BigInt>) -> Self::Elt;

    /// Parse a decimal or `0x`/`0o`/`0b` prefixed integer and reduce it.
    fn parse(&self, s: &str) -> Result<Self::Elt> {
        Ok(self.elt(parse_int(s)?))
    }

    /// Sample a uniformly random element.
    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Elt;

    /// Coefficients of the element as a polynomial over the prime field,
    /// lowest degree first.
    fn to_biguints(&self, x: &Self::Elt) -> Vec<BigUint>;

    /// Is `x` the zero element?
    fn is_zero(&self, x: &Self::Elt) -> bool;

    /// Are `x` and `y` the same element?
    fn are_equal(&self, x: &Self::Elt, y: &Self::Elt) -> bool {
        self.is_zero(&self.sub(x, y))
    }

    /// Constant-time equality.
    fn ct_eq(&self, x: &Self::Elt, y: &Self::Elt) -> Choice;

    /// Is `x` a non-zero quadratic residue? (Euler's criterion)
    fn is_square(&self, x: &Self::Elt) -> bool;

    /// Returns `-x`.
    fn neg(&self, x: &Self::Elt) -> Self::Elt;

    /// Returns `x + y`.
    fn add(&self, x: &Self::Elt, y: &Self::Elt) -> Self::Elt;

    /// Returns `x - y`.
    fn sub(&self, x: &Self::Elt, y: &Self::Elt) -> Self::Elt;

    /// Returns `x * y`.
    fn mul(&self, x: &Self::Elt, y: &Self::Elt) -> Self::Elt;

    /// Returns `x^2`.
    fn sqr(&self, x: &Self::Elt) -> Self::Elt {
        self.mul(x, x)
    }

    /// Returns `2x`.
    fn double(&self, x: &Self::Elt) -> Self::Elt {
        self.add(x, x)
    }

    /// Returns `1/x`.
    ///
    /// `x` must be non-zero; callers guarantee this.
    fn inv(&self, x: &Self::Elt) -> Self::Elt;

    /// Returns `1/x`, or zero when `x` is zero.
    fn inv0(&self, x: &Self::Elt) -> Self::Elt;

    /// Returns `x / y` for non-zero `y`.
    fn div(&self, x: &Self::Elt, y: &Self::Elt) -> Self::Elt {
        self.mul(x, &self.inv(y))
    }

    /// Returns `x^e`.
    fn exp(&self, x: &Self::Elt, e: &BigUint) -> Self::Elt;

    /// Returns `y` when `choice` is set, otherwise `x`, without branching on
    /// `choice`.
    fn cmov(&self, x: &Self::Elt, y: &Self::Elt, choice: Choice) -> Self::Elt;

    /// Sign of `x` as defined by RFC 9380 section 4.1.
    fn sgn0(&self, x: &Self::Elt) -> Choice;

    /// Returns a square root of `x`, or `None` if `x` is not a square.
    ///
    /// The root is not normalised; use [`Field::sgn0`] and [`Field::cmov`] to
    /// pick a canonical one.
    fn sqrt(&self, x: &Self::Elt) -> CtOption<Self::Elt>;
}
