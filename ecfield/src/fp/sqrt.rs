//! Modular square roots, following RFC 9380 Appendix I.

use crate::modulus::Modulus;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use subtle::Choice;

/// Square root algorithms, selected by the residue of the modulus mod 16.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SqrtAlgorithm {
    /// Single exponentiation for `p ≡ 3 (mod 4)`.
    ThreeMod4,

    /// Atkin's variant for `p ≡ 5 (mod 8)`.
    FiveMod8,

    /// Constant-time variant for `p ≡ 9 (mod 16)`.
    NineMod16,

    /// Constant-time Tonelli-Shanks for `p ≡ 1 (mod 16)`.
    TonelliShanks,
}

/// Precomputed constants of the square-root algorithm for one modulus.
#[derive(Clone, Debug)]
pub(crate) enum SqrtEngine {
    ThreeMod4 {
        /// `(p + 1) / 4`
        e: BigUint,
    },
    FiveMod8 {
        /// `(p + 3) / 8`
        e: BigUint,
        sqrt_minus_one: BigUint,
    },
    NineMod16 {
        /// `sqrt(-1)`
        c1: BigUint,
        /// `sqrt(c1)`
        c2: BigUint,
        /// `sqrt(-c1)`
        c3: BigUint,
        /// `(p + 7) / 16`
        c4: BigUint,
    },
    TonelliShanks {
        /// 2-adic valuation of `p - 1`.
        c1: u64,
        /// `(c2 - 1) / 2` where `p - 1 = c2 * 2^c1`.
        c3: BigUint,
        /// A non-square raised to `c2`.
        c5: BigUint,
    },
}

impl SqrtEngine {
    /// Precompute the constants for `m`, which must be an odd prime.
    pub(crate) fn new(m: &Modulus) -> Self {
        let p = m.p();
        let one = BigUint::one();

        match mod_residue(p, 16) {
            3 | 7 | 11 | 15 => Self::ThreeMod4 { e: (p + 1u32) >> 2 },
            5 | 13 => {
                // 2 is a non-square when p ≡ 5 (mod 8)
                let sqrt_minus_one = m.pow(&BigUint::from(2u32), &((p - &one) >> 2));
                Self::FiveMod8 {
                    e: (p + 3u32) >> 3,
                    sqrt_minus_one,
                }
            }
            9 => {
                let z = non_square(m);
                let c2 = m.pow(&z, &((p - &one) >> 3));
                let c1 = m.mul(&c2, &c2);
                let c3 = m.mul(&c1, &c2);
                Self::NineMod16 {
                    c1,
                    c2,
                    c3,
                    c4: (p + 7u32) >> 4,
                }
            }
            _ => {
                let p_minus_1 = p - &one;
                let c1 = p_minus_1.trailing_zeros().unwrap_or(0);
                let c2 = &p_minus_1 >> c1;
                let c3 = (&c2 - &one) >> 1u32;
                let c5 = m.pow(&non_square(m), &c2);
                Self::TonelliShanks { c1, c3, c5 }
            }
        }
    }

    pub(crate) fn algorithm(&self) -> SqrtAlgorithm {
        match self {
            Self::ThreeMod4 { .. } => SqrtAlgorithm::ThreeMod4,
            Self::FiveMod8 { .. } => SqrtAlgorithm::FiveMod8,
            Self::NineMod16 { .. } => SqrtAlgorithm::NineMod16,
            Self::TonelliShanks { .. } => SqrtAlgorithm::TonelliShanks,
        }
    }

    /// Returns a candidate root of `x` mod `p` and whether it squares to `x`.
    pub(crate) fn sqrt(&self, m: &Modulus, x: &BigUint) -> (BigUint, Choice) {
        let z = match self {
            Self::ThreeMod4 { e } => m.pow(x, e),
            Self::FiveMod8 { e, sqrt_minus_one } => {
                let tv1 = m.pow(x, e);
                let tv2 = m.mul(&tv1, sqrt_minus_one);
                let e = m.ct_eq(&m.mul(&tv1, &tv1), x);
                m.cmov(&tv2, &tv1, e)
            }
            Self::NineMod16 { c1, c2, c3, c4 } => {
                let tv1 = m.pow(x, c4);
                let tv2 = m.mul(c1, &tv1);
                let tv3 = m.mul(c2, &tv1);
                let tv4 = m.mul(c3, &tv1);
                let e1 = m.ct_eq(&m.mul(&tv2, &tv2), x);
                let e2 = m.ct_eq(&m.mul(&tv3, &tv3), x);
                let tv1 = m.cmov(&tv1, &tv2, e1);
                let tv2 = m.cmov(&tv4, &tv3, e2);
                let e3 = m.ct_eq(&m.mul(&tv2, &tv2), x);
                m.cmov(&tv1, &tv2, e3)
            }
            Self::TonelliShanks { c1, c3, c5 } => tonelli_shanks(m, x, *c1, c3, c5),
        };

        let is_root = m.ct_eq(&m.mul(&z, &z), x);
        (z, is_root)
    }
}

/// Constant-time Tonelli-Shanks (RFC 9380 Appendix I.4).
fn tonelli_shanks(m: &Modulus, x: &BigUint, c1: u64, c3: &BigUint, c5: &BigUint) -> BigUint {
    let one = BigUint::one();

    let mut z = m.pow(x, c3);
    let mut t = m.mul(&m.mul(&z, &z), x);
    z = m.mul(&z, x);
    let mut b = t.clone();
    let mut c = c5.clone();

    for i in (2..=c1).rev() {
        for _ in 0..i - 2 {
            b = m.mul(&b, &b);
        }
        let e: Choice = m.ct_eq(&b, &one);
        z = m.cmov(&m.mul(&z, &c), &z, e);
        c = m.mul(&c, &c);
        t = m.cmov(&m.mul(&t, &c), &t, e);
        b = t.clone();
    }

    z
}

/// First non-square found by scanning upwards from 2.
fn non_square(m: &Modulus) -> BigUint {
    let mut z = BigUint::from(2u32);
    while m.is_square(&z) {
        z += 1u32;
    }
    z
}

fn mod_residue(p: &BigUint, n: u32) -> u32 {
    p.mod_floor(&BigUint::from(n)).to_u32().unwrap_or(0)
}
