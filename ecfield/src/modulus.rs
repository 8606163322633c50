//! Residue arithmetic modulo a fixed prime, shared by the prime field and its
//! quadratic extension.

use crate::int::reduce;
use alloc::vec::Vec;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A prime modulus together with the exponents every field operation needs.
#[derive(Clone, Debug)]
pub(crate) struct Modulus {
    p: BigUint,
    /// `(p - 1) / 2`, the Euler criterion exponent.
    p_minus_1_div_2: BigUint,
    /// `p - 2`, the Fermat inversion exponent.
    p_minus_2: BigUint,
    /// Number of 32-bit limbs of `p`; every residue is padded to this width.
    limbs: usize,
}

impl Modulus {
    /// `p` must be an odd prime.
    pub(crate) fn new(p: BigUint) -> Self {
        let one = BigUint::one();
        let p_minus_1_div_2 = (&p - &one) >> 1u32;
        let p_minus_2 = &p - 2u32;
        let limbs = p.to_u32_digits().len();
        Self {
            p,
            p_minus_1_div_2,
            p_minus_2,
            limbs,
        }
    }

    pub(crate) fn p(&self) -> &BigUint {
        &self.p
    }

    pub(crate) fn p_minus_1_div_2(&self) -> &BigUint {
        &self.p_minus_1_div_2
    }

    pub(crate) fn reduce(&self, n: &BigInt) -> BigUint {
        reduce(n, &self.p)
    }

    pub(crate) fn neg(&self, x: &BigUint) -> BigUint {
        if x.is_zero() {
            BigUint::zero()
        } else {
            &self.p - x
        }
    }

    pub(crate) fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        let z = x + y;
        if z >= self.p { z - &self.p } else { z }
    }

    pub(crate) fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        if x >= y {
            x - y
        } else {
            &self.p - y + x
        }
    }

    pub(crate) fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.p
    }

    pub(crate) fn pow(&self, x: &BigUint, e: &BigUint) -> BigUint {
        x.modpow(e, &self.p)
    }

    /// Fermat inversion; maps zero to zero.
    pub(crate) fn inv0(&self, x: &BigUint) -> BigUint {
        self.pow(x, &self.p_minus_2)
    }

    /// Euler's criterion. Zero is not a square.
    pub(crate) fn is_square(&self, x: &BigUint) -> bool {
        self.pow(x, &self.p_minus_1_div_2).is_one()
    }

    /// Legendre symbol as a field residue: `1`, `p - 1` or `0`.
    pub(crate) fn legendre(&self, x: &BigUint) -> BigUint {
        self.pow(x, &self.p_minus_1_div_2)
    }

    fn limbs_of(&self, x: &BigUint) -> Vec<u32> {
        let mut digits = x.to_u32_digits();
        digits.resize(self.limbs, 0);
        digits
    }

    pub(crate) fn ct_eq(&self, x: &BigUint, y: &BigUint) -> Choice {
        let x = self.limbs_of(x);
        let y = self.limbs_of(y);
        x.iter()
            .zip(y.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }

    pub(crate) fn ct_is_zero(&self, x: &BigUint) -> Choice {
        self.limbs_of(x)
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.ct_eq(&0))
    }

    /// Returns `y` when `choice` is set, otherwise `x`.
    pub(crate) fn cmov(&self, x: &BigUint, y: &BigUint, choice: Choice) -> BigUint {
        let x = self.limbs_of(x);
        let y = self.limbs_of(y);
        let z = x
            .iter()
            .zip(y.iter())
            .map(|(a, b)| u32::conditional_select(a, b, choice))
            .collect();
        BigUint::new(z)
    }

    /// Uniform residue by rejection sampling over the byte length of `p`.
    pub(crate) fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> BigUint {
        let bits = self.p.bits();
        let len = bits.div_ceil(8) as usize;
        let excess = (len as u64 * 8 - bits) as u32;
        let mut bytes = alloc::vec![0u8; len];

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xff >> excess;
            let candidate = BigUint::from_bytes_be(&bytes);
            if candidate < self.p {
                return candidate;
            }
        }
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
    }
}

impl Eq for Modulus {}
