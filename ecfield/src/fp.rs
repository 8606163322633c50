//! Prime fields `GF(p)` with a modulus chosen at runtime.

mod sqrt;

pub use self::sqrt::SqrtAlgorithm;

use self::sqrt::SqrtEngine;
use crate::{Error, Field, Result, int::is_probable_prime, modulus::Modulus};
use alloc::{string::String, sync::Arc, vec, vec::Vec};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::RngCore;
use subtle::{Choice, CtOption};

/// Element of a [`PrimeField`]: a residue in `[0, p)`.
///
/// Elements carry no reference to their field; mixing elements of different
/// fields is a logic error.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct FpElt(pub(crate) BigUint);

impl FpElt {
    /// Canonical integer representative.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Display for FpElt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for FpElt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// The prime field `GF(p)`.
///
/// Cloning is cheap: the modulus and its precomputed constants are shared.
#[derive(Clone)]
pub struct PrimeField {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    modulus: Modulus,
    sqrt: SqrtEngine,
}

impl PrimeField {
    /// Create the field of integers modulo `p`.
    ///
    /// Returns [`Error::ModulusNotPrime`] if `p` fails the primality test and
    /// [`Error::UnsupportedModulus`] for `p = 2`.
    pub fn new(name: impl Into<String>, p: impl Into<BigUint>) -> Result<Self> {
        let p = p.into();

        if !is_probable_prime(&p) {
            return Err(Error::ModulusNotPrime);
        }

        if p == BigUint::from(2u32) {
            return Err(Error::UnsupportedModulus);
        }

        let modulus = Modulus::new(p);
        let sqrt = SqrtEngine::new(&modulus);

        Ok(Self {
            inner: Arc::new(Inner {
                name: name.into(),
                modulus,
                sqrt,
            }),
        })
    }

    /// Create the field from a textual modulus (decimal or `0x`-prefixed).
    pub fn from_str_modulus(name: impl Into<String>, p: &str) -> Result<Self> {
        let p = crate::parse_int(p)?;
        let p = p.to_biguint().ok_or(Error::ModulusNotPrime)?;
        Self::new(name, p)
    }

    /// Square-root algorithm selected for this modulus.
    pub fn sqrt_algorithm(&self) -> SqrtAlgorithm {
        self.inner.sqrt.algorithm()
    }

    /// Embed an unsigned integer.
    pub fn elt_uint(&self, n: &BigUint) -> FpElt {
        FpElt(n % self.modulus().p())
    }

    pub(crate) fn modulus(&self) -> &Modulus {
        &self.inner.modulus
    }

    /// Legendre symbol of `x` as an element: `1`, `-1` or `0`.
    pub fn legendre(&self, x: &FpElt) -> FpElt {
        FpElt(self.modulus().legendre(&x.0))
    }
}

impl Field for PrimeField {
    type Elt = FpElt;

    fn name(&self) -> &str {
        &self.inner.name
    }

    fn p(&self) -> &BigUint {
        self.modulus().p()
    }

    fn order(&self) -> BigUint {
        self.p().clone()
    }

    fn ext(&self) -> u32 {
        1
    }

    fn zero(&self) -> FpElt {
        FpElt(BigUint::zero())
    }

    fn one(&self) -> FpElt {
        FpElt(BigUint::one())
    }

    fn generator(&self) -> FpElt {
        self.one()
    }

    fn elt(&self, n: impl Into<BigInt>) -> FpElt {
        FpElt(self.modulus().reduce(&n.into()))
    }

    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> FpElt {
        FpElt(self.modulus().random(rng))
    }

    fn to_biguints(&self, x: &FpElt) -> Vec<BigUint> {
        vec![x.0.clone()]
    }

    fn is_zero(&self, x: &FpElt) -> bool {
        x.0.is_zero()
    }

    fn ct_eq(&self, x: &FpElt, y: &FpElt) -> Choice {
        self.modulus().ct_eq(&x.0, &y.0)
    }

    fn is_square(&self, x: &FpElt) -> bool {
        self.modulus().is_square(&x.0)
    }

    fn neg(&self, x: &FpElt) -> FpElt {
        FpElt(self.modulus().neg(&x.0))
    }

    fn add(&self, x: &FpElt, y: &FpElt) -> FpElt {
        FpElt(self.modulus().add(&x.0, &y.0))
    }

    fn sub(&self, x: &FpElt, y: &FpElt) -> FpElt {
        FpElt(self.modulus().sub(&x.0, &y.0))
    }

    fn mul(&self, x: &FpElt, y: &FpElt) -> FpElt {
        FpElt(self.modulus().mul(&x.0, &y.0))
    }

    fn inv(&self, x: &FpElt) -> FpElt {
        debug_assert!(!self.is_zero(x), "inversion of zero");
        self.inv0(x)
    }

    fn inv0(&self, x: &FpElt) -> FpElt {
        FpElt(self.modulus().inv0(&x.0))
    }

    fn exp(&self, x: &FpElt, e: &BigUint) -> FpElt {
        FpElt(self.modulus().pow(&x.0, e))
    }

    fn cmov(&self, x: &FpElt, y: &FpElt, choice: Choice) -> FpElt {
        FpElt(self.modulus().cmov(&x.0, &y.0, choice))
    }

    fn sgn0(&self, x: &FpElt) -> Choice {
        Choice::from(x.0.bit(0) as u8)
    }

    fn sqrt(&self, x: &FpElt) -> CtOption<FpElt> {
        let (root, is_root) = self.inner.sqrt.sqrt(self.modulus(), &x.0);
        CtOption::new(FpElt(root), is_root)
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.modulus == other.inner.modulus
    }
}

impl Eq for PrimeField {}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeField")
            .field("name", &self.inner.name)
            .field("p", self.p())
            .field("sqrt", &self.sqrt_algorithm())
            .finish()
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: GF(0x{:x})", self.inner.name, self.p())
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimeField, SqrtAlgorithm};
    use crate::{Error, Field};
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    const P25519: &str = "0x7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";

    fn f53() -> PrimeField {
        PrimeField::new("GF(53)", 53u32).unwrap()
    }

    fn f25519() -> PrimeField {
        PrimeField::from_str_modulus("GF(2^255-19)", P25519).unwrap()
    }

    #[test]
    fn rejects_composite() {
        assert_eq!(PrimeField::new("bad", 51u32).err(), Some(Error::ModulusNotPrime));
        assert_eq!(PrimeField::new("bad", 1u32).err(), Some(Error::ModulusNotPrime));
        assert_eq!(PrimeField::new("two", 2u32).err(), Some(Error::UnsupportedModulus));
        assert_eq!(
            PrimeField::from_str_modulus("bad", "0xzz").err(),
            Some(Error::MalformedInteger)
        );
    }

    #[test]
    fn constants() {
        let f = f53();
        assert_eq!(f.ext(), 1);
        assert_eq!(f.order(), BigUint::from(53u32));
        assert_eq!(f.bit_len(), 6);
        assert_eq!(f.generator(), f.one());
        assert_eq!(f.to_biguints(&f.elt(7)), [BigUint::from(7u32)]);
        assert_eq!(f.sqrt_algorithm(), SqrtAlgorithm::FiveMod8);
        assert_eq!(f25519().bit_len(), 255);
    }

    #[test]
    fn elt_reduces() {
        let f = f53();
        assert_eq!(f.elt(-1), f.elt(52));
        assert_eq!(f.elt(106), f.zero());
        assert_eq!(f.parse("0x35").unwrap(), f.zero());
        assert_eq!(f.parse("-2").unwrap(), f.elt(51));
        assert_eq!(f.elt_uint(&BigUint::from(54u32)), f.one());
        assert!(f.parse("five").is_err());
    }

    #[test]
    fn inverse() {
        let f = f53();
        for x in 1..53 {
            let x = f.elt(x);
            assert_eq!(f.mul(&x, &f.inv(&x)), f.one());
        }
        assert_eq!(f.inv0(&f.zero()), f.zero());
        assert_eq!(f.div(&f.elt(6), &f.elt(3)), f.elt(2));
    }

    #[test]
    fn sgn0_and_cmov() {
        let f = f53();
        assert!(!bool::from(f.sgn0(&f.zero())));
        assert!(bool::from(f.sgn0(&f.one())));
        assert!(!bool::from(f.sgn0(&f.neg(&f.one()))));
        let (x, y) = (f.elt(3), f.elt(9));
        assert_eq!(f.cmov(&x, &y, 0.into()), x);
        assert_eq!(f.cmov(&x, &y, 1.into()), y);
    }

    #[test]
    fn squares() {
        let f = f53();
        assert!(!f.is_square(&f.zero()));
        assert!(bool::from(f.sqrt(&f.zero()).is_some()));
        assert!(f.is_square(&f.elt(4)));
        assert_eq!(f.legendre(&f.elt(4)), f.one());
        assert_eq!(f.legendre(&f.zero()), f.zero());
        assert_eq!(f.legendre(&f.elt(2)), f.elt(-1));
    }

    #[test]
    fn sqrt_25519() {
        let f = f25519();
        assert_eq!(f.sqrt_algorithm(), SqrtAlgorithm::FiveMod8);

        // -1 is a square since p ≡ 1 (mod 4)
        let minus_one = f.neg(&f.one());
        let i = f.sqrt(&minus_one).unwrap();
        assert_eq!(f.sqr(&i), minus_one);

        // 2 is not a square since p ≡ 5 (mod 8)
        assert!(bool::from(f.sqrt(&f.elt(2)).is_none()));
    }

    #[test]
    fn display() {
        let f = f53();
        assert_eq!(alloc::format!("{}", f.elt(255)), "0x2b");
        assert_eq!(alloc::format!("{f}"), "GF(53): GF(0x35)");
        assert_eq!(f, PrimeField::new("other name", 53u32).unwrap());
        assert_ne!(f, f25519());
    }

    #[test]
    fn random_elements() {
        let f = f25519();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let x = f.random(&mut rng);
        let y = f.random(&mut rng);
        assert_ne!(x, y);
        assert!(x.as_biguint() < f.p());
    }

    proptest! {
        #[test]
        fn field_laws(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let f = f25519();
            let (a, b, c) = (f.elt(a), f.elt(b), f.elt(c));

            prop_assert_eq!(f.add(&a, &b), f.add(&b, &a));
            prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
            prop_assert_eq!(
                f.mul(&a, &f.add(&b, &c)),
                f.add(&f.mul(&a, &b), &f.mul(&a, &c))
            );
            prop_assert_eq!(f.sub(&f.add(&a, &b), &b), a.clone());
            prop_assert_eq!(f.add(&a, &f.neg(&a)), f.zero());
            prop_assert!(f.are_equal(&f.double(&a), &f.add(&a, &a)));
            prop_assert_eq!(f.exp(&a, &BigUint::from(2u32)), f.sqr(&a));
        }

        #[test]
        fn sqrt_of_square(a in any::<u64>()) {
            let f = f25519();
            let a = f.elt(a);
            let s = f.sqr(&a);
            let r = f.sqrt(&s).unwrap();
            prop_assert!(r == a || r == f.neg(&a));
        }
    }
}
