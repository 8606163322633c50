//! Quadratic extension `GF(p^2) = GF(p)[i] / (i^2 + 1)` for `p ≡ 3 (mod 4)`.

use crate::{Error, Field, FpElt, PrimeField, Result, modulus::Modulus, parse_int};
use alloc::{string::String, sync::Arc, vec, vec::Vec};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand_core::RngCore;
use subtle::{Choice, CtOption};

/// Element `a + b*i` of a [`QuadraticExtension`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Fp2Elt {
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
}

impl Fp2Elt {
    /// Real part.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Imaginary part.
    pub fn b(&self) -> &BigUint {
        &self.b
    }
}

impl fmt::Display for Fp2Elt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x} + 0x{:x}*i", self.a, self.b)
    }
}

/// The field `GF(p^2)` built as `GF(p)[i] / (i^2 + 1)`.
#[derive(Clone)]
pub struct QuadraticExtension {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    base: PrimeField,
    /// `(p - 3) / 4`
    sqrt_exp: BigUint,
}

impl QuadraticExtension {
    /// Create `GF(p^2)`.
    ///
    /// `p` must be prime and congruent to 3 mod 4 so that `i^2 + 1` is
    /// irreducible; otherwise [`Error::ModulusNotPrime`] or
    /// [`Error::UnsupportedModulus`] is returned.
    pub fn new(name: impl Into<String>, p: impl Into<BigUint>) -> Result<Self> {
        let name = name.into();
        let base = PrimeField::new(name.clone(), p)?;
        let p = base.p();

        if p.mod_floor(&BigUint::from(4u32)).to_u32() != Some(3) {
            return Err(Error::UnsupportedModulus);
        }

        let sqrt_exp = (p - 3u32) >> 2;

        Ok(Self {
            inner: Arc::new(Inner {
                name,
                base,
                sqrt_exp,
            }),
        })
    }

    /// Create the field from a textual modulus (decimal or `0x`-prefixed).
    pub fn from_str_modulus(name: impl Into<String>, p: &str) -> Result<Self> {
        let p = parse_int(p)?.to_biguint().ok_or(Error::ModulusNotPrime)?;
        Self::new(name, p)
    }

    /// The prime subfield `GF(p)`.
    pub fn base_field(&self) -> &PrimeField {
        &self.inner.base
    }

    /// Embed `a + b*i`.
    pub fn elt2(&self, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Fp2Elt {
        let m = self.modulus();
        Fp2Elt {
            a: m.reduce(&a.into()),
            b: m.reduce(&b.into()),
        }
    }

    /// Parse `a + b*i` from the textual integers `a` and `b`.
    pub fn parse2(&self, a: &str, b: &str) -> Result<Fp2Elt> {
        Ok(self.elt2(parse_int(a)?, parse_int(b)?))
    }

    /// Build `a + b*i` from two base field elements.
    pub fn from_base(&self, a: &FpElt, b: &FpElt) -> Fp2Elt {
        Fp2Elt {
            a: a.as_biguint().clone(),
            b: b.as_biguint().clone(),
        }
    }

    /// Norm `a^2 + b^2` of `a + b*i`, an element of the base field.
    pub fn norm(&self, x: &Fp2Elt) -> FpElt {
        let m = self.modulus();
        FpElt(m.add(&m.mul(&x.a, &x.a), &m.mul(&x.b, &x.b)))
    }

    fn modulus(&self) -> &Modulus {
        self.inner.base.modulus()
    }
}

impl Field for QuadraticExtension {
    type Elt = Fp2Elt;

    fn name(&self) -> &str {
        &self.inner.name
    }

    fn p(&self) -> &BigUint {
        self.modulus().p()
    }

    fn order(&self) -> BigUint {
        self.p() * self.p()
    }

    fn ext(&self) -> u32 {
        2
    }

    fn zero(&self) -> Fp2Elt {
        Fp2Elt::default()
    }

    fn one(&self) -> Fp2Elt {
        Fp2Elt {
            a: BigUint::one(),
            b: BigUint::zero(),
        }
    }

    fn generator(&self) -> Fp2Elt {
        Fp2Elt {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }

    fn elt(&self, n: impl Into<BigInt>) -> Fp2Elt {
        self.elt2(n, 0)
    }

    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Fp2Elt {
        let m = self.modulus();
        let a = m.random(rng);
        let b = m.random(rng);
        Fp2Elt { a, b }
    }

    fn to_biguints(&self, x: &Fp2Elt) -> Vec<BigUint> {
        vec![x.a.clone(), x.b.clone()]
    }

    fn is_zero(&self, x: &Fp2Elt) -> bool {
        x.a.is_zero() && x.b.is_zero()
    }

    fn ct_eq(&self, x: &Fp2Elt, y: &Fp2Elt) -> Choice {
        let m = self.modulus();
        m.ct_eq(&x.a, &y.a) & m.ct_eq(&x.b, &y.b)
    }

    fn is_square(&self, x: &Fp2Elt) -> bool {
        self.inner.base.is_square(&self.norm(x))
    }

    fn neg(&self, x: &Fp2Elt) -> Fp2Elt {
        let m = self.modulus();
        Fp2Elt {
            a: m.neg(&x.a),
            b: m.neg(&x.b),
        }
    }

    fn add(&self, x: &Fp2Elt, y: &Fp2Elt) -> Fp2Elt {
        let m = self.modulus();
        Fp2Elt {
            a: m.add(&x.a, &y.a),
            b: m.add(&x.b, &y.b),
        }
    }

    fn sub(&self, x: &Fp2Elt, y: &Fp2Elt) -> Fp2Elt {
        let m = self.modulus();
        Fp2Elt {
            a: m.sub(&x.a, &y.a),
            b: m.sub(&x.b, &y.b),
        }
    }

    fn mul(&self, x: &Fp2Elt, y: &Fp2Elt) -> Fp2Elt {
        let m = self.modulus();
        let ac = m.mul(&x.a, &y.a);
        let bd = m.mul(&x.b, &y.b);
        let ad = m.mul(&x.a, &y.b);
        let bc = m.mul(&x.b, &y.a);
        Fp2Elt {
            a: m.sub(&ac, &bd),
            b: m.add(&ad, &bc),
        }
    }

    fn inv(&self, x: &Fp2Elt) -> Fp2Elt {
        debug_assert!(!self.is_zero(x), "inversion of zero");
        self.inv0(x)
    }

    /// `(a - b*i) / (a^2 + b^2)`
    fn inv0(&self, x: &Fp2Elt) -> Fp2Elt {
        let m = self.modulus();
        let n = m.inv0(&self.norm(x).0);
        Fp2Elt {
            a: m.mul(&x.a, &n),
            b: m.neg(&m.mul(&x.b, &n)),
        }
    }

    fn exp(&self, x: &Fp2Elt, e: &BigUint) -> Fp2Elt {
        let mut z = self.one();
        for i in (0..e.bits()).rev() {
            z = self.sqr(&z);
            if e.bit(i) {
                z = self.mul(&z, x);
            }
        }
        z
    }

    fn cmov(&self, x: &Fp2Elt, y: &Fp2Elt, choice: Choice) -> Fp2Elt {
        let m = self.modulus();
        Fp2Elt {
            a: m.cmov(&x.a, &y.a, choice),
            b: m.cmov(&x.b, &y.b, choice),
        }
    }

    /// `sgn0` for `m = 2` (RFC 9380 section 4.1).
    fn sgn0(&self, x: &Fp2Elt) -> Choice {
        let sign_0 = Choice::from(x.a.bit(0) as u8);
        let zero_0 = self.modulus().ct_is_zero(&x.a);
        let sign_1 = Choice::from(x.b.bit(0) as u8);
        sign_0 | (zero_0 & sign_1)
    }

    /// Algorithm 9 of Adj and Rodríguez-Henríquez, "Square root computation
    /// over even extension fields".
    fn sqrt(&self, x: &Fp2Elt) -> CtOption<Fp2Elt> {
        let a1 = self.exp(x, &self.inner.sqrt_exp);
        let x0 = self.mul(&a1, x);
        let alpha = self.mul(&a1, &x0);
        let minus_one = self.neg(&self.one());

        let root_i = self.mul(&self.generator(), &x0);
        let b = self.exp(
            &self.add(&self.one(), &alpha),
            self.modulus().p_minus_1_div_2(),
        );
        let root_b = self.mul(&b, &x0);

        let z = self.cmov(&root_b, &root_i, self.ct_eq(&alpha, &minus_one));
        let is_root = self.ct_eq(&self.sqr(&z), x);
        CtOption::new(z, is_root)
    }
}

impl PartialEq for QuadraticExtension {
    fn eq(&self, other: &Self) -> bool {
        self.inner.base == other.inner.base
    }
}

impl Eq for QuadraticExtension {}

impl fmt::Debug for QuadraticExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadraticExtension")
            .field("name", &self.inner.name)
            .field("p", self.p())
            .finish()
    }
}

impl fmt::Display for QuadraticExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: GF(0x{:x})[i]/(i^2+1)", self.inner.name, self.p())
    }
}

#[cfg(test)]
mod tests {
    use super::QuadraticExtension;
    use crate::{Error, Field};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    const P_BN254: &str =
        "21888242871839275222246405745257275088696311157297823662689037894645226208583";

    fn bn254() -> QuadraticExtension {
        QuadraticExtension::from_str_modulus("GF(p^2) BN254", P_BN254).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(
            QuadraticExtension::new("bad", 57u32).err(),
            Some(Error::ModulusNotPrime)
        );
        assert_eq!(
            QuadraticExtension::new("bad", 53u32).err(),
            Some(Error::UnsupportedModulus)
        );

        let f = QuadraticExtension::new("GF(19^2)", 19u32).unwrap();
        assert_eq!(f.ext(), 2);
        assert_eq!(f.order(), BigUint::from(361u32));
        assert_eq!(f.to_biguints(&f.elt2(3, -1)), [BigUint::from(3u32), BigUint::from(18u32)]);
        assert_eq!(f.parse2("0x3", "-1").unwrap(), f.elt2(3, 18));
        assert_eq!(f.elt(20), f.one());
        assert_eq!(alloc::format!("{}", f.elt2(1, 2)), "0x1 + 0x2*i");
        assert_eq!(bn254().bit_len(), 254);
    }

    #[test]
    fn i_squared_is_minus_one() {
        let f = bn254();
        let i = f.generator();
        assert_eq!(f.sqr(&i), f.neg(&f.one()));
        assert_eq!(f.inv(&i), f.neg(&i));
    }

    #[test]
    fn sgn0() {
        let f = QuadraticExtension::new("GF(19^2)", 19u32).unwrap();
        assert!(!bool::from(f.sgn0(&f.zero())));
        assert!(bool::from(f.sgn0(&f.elt2(1, 0))));
        assert!(bool::from(f.sgn0(&f.elt2(0, 1))));
        assert!(!bool::from(f.sgn0(&f.elt2(2, 1))));
        assert!(bool::from(f.sgn0(&f.elt2(3, 2))));
    }

    /// Every element of a small field: inverses, square roots and the
    /// norm-based residuosity test agree.
    fn exhaustive(p: u32) {
        let f = QuadraticExtension::new("small", p).unwrap();
        let mut squares = 0u32;

        for a in 0..p {
            for b in 0..p {
                let x = f.elt2(a, b);
                if !f.is_zero(&x) {
                    assert_eq!(f.mul(&x, &f.inv(&x)), f.one(), "p = {p}, x = {x}");
                }

                let root = f.sqrt(&x);
                let expect_root = f.is_zero(&x) || f.is_square(&x);
                assert_eq!(bool::from(root.is_some()), expect_root, "p = {p}, x = {x}");
                if expect_root {
                    assert_eq!(f.sqr(&root.unwrap()), x);
                }
                if f.is_square(&x) {
                    squares += 1;
                }
            }
        }

        assert_eq!(squares, (p * p - 1) / 2);
    }

    #[test]
    fn exhaustive_small_fields() {
        for p in [59, 67, 71, 79, 83] {
            exhaustive(p);
        }
    }

    proptest! {
        #[test]
        fn field_laws(a in any::<u64>(), b in any::<u64>(), c in any::<u64>(), d in any::<u64>()) {
            let f = bn254();
            let x = f.elt2(a, b);
            let y = f.elt2(c, d);

            prop_assert_eq!(f.mul(&x, &y), f.mul(&y, &x));
            prop_assert_eq!(f.sub(&f.add(&x, &y), &y), x.clone());
            prop_assert_eq!(f.exp(&x, &BigUint::from(3u32)), f.mul(&x, &f.sqr(&x)));
            prop_assert_eq!(f.norm(&f.mul(&x, &y)), f.base_field().mul(&f.norm(&x), &f.norm(&y)));

            let s = f.sqr(&x);
            let r = f.sqrt(&s).unwrap();
            prop_assert!(r == x || r == f.neg(&x));
        }
    }
}
