//! Birational maps between curve models.

use crate::{
    EllCurve, Error, Montgomery, Point, PointOf, Result, TwistedEdwards, Weierstrass,
    WeierstrassC, named, weierstrass_c::Shift,
};
use ecfield::{Field, FpElt, PrimeField};

/// A map of curves sending the neutral element to the neutral element.
///
/// [`Isogeny::push`] of the identity is always the codomain identity; the
/// rational functions are never evaluated at infinity.
pub trait Isogeny {
    /// Source curve.
    type Domain: EllCurve;

    /// Target curve, over the same field.
    type Codomain: EllCurve<Field = <Self::Domain as EllCurve>::Field>;

    /// Source curve.
    fn domain(&self) -> &Self::Domain;

    /// Target curve.
    fn codomain(&self) -> &Self::Codomain;

    /// Image of a domain point.
    fn push(&self, p: &PointOf<Self::Domain>) -> PointOf<Self::Codomain>;
}

/// An invertible [`Isogeny`]: `pull(push(p)) == p` on the domain and
/// `push(pull(q)) == q` on the codomain.
pub trait RationalMap: Isogeny {
    /// Preimage of a codomain point.
    fn pull(&self, q: &PointOf<Self::Codomain>) -> PointOf<Self::Domain>;
}

fn affine<C: EllCurve>(curve: &C, x: crate::Elt<C>, y: crate::Elt<C>) -> PointOf<C> {
    let p = Point::Affine { x, y };
    assert!(curve.is_on_curve(&p), "image {p} is not on {curve}");
    p
}

/// `(x, y) -> (x/B, y/B)` from `By^2 = x^3 + Ax^2 + x` to
/// `t^2 = s^3 + (A/B)s^2 + (1/B^2)s`.
#[derive(Clone, Debug)]
pub struct MontgomeryToWeierstrassC<F: Field> {
    domain: Montgomery<F>,
    codomain: WeierstrassC<F>,
    inv_b: F::Elt,
}

impl<F: Field> MontgomeryToWeierstrassC<F> {
    pub(crate) fn new(domain: Montgomery<F>) -> Result<Self> {
        let f = domain.field().clone();
        let inv_b = f.inv(domain.b());
        let a = f.mul(domain.a(), &inv_b);
        let b = f.sqr(&inv_b);
        let codomain = WeierstrassC::new(
            f,
            a,
            b,
            domain.order().clone(),
            domain.cofactor().clone(),
        )?;
        Ok(Self {
            domain,
            codomain,
            inv_b,
        })
    }
}

impl<F: Field> Isogeny for MontgomeryToWeierstrassC<F> {
    type Domain = Montgomery<F>;
    type Codomain = WeierstrassC<F>;

    fn domain(&self) -> &Montgomery<F> {
        &self.domain
    }

    fn codomain(&self) -> &WeierstrassC<F> {
        &self.codomain
    }

    fn push(&self, p: &Point<F>) -> Point<F> {
        let Some((x, y)) = p.coordinates() else {
            return self.codomain.identity();
        };
        let f = self.domain.field();
        let s = f.mul(x, &self.inv_b); // s = x/B
        let t = f.mul(y, &self.inv_b); // t = y/B
        affine(&self.codomain, s, t)
    }
}

impl<F: Field> RationalMap for MontgomeryToWeierstrassC<F> {
    fn pull(&self, q: &Point<F>) -> Point<F> {
        let Some((s, t)) = q.coordinates() else {
            return self.domain.identity();
        };
        let f = self.domain.field();
        let x = f.mul(s, self.domain.b()); // x = s*B
        let y = f.mul(t, self.domain.b()); // y = t*B
        affine(&self.domain, x, y)
    }
}

/// Birational map from `ax^2 + y^2 = 1 + dx^2y^2` to
/// `t^2 = s^3 + ((a+d)/2)s^2 + ((a-d)/4)^2 s`.
///
/// The neutral element `(0, 1)` maps to infinity and `(0, -1)` to `(0, 0)`.
#[derive(Clone, Debug)]
pub struct EdwardsToWeierstrassC<F: Field> {
    domain: TwistedEdwards<F>,
    codomain: WeierstrassC<F>,
    four_over_a_minus_d: F::Elt,
}

impl<F: Field> EdwardsToWeierstrassC<F> {
    pub(crate) fn new(domain: TwistedEdwards<F>) -> Result<Self> {
        let f = domain.field().clone();
        let two = f.elt(2);
        if f.is_zero(&two) {
            return Err(Error::UnsupportedCharacteristic);
        }

        let half = f.inv(&two);
        let a = f.mul(&f.add(domain.a(), domain.d()), &half); // (a+d)/2
        let t0 = f.mul(&f.mul(&f.sub(domain.a(), domain.d()), &half), &half); // (a-d)/4
        let four_over_a_minus_d = f.inv(&t0);
        let b = f.sqr(&t0); // (a-d)^2/16
        let codomain = WeierstrassC::new(
            f,
            a,
            b,
            domain.order().clone(),
            domain.cofactor().clone(),
        )?;

        Ok(Self {
            domain,
            codomain,
            four_over_a_minus_d,
        })
    }
}

impl<F: Field> Isogeny for EdwardsToWeierstrassC<F> {
    type Domain = TwistedEdwards<F>;
    type Codomain = WeierstrassC<F>;

    fn domain(&self) -> &TwistedEdwards<F> {
        &self.domain
    }

    fn codomain(&self) -> &WeierstrassC<F> {
        &self.codomain
    }

    fn push(&self, p: &Point<F>) -> Point<F> {
        if self.domain.is_identity(p) {
            return self.codomain.identity();
        }
        let Some((x, y)) = p.coordinates() else {
            return self.codomain.identity();
        };

        let f = self.domain.field();
        let one = f.one();
        let t0 = f.add(&one, y); // 1+y
        let t1 = f.mul(&f.sub(&one, y), &self.four_over_a_minus_d); // 4(1-y)/(a-d)
        let s = f.div(&t0, &t1); // s = (a-d)(1+y)/(4(1-y))
        let t = f.mul(&s, &f.inv0(x)); // t = s/x
        affine(&self.codomain, s, t)
    }
}

impl<F: Field> RationalMap for EdwardsToWeierstrassC<F> {
    /// # Panics
    ///
    /// On incomplete curves, codomain points with `4s/(a-d) = -1` have no
    /// affine preimage; pulling one panics.
    fn pull(&self, q: &Point<F>) -> Point<F> {
        let f = self.domain.field();
        let Some((s, t)) = q.coordinates() else {
            return self.domain.identity();
        };
        if f.is_zero(t) {
            return affine(&self.domain, f.zero(), f.neg(&f.one()));
        }

        let one = f.one();
        let x = f.div(s, t); // X = s/t
        let u = f.mul(&self.four_over_a_minus_d, s); // 4s/(a-d)
        let u_plus_one = f.add(&u, &one);
        assert!(!f.is_zero(&u_plus_one), "{q} has no affine preimage on {}", self.domain);
        let y = f.div(&f.sub(&u, &one), &u_plus_one); // Y = (u-1)/(u+1)
        affine(&self.domain, x, y)
    }
}

/// `(x, y) -> (x + A/3, y)` from a [`WeierstrassC`] curve onto its shifted
/// short Weierstrass curve.
#[derive(Clone, Debug)]
pub struct WeierstrassCToWeierstrass<F: Field> {
    domain: WeierstrassC<F>,
    shift: Shift<F>,
}

impl<F: Field> WeierstrassCToWeierstrass<F> {
    pub(crate) fn new(domain: WeierstrassC<F>) -> Self {
        let shift = domain.shift().clone();
        Self { domain, shift }
    }
}

impl<F: Field> Isogeny for WeierstrassCToWeierstrass<F> {
    type Domain = WeierstrassC<F>;
    type Codomain = Weierstrass<F>;

    fn domain(&self) -> &WeierstrassC<F> {
        &self.domain
    }

    fn codomain(&self) -> &Weierstrass<F> {
        self.domain.shifted()
    }

    fn push(&self, p: &Point<F>) -> Point<F> {
        let Point::Affine { x, y } = self.shift.push(p) else {
            return Point::Identity;
        };
        affine(self.codomain(), x, y)
    }
}

impl<F: Field> RationalMap for WeierstrassCToWeierstrass<F> {
    fn pull(&self, q: &Point<F>) -> Point<F> {
        let Point::Affine { x, y } = self.shift.pull(q) else {
            return Point::Identity;
        };
        affine(&self.domain, x, y)
    }
}

/// Birational equivalence between Edwards25519 and Curve25519 (RFC 7748):
///
/// ```text
/// (u, v) = ((1+y)/(1-y), c*u/x)
/// (x, y) = (c*u/v, (u-1)/(u+1))
/// ```
///
/// with `c = sqrt(-486664)` chosen with `sgn0(c) = 0`.
#[derive(Clone, Debug)]
pub struct Edwards25519ToCurve25519 {
    domain: TwistedEdwards<PrimeField>,
    codomain: Montgomery<PrimeField>,
    c: FpElt,
}

impl Edwards25519ToCurve25519 {
    /// Build the map between [`named::edwards25519`] and
    /// [`named::curve25519`].
    pub fn new() -> Result<Self> {
        let domain = named::edwards25519()?;
        let codomain = named::curve25519()?;

        let f = domain.field();
        let c = Option::<FpElt>::from(f.sqrt(&f.elt(-486664)))
            .ok_or(Error::Field(ecfield::Error::UnsupportedModulus))?;
        let c = f.cmov(&c, &f.neg(&c), f.sgn0(&c));

        Ok(Self {
            domain,
            codomain,
            c,
        })
    }

    /// The constant `sqrt(-486664)`.
    pub fn constant(&self) -> &FpElt {
        &self.c
    }
}

impl Isogeny for Edwards25519ToCurve25519 {
    type Domain = TwistedEdwards<PrimeField>;
    type Codomain = Montgomery<PrimeField>;

    fn domain(&self) -> &TwistedEdwards<PrimeField> {
        &self.domain
    }

    fn codomain(&self) -> &Montgomery<PrimeField> {
        &self.codomain
    }

    fn push(&self, p: &Point<PrimeField>) -> Point<PrimeField> {
        if self.domain.is_identity(p) {
            return self.codomain.identity();
        }
        let Some((x, y)) = p.coordinates() else {
            return self.codomain.identity();
        };

        let f = self.domain.field();
        let one = f.one();
        let u = f.div(&f.add(&one, y), &f.sub(&one, y)); // u = (1+y)/(1-y)
        let v = f.mul(&f.mul(&self.c, &u), &f.inv0(x)); // v = c*u/x
        affine(&self.codomain, u, v)
    }
}

impl RationalMap for Edwards25519ToCurve25519 {
    fn pull(&self, q: &Point<PrimeField>) -> Point<PrimeField> {
        let f = self.domain.field();
        let Some((u, v)) = q.coordinates() else {
            return self.domain.identity();
        };
        if f.is_zero(v) {
            return affine(&self.domain, f.zero(), f.neg(&f.one()));
        }

        let one = f.one();
        let x = f.div(&f.mul(&self.c, u), v); // x = c*u/v
        let y = f.div(&f.sub(u, &one), &f.add(u, &one)); // y = (u-1)/(u+1)
        affine(&self.domain, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Edwards25519ToCurve25519, Isogeny, RationalMap};
    use crate::{Curve, EllCurve, Point, dev, named};
    use ecfield::Field;

    fn round_trip<M: RationalMap>(map: &M, points: &[Point<<M::Domain as EllCurve>::Field>]) {
        for p in points {
            let q = map.push(p);
            assert!(map.codomain().is_on_curve(&q), "push({p}) = {q}");
            assert_eq!(&map.pull(&q), p, "pull(push({p}))");
        }
    }

    #[test]
    fn montgomery_round_trip() {
        for id in ["M0", "M1"] {
            let (e, _) = dev::toy_fp(id);
            let Curve::Montgomery(m) = &e else {
                panic!("{id} is not a Montgomery curve")
            };
            let map = m.to_weierstrass_c().unwrap();
            let points = dev::all_points(&e);
            round_trip(&map, &points);

            let codomain_points = dev::all_points(&Curve::from(map.codomain().clone()));
            assert_eq!(codomain_points.len(), points.len());
            for q in &codomain_points {
                assert_eq!(&map.push(&map.pull(q)), q);
            }
        }
    }

    #[test]
    fn edwards_round_trip() {
        for id in ["E0", "E1"] {
            let (e, _) = dev::toy_fp(id);
            let Curve::TwistedEdwards(te) = &e else {
                panic!("{id} is not a twisted Edwards curve")
            };
            let map = te.to_weierstrass_c().unwrap();
            round_trip(&map, &dev::all_points(&e));

            for q in dev::all_points(&Curve::from(map.codomain().clone())) {
                assert_eq!(map.push(&map.pull(&q)), q);
            }

            assert_eq!(map.push(&Point::Identity), Point::Identity);
        }
    }

    #[test]
    fn edwards_map_is_homomorphism() {
        let (e, g) = dev::toy_fp("E1");
        let Curve::TwistedEdwards(te) = &e else {
            panic!("E1 is not a twisted Edwards curve")
        };
        let map = te.to_weierstrass_c().unwrap();
        let wc = map.codomain();
        let g2 = e.double(&g);
        assert_eq!(map.push(&e.add(&g, &g2)), wc.add(&map.push(&g), &map.push(&g2)));
    }

    #[test]
    fn weierstrass_c_round_trip() {
        let (e, _) = dev::toy_fp("WC0");
        let Curve::WeierstrassC(wc) = &e else {
            panic!("WC0 is not a WeierstrassC curve")
        };
        let map = wc.to_weierstrass();
        round_trip(&map, &dev::all_points(&e));
        for q in dev::all_points(&Curve::from(map.codomain().clone())) {
            assert_eq!(map.push(&map.pull(&q)), q);
        }
    }

    #[test]
    #[should_panic(expected = "is not on")]
    fn push_rejects_foreign_point() {
        let (e, _) = dev::toy_fp("WC0");
        let Curve::WeierstrassC(wc) = &e else {
            panic!("WC0 is not a WeierstrassC curve")
        };
        let f = e.field().clone();
        wc.to_weierstrass().push(&Point::Affine {
            x: f.zero(),
            y: f.one(),
        });
    }

    #[test]
    fn curve25519_constant() {
        let map = Edwards25519ToCurve25519::new().unwrap();
        let expected = map.domain().field().parse(
            "6853475219497561581579357271197624642482790079785650197046958215289687604742",
        );
        assert_eq!(map.constant(), &expected.unwrap());
    }

    #[test]
    fn curve25519_base_point() {
        let map = Edwards25519ToCurve25519::new().unwrap();
        let ed = map.domain();
        let f = ed.field();
        let g = named::edwards25519_generator().unwrap();

        let u = map.push(&g);
        assert_eq!(u.x(), Some(&f.elt(9)));

        let mut p = g.clone();
        for _ in 0..8 {
            let q = map.push(&p);
            assert_eq!(map.pull(&q), p);
            p = ed.add(&p, &g);
        }

        let two_torsion = ed.new_point(f.zero(), f.neg(&f.one())).unwrap();
        let q = map.push(&two_torsion);
        assert_eq!(q, Point::Affine { x: f.zero(), y: f.zero() });
        assert_eq!(map.pull(&q), two_torsion);
        assert_eq!(map.push(&ed.identity()), Point::Identity);
        assert!(ed.is_identity(&map.pull(&Point::Identity)));
    }
}
