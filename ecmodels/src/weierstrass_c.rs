//! Curves `y^2 = x^3 + Ax^2 + Bx`, computed through a short Weierstrass model.

use crate::{
    EllCurve, Error, Model, Result, map::WeierstrassCToWeierstrass, params::CurveParams,
    point::Point, weierstrass::Weierstrass,
};
use alloc::sync::Arc;
use core::fmt;
use ecfield::{BigUint, Field};

/// Curve `y^2 = x^3 + Ax^2 + Bx`.
///
/// There is no group law of its own: points are moved to the short
/// Weierstrass curve `y^2 = x^3 + (B - A^2/3)x + A(2A^2 - 9B)/27` by
/// `x -> x + A/3`, operated on there and moved back.
#[derive(Clone, Debug)]
pub struct WeierstrassC<F: Field> {
    inner: Arc<Inner<F>>,
}

#[derive(Debug)]
struct Inner<F: Field> {
    params: CurveParams<F>,
    shift: Shift<F>,
    shifted: Weierstrass<F>,
}

/// `(x, y) -> (x + A/3, y)`, the identity fixed.
#[derive(Clone, Debug)]
pub(crate) struct Shift<F: Field> {
    field: F,
    a_div_3: F::Elt,
}

impl<F: Field> Shift<F> {
    pub(crate) fn push(&self, p: &Point<F>) -> Point<F> {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: self.field.add(x, &self.a_div_3),
                y: y.clone(),
            },
        }
    }

    pub(crate) fn pull(&self, p: &Point<F>) -> Point<F> {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: self.field.sub(x, &self.a_div_3),
                y: y.clone(),
            },
        }
    }
}

impl<F: Field> WeierstrassC<F> {
    /// Create a curve with `order` points and the given cofactor.
    ///
    /// Returns [`Error::SingularCurve`] unless `B(A^2 - 4B) != 0`, and
    /// [`Error::UnsupportedCharacteristic`] in characteristic 3.
    pub fn new(field: F, a: F::Elt, b: F::Elt, order: BigUint, cofactor: BigUint) -> Result<Self> {
        let t = field.sub(&field.sqr(&a), &field.mul(&field.elt(4), &b));
        if field.is_zero(&field.mul(&b, &t)) {
            return Err(Error::SingularCurve(Model::WeierstrassC));
        }

        let three = field.elt(3);
        if field.is_zero(&three) {
            return Err(Error::UnsupportedCharacteristic);
        }

        let a_div_3 = field.div(&a, &three);
        let shifted_a = field.sub(&b, &field.mul(&a_div_3, &a));
        let t = field.sub(
            &field.double(&field.sqr(&a)),
            &field.mul(&field.elt(9), &b),
        );
        let shifted_b = field.div(&field.mul(&a, &t), &field.elt(27));
        let shifted = Weierstrass::new(
            field.clone(),
            shifted_a,
            shifted_b,
            order.clone(),
            cofactor.clone(),
        )?;
        let shift = Shift {
            field: field.clone(),
            a_div_3,
        };

        Ok(Self {
            inner: Arc::new(Inner {
                params: CurveParams {
                    field,
                    a,
                    b,
                    order,
                    cofactor,
                },
                shift,
                shifted,
            }),
        })
    }

    /// Coefficient `A`.
    pub fn a(&self) -> &F::Elt {
        &self.inner.params.a
    }

    /// Coefficient `B`.
    pub fn b(&self) -> &F::Elt {
        &self.inner.params.b
    }

    /// The short Weierstrass curve every operation is carried out on.
    pub fn shifted(&self) -> &Weierstrass<F> {
        &self.inner.shifted
    }

    /// Birational map `(x, y) -> (x + A/3, y)` onto [`WeierstrassC::shifted`].
    pub fn to_weierstrass(&self) -> WeierstrassCToWeierstrass<F> {
        WeierstrassCToWeierstrass::new(self.clone())
    }

    pub(crate) fn shift(&self) -> &Shift<F> {
        &self.inner.shift
    }
}

impl<F: Field> EllCurve for WeierstrassC<F> {
    type Field = F;

    fn field(&self) -> &F {
        &self.inner.params.field
    }

    fn model(&self) -> Model {
        Model::WeierstrassC
    }

    fn order(&self) -> &BigUint {
        &self.inner.params.order
    }

    fn cofactor(&self) -> &BigUint {
        &self.inner.params.cofactor
    }

    fn is_on_curve(&self, p: &Point<F>) -> bool {
        self.inner.shifted.is_on_curve(&self.shift().push(p))
    }

    fn identity(&self) -> Point<F> {
        Point::Identity
    }

    fn neg(&self, p: &Point<F>) -> Point<F> {
        let shift = self.shift();
        shift.pull(&self.inner.shifted.neg(&shift.push(p)))
    }

    fn add(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        let shift = self.shift();
        shift.pull(&self.inner.shifted.add(&shift.push(p), &shift.push(q)))
    }

    fn double(&self, p: &Point<F>) -> Point<F> {
        let shift = self.shift();
        shift.pull(&self.inner.shifted.double(&shift.push(p)))
    }

    fn scalar_mult(&self, p: &Point<F>, k: &BigUint) -> Point<F> {
        let shift = self.shift();
        shift.pull(&self.inner.shifted.scalar_mult(&shift.push(p), k))
    }

    fn is_equal_curve(&self, other: &Self) -> bool {
        self.inner.params.same_equation(&other.inner.params)
    }
}

impl<F: Field> fmt::Display for WeierstrassC<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner
            .params
            .fmt_with(f, "WeierstrassC y^2 = x^3 + Ax^2 + Bx", ["A", "B"])
    }
}

#[cfg(test)]
mod tests {
    use super::WeierstrassC;
    use crate::{EllCurve, Error, Model, Point, Weierstrass};
    use ecfield::{Field, PrimeField};

    fn f53() -> PrimeField {
        PrimeField::new("GF(53)", 53u32).unwrap()
    }

    fn wc0() -> WeierstrassC<PrimeField> {
        let f = f53();
        WeierstrassC::new(f.clone(), f.elt(2), f.elt(3), 66u32.into(), 6u32.into()).unwrap()
    }

    fn pt(f: &PrimeField, x: i32, y: i32) -> Point<PrimeField> {
        Point::Affine {
            x: f.elt(x),
            y: f.elt(y),
        }
    }

    #[test]
    fn rejects_singular() {
        let f = f53();
        for (a, b) in [(2, 0), (4, 4)] {
            let e = WeierstrassC::new(f.clone(), f.elt(a), f.elt(b), 1u32.into(), 1u32.into());
            assert_eq!(e.err(), Some(Error::SingularCurve(Model::WeierstrassC)));
        }

        let f3 = PrimeField::new("GF(3)", 3u32).unwrap();
        let e = WeierstrassC::new(f3.clone(), f3.one(), f3.elt(2), 1u32.into(), 1u32.into());
        assert_eq!(e.err(), Some(Error::UnsupportedCharacteristic));
    }

    #[test]
    fn shifted_curve() {
        let e = wc0();
        let f = e.field().clone();
        assert_eq!(e.shifted().a(), &f.elt(37));
        assert_eq!(e.shifted().b(), &f.elt(30));
    }

    /// Multiples of `(45, 4)` computed by hand with the chord-tangent law of
    /// `y^2 = x^3 + 2x^2 + 3x`.
    #[test]
    fn reference_multiples() {
        let e = wc0();
        let f = e.field().clone();
        let p = e.new_point(f.elt(45), f.elt(4)).unwrap();

        assert_eq!(e.double(&p), pt(&f, 1, 18));
        assert_eq!(e.add(&p, &e.double(&p)), pt(&f, 12, 12));
        assert_eq!(e.scalar_mult(&p, &3u32.into()), pt(&f, 12, 12));
        assert_eq!(e.neg(&p), pt(&f, 45, -4));
        assert_eq!(e.add(&p, &e.neg(&p)), Point::Identity);
    }

    #[test]
    fn matches_weierstrass_reference() {
        let e = wc0();
        let f = e.field().clone();
        // y^2 = x^3 + 37x + 30, with x shifted by A/3 = 36
        let w = Weierstrass::new(f.clone(), f.elt(37), f.elt(30), 66u32.into(), 6u32.into())
            .unwrap();
        let p = pt(&f, 45, 4);
        let q = pt(&f, 1, 18);
        let pw = pt(&f, 28, 4);
        let qw = pt(&f, 37, 18);

        let sum = w.add(&pw, &qw);
        let (x, y) = sum.coordinates().unwrap();
        let expected = Point::Affine {
            x: f.sub(x, &f.elt(36)),
            y: y.clone(),
        };
        assert_eq!(e.add(&p, &q), expected);
    }

    #[test]
    fn closure() {
        let e = wc0();
        let f = e.field().clone();
        let g = pt(&f, 45, 4);
        let mut p = e.identity();
        for _ in 0..66 {
            p = e.add(&p, &g);
            assert!(e.is_on_curve(&p));
        }
        assert_eq!(e.clear_cofactor(&e.scalar_mult(&g, &11u32.into())), Point::Identity);
    }
}
