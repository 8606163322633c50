//! Short Weierstrass curves `y^2 = x^3 + Ax + B`.

use crate::{EllCurve, Error, Model, Result, params::CurveParams, point::Point};
use alloc::sync::Arc;
use core::fmt;
use ecfield::{BigUint, Field};

/// Short Weierstrass curve `y^2 = x^3 + Ax + B`.
#[derive(Clone, Debug)]
pub struct Weierstrass<F: Field> {
    params: Arc<CurveParams<F>>,
}

impl<F: Field> Weierstrass<F> {
    /// Create a curve with `order` points and the given cofactor.
    ///
    /// Returns [`Error::SingularCurve`] when the discriminant
    /// `-16(4A^3 + 27B^2)` vanishes.
    pub fn new(field: F, a: F::Elt, b: F::Elt, order: BigUint, cofactor: BigUint) -> Result<Self> {
        let a3 = field.mul(&field.sqr(&a), &a);
        let b2 = field.sqr(&b);
        let t = field.add(&field.mul(&field.elt(4), &a3), &field.mul(&field.elt(27), &b2));
        let disc = field.mul(&field.elt(-16), &t);

        if field.is_zero(&disc) {
            return Err(Error::SingularCurve(Model::Weierstrass));
        }

        Ok(Self {
            params: Arc::new(CurveParams {
                field,
                a,
                b,
                order,
                cofactor,
            }),
        })
    }

    /// Coefficient `A`.
    pub fn a(&self) -> &F::Elt {
        &self.params.a
    }

    /// Coefficient `B`.
    pub fn b(&self) -> &F::Elt {
        &self.params.b
    }

    /// Right-hand side of the curve equation, `x^3 + Ax + B`.
    pub fn eval_rhs(&self, x: &F::Elt) -> F::Elt {
        let f = &self.params.field;
        let t = f.add(&f.sqr(x), &self.params.a);
        f.add(&f.mul(&t, x), &self.params.b)
    }

    /// Secant through two points with distinct x-coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x1 == x2`; [`EllCurve::add`] dispatches that case to
    /// negation or doubling.
    fn add_chord(&self, x1: &F::Elt, y1: &F::Elt, x2: &F::Elt, y2: &F::Elt) -> Point<F> {
        let f = &self.params.field;
        assert!(!f.are_equal(x1, x2), "chord addition of points with equal x");

        let l = f.div(&f.sub(y2, y1), &f.sub(x2, x1));
        let x3 = f.sub(&f.sub(&f.sqr(&l), x1), x2);
        let y3 = f.sub(&f.mul(&l, &f.sub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    fn assert_on_curve(&self, p: &Point<F>) {
        assert!(self.is_on_curve(p), "point {p} is not on {self}");
    }
}

impl<F: Field> EllCurve for Weierstrass<F> {
    type Field = F;

    fn field(&self) -> &F {
        &self.params.field
    }

    fn model(&self) -> Model {
        Model::Weierstrass
    }

    fn order(&self) -> &BigUint {
        &self.params.order
    }

    fn cofactor(&self) -> &BigUint {
        &self.params.cofactor
    }

    fn is_on_curve(&self, p: &Point<F>) -> bool {
        match p {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let f = &self.params.field;
                f.are_equal(&f.sqr(y), &self.eval_rhs(x))
            }
        }
    }

    fn identity(&self) -> Point<F> {
        Point::Identity
    }

    fn neg(&self, p: &Point<F>) -> Point<F> {
        self.assert_on_curve(p);
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.params.field.neg(y),
            },
        }
    }

    fn add(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        self.assert_on_curve(p);
        self.assert_on_curve(q);

        let f = &self.params.field;
        match (p, q) {
            (Point::Identity, _) => q.clone(),
            (_, Point::Identity) => p.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if !f.are_equal(x1, x2) {
                    self.add_chord(x1, y1, x2, y2)
                } else if f.are_equal(y1, y2) && !f.is_zero(y1) {
                    self.double(p)
                } else {
                    Point::Identity
                }
            }
        }
    }

    fn double(&self, p: &Point<F>) -> Point<F> {
        self.assert_on_curve(p);

        let f = &self.params.field;
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { y, .. } if f.is_zero(y) => Point::Identity,
            Point::Affine { x, y } => {
                let xx = f.sqr(x);
                let num = f.add(&f.add(&xx, &f.double(&xx)), &self.params.a);
                let l = f.div(&num, &f.double(y));
                let x3 = f.sub(&f.sqr(&l), &f.double(x));
                let y3 = f.sub(&f.mul(&l, &f.sub(x, &x3)), y);
                Point::Affine { x: x3, y: y3 }
            }
        }
    }

    fn is_equal_curve(&self, other: &Self) -> bool {
        self.params.same_equation(&other.params)
    }
}

impl<F: Field> fmt::Display for Weierstrass<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.params
            .fmt_with(f, "Weierstrass y^2 = x^3 + Ax + B", ["A", "B"])
    }
}

#[cfg(test)]
mod tests {
    use super::Weierstrass;
    use crate::{EllCurve, Error, Model, Point, dev};
    use ecfield::{BigUint, Field, PrimeField};

    fn f53() -> PrimeField {
        PrimeField::new("GF(53)", 53u32).unwrap()
    }

    #[test]
    fn rejects_singular() {
        let f = f53();
        // 4 * (-3)^3 + 27 * 2^2 = 0
        let err = Weierstrass::new(f.clone(), f.elt(-3), f.elt(2), 1u32.into(), 1u32.into());
        assert_eq!(err.err(), Some(Error::SingularCurve(Model::Weierstrass)));
        let err = Weierstrass::new(f.clone(), f.zero(), f.zero(), 1u32.into(), 1u32.into());
        assert!(err.is_err());
    }

    #[test]
    fn new_point() {
        let (e, g) = dev::toy_fp("W0");
        let (x, y) = g.coordinates().unwrap();
        assert_eq!(e.new_point(x.clone(), y.clone()).unwrap(), g);
        let f = e.field();
        assert_eq!(
            e.new_point(x.clone(), f.add(y, &f.one())).err(),
            Some(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn two_torsion() {
        // y^2 = x^3 + 16x over GF(59) has (0, 0)
        let f = PrimeField::new("GF(59)", 59u32).unwrap();
        let e = Weierstrass::new(f.clone(), f.elt(16), f.zero(), 60u32.into(), 4u32.into()).unwrap();
        let t = e.new_point(f.zero(), f.zero()).unwrap();
        assert!(e.is_two_torsion(&t));
        assert_eq!(e.double(&t), Point::Identity);
        assert_eq!(e.add(&t, &t), Point::Identity);
        assert_eq!(e.neg(&t), t);
    }

    #[test]
    fn eval_rhs() {
        let f = f53();
        let e = Weierstrass::new(f.clone(), f.elt(3), f.elt(2), 51u32.into(), 3u32.into()).unwrap();
        assert_eq!(e.eval_rhs(&f.elt(46)), f.elt(9));
        assert_eq!(e.subgroup_order(), BigUint::from(17u32));
    }

    #[test]
    #[should_panic(expected = "not on")]
    fn rejects_foreign_point() {
        let (e0, _) = dev::toy_fp("W0");
        let (_, g1) = dev::toy_fp("W1");
        e0.double(&g1);
    }

    #[test]
    fn curve_equality() {
        let (w1, _) = dev::toy_fp("W1");
        let (w1_again, _) = dev::toy_fp("W1");
        let (w1iso, _) = dev::toy_fp("W1ISO");
        assert!(w1.is_equal_curve(&w1_again));
        assert!(!w1.is_equal_curve(&w1iso));
    }
}
