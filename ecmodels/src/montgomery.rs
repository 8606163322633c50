//! Montgomery curves `By^2 = x^3 + Ax^2 + x`.

use crate::{
    EllCurve, Error, Model, Result, map::MontgomeryToWeierstrassC, params::CurveParams,
    point::Point,
};
use alloc::sync::Arc;
use core::fmt;
use ecfield::{BigUint, Field};

/// Montgomery curve `By^2 = x^3 + Ax^2 + x`.
#[derive(Clone, Debug)]
pub struct Montgomery<F: Field> {
    params: Arc<CurveParams<F>>,
}

impl<F: Field> Montgomery<F> {
    /// Create a curve with `order` points and the given cofactor.
    ///
    /// Returns [`Error::SingularCurve`] unless `B(A^2 - 4) != 0`.
    pub fn new(field: F, a: F::Elt, b: F::Elt, order: BigUint, cofactor: BigUint) -> Result<Self> {
        let t = field.sub(&field.sqr(&a), &field.elt(4));
        if field.is_zero(&field.mul(&b, &t)) {
            return Err(Error::SingularCurve(Model::Montgomery));
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

    /// Birational map onto `t^2 = s^3 + (A/B)s^2 + (1/B^2)s`.
    pub fn to_weierstrass_c(&self) -> Result<MontgomeryToWeierstrassC<F>> {
        MontgomeryToWeierstrassC::new(self.clone())
    }

    fn add_chord(&self, x1: &F::Elt, y1: &F::Elt, x2: &F::Elt, y2: &F::Elt) -> Point<F> {
        let f = &self.params.field;
        assert!(!f.are_equal(x1, x2), "chord addition of points with equal x");

        let l = f.div(&f.sub(y2, y1), &f.sub(x2, x1));
        self.third_point(&l, x1, y1, x2)
    }

    /// `x3 = B*l^2 - A - x1 - x2`, `y3 = l(x1 - x3) - y1`.
    fn third_point(&self, l: &F::Elt, x1: &F::Elt, y1: &F::Elt, x2: &F::Elt) -> Point<F> {
        let f = &self.params.field;
        let x3 = f.mul(&self.params.b, &f.sqr(l));
        let x3 = f.sub(&f.sub(&f.sub(&x3, &self.params.a), x1), x2);
        let y3 = f.sub(&f.mul(l, &f.sub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    fn assert_on_curve(&self, p: &Point<F>) {
        assert!(self.is_on_curve(p), "point {p} is not on {self}");
    }
}

impl<F: Field> EllCurve for Montgomery<F> {
    type Field = F;

    fn field(&self) -> &F {
        &self.params.field
    }

    fn model(&self) -> Model {
        Model::Montgomery
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
                let lhs = f.mul(&self.params.b, &f.sqr(y));
                let rhs = f.add(&f.add(&f.sqr(x), &f.mul(&self.params.a, x)), &f.one());
                f.are_equal(&lhs, &f.mul(&rhs, x))
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
                // l = (3x^2 + 2Ax + 1) / 2By
                let xx = f.sqr(x);
                let num = f.add(&xx, &f.double(&xx));
                let num = f.add(&num, &f.double(&f.mul(&self.params.a, x)));
                let num = f.add(&num, &f.one());
                let den = f.double(&f.mul(&self.params.b, y));
                let l = f.div(&num, &den);
                self.third_point(&l, x, y, x)
            }
        }
    }

    fn is_equal_curve(&self, other: &Self) -> bool {
        self.params.same_equation(&other.params)
    }
}

impl<F: Field> fmt::Display for Montgomery<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.params
            .fmt_with(f, "Montgomery By^2 = x^3 + Ax^2 + x", ["A", "B"])
    }
}

#[cfg(test)]
mod tests {
    use super::Montgomery;
    use crate::{EllCurve, Error, Model, Point};
    use ecfield::{Field, PrimeField};

    fn m0() -> Montgomery<PrimeField> {
        let f = PrimeField::new("GF(53)", 53u32).unwrap();
        Montgomery::new(f.clone(), f.elt(4), f.elt(3), 44u32.into(), 4u32.into()).unwrap()
    }

    #[test]
    fn rejects_singular() {
        let f = PrimeField::new("GF(53)", 53u32).unwrap();
        for (a, b) in [(2, 1), (-2, 5), (7, 0)] {
            let e = Montgomery::new(f.clone(), f.elt(a), f.elt(b), 1u32.into(), 1u32.into());
            assert_eq!(e.err(), Some(Error::SingularCurve(Model::Montgomery)));
        }
    }

    #[test]
    fn origin_is_two_torsion() {
        let e = m0();
        let f = e.field().clone();
        let t = e.new_point(f.zero(), f.zero()).unwrap();
        assert!(e.is_two_torsion(&t));
        assert_eq!(e.double(&t), Point::Identity);
    }

    #[test]
    fn doubling_matches_addition() {
        let e = m0();
        let f = e.field().clone();
        let g = e.new_point(f.elt(16), f.elt(4)).unwrap();
        let g2 = e.double(&g);
        assert!(e.is_on_curve(&g2));
        assert_eq!(e.add(&g, &g), g2);
        assert_eq!(e.sub(&e.add(&g2, &g), &g), g2);
    }
}
