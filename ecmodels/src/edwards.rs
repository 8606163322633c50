//! Twisted Edwards curves `Ax^2 + y^2 = 1 + Dx^2y^2`.

use crate::{
    EllCurve, Error, Model, Result, map::EdwardsToWeierstrassC, params::CurveParams, point::Point,
};
use alloc::sync::Arc;
use core::fmt;
use ecfield::{BigUint, Field};

/// Twisted Edwards curve `Ax^2 + y^2 = 1 + Dx^2y^2`.
///
/// The neutral element is `(0, 1)` and `(0, -1)` has order two.
/// [`Point::Identity`] is treated as `(0, 1)`.
#[derive(Clone, Debug)]
pub struct TwistedEdwards<F: Field> {
    params: Arc<CurveParams<F>>,
}

impl<F: Field> TwistedEdwards<F> {
    /// Create a curve with `order` points and the given cofactor.
    ///
    /// Returns [`Error::SingularCurve`] unless `A != D` and both are non-zero.
    /// Completeness is not required; see [`TwistedEdwards::is_complete`].
    pub fn new(field: F, a: F::Elt, d: F::Elt, order: BigUint, cofactor: BigUint) -> Result<Self> {
        if field.is_zero(&a) || field.is_zero(&d) || field.are_equal(&a, &d) {
            return Err(Error::SingularCurve(Model::TwistedEdwards));
        }

        Ok(Self {
            params: Arc::new(CurveParams {
                field,
                a,
                b: d,
                order,
                cofactor,
            }),
        })
    }

    /// Coefficient `A`.
    pub fn a(&self) -> &F::Elt {
        &self.params.a
    }

    /// Coefficient `D`.
    pub fn d(&self) -> &F::Elt {
        &self.params.b
    }

    /// The unified addition law is exception free when `A` is a square and
    /// `D` is not.
    pub fn is_complete(&self) -> bool {
        let f = &self.params.field;
        f.is_square(&self.params.a) && !f.is_square(&self.params.b)
    }

    /// Birational map onto a WeierstrassC curve.
    ///
    /// Returns [`Error::UnsupportedCharacteristic`] in characteristic 2.
    pub fn to_weierstrass_c(&self) -> Result<EdwardsToWeierstrassC<F>> {
        EdwardsToWeierstrassC::new(self.clone())
    }

    /// Affine coordinates of `p`, with [`Point::Identity`] read as `(0, 1)`.
    fn coordinates(&self, p: &Point<F>) -> (F::Elt, F::Elt) {
        let f = &self.params.field;
        match p {
            Point::Identity => (f.zero(), f.one()),
            Point::Affine { x, y } => (x.clone(), y.clone()),
        }
    }

    fn assert_on_curve(&self, p: &Point<F>) {
        assert!(self.is_on_curve(p), "point {p} is not on {self}");
    }
}

impl<F: Field> EllCurve for TwistedEdwards<F> {
    type Field = F;

    fn field(&self) -> &F {
        &self.params.field
    }

    fn model(&self) -> Model {
        Model::TwistedEdwards
    }

    fn order(&self) -> &BigUint {
        &self.params.order
    }

    fn cofactor(&self) -> &BigUint {
        &self.params.cofactor
    }

    fn is_on_curve(&self, p: &Point<F>) -> bool {
        let f = &self.params.field;
        let (x, y) = self.coordinates(p);
        let (xx, yy) = (f.sqr(&x), f.sqr(&y));
        let lhs = f.add(&f.mul(&self.params.a, &xx), &yy);
        let rhs = f.add(&f.one(), &f.mul(&self.params.b, &f.mul(&xx, &yy)));
        f.are_equal(&lhs, &rhs)
    }

    fn identity(&self) -> Point<F> {
        let f = &self.params.field;
        Point::Affine {
            x: f.zero(),
            y: f.one(),
        }
    }

    fn is_identity(&self, p: &Point<F>) -> bool {
        let f = &self.params.field;
        match p {
            Point::Identity => true,
            Point::Affine { x, y } => f.is_zero(x) && f.are_equal(y, &f.one()),
        }
    }

    fn neg(&self, p: &Point<F>) -> Point<F> {
        self.assert_on_curve(p);
        let (x, y) = self.coordinates(p);
        Point::Affine {
            x: self.params.field.neg(&x),
            y,
        }
    }

    /// Unified addition:
    ///
    /// ```text
    /// x3 = (x1y2 + x2y1) / (1 + Dx1x2y1y2)
    /// y3 = (y1y2 - Ax1x2) / (1 - Dx1x2y1y2)
    /// ```
    ///
    /// # Panics
    ///
    /// On an incomplete curve, when either denominator vanishes.
    fn add(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        self.assert_on_curve(p);
        self.assert_on_curve(q);

        let f = &self.params.field;
        let (x1, y1) = self.coordinates(p);
        let (x2, y2) = self.coordinates(q);

        let x1x2 = f.mul(&x1, &x2);
        let y1y2 = f.mul(&y1, &y2);
        let t = f.mul(&self.params.b, &f.mul(&x1x2, &y1y2));
        let x_num = f.add(&f.mul(&x1, &y2), &f.mul(&x2, &y1));
        let y_num = f.sub(&y1y2, &f.mul(&self.params.a, &x1x2));
        let x_den = f.add(&f.one(), &t);
        let y_den = f.sub(&f.one(), &t);
        assert!(
            !f.is_zero(&x_den) && !f.is_zero(&y_den),
            "exceptional addition {p} + {q} on incomplete {self}"
        );
        let x3 = f.div(&x_num, &x_den);
        let y3 = f.div(&y_num, &y_den);
        Point::Affine { x: x3, y: y3 }
    }

    fn double(&self, p: &Point<F>) -> Point<F> {
        self.add(p, p)
    }

    fn is_equal_curve(&self, other: &Self) -> bool {
        self.params.same_equation(&other.params)
    }
}

impl<F: Field> fmt::Display for TwistedEdwards<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.params
            .fmt_with(f, "twisted Edwards Ax^2 + y^2 = 1 + Dx^2y^2", ["A", "D"])
    }
}
