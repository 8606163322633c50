//! Closed sum over the supported curve models.

use crate::{EllCurve, Model, Montgomery, Point, TwistedEdwards, Weierstrass, WeierstrassC};
use core::fmt;
use ecfield::{BigUint, Field};

/// A curve in any of the supported models.
#[derive(Clone, Debug)]
pub enum Curve<F: Field> {
    /// Short Weierstrass curve.
    Weierstrass(Weierstrass<F>),

    /// WeierstrassC curve.
    WeierstrassC(WeierstrassC<F>),

    /// Montgomery curve.
    Montgomery(Montgomery<F>),

    /// Twisted Edwards curve.
    TwistedEdwards(TwistedEdwards<F>),
}

macro_rules! dispatch {
    ($curve:expr, $e:ident => $body:expr) => {
        match $curve {
            Curve::Weierstrass($e) => $body,
            Curve::WeierstrassC($e) => $body,
            Curve::Montgomery($e) => $body,
            Curve::TwistedEdwards($e) => $body,
        }
    };
}

impl<F: Field> EllCurve for Curve<F> {
    type Field = F;

    fn field(&self) -> &F {
        dispatch!(self, e => e.field())
    }

    fn model(&self) -> Model {
        dispatch!(self, e => e.model())
    }

    fn order(&self) -> &BigUint {
        dispatch!(self, e => e.order())
    }

    fn cofactor(&self) -> &BigUint {
        dispatch!(self, e => e.cofactor())
    }

    fn is_on_curve(&self, p: &Point<F>) -> bool {
        dispatch!(self, e => e.is_on_curve(p))
    }

    fn identity(&self) -> Point<F> {
        dispatch!(self, e => e.identity())
    }

    fn is_identity(&self, p: &Point<F>) -> bool {
        dispatch!(self, e => e.is_identity(p))
    }

    fn neg(&self, p: &Point<F>) -> Point<F> {
        dispatch!(self, e => e.neg(p))
    }

    fn add(&self, p: &Point<F>, q: &Point<F>) -> Point<F> {
        dispatch!(self, e => e.add(p, q))
    }

    fn double(&self, p: &Point<F>) -> Point<F> {
        dispatch!(self, e => e.double(p))
    }

    fn scalar_mult(&self, p: &Point<F>, k: &BigUint) -> Point<F> {
        dispatch!(self, e => e.scalar_mult(p, k))
    }

    fn is_equal_curve(&self, other: &Self) -> bool {
        match (self, other) {
            (Curve::Weierstrass(a), Curve::Weierstrass(b)) => a.is_equal_curve(b),
            (Curve::WeierstrassC(a), Curve::WeierstrassC(b)) => a.is_equal_curve(b),
            (Curve::Montgomery(a), Curve::Montgomery(b)) => a.is_equal_curve(b),
            (Curve::TwistedEdwards(a), Curve::TwistedEdwards(b)) => a.is_equal_curve(b),
            _ => false,
        }
    }
}

impl<F: Field> fmt::Display for Curve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, e => fmt::Display::fmt(e, f))
    }
}

impl<F: Field> From<Weierstrass<F>> for Curve<F> {
    fn from(e: Weierstrass<F>) -> Curve<F> {
        Curve::Weierstrass(e)
    }
}

impl<F: Field> From<WeierstrassC<F>> for Curve<F> {
    fn from(e: WeierstrassC<F>) -> Curve<F> {
        Curve::WeierstrassC(e)
    }
}

impl<F: Field> From<Montgomery<F>> for Curve<F> {
    fn from(e: Montgomery<F>) -> Curve<F> {
        Curve::Montgomery(e)
    }
}

impl<F: Field> From<TwistedEdwards<F>> for Curve<F> {
    fn from(e: TwistedEdwards<F>) -> Curve<F> {
        Curve::TwistedEdwards(e)
    }
}
