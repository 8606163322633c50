#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(any(test, feature = "dev"))]
pub mod dev;
pub mod isogeny;
pub mod map;
pub mod named;
pub mod scalar_mul;

mod curve;
mod edwards;
mod error;
mod montgomery;
mod params;
mod point;
mod weierstrass;
mod weierstrass_c;

pub use crate::{
    curve::Curve,
    edwards::TwistedEdwards,
    error::{Error, Result},
    map::{Isogeny, RationalMap},
    montgomery::Montgomery,
    point::Point,
    weierstrass::Weierstrass,
    weierstrass_c::WeierstrassC,
};
pub use ecfield::{self, BigInt, BigUint, Field};

use core::fmt;

/// Field element type of the curve `C`.
pub type Elt<C> = <<C as EllCurve>::Field as Field>::Elt;

/// Point type of the curve `C`.
pub type PointOf<C> = Point<<C as EllCurve>::Field>;

/// Curve models supported by this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Model {
    /// Short Weierstrass `y^2 = x^3 + Ax + B`.
    Weierstrass,

    /// `y^2 = x^3 + Ax^2 + Bx`.
    WeierstrassC,

    /// Montgomery `By^2 = x^3 + Ax^2 + x`.
    Montgomery,

    /// Twisted Edwards `Ax^2 + y^2 = 1 + Dx^2y^2`.
    TwistedEdwards,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Model::Weierstrass => "Weierstrass",
            Model::WeierstrassC => "WeierstrassC",
            Model::Montgomery => "Montgomery",
            Model::TwistedEdwards => "twisted Edwards",
        })
    }
}

/// Group operations of an elliptic curve in affine coordinates.
///
/// Points do not record which curve they belong to. Every group operation
/// checks that its operands satisfy the curve equation.
///
/// # Panics
///
/// [`EllCurve::neg`], [`EllCurve::add`], [`EllCurve::double`] and the
/// operations built on them panic when given a point that is not on the
/// curve, e.g. a point of another curve.
pub trait EllCurve: Clone + fmt::Debug + fmt::Display + Send + Sync {
    /// Field the curve is defined over.
    type Field: Field;

    /// Field of definition.
    fn field(&self) -> &Self::Field;

    /// Model of the curve equation.
    fn model(&self) -> Model;

    /// Number of points of the curve, `#E(F)`.
    fn order(&self) -> &BigUint;

    /// Index of the prime order subgroup.
    fn cofactor(&self) -> &BigUint;

    /// Order of the prime order subgroup, `order / cofactor`.
    fn subgroup_order(&self) -> BigUint {
        self.order() / self.cofactor()
    }

    /// Validate affine coordinates and build a point.
    fn new_point(&self, x: Elt<Self>, y: Elt<Self>) -> Result<PointOf<Self>> {
        let p = Point::Affine { x, y };
        if self.is_on_curve(&p) {
            Ok(p)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Does `p` satisfy the curve equation?
    fn is_on_curve(&self, p: &PointOf<Self>) -> bool;

    /// Neutral element of the group.
    fn identity(&self) -> PointOf<Self>;

    /// Is `p` the neutral element?
    fn is_identity(&self, p: &PointOf<Self>) -> bool {
        p.is_identity()
    }

    /// Is `p` a point of order two?
    fn is_two_torsion(&self, p: &PointOf<Self>) -> bool {
        !self.is_identity(p) && self.is_identity(&self.double(p))
    }

    /// Returns `-p`.
    fn neg(&self, p: &PointOf<Self>) -> PointOf<Self>;

    /// Returns `p + q`.
    fn add(&self, p: &PointOf<Self>, q: &PointOf<Self>) -> PointOf<Self>;

    /// Returns `2p`.
    fn double(&self, p: &PointOf<Self>) -> PointOf<Self>;

    /// Returns `p - q`.
    fn sub(&self, p: &PointOf<Self>, q: &PointOf<Self>) -> PointOf<Self> {
        self.add(p, &self.neg(q))
    }

    /// Returns `[k]p`. Not constant time.
    fn scalar_mult(&self, p: &PointOf<Self>, k: &BigUint) -> PointOf<Self> {
        scalar_mul::double_and_add(self, p, k)
    }

    /// Returns `[k]p` for a signed scalar.
    fn scalar_mult_signed(&self, p: &PointOf<Self>, k: &BigInt) -> PointOf<Self> {
        let q = self.scalar_mult(p, k.magnitude());
        if k.sign() == num_bigint::Sign::Minus {
            self.neg(&q)
        } else {
            q
        }
    }

    /// Returns `[cofactor]p`, a point of the prime order subgroup.
    fn clear_cofactor(&self, p: &PointOf<Self>) -> PointOf<Self> {
        self.scalar_mult(p, self.cofactor())
    }

    /// Same model, field and equation coefficients.
    fn is_equal_curve(&self, other: &Self) -> bool;
}
