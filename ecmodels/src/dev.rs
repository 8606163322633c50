//! Small curves for tests and benchmarks.
//!
//! Every entry was checked by exhaustive point counting.

use crate::{
    Curve, EllCurve, Error, Model, Montgomery, Point, Result, TwistedEdwards, Weierstrass,
    WeierstrassC,
};
use alloc::vec::Vec;
use ecfield::{Field, PrimeField, QuadraticExtension};

/// A toy curve: model, field `GF(p^ext)`, coefficients, group structure and
/// a generator of the full group or of a large subgroup.
#[derive(Clone, Copy, Debug)]
pub struct ToyCurve {
    /// Short identifier.
    pub id: &'static str,
    /// Curve model.
    pub model: Model,
    /// Field characteristic.
    pub p: u32,
    /// Extension degree, 1 or 2.
    pub ext: u32,
    /// First coefficient (`A`).
    pub a: i64,
    /// Second coefficient (`B`, or `D` for twisted Edwards curves).
    pub b: i64,
    /// Number of points.
    pub order: u32,
    /// Cofactor.
    pub cofactor: u32,
    /// Generator x-coordinate, as `[a, b]` for `a + b*i`.
    pub gx: [i64; 2],
    /// Generator y-coordinate.
    pub gy: [i64; 2],
}

macro_rules! toy {
    ($id:expr, $model:ident, $p:expr, $a:expr, $b:expr, $order:expr, $h:expr, ($x:expr, $y:expr)) => {
        ToyCurve {
            id: $id,
            model: Model::$model,
            p: $p,
            ext: 1,
            a: $a,
            b: $b,
            order: $order,
            cofactor: $h,
            gx: [$x, 0],
            gy: [$y, 0],
        }
    };
}

/// The toy catalog.
pub const TOY_CURVES: &[ToyCurve] = &[
    toy!("W0", Weierstrass, 53, 3, 2, 51, 3, (46, 3)),
    toy!("W1", Weierstrass, 53, 0, 1, 54, 2, (13, 5)),
    toy!("W1ISO", Weierstrass, 53, 38, 22, 54, 2, (41, 45)),
    toy!("W2", Weierstrass, 53, 0, 2, 54, 2, (37, 27)),
    toy!("W3", Weierstrass, 59, 16, 0, 60, 4, (33, 11)),
    toy!("WC0", WeierstrassC, 53, 2, 3, 66, 6, (45, 4)),
    toy!("M0", Montgomery, 53, 4, 3, 44, 4, (16, 4)),
    toy!("M1", Montgomery, 53, 3, 1, 48, 4, (14, 22)),
    toy!("E0", TwistedEdwards, 53, 1, 3, 44, 4, (17, 49)),
    toy!("E1", TwistedEdwards, 53, -1, 12, 48, 4, (3, 19)),
    ToyCurve {
        id: "W4",
        model: Model::Weierstrass,
        p: 19,
        ext: 2,
        a: 1,
        b: 4,
        order: 399,
        cofactor: 3,
        gx: [0, 1],
        gy: [17, 0],
    },
];

/// Fields the toy catalog can be instantiated over.
pub trait ToyField: Field {
    /// Extension degree over `GF(p)`.
    const EXT: u32;

    /// Build the field of characteristic `p`.
    fn toy_field(p: u32) -> ecfield::Result<Self>;

    /// Element from its coordinates over `GF(p)`.
    fn toy_elt(&self, c: [i64; 2]) -> Self::Elt;
}

impl ToyField for PrimeField {
    const EXT: u32 = 1;

    fn toy_field(p: u32) -> ecfield::Result<Self> {
        PrimeField::new(alloc::format!("GF({p})"), p)
    }

    fn toy_elt(&self, c: [i64; 2]) -> Self::Elt {
        self.elt(c[0])
    }
}

impl ToyField for QuadraticExtension {
    const EXT: u32 = 2;

    fn toy_field(p: u32) -> ecfield::Result<Self> {
        QuadraticExtension::new(alloc::format!("GF({p}^2)"), p)
    }

    fn toy_elt(&self, c: [i64; 2]) -> Self::Elt {
        self.elt2(c[0], c[1])
    }
}

impl ToyCurve {
    /// Look up a catalog entry by id.
    pub fn find(id: &str) -> Option<&'static ToyCurve> {
        TOY_CURVES.iter().find(|toy| toy.id == id)
    }

    /// Instantiate the curve and its generator.
    ///
    /// Fails with [`ecfield::Error::UnsupportedModulus`] when `F` has the
    /// wrong extension degree for this entry.
    pub fn build<F: ToyField>(&self) -> Result<(Curve<F>, Point<F>)> {
        if F::EXT != self.ext {
            return Err(Error::Field(ecfield::Error::UnsupportedModulus));
        }

        let f = F::toy_field(self.p)?;
        let a = f.toy_elt([self.a, 0]);
        let b = f.toy_elt([self.b, 0]);
        let (r, h) = (self.order.into(), self.cofactor.into());

        let curve: Curve<F> = match self.model {
            Model::Weierstrass => Weierstrass::new(f.clone(), a, b, r, h)?.into(),
            Model::WeierstrassC => WeierstrassC::new(f.clone(), a, b, r, h)?.into(),
            Model::Montgomery => Montgomery::new(f.clone(), a, b, r, h)?.into(),
            Model::TwistedEdwards => TwistedEdwards::new(f.clone(), a, b, r, h)?.into(),
        };

        let g = curve.new_point(f.toy_elt(self.gx), f.toy_elt(self.gy))?;
        Ok((curve, g))
    }
}

/// Instantiate a catalog curve over a prime field.
///
/// # Panics
///
/// Panics if `id` is unknown or names an extension field curve.
pub fn toy_fp(id: &str) -> (Curve<PrimeField>, Point<PrimeField>) {
    let toy = ToyCurve::find(id).unwrap_or_else(|| panic!("unknown toy curve {id}"));
    toy.build()
        .unwrap_or_else(|err| panic!("toy curve {id}: {err}"))
}

/// Every point of a curve over a small prime field, found by brute force.
///
/// The point at infinity is included for every model except twisted
/// Edwards, whose neutral element is affine.
pub fn all_points(curve: &Curve<PrimeField>) -> Vec<Point<PrimeField>> {
    let f = curve.field();
    let mut points = Vec::new();
    if curve.model() != Model::TwistedEdwards {
        points.push(Point::Identity);
    }

    let p = u64::try_from(f.p()).unwrap_or(u64::MAX);
    for x in 0..p {
        for y in 0..p {
            let point = Point::Affine {
                x: f.elt(x),
                y: f.elt(y),
            };
            if curve.is_on_curve(&point) {
                points.push(point);
            }
        }
    }
    points
}
