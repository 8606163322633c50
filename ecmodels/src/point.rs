//! Affine points.

use core::fmt;
use ecfield::Field;

/// A point of an elliptic curve: the point at infinity or an affine pair.
///
/// On twisted Edwards curves the neutral element is the affine point `(0, 1)`;
/// [`Point::Identity`] is accepted there as an alias of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Point<F: Field> {
    /// Point at infinity.
    Identity,

    /// Affine point `(x, y)`.
    Affine {
        /// x-coordinate.
        x: F::Elt,
        /// y-coordinate.
        y: F::Elt,
    },
}

impl<F: Field> Point<F> {
    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> Option<&F::Elt> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> Option<&F::Elt> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Both affine coordinates.
    pub fn coordinates(&self) -> Option<(&F::Elt, &F::Elt)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl<F: Field> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("(inf)"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use alloc::string::ToString;
    use ecfield::{Field, PrimeField};

    #[test]
    fn accessors_and_display() {
        let f = PrimeField::new("GF(53)", 53u32).unwrap();
        let p = Point::<PrimeField>::Affine {
            x: f.elt(16),
            y: f.elt(4),
        };
        assert!(!p.is_identity());
        assert_eq!(p.x(), Some(&f.elt(16)));
        assert_eq!(p.coordinates(), Some((&f.elt(16), &f.elt(4))));
        assert_eq!(p.to_string(), "(0x10, 0x4)");

        let inf = Point::<PrimeField>::Identity;
        assert!(inf.is_identity());
        assert_eq!(inf.y(), None);
        assert_eq!(inf.to_string(), "(inf)");
    }
}
