//! Parameters shared by every curve model.

use core::fmt;
use ecfield::{BigUint, Field};

/// Field, the two equation coefficients and the group structure.
///
/// The meaning of `a` and `b` depends on the model: for twisted Edwards
/// curves they are the `A` and `D` coefficients.
#[derive(Clone, Debug)]
pub(crate) struct CurveParams<F: Field> {
    pub(crate) field: F,
    pub(crate) a: F::Elt,
    pub(crate) b: F::Elt,
    pub(crate) order: BigUint,
    pub(crate) cofactor: BigUint,
}

impl<F: Field> CurveParams<F> {
    /// Same field and coefficients.
    pub(crate) fn same_equation(&self, other: &Self) -> bool {
        self.field == other.field
            && self.field.are_equal(&self.a, &other.a)
            && self.field.are_equal(&self.b, &other.b)
    }

    /// Write `name: equation over field with A, B`.
    pub(crate) fn fmt_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        equation: &str,
        coefficients: [&str; 2],
    ) -> fmt::Result {
        write!(
            f,
            "{equation} over {} with {} = {}, {} = {}",
            self.field, coefficients[0], self.a, coefficients[1], self.b
        )
    }
}
