//! Scalar multiplication shared by every curve model.

use crate::{EllCurve, PointOf};
use ecfield::BigUint;

/// Left-to-right binary double-and-add: `[k]p`.
///
/// Runs one doubling per bit of `k` and one addition per set bit, so the
/// running time depends on `k`. Do not use with secret scalars.
pub fn double_and_add<C: EllCurve>(curve: &C, p: &PointOf<C>, k: &BigUint) -> PointOf<C> {
    let mut q = curve.identity();
    for i in (0..k.bits()).rev() {
        q = curve.double(&q);
        if k.bit(i) {
            q = curve.add(&q, p);
        }
    }
    q
}
