//! Group laws on the named curves.

use ecmodels::{
    BigInt, EllCurve, Point,
    ecfield::{BigUint, PrimeField},
    named,
};
use proptest::prelude::*;

fn check_generator<C: EllCurve<Field = PrimeField>>(curve: &C, g: &Point<PrimeField>) {
    assert!(curve.is_on_curve(g));
    assert!(!curve.is_identity(g));
    let r = curve.subgroup_order();
    assert!(curve.is_identity(&curve.scalar_mult(g, &r)));
    assert_eq!(
        curve.scalar_mult(g, &(&r - 1u32)),
        curve.neg(g),
        "[r - 1]G = -G on {curve}"
    );
}

#[test]
fn generators_have_prime_order() {
    check_generator(&named::secp256k1().unwrap(), &named::secp256k1_generator().unwrap());
    check_generator(&named::edwards25519().unwrap(), &named::edwards25519_generator().unwrap());
    check_generator(&named::curve25519().unwrap(), &named::curve25519_generator().unwrap());
    check_generator(&named::edwards448().unwrap(), &named::edwards448_generator().unwrap());
    check_generator(&named::bls12381_g1().unwrap(), &named::bls12381_g1_generator().unwrap());
}

#[test]
fn complete_edwards_curves() {
    assert!(named::edwards25519().unwrap().is_complete());
    assert!(named::edwards448().unwrap().is_complete());
}

#[test]
fn secp256k1_full_group_has_cofactor_one() {
    let e = named::secp256k1().unwrap();
    assert_eq!(e.cofactor(), &BigUint::from(1u32));
    assert_eq!(e.subgroup_order(), *e.order());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_mult_is_linear(a in any::<u64>(), b in any::<u64>()) {
        let e = named::secp256k1().unwrap();
        let g = named::secp256k1_generator().unwrap();
        let (a, b) = (BigUint::from(a), BigUint::from(b));

        let lhs = e.add(&e.scalar_mult(&g, &a), &e.scalar_mult(&g, &b));
        prop_assert_eq!(lhs, e.scalar_mult(&g, &(&a + &b)));
    }

    #[test]
    fn signed_scalars(a in any::<i64>()) {
        let e = named::edwards25519().unwrap();
        let g = named::edwards25519_generator().unwrap();
        let p = e.scalar_mult_signed(&g, &BigInt::from(a));
        let q = e.scalar_mult_signed(&g, &BigInt::from(-i128::from(a)));
        prop_assert!(e.is_identity(&e.add(&p, &q)));
    }
}
