//! Standard curves connected by the maps in [`crate::map`] and
//! [`crate::isogeny`].
//!
//! The order reported for each curve is the full group order, cofactor
//! included.

use crate::{EllCurve, Montgomery, Point, Result, TwistedEdwards, Weierstrass};
use ecfield::{BigUint, Field, PrimeField, parse_int};

/// `2^255 - 19`
const P25519: &str = "0x7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";

/// Prime order subgroup of Curve25519: `2^252 + 27742317777372353535851937790883648493`.
const L25519: &str = "0x1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";

/// `2^448 - 2^224 - 1`
const P448: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Prime order subgroup of Curve448.
const L448: &str = "0x3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3";

/// `2^256 - 2^32 - 977`
const P_SECP256K1: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

const N_SECP256K1: &str = "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

const P_BLS12381: &str = "0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

const R_BLS12381: &str = "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

const H_BLS12381_G1: &str = "0x396c8c005555e1568c00aaab0000aaab";

fn uint(s: &str) -> Result<BigUint> {
    let n = parse_int(s)?;
    n.to_biguint()
        .ok_or(crate::Error::Field(ecfield::Error::MalformedInteger))
}

/// Full group order `h * r`.
fn order(r: &str, h: &str) -> Result<BigUint> {
    Ok(uint(r)? * uint(h)?)
}

/// `GF(2^255 - 19)`.
pub fn field25519() -> Result<PrimeField> {
    Ok(PrimeField::from_str_modulus("GF(2^255-19)", P25519)?)
}

/// `GF(2^448 - 2^224 - 1)`.
pub fn field448() -> Result<PrimeField> {
    Ok(PrimeField::from_str_modulus("GF(2^448-2^224-1)", P448)?)
}

/// Base field of secp256k1.
pub fn field_secp256k1() -> Result<PrimeField> {
    Ok(PrimeField::from_str_modulus("GF(secp256k1)", P_SECP256K1)?)
}

/// Base field of BLS12-381.
pub fn field_bls12381() -> Result<PrimeField> {
    Ok(PrimeField::from_str_modulus("GF(BLS12-381)", P_BLS12381)?)
}

/// Edwards25519: `-x^2 + y^2 = 1 - (121665/121666)x^2y^2`.
pub fn edwards25519() -> Result<TwistedEdwards<PrimeField>> {
    let f = field25519()?;
    let d = f.neg(&f.div(&f.elt(121665), &f.elt(121666)));
    TwistedEdwards::new(f.clone(), f.elt(-1), d, order(L25519, "8")?, 8u32.into())
}

/// Curve25519: `y^2 = x^3 + 486662x^2 + x`.
pub fn curve25519() -> Result<Montgomery<PrimeField>> {
    let f = field25519()?;
    Montgomery::new(f.clone(), f.elt(486662), f.one(), order(L25519, "8")?, 8u32.into())
}

/// Edwards448 (RFC 7748): `x^2 + y^2 = 1 - 39081x^2y^2`.
pub fn edwards448() -> Result<TwistedEdwards<PrimeField>> {
    let f = field448()?;
    TwistedEdwards::new(f.clone(), f.one(), f.elt(-39081), order(L448, "4")?, 4u32.into())
}

/// Curve448: `y^2 = x^3 + 156326x^2 + x`.
pub fn curve448() -> Result<Montgomery<PrimeField>> {
    let f = field448()?;
    Montgomery::new(f.clone(), f.elt(156326), f.one(), order(L448, "4")?, 4u32.into())
}

/// secp256k1: `y^2 = x^3 + 7`.
pub fn secp256k1() -> Result<Weierstrass<PrimeField>> {
    let f = field_secp256k1()?;
    Weierstrass::new(f.clone(), f.zero(), f.elt(7), uint(N_SECP256K1)?, 1u32.into())
}

/// The curve 3-isogenous to secp256k1 used by hash-to-curve.
pub fn secp256k1_3iso() -> Result<Weierstrass<PrimeField>> {
    let f = field_secp256k1()?;
    let a = f.parse("0x3f8731abdd661adca08a5558f0f5d272e953d363cb6f0e5d405447c01a444533")?;
    Weierstrass::new(f.clone(), a, f.elt(1771), uint(N_SECP256K1)?, 1u32.into())
}

/// BLS12-381 G1: `y^2 = x^3 + 4`.
pub fn bls12381_g1() -> Result<Weierstrass<PrimeField>> {
    let f = field_bls12381()?;
    Weierstrass::new(
        f.clone(),
        f.zero(),
        f.elt(4),
        order(R_BLS12381, H_BLS12381_G1)?,
        uint(H_BLS12381_G1)?,
    )
}

/// The curve 11-isogenous to BLS12-381 G1 used by hash-to-curve.
pub fn bls12381_g1_11iso() -> Result<Weierstrass<PrimeField>> {
    let f = field_bls12381()?;
    let a = f.parse("0x144698a3b8e9433d693a02c96d4982b0ea985383ee66a8d8e8981aefd881ac98936f8da0e0f97f5cf428082d584c1d")?;
    let b = f.parse("0x12e2908d11688030018b12e8753eee3b2016c1f0f24f4070a0b9c14fcef35ef55a23215a316ceaa5d1cc48e98e172be0")?;
    Weierstrass::new(
        f,
        a,
        b,
        order(R_BLS12381, H_BLS12381_G1)?,
        uint(H_BLS12381_G1)?,
    )
}

fn generator<C>(curve: &C, x: &str, y: &str) -> Result<Point<PrimeField>>
where
    C: EllCurve<Field = PrimeField>,
{
    let f = curve.field();
    curve.new_point(f.parse(x)?, f.parse(y)?)
}

/// Base point of Edwards25519 (RFC 8032).
pub fn edwards25519_generator() -> Result<Point<PrimeField>> {
    generator(
        &edwards25519()?,
        "15112221349535400772501151409588531511454012693041857206046113283949847762202",
        "46316835694926478169428394003475163141307993866256225615783033603165251855960",
    )
}

/// Base point of Curve25519, `u = 9`.
pub fn curve25519_generator() -> Result<Point<PrimeField>> {
    generator(
        &curve25519()?,
        "9",
        "14781619447589544791020593568409986887264606134616475288964881837755586237401",
    )
}

/// Base point of Edwards448 (RFC 8032).
pub fn edwards448_generator() -> Result<Point<PrimeField>> {
    generator(
        &edwards448()?,
        "224580040295924300187604334099896036246789641632564134246125461686950415467406032909029192869357953282578032075146446173674602635247710",
        "298819210078481492676017930443930673437544040154080242095928241372331506189835876003536878655418784733982303233503462500531545062832660",
    )
}

/// Base point of secp256k1.
pub fn secp256k1_generator() -> Result<Point<PrimeField>> {
    generator(
        &secp256k1()?,
        "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    )
}

/// Base point of BLS12-381 G1.
pub fn bls12381_g1_generator() -> Result<Point<PrimeField>> {
    generator(
        &bls12381_g1()?,
        "0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        "0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1",
    )
}
