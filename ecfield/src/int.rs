//! Integer parsing and primality testing.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Num, One, Zero};

/// Small primes used both for trial division and as Miller-Rabin bases.
const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Parse a signed integer written in decimal, or in hexadecimal, octal or
/// binary with a `0x`, `0o` or `0b` prefix.
///
/// ```
/// use ecfield::{parse_int, BigInt};
///
/// assert_eq!(parse_int("0x1f").unwrap(), BigInt::from(31));
/// assert_eq!(parse_int("-12").unwrap(), BigInt::from(-12));
/// ```
pub fn parse_int(s: &str) -> Result<BigInt> {
    let s = s.trim();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        Some("0o") | Some("0O") => (8, &s[2..]),
        Some("0b") | Some("0B") => (2, &s[2..]),
        _ => (10, s),
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(Error::MalformedInteger);
    }

    let magnitude = BigUint::from_str_radix(digits, radix).map_err(|_| Error::MalformedInteger)?;
    let n = BigInt::from(magnitude);
    Ok(if negative { -n } else { n })
}

/// Probabilistic primality test: trial division by small primes followed by
/// Miller-Rabin rounds with fixed bases.
///
/// The answer is exact for `n < 3.3 * 10^24`.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    for &q in &SMALL_PRIMES {
        let q = BigUint::from(q);
        if n == &q {
            return true;
        }
        if (n % &q).is_zero() {
            return false;
        }
    }

    let one = BigUint::one();
    let n_minus_1 = n - &one;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;

    'witness: for &a in &SMALL_PRIMES {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Reduce a signed integer into `[0, m)`.
pub(crate) fn reduce(n: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    n.mod_floor(&m).into_parts().1
}

#[cfg(test)]
mod tests {
    use super::{is_probable_prime, parse_int, reduce};
    use crate::Error;
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn parse_prefixes() {
        assert_eq!(parse_int("607").unwrap(), BigInt::from(607));
        assert_eq!(parse_int("0x25f").unwrap(), BigInt::from(607));
        assert_eq!(parse_int("0o1137").unwrap(), BigInt::from(607));
        assert_eq!(parse_int("0b1001011111").unwrap(), BigInt::from(607));
        assert_eq!(parse_int(" -0x10 ").unwrap(), BigInt::from(-16));
        assert_eq!(parse_int("+5").unwrap(), BigInt::from(5));
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "-", "0x", "12a", "0xzz", "--1", "0x-1"] {
            assert_eq!(parse_int(s), Err(Error::MalformedInteger), "{s:?}");
        }
    }

    #[test]
    fn primes() {
        for p in [2u64, 3, 53, 59, 607, 613, 617, 641, 7681, 65537] {
            assert!(is_probable_prime(&BigUint::from(p)), "{p}");
        }
        // Carmichael numbers and small composites
        for n in [0u64, 1, 4, 561, 1105, 41041, 3215031751, 600] {
            assert!(!is_probable_prime(&BigUint::from(n)), "{n}");
        }
    }

    #[test]
    fn large_primes() {
        let p25519 = (BigUint::from(1u32) << 255u32) - 19u32;
        assert!(is_probable_prime(&p25519));
        assert!(!is_probable_prime(&(p25519 + 2u32)));
    }

    #[test]
    fn reduce_negative() {
        let m = BigUint::from(53u32);
        assert_eq!(reduce(&BigInt::from(-1), &m), BigUint::from(52u32));
        assert_eq!(reduce(&BigInt::from(106), &m), BigUint::from(0u32));
    }
}
