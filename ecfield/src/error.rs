//! Error types.

use core::fmt;

/// Field construction and parsing errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus is not a (probable) prime.
    ModulusNotPrime,

    /// The modulus is prime but the requested field cannot be built over it.
    UnsupportedModulus,

    /// A textual integer could not be parsed.
    MalformedInteger,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ModulusNotPrime => f.write_str("modulus is not prime"),
            Error::UnsupportedModulus => f.write_str("modulus not supported by this field"),
            Error::MalformedInteger => f.write_str("malformed integer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
