//! Error types.

use crate::Model;
use core::fmt;

/// Curve and point construction errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The underlying field could not be constructed.
    Field(ecfield::Error),

    /// The curve coefficients violate the non-singularity condition of the
    /// model.
    SingularCurve(Model),

    /// The coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// A model conversion divides by 2 or 3 in a field of that
    /// characteristic.
    UnsupportedCharacteristic,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::SingularCurve(model) => write!(f, "singular {model} curve"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::UnsupportedCharacteristic => {
                f.write_str("conversion not defined in this characteristic")
            }
        }
    }
}

impl From<ecfield::Error> for Error {
    fn from(err: ecfield::Error) -> Error {
        Error::Field(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
