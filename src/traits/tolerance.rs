use crate::errors::LipidQueryError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Maximum relative deviation, in parts per million, accepted when
/// comparing an observed mass difference against an expected one.
///
/// Negative tolerances cannot be represented. Building one from a signed
/// integer (which is also what happens when reading it from a config file)
/// fails with [`LipidQueryError::NegativeTolerance`].
///
/// Example:
/// ```
/// use lipidquery::PpmTolerance;
///
/// let tol = PpmTolerance::try_from(10i64).unwrap();
/// assert!(tol.accepts(10));
/// assert!(!tol.accepts(11));
/// assert!(PpmTolerance::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PpmTolerance(u32);

impl PpmTolerance {
    pub const fn new(ppm: u32) -> Self {
        Self(ppm)
    }

    pub const fn ppm(&self) -> u32 {
        self.0
    }

    /// Whether a rounded ppm deviation falls within this tolerance.
    pub fn accepts(&self, ppm: u64) -> bool {
        ppm <= u64::from(self.0)
    }
}

impl Default for PpmTolerance {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<i64> for PpmTolerance {
    type Error = LipidQueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(LipidQueryError::NegativeTolerance(value));
        }
        // Anything above u32::MAX ppm accepts every finite deviation anyway.
        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }
}

impl From<PpmTolerance> for i64 {
    fn from(value: PpmTolerance) -> Self {
        i64::from(value.0)
    }
}

impl Display for PpmTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ppm", self.0)
    }
}
