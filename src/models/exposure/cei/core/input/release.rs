use crate::models::exposure::cei::core::{ProcessVariables, UnknownReleaseType};

/// Phase of the material as it leaves the equipment.
///
/// Selects which airborne quantity sub-model applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Liquid,
    Gas,
}

impl ReleaseType {
    /// Selector code for a liquid release.
    pub const LIQUID_CODE: i64 = 0;

    /// Selector code for a gas release.
    pub const GAS_CODE: i64 = 1;

    /// Maps a raw selector code to a release type.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownReleaseType`] for any code other than
    /// [`LIQUID_CODE`](Self::LIQUID_CODE) or [`GAS_CODE`](Self::GAS_CODE).
    pub fn from_code(code: i64) -> Result<Self, UnknownReleaseType> {
        match code {
            Self::LIQUID_CODE => Ok(Self::Liquid),
            Self::GAS_CODE => Ok(Self::Gas),
            _ => Err(UnknownReleaseType { code }),
        }
    }

    /// Returns the selector code for this release type.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Liquid => Self::LIQUID_CODE,
            Self::Gas => Self::GAS_CODE,
        }
    }
}

impl TryFrom<i64> for ReleaseType {
    type Error = UnknownReleaseType;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// A release scenario: what leaves the equipment and under which conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub kind: ReleaseType,
    pub vars: ProcessVariables,
}

impl Release {
    #[must_use]
    pub fn new(kind: ReleaseType, vars: ProcessVariables) -> Self {
        Self { kind, vars }
    }

    #[must_use]
    pub fn liquid(vars: ProcessVariables) -> Self {
        Self::new(ReleaseType::Liquid, vars)
    }

    #[must_use]
    pub fn gas(vars: ProcessVariables) -> Self {
        Self::new(ReleaseType::Gas, vars)
    }
}
