use thiserror::Error;

/// A release type selector code that names no known release type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown release type: {code}")]
pub struct UnknownReleaseType {
    pub code: i64,
}

/// A hazard level outside `1..=3`.
///
/// Hazard distances are only defined for the three ERPG levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hazard level must be 1, 2, or 3; got {level}")]
pub struct InvalidHazardLevel {
    pub level: u8,
}
