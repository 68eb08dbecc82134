//! Fixed parameters of the Dow Chemical Exposure Index method.
//!
//! Each value is available as a named constant and, grouped, as the
//! immutable [`CeiParameters::DOW`] table the formulas read from.
//! Values are expressed in the engineering units the correlations were
//! fitted in (kPa, °C, inches, kg, kg/s, mg/m³, m).

/// Standard atmospheric pressure substituted when `P_a` is absent, kPa.
pub const STANDARD_ATMOSPHERE_KPA: f64 = 101.325;

/// Offset from °C to K used by the correlations.
///
/// The method uses 273 rather than 273.15.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Gravitational acceleration used for liquid head, m/s².
pub const GRAVITY: f64 = 9.81;

/// Inch to millimeter conversion for release diameters.
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Gas release coefficient (kPa, g/mol, K → kg/s).
pub const GAS_RELEASE_COEFFICIENT: f64 = 4.571e-6;

/// Liquid release coefficient (mm, kg/m³, m²/s² → kg/s).
pub const LIQUID_RELEASE_COEFFICIENT: f64 = 9.44e-7;

/// Default `Cp / ΔHv` ratio when none is supplied, 1/K.
pub const DEFAULT_HEAT_CAPACITY_RATIO: f64 = 0.0044;

/// Flash fraction at or above which the release is treated as all airborne.
pub const FLASH_CUTOFF: f64 = 0.2;

/// Multiplier on the flash fraction accounting for entrained aerosol.
pub const FLASH_MULTIPLIER: f64 = 5.0;

/// Longest credible release duration, s.
pub const MAX_RELEASE_DURATION_S: f64 = 900.0;

/// Pool area per pooled volume, 1/m (a 1 cm deep pool).
pub const POOL_DEPTH_FACTOR: f64 = 100.0;

/// Pool evaporation coefficient.
pub const EVAPORATION_COEFFICIENT: f64 = 9.0e-4;

/// Exponent applied to the pool area in the evaporation correlation.
pub const EVAPORATION_EXPONENT: f64 = 0.95;

/// ERPG concentrations for levels 1, 2 and 3, mg/m³.
pub const EPRG: [f64; 3] = [22.0, 111.0, 11_060.0];

/// Coefficient of the CEI correlation.
pub const CEI_COEFFICIENT: f64 = 655.1;

/// Upper bound reported for the CEI.
pub const CEI_CAP: f64 = 1000.0;

/// Coefficient of the hazard distance correlation, m.
pub const DISTANCE_COEFFICIENT: f64 = 6551.0;

/// Upper bound reported for a hazard distance, m.
pub const HAZARD_DISTANCE_CAP_M: f64 = 10_000.0;

/// The parameter table used by every exposure formula.
///
/// The table is built once as a constant and has no mutation path; callers
/// get it through [`CeiParameters::DOW`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeiParameters {
    pub(crate) atmospheric_pressure: f64,
    pub(crate) kelvin_offset: f64,
    pub(crate) gravity: f64,
    pub(crate) millimeters_per_inch: f64,
    pub(crate) gas_release_coefficient: f64,
    pub(crate) liquid_release_coefficient: f64,
    pub(crate) default_heat_capacity_ratio: f64,
    pub(crate) flash_cutoff: f64,
    pub(crate) flash_multiplier: f64,
    pub(crate) max_release_duration: f64,
    pub(crate) pool_depth_factor: f64,
    pub(crate) evaporation_coefficient: f64,
    pub(crate) evaporation_exponent: f64,
    pub(crate) eprg: [f64; 3],
    pub(crate) cei_coefficient: f64,
    pub(crate) cei_cap: f64,
    pub(crate) distance_coefficient: f64,
    pub(crate) distance_cap: f64,
}

impl CeiParameters {
    /// Parameters as published with the Dow CEI guide.
    pub const DOW: Self = Self {
        atmospheric_pressure: STANDARD_ATMOSPHERE_KPA,
        kelvin_offset: KELVIN_OFFSET,
        gravity: GRAVITY,
        millimeters_per_inch: MILLIMETERS_PER_INCH,
        gas_release_coefficient: GAS_RELEASE_COEFFICIENT,
        liquid_release_coefficient: LIQUID_RELEASE_COEFFICIENT,
        default_heat_capacity_ratio: DEFAULT_HEAT_CAPACITY_RATIO,
        flash_cutoff: FLASH_CUTOFF,
        flash_multiplier: FLASH_MULTIPLIER,
        max_release_duration: MAX_RELEASE_DURATION_S,
        pool_depth_factor: POOL_DEPTH_FACTOR,
        evaporation_coefficient: EVAPORATION_COEFFICIENT,
        evaporation_exponent: EVAPORATION_EXPONENT,
        eprg: EPRG,
        cei_coefficient: CEI_COEFFICIENT,
        cei_cap: CEI_CAP,
        distance_coefficient: DISTANCE_COEFFICIENT,
        distance_cap: HAZARD_DISTANCE_CAP_M,
    };

    /// Returns the ERPG concentration for a level index in `0..3`, mg/m³.
    #[must_use]
    pub(crate) fn eprg_at(&self, index: usize) -> f64 {
        self.eprg[index]
    }

    /// Returns the ERPG concentrations for levels 1, 2 and 3, mg/m³.
    #[must_use]
    pub fn eprg(&self) -> [f64; 3] {
        self.eprg
    }
}

impl Default for CeiParameters {
    fn default() -> Self {
        Self::DOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dow() {
        assert_eq!(CeiParameters::default(), CeiParameters::DOW);
    }

    #[test]
    fn eprg_increases_with_level() {
        let [one, two, three] = CeiParameters::DOW.eprg();
        assert!(one < two && two < three);
        assert_eq!(CeiParameters::DOW.eprg_at(1), 111.0);
    }
}
