use uom::si::{
    f64::{
        Area, Length, Mass, MassDensity, MolarMass, Pressure, ThermodynamicTemperature,
    },
    pressure::kilopascal,
};

use crate::support::{
    constants::CeiParameters,
    units::{InverseTemperature, per_kelvin},
};

/// Process conditions of a hazardous material at the release point.
///
/// Fields are plain [`uom`] quantities and are not validated. Non-physical
/// values (a negative density, a temperature below the method's absolute
/// zero) propagate through the formulas as `NaN`.
///
/// Three fields are optional and have documented defaults:
///
/// - `atmospheric_pressure`: [`STANDARD_ATMOSPHERE_KPA`](crate::support::constants::STANDARD_ATMOSPHERE_KPA)
/// - `diked_area`: the pool area is derived from the pooled mass
/// - `heat_capacity_ratio`: [`DEFAULT_HEAT_CAPACITY_RATIO`](crate::support::constants::DEFAULT_HEAT_CAPACITY_RATIO)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessVariables {
    /// Gauge pressure of the contained material (`P_g`).
    pub gauge_pressure: Pressure,

    /// Ambient atmospheric pressure (`P_a`).
    pub atmospheric_pressure: Option<Pressure>,

    /// Vapor pressure at operating or ambient conditions (`P_v`).
    pub vapor_pressure: Pressure,

    /// Operating temperature (`T`).
    pub temperature: ThermodynamicTemperature,

    /// Normal boiling point (`T_b`).
    pub boiling_point: ThermodynamicTemperature,

    /// Ambient temperature (`T_a`).
    pub ambient_temperature: ThermodynamicTemperature,

    pub molecular_weight: MolarMass,

    /// Liquid head above the release point.
    pub liquid_height: Length,

    /// Liquid density.
    pub density: MassDensity,

    /// Release point diameter.
    pub diameter: Length,

    /// Total mass that could be released.
    pub inventory: Mass,

    /// Area of a containment dike, if any.
    pub diked_area: Option<Area>,

    /// Ratio of heat capacity to latent heat of vaporization (`Cp / ΔHv`).
    pub heat_capacity_ratio: Option<InverseTemperature>,
}

impl ProcessVariables {
    /// Returns a copy with the given atmospheric pressure.
    #[must_use]
    pub fn with_atmospheric_pressure(self, pressure: Pressure) -> Self {
        Self {
            atmospheric_pressure: Some(pressure),
            ..self
        }
    }

    /// Returns a copy with the given diked area.
    #[must_use]
    pub fn with_diked_area(self, area: Area) -> Self {
        Self {
            diked_area: Some(area),
            ..self
        }
    }

    /// Returns a copy with the given `Cp / ΔHv` ratio.
    #[must_use]
    pub fn with_heat_capacity_ratio(self, ratio: InverseTemperature) -> Self {
        Self {
            heat_capacity_ratio: Some(ratio),
            ..self
        }
    }

    /// Atmospheric pressure, or the parameter table's standard atmosphere.
    #[must_use]
    pub fn atmospheric_pressure_or_default(&self, params: &CeiParameters) -> Pressure {
        self.atmospheric_pressure
            .unwrap_or_else(|| Pressure::new::<kilopascal>(params.atmospheric_pressure))
    }

    /// `Cp / ΔHv` ratio, or the parameter table's default.
    #[must_use]
    pub fn heat_capacity_ratio_or_default(&self, params: &CeiParameters) -> InverseTemperature {
        self.heat_capacity_ratio
            .unwrap_or_else(|| per_kelvin(params.default_heat_capacity_ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    use crate::models::exposure::cei::core::test_support::butadiene;

    #[test]
    fn defaults_apply_when_absent() {
        let vars = butadiene();
        let params = CeiParameters::DOW;

        assert_relative_eq!(
            vars.atmospheric_pressure_or_default(&params)
                .get::<kilopascal>(),
            101.325,
            epsilon = 1e-9
        );
        assert_relative_eq!(vars.heat_capacity_ratio_or_default(&params).value, 0.0044);
        assert!(vars.diked_area.is_none());
    }

    #[test]
    fn supplied_values_win() {
        let vars = butadiene()
            .with_atmospheric_pressure(Pressure::new::<kilopascal>(95.0))
            .with_heat_capacity_ratio(per_kelvin(0.00545))
            .with_diked_area(Area::new::<square_meter>(50.0));
        let params = CeiParameters::DOW;

        assert_relative_eq!(
            vars.atmospheric_pressure_or_default(&params)
                .get::<kilopascal>(),
            95.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(vars.heat_capacity_ratio_or_default(&params).value, 0.00545);
        assert_eq!(vars.diked_area, Some(Area::new::<square_meter>(50.0)));
    }
}
