//! Dow Chemical Exposure Index computation.
//!
//! A release is scored in one direction only:
//!
//! ```text
//! ProcessVariables + ReleaseType -> AQ -> CEI
//!                                     \-> hazard distance per ERPG level
//! ```
//!
//! Every function here is a pure closed-form transform of its inputs and the
//! [`CeiParameters`](crate::support::constants::CeiParameters) table.
//! Nothing is validated: a non-physical input shows up as `NaN` in the
//! result.

mod airborne_quantity;
mod assessment;
mod error;
mod input;
mod scoring;

#[cfg(test)]
mod test_support;

pub use airborne_quantity::{
    LiquidRelease, PoolFormation, airborne_quantity, airborne_quantity_from_code, flash_fraction,
    gas_airborne_quantity, liquid_airborne_quantity, liquid_release, release_rate,
};
pub use assessment::{Assessment, assess};
pub use error::{InvalidHazardLevel, UnknownReleaseType};
pub use input::{ProcessVariables, Release, ReleaseType};
pub use scoring::{HazardDistances, HazardLevel, chemical_exposure_index, hazard_distance};

use uom::si::{
    f64::{Length, Mass, MassDensity, MolarMass, Pressure, ThermodynamicTemperature},
    length::{inch, meter},
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    molar_mass::gram_per_mole,
    pressure::kilopascal,
    thermodynamic_temperature::degree_celsius,
};

/// Process variables of the worked example: 200 kg of 1,3-butadiene held at
/// 2300 kPa gauge and 25 °C, released through a 2 in opening under 1.9 m of
/// liquid head.
///
/// No optional field is set, so every default applies.
#[must_use]
pub fn reference_scenario() -> ProcessVariables {
    ProcessVariables {
        gauge_pressure: Pressure::new::<kilopascal>(2300.0),
        atmospheric_pressure: None,
        vapor_pressure: Pressure::new::<kilopascal>(101.325),
        temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        boiling_point: ThermodynamicTemperature::new::<degree_celsius>(-4.4),
        ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        molecular_weight: MolarMass::new::<gram_per_mole>(54.09),
        liquid_height: Length::new::<meter>(1.9),
        density: MassDensity::new::<kilogram_per_cubic_meter>(614.9),
        diameter: Length::new::<inch>(2.0),
        inventory: Mass::new::<kilogram>(200.0),
        diked_area: None,
        heat_capacity_ratio: None,
    }
}
