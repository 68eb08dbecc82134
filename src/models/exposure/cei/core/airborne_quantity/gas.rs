//! Airborne quantity for a gas release.

use uom::si::{
    f64::MassRate, mass_rate::kilogram_per_second, molar_mass::gram_per_mole,
    pressure::kilopascal, thermodynamic_temperature::degree_celsius,
};

use crate::{models::exposure::cei::core::ProcessVariables, support::constants::CeiParameters};

/// Gas release rate through the release point.
///
/// `AQ = 4.571e-6 · P_abs · sqrt(mw / (T + 273))`, with `P_abs = P_g + P_a`
/// in kPa and `T` in °C. Requires `T + 273 > 0` and `mw ≥ 0`; otherwise the
/// result is `NaN`.
#[must_use]
pub fn gas_airborne_quantity(params: &CeiParameters, vars: &ProcessVariables) -> MassRate {
    let p_abs = (vars.gauge_pressure + vars.atmospheric_pressure_or_default(params))
        .get::<kilopascal>();
    let mw = vars.molecular_weight.get::<gram_per_mole>();
    let t = vars.temperature.get::<degree_celsius>() + params.kelvin_offset;

    MassRate::new::<kilogram_per_second>(params.gas_release_coefficient * p_abs * (mw / t).sqrt())
}
