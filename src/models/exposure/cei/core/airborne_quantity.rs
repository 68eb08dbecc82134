//! Airborne quantity (AQ) of a release.
//!
//! Dispatches on [`ReleaseType`] to the gas or liquid sub-model.

mod gas;
mod liquid;

pub use gas::gas_airborne_quantity;
pub use liquid::{
    LiquidRelease, PoolFormation, flash_fraction, liquid_airborne_quantity, liquid_release,
    release_rate,
};

use uom::{ConstZero, si::f64::MassRate};

use crate::support::{constants::CeiParameters, diagnostics::Diagnostics};

use super::{ProcessVariables, ReleaseType};

/// Airborne quantity for a release of the given type.
#[must_use]
pub fn airborne_quantity(
    params: &CeiParameters,
    release: ReleaseType,
    vars: &ProcessVariables,
) -> MassRate {
    match release {
        ReleaseType::Gas => gas_airborne_quantity(params, vars),
        ReleaseType::Liquid => liquid_airborne_quantity(params, vars),
    }
}

/// Airborne quantity for a raw release type selector code.
///
/// An unrecognized code is not an error: a warning goes to `diagnostics`
/// and the result is `fallback`, or zero when no fallback is given.
#[must_use]
pub fn airborne_quantity_from_code(
    params: &CeiParameters,
    code: i64,
    vars: &ProcessVariables,
    fallback: Option<MassRate>,
    diagnostics: &impl Diagnostics,
) -> MassRate {
    match ReleaseType::from_code(code) {
        Ok(release) => airborne_quantity(params, release, vars),
        Err(err) => {
            diagnostics.warn(&format!("{err}; using fallback airborne quantity"));
            fallback.unwrap_or(MassRate::ZERO)
        }
    }
}
