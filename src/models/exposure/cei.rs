//! Dow Chemical Exposure Index (CEI) model.
//!
//! [`ChemicalExposure`] scores a [`Release`] into an [`Assessment`]: the
//! airborne quantity, the CEI, and the distance to each ERPG concentration.
//! It implements [`twine_core::Model`] as a thin adapter over the internal
//! `core` module, which also backs the free functions re-exported here.
//!
//! # Example
//!
//! ```
//! use cei_models::models::exposure::cei::{
//!     ChemicalExposure, HazardLevel, Release, reference_scenario,
//! };
//! use uom::si::{length::meter, mass_rate::kilogram_per_second};
//!
//! let model = ChemicalExposure::dow();
//! let assessment = model.assess(&Release::liquid(reference_scenario()));
//!
//! assert!(assessment.airborne_quantity.get::<kilogram_per_second>() > 0.0);
//! assert!(assessment.cei <= 1000.0);
//! assert!(assessment.hazard_distances.get(HazardLevel::One).get::<meter>() <= 10_000.0);
//! ```

mod core;

pub use self::core::{
    Assessment, HazardDistances, HazardLevel, InvalidHazardLevel, LiquidRelease, PoolFormation,
    ProcessVariables, Release, ReleaseType, UnknownReleaseType, airborne_quantity,
    airborne_quantity_from_code, assess, chemical_exposure_index, flash_fraction,
    gas_airborne_quantity, hazard_distance, liquid_airborne_quantity, liquid_release,
    reference_scenario, release_rate,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Length, MassRate};

use crate::support::{constants::CeiParameters, diagnostics::Diagnostics};

/// Chemical Exposure Index model bound to a parameter table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChemicalExposure {
    params: CeiParameters,
}

impl ChemicalExposure {
    /// Model using [`CeiParameters::DOW`].
    #[must_use]
    pub fn dow() -> Self {
        Self {
            params: CeiParameters::DOW,
        }
    }

    /// Airborne quantity of a release.
    #[must_use]
    pub fn airborne_quantity(&self, kind: ReleaseType, vars: &ProcessVariables) -> MassRate {
        airborne_quantity(&self.params, kind, vars)
    }

    /// Airborne quantity for a raw release type code.
    ///
    /// Unknown codes produce a warning and `fallback` (or zero).
    /// See [`airborne_quantity_from_code`].
    #[must_use]
    pub fn airborne_quantity_from_code(
        &self,
        code: i64,
        vars: &ProcessVariables,
        fallback: Option<MassRate>,
        diagnostics: &impl Diagnostics,
    ) -> MassRate {
        airborne_quantity_from_code(&self.params, code, vars, fallback, diagnostics)
    }

    /// Chemical Exposure Index of an airborne quantity.
    #[must_use]
    pub fn cei(&self, aq: MassRate) -> f64 {
        chemical_exposure_index(&self.params, aq)
    }

    /// Hazard distance of an airborne quantity at one ERPG level.
    #[must_use]
    pub fn hazard_distance(&self, aq: MassRate, level: HazardLevel) -> Length {
        hazard_distance(&self.params, aq, level)
    }

    /// Full assessment of a release.
    #[must_use]
    pub fn assess(&self, release: &Release) -> Assessment {
        assess(&self.params, release.kind, &release.vars)
    }
}

impl Model for ChemicalExposure {
    type Input = Release;
    type Output = Assessment;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.assess(input))
    }
}
