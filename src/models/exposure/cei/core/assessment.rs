use uom::si::{f64::MassRate, length::meter, mass_rate::kilogram_per_second};

use crate::support::{constants::CeiParameters, diagnostics::Diagnostics};

use super::{
    HazardDistances, HazardLevel, ProcessVariables, ReleaseType, airborne_quantity,
    chemical_exposure_index,
};

/// Exposure results for one release scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub airborne_quantity: MassRate,
    pub cei: f64,
    pub hazard_distances: HazardDistances,
}

impl Assessment {
    /// Scores an airborne quantity.
    #[must_use]
    pub fn from_airborne_quantity(params: &CeiParameters, aq: MassRate) -> Self {
        Self {
            airborne_quantity: aq,
            cei: chemical_exposure_index(params, aq),
            hazard_distances: HazardDistances::new(params, aq),
        }
    }

    /// Records the results as separate labeled events, one per value, in
    /// this order: `AQ` (kg/s), `CEI`, `HD1`, `HD2`, `HD3` (m).
    pub fn report(&self, diagnostics: &impl Diagnostics) {
        diagnostics.record("AQ", self.airborne_quantity.get::<kilogram_per_second>());
        diagnostics.record("CEI", self.cei);
        for (level, distance) in self.hazard_distances.iter() {
            diagnostics.record(hazard_label(level), distance.get::<meter>());
        }
    }
}

fn hazard_label(level: HazardLevel) -> &'static str {
    match level {
        HazardLevel::One => "HD1",
        HazardLevel::Two => "HD2",
        HazardLevel::Three => "HD3",
    }
}

/// Computes the airborne quantity for a release and scores it.
#[must_use]
pub fn assess(params: &CeiParameters, release: ReleaseType, vars: &ProcessVariables) -> Assessment {
    Assessment::from_airborne_quantity(params, airborne_quantity(params, release, vars))
}
