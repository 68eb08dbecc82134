//! Fire and explosion index formulas used alongside the exposure index.
//!
//! These are independent of the airborne quantity pipeline. They follow the
//! Dow Fire and Explosion Index (F&EI) guide, where radii and areas are
//! reported in feet.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::foot,
};

use crate::support::numeric;

/// Upper bound of the process unit hazard factor.
pub const MAX_PROCESS_UNIT_HAZARD: f64 = 8.0;

/// Exposure radius per unit of fire and explosion index, ft.
pub const EXPOSURE_RADIUS_PER_INDEX: f64 = 0.84;

/// Equipment diameter below which a fixed rupture diameter is used, in.
pub const SMALL_EQUIPMENT_DIAMETER_IN: f64 = 4.0;

/// Rupture diameter assumed for small equipment, in.
pub const SMALL_EQUIPMENT_RUPTURE_IN: f64 = 2.0;

/// Fraction of the cross section assumed to open on rupture.
pub const RUPTURE_FRACTION: f64 = 0.2;

/// Kind of equipment a release originates from.
///
/// Accepted by [`rupture_diameter`] but does not change its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Vessel,
    Pipe,
    PressureReliefDevice,
}

/// Process unit hazard factor `F3 = min(8, F1·F2)`.
#[must_use]
pub fn process_unit_hazard(general: f64, special: f64) -> f64 {
    numeric::min(general * special, MAX_PROCESS_UNIT_HAZARD)
}

/// Fire and explosion index `F&EI = F3·MF`.
#[must_use]
pub fn fire_explosion_index(unit_hazard: f64, material_factor: f64) -> f64 {
    unit_hazard * material_factor
}

/// Radius of exposure for a fire and explosion index, `0.84·F&EI` ft.
#[must_use]
pub fn exposure_radius(fei: f64) -> Length {
    Length::new::<foot>(fei * EXPOSURE_RADIUS_PER_INDEX)
}

/// Area of exposure, the circle swept by [`exposure_radius`].
#[must_use]
pub fn exposure_area(fei: f64) -> Area {
    let radius = exposure_radius(fei);
    PI * radius * radius
}

/// Rupture size for equipment with a diameter given in inches.
///
/// Equipment under 4 in uses a fixed 2 in rupture. Larger equipment uses
/// 20% of its cross section, `(d/2)²·π·0.2`, as the rupture opening.
/// The `equipment` kind does not change the result.
#[must_use]
pub fn rupture_diameter(d: f64, _equipment: EquipmentType) -> f64 {
    if d < SMALL_EQUIPMENT_DIAMETER_IN {
        return SMALL_EQUIPMENT_RUPTURE_IN;
    }
    (d / 2.0).powi(2) * PI * RUPTURE_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_foot;

    #[test]
    fn unit_hazard_is_capped() {
        assert_relative_eq!(process_unit_hazard(2.0, 3.0), 6.0);
        assert_relative_eq!(process_unit_hazard(3.0, 4.0), 8.0);
    }

    #[test]
    fn fire_explosion_index_is_a_product() {
        let f3 = process_unit_hazard(1.5, 2.0);
        assert_relative_eq!(fire_explosion_index(f3, 24.0), 72.0);
    }

    #[test]
    fn exposure_area_is_a_circle() {
        assert_relative_eq!(exposure_radius(100.0).get::<foot>(), 84.0, epsilon = 1e-9);
        assert_relative_eq!(
            exposure_area(100.0).get::<square_foot>(),
            PI * 84.0 * 84.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(exposure_area(0.0).get::<square_foot>(), 0.0);
    }

    #[test]
    fn small_equipment_uses_fixed_rupture() {
        assert_relative_eq!(rupture_diameter(3.9, EquipmentType::Pipe), 2.0);
        assert_relative_eq!(rupture_diameter(0.5, EquipmentType::Vessel), 2.0);
    }

    #[test]
    fn large_equipment_uses_fraction_of_cross_section() {
        assert_relative_eq!(
            rupture_diameter(10.0, EquipmentType::Vessel),
            25.0 * PI * 0.2,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rupture_diameter(4.0, EquipmentType::Vessel),
            4.0 * PI * 0.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn equipment_kind_does_not_change_rupture() {
        let d = 6.0;
        let vessel = rupture_diameter(d, EquipmentType::Vessel);
        assert_eq!(vessel, rupture_diameter(d, EquipmentType::Pipe));
        assert_eq!(
            vessel,
            rupture_diameter(d, EquipmentType::PressureReliefDevice)
        );
    }
}
