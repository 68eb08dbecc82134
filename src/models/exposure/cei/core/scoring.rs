//! Chemical Exposure Index and hazard distances from an airborne quantity.

use uom::si::{f64::Length, f64::MassRate, length::meter, mass_rate::kilogram_per_second};

use crate::support::{constants::CeiParameters, numeric};

use super::InvalidHazardLevel;

/// ERPG severity level.
///
/// Level 1 has the lowest concentration threshold and so the longest
/// hazard distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardLevel {
    One,
    Two,
    Three,
}

impl HazardLevel {
    /// All levels in ascending severity threshold.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Returns the level number, 1 through 3.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<u8> for HazardLevel {
    type Error = InvalidHazardLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(InvalidHazardLevel { level }),
        }
    }
}

/// Chemical Exposure Index, `min(1000, 655.1 · sqrt(AQ / ERPG-2))`.
///
/// `AQ` is in kg/s and ERPG-2 in mg/m³.
#[must_use]
pub fn chemical_exposure_index(params: &CeiParameters, aq: MassRate) -> f64 {
    let aq = aq.get::<kilogram_per_second>();
    let eprg_2 = params.eprg_at(HazardLevel::Two.index());
    numeric::min(params.cei_coefficient * (aq / eprg_2).sqrt(), params.cei_cap)
}

/// Distance to the ERPG concentration of `level`,
/// `min(10000 m, 6551 m · sqrt(AQ / ERPG))`.
#[must_use]
pub fn hazard_distance(params: &CeiParameters, aq: MassRate, level: HazardLevel) -> Length {
    let aq = aq.get::<kilogram_per_second>();
    let eprg = params.eprg_at(level.index());
    Length::new::<meter>(numeric::min(
        params.distance_coefficient * (aq / eprg).sqrt(),
        params.distance_cap,
    ))
}

/// Hazard distances at each ERPG level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardDistances([Length; 3]);

impl HazardDistances {
    /// Computes the distance at every level.
    #[must_use]
    pub fn new(params: &CeiParameters, aq: MassRate) -> Self {
        Self(HazardLevel::ALL.map(|level| hazard_distance(params, aq, level)))
    }

    /// Distance at `level`.
    #[must_use]
    pub fn get(&self, level: HazardLevel) -> Length {
        self.0[level.index()]
    }

    /// Iterates over `(level, distance)` pairs in level order.
    pub fn iter(&self) -> impl Iterator<Item = (HazardLevel, Length)> + '_ {
        HazardLevel::ALL.into_iter().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const PARAMS: CeiParameters = CeiParameters::DOW;

    fn aq(kg_per_s: f64) -> MassRate {
        MassRate::new::<kilogram_per_second>(kg_per_s)
    }

    #[test]
    fn cei_follows_correlation() {
        assert_relative_eq!(
            chemical_exposure_index(&PARAMS, aq(5.0)),
            655.1 * (5.0_f64 / 111.0).sqrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(chemical_exposure_index(&PARAMS, aq(0.0)), 0.0);
    }

    #[test]
    fn cei_is_capped() {
        assert_relative_eq!(chemical_exposure_index(&PARAMS, aq(1.0e6)), 1000.0);
        // 655.1·sqrt(AQ/111) reaches 1000 at AQ ≈ 258.6 kg/s.
        assert_relative_eq!(chemical_exposure_index(&PARAMS, aq(259.0)), 1000.0);
        assert!(chemical_exposure_index(&PARAMS, aq(258.0)) < 1000.0);
    }

    #[test]
    fn hazard_distance_follows_correlation() {
        let d = hazard_distance(&PARAMS, aq(0.5), HazardLevel::Three);
        assert_relative_eq!(
            d.get::<meter>(),
            6551.0 * (0.5_f64 / 11_060.0).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn hazard_distance_is_capped() {
        for level in HazardLevel::ALL {
            let d = hazard_distance(&PARAMS, aq(1.0e9), level);
            assert_relative_eq!(d.get::<meter>(), 10_000.0);
        }
    }

    #[test]
    fn scores_are_monotonic_in_airborne_quantity() {
        let samples = [0.0, 1e-4, 0.01, 0.5, 3.0, 50.0, 300.0, 5_000.0, 1e7];
        for pair in samples.windows(2) {
            let (lo, hi) = (aq(pair[0]), aq(pair[1]));
            assert!(chemical_exposure_index(&PARAMS, lo) <= chemical_exposure_index(&PARAMS, hi));
            for level in HazardLevel::ALL {
                assert!(hazard_distance(&PARAMS, lo, level) <= hazard_distance(&PARAMS, hi, level));
            }
        }
    }

    #[test]
    fn lower_levels_reach_further() {
        for kg_per_s in [1e-3, 0.2, 4.0, 80.0, 1e6] {
            let distances = HazardDistances::new(&PARAMS, aq(kg_per_s));
            assert!(distances.get(HazardLevel::One) >= distances.get(HazardLevel::Two));
            assert!(distances.get(HazardLevel::Two) >= distances.get(HazardLevel::Three));
        }
    }

    #[test]
    fn distances_iterate_in_level_order() {
        let distances = HazardDistances::new(&PARAMS, aq(1.0));
        let levels: Vec<u8> = distances.iter().map(|(level, _)| level.number()).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(
            distances.iter().nth(1).map(|(_, d)| d),
            Some(hazard_distance(&PARAMS, aq(1.0), HazardLevel::Two))
        );
    }

    #[test]
    fn levels_outside_one_to_three_are_rejected() {
        assert_eq!(HazardLevel::try_from(2), Ok(HazardLevel::Two));
        assert_eq!(
            HazardLevel::try_from(4),
            Err(InvalidHazardLevel { level: 4 })
        );
        assert_eq!(
            HazardLevel::try_from(0),
            Err(InvalidHazardLevel { level: 0 })
        );
    }

    #[test]
    fn nan_airborne_quantity_is_not_capped_away() {
        assert!(chemical_exposure_index(&PARAMS, aq(f64::NAN)).is_nan());
        assert!(
            hazard_distance(&PARAMS, aq(f64::NAN), HazardLevel::One)
                .get::<meter>()
                .is_nan()
        );
    }
}
