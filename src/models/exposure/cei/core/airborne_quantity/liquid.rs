//! Airborne quantity for a liquid release.
//!
//! A liquid release is evaluated in stages:
//!
//! 1. The release rate `L` through the release point under pressure and
//!    liquid head.
//! 2. The flash fraction `F_v` from the superheat above the boiling point.
//!    At `F_v ≥ 0.2` the whole release is taken as airborne and no pool forms.
//! 3. Otherwise the mass released over at most 900 s (bounded by the
//!    inventory) splits into an immediate flash, entrained five-fold, and a
//!    pool that evaporates at a rate set by its area and temperature.
//!
//! The airborne quantity is the flash plus pool evaporation, never more
//! than `L`.

use uom::si::{
    area::square_meter,
    f64::{Area, Mass, MassRate, Ratio, ThermodynamicTemperature},
    length::{inch, meter},
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    molar_mass::gram_per_mole,
    pressure::kilopascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::exposure::cei::core::ProcessVariables,
    support::{constants::CeiParameters, numeric, units::TemperatureDifference},
};

/// Stages of a liquid release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiquidRelease {
    /// The flash fraction reached the cutoff; everything released is airborne.
    Flashing {
        release_rate: MassRate,
        flash_fraction: Ratio,
    },

    /// Part of the release collects in a pool.
    Pooling(PoolFormation),
}

impl LiquidRelease {
    /// Release rate `L` through the release point.
    #[must_use]
    pub fn release_rate(&self) -> MassRate {
        match self {
            Self::Flashing { release_rate, .. } => *release_rate,
            Self::Pooling(pool) => pool.release_rate,
        }
    }

    /// Flash fraction `F_v`.
    #[must_use]
    pub fn flash_fraction(&self) -> Ratio {
        match self {
            Self::Flashing { flash_fraction, .. } => *flash_fraction,
            Self::Pooling(pool) => pool.flash_fraction,
        }
    }

    /// Airborne quantity of the release.
    #[must_use]
    pub fn airborne(&self) -> MassRate {
        match self {
            Self::Flashing { release_rate, .. } => *release_rate,
            Self::Pooling(pool) => pool.airborne(),
        }
    }
}

/// Intermediate results for a release that forms a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolFormation {
    pub release_rate: MassRate,
    pub flash_fraction: Ratio,

    /// Mass released over the release window, `min(900·L, inventory)`.
    pub total_released: Mass,

    /// Mass left in the pool after the flash, `w_T·(1 - 5·F_v)`.
    pub pooled_mass: Mass,

    /// Diked area, or the area of a 1 cm deep pool.
    pub pool_area: Area,

    /// Temperature the pool evaporates at, `min(T_b, max(T, T_a))`.
    pub pool_temperature: ThermodynamicTemperature,

    /// Airborne contribution of the flash, `5·F_v·L`.
    pub flash_airborne: MassRate,

    /// Airborne contribution of pool evaporation.
    pub pool_airborne: MassRate,
}

impl PoolFormation {
    /// Flash plus pool evaporation, capped at the release rate.
    #[must_use]
    pub fn airborne(&self) -> MassRate {
        let total = self.flash_airborne + self.pool_airborne;
        MassRate::new::<kilogram_per_second>(numeric::min(
            total.get::<kilogram_per_second>(),
            self.release_rate.get::<kilogram_per_second>(),
        ))
    }
}

/// Liquid release rate `L = 9.44e-7 · (25.4·d)² · ρ · sqrt(1000·P_g/ρ + 9.81·h)`.
///
/// `d` is in inches, `P_g` in kPa, `ρ` in kg/m³ and `h` in m.
#[must_use]
pub fn release_rate(params: &CeiParameters, vars: &ProcessVariables) -> MassRate {
    let d_mm = vars.diameter.get::<inch>() * params.millimeters_per_inch;
    let rho = vars.density.get::<kilogram_per_cubic_meter>();
    let p_g = vars.gauge_pressure.get::<kilopascal>();
    let h = vars.liquid_height.get::<meter>();

    let head = 1000.0 * p_g / rho + params.gravity * h;
    MassRate::new::<kilogram_per_second>(
        params.liquid_release_coefficient * d_mm.powi(2) * rho * head.sqrt(),
    )
}

/// Flash fraction `F_v = (Cp/ΔHv) · (T - T_b)`.
///
/// Negative for subcooled liquids.
#[must_use]
pub fn flash_fraction(params: &CeiParameters, vars: &ProcessVariables) -> Ratio {
    vars.heat_capacity_ratio_or_default(params) * vars.temperature.minus(vars.boiling_point)
}

/// Evaluates every stage of a liquid release.
#[must_use]
pub fn liquid_release(params: &CeiParameters, vars: &ProcessVariables) -> LiquidRelease {
    let release_rate = release_rate(params, vars);
    let flash_fraction = flash_fraction(params, vars);

    let f_v = flash_fraction.get::<ratio>();
    if f_v >= params.flash_cutoff {
        return LiquidRelease::Flashing {
            release_rate,
            flash_fraction,
        };
    }

    let l = release_rate.get::<kilogram_per_second>();
    let rho = vars.density.get::<kilogram_per_cubic_meter>();

    let w_t = numeric::min(
        l * params.max_release_duration,
        vars.inventory.get::<kilogram>(),
    );
    let w_p = w_t * (1.0 - params.flash_multiplier * f_v);
    let aq_f = params.flash_multiplier * f_v * l;

    let a_p = match vars.diked_area {
        Some(area) => area.get::<square_meter>(),
        None => params.pool_depth_factor * (w_p / rho),
    };

    let t_char = numeric::min(
        vars.boiling_point.get::<degree_celsius>(),
        numeric::max(
            vars.temperature.get::<degree_celsius>(),
            vars.ambient_temperature.get::<degree_celsius>(),
        ),
    );

    let mw = vars.molecular_weight.get::<gram_per_mole>();
    let p_v = vars.vapor_pressure.get::<kilopascal>();
    let aq_p = params.evaporation_coefficient * a_p.powf(params.evaporation_exponent) * (mw * p_v)
        / (t_char + params.kelvin_offset);

    LiquidRelease::Pooling(PoolFormation {
        release_rate,
        flash_fraction,
        total_released: Mass::new::<kilogram>(w_t),
        pooled_mass: Mass::new::<kilogram>(w_p),
        pool_area: Area::new::<square_meter>(a_p),
        pool_temperature: ThermodynamicTemperature::new::<degree_celsius>(t_char),
        flash_airborne: MassRate::new::<kilogram_per_second>(aq_f),
        pool_airborne: MassRate::new::<kilogram_per_second>(aq_p),
    })
}

/// Airborne quantity of a liquid release.
#[must_use]
pub fn liquid_airborne_quantity(params: &CeiParameters, vars: &ProcessVariables) -> MassRate {
    liquid_release(params, vars).airborne()
}
