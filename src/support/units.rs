//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical inputs and outputs (pressure,
//! temperature, mass rate, distance). The exposure correlations were fitted
//! in engineering units, so formulas read quantities back in those units at
//! the point of use.
//!
//! This module provides the pieces [`uom`] doesn't ship:
//!
//! - [`InverseTemperature`], the dimension of a heat-capacity to
//!   latent-heat ratio (`Cp / ΔHv`, 1/K).
//! - [`TemperatureDifference`], for subtracting absolute temperatures.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use cei_models::support::units::{TemperatureDifference, per_kelvin};
//!
//! let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let t_b = ThermodynamicTemperature::new::<degree_celsius>(-4.4);
//! let flash = per_kelvin(0.0044) * t.minus(t_b);
//! assert!((flash.value - 0.12936).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{InverseTemperature, per_kelvin};
pub use temperature_difference::TemperatureDifference;
