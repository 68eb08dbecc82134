use uom::{
    si::{ISQ, Quantity, SI, f64::TemperatureInterval, temperature_interval::kelvin},
    typenum::{N1, Z0},
};

/// Inverse temperature, 1/K in SI.
///
/// Used for the ratio of liquid heat capacity to latent heat of vaporization,
/// which scales a superheat into a flash fraction.
pub type InverseTemperature = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`InverseTemperature`] from a value in 1/K.
#[must_use]
pub fn per_kelvin(value: f64) -> InverseTemperature {
    value / TemperatureInterval::new::<kelvin>(1.0)
}
