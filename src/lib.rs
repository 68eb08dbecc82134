//! # CEI Models
//!
//! The Dow Chemical Exposure Index (CEI) for accidental releases of
//! hazardous chemicals, as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! Given the process conditions of a substance and whether it escapes as a
//! liquid or a gas, the models estimate the airborne quantity (AQ) of a
//! worst-case release, then derive the CEI and the distance to each ERPG
//! concentration.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations, starting with
//!   [`models::exposure::cei::ChemicalExposure`].
//! - [`support`]: parameter tables, unit extensions, diagnostic sinks, and the
//!   fire and explosion index formulas used alongside the CEI.

pub mod models;
pub mod support;
