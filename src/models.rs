//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core API.

pub mod exposure;
