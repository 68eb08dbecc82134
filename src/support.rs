//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod constants;
pub mod diagnostics;
pub mod hazard;
pub mod units;

pub(crate) mod numeric;
