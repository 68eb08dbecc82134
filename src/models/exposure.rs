//! Chemical exposure models.
//!
//! This module contains models for toxic releases from process equipment,
//! starting with the Dow Chemical Exposure Index.

pub mod cei;
