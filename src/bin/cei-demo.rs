//! Scores the butadiene worked example as a liquid and as a gas release.
//!
//! Results are emitted through `tracing`; set `RUST_LOG` to adjust the filter.

use cei_models::{
    models::exposure::cei::{ChemicalExposure, Release, reference_scenario},
    support::diagnostics::TracingDiagnostics,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let model = ChemicalExposure::dow();
    let vars = reference_scenario();

    for release in [Release::liquid(vars), Release::gas(vars)] {
        info!(kind = ?release.kind, "assessing release");
        model.assess(&release).report(&TracingDiagnostics);
    }
}
