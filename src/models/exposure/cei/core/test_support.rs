use std::cell::RefCell;

use crate::support::diagnostics::Diagnostics;

use super::{ProcessVariables, reference_scenario};

/// 1,3-butadiene held as a pressurized liquid.
pub(super) fn butadiene() -> ProcessVariables {
    reference_scenario()
}

/// Collects diagnostics for assertions.
#[derive(Debug, Default)]
pub(super) struct RecordingDiagnostics {
    warnings: RefCell<Vec<String>>,
    records: RefCell<Vec<(String, f64)>>,
}

impl RecordingDiagnostics {
    pub(super) fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub(super) fn records(&self) -> Vec<(String, f64)> {
        self.records.borrow().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_owned());
    }

    fn record(&self, label: &str, value: f64) {
        self.records.borrow_mut().push((label.to_owned(), value));
    }
}
