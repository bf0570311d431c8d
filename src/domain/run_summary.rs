use std::process::ExitCode;

use super::ProbeResult;

/// Results of one run. `fixture_results[i]` belongs to the i-th fixture.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    health_ok: bool,
    fixture_results: Vec<ProbeResult>,
}

impl RunSummary {
    pub fn new(health_ok: bool, fixture_results: Vec<ProbeResult>) -> Self {
        Self {
            health_ok,
            fixture_results,
        }
    }

    /// The health gate failed and no fixture was attempted.
    pub fn gate_closed() -> Self {
        Self::new(false, Vec::new())
    }

    pub fn health_ok(&self) -> bool {
        self.health_ok
    }

    pub fn fixture_results(&self) -> &[ProbeResult] {
        &self.fixture_results
    }

    pub fn all_passed(&self) -> bool {
        self.health_ok && self.fixture_results.iter().all(ProbeResult::succeeded)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
