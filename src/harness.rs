use std::io::{self, Write};

use crate::{
    domain::{FixtureSet, RunSummary},
    fixture_runner, health_probe,
    report::Report,
    Config, ServiceClient,
};

/// Health gate, then every fixture, then a verdict.
pub struct Harness {
    client: ServiceClient,
    fixtures: FixtureSet,
}

impl Harness {
    pub fn build(config: Config, fixtures: FixtureSet) -> reqwest::Result<Self> {
        let client = ServiceClient::new(config.target)?;
        Ok(Self::new(client, fixtures))
    }

    pub fn new(client: ServiceClient, fixtures: FixtureSet) -> Self {
        Self { client, fixtures }
    }

    #[tracing::instrument(
        name = "Running smoke tests",
        skip_all,
        fields(fixtures = self.fixtures.len())
    )]
    pub async fn run<W: Write>(&self, out: W) -> io::Result<RunSummary> {
        let mut report = Report::new(out);
        report.title()?;

        let health = health_probe::check_health(&self.client, &mut report).await?;
        if !health.succeeded() {
            tracing::warn!("Health gate closed, skipping fixtures");
            report.gate_closed()?;
            return Ok(RunSummary::gate_closed());
        }
        report.gate_open()?;

        let summary =
            fixture_runner::run_all(&self.client, true, &self.fixtures, &mut report).await?;
        report.summary(&summary)?;
        tracing::info!(all_passed = summary.all_passed(), "Smoke tests finished");
        Ok(summary)
    }
}
