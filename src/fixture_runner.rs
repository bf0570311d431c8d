use std::io::{self, Write};

use tracing::Span;

use crate::{
    domain::{Fixture, FixtureSet, ProbeResult, RunSummary},
    report::Report,
    ServiceClient,
};

#[tracing::instrument(
    name = "Requesting a random restaurant",
    skip(client, fixture, report),
    fields(
        fixture = %fixture.name,
        status_code = tracing::field::Empty,
    )
)]
pub async fn run_fixture<W: Write>(
    client: &ServiceClient,
    fixture: &Fixture,
    report: &mut Report<W>,
) -> io::Result<ProbeResult> {
    report.banner(&format!("Testing Random Restaurant - {}", fixture.name))?;
    let result = match client.post_random_restaurant(fixture).await {
        Ok(response) => {
            Span::current().record("status_code", response.status);
            ProbeResult::with_json_body(response.status, response.body)
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Fixture request did not complete",
            );
            ProbeResult::transport_failure(e.to_string())
        }
    };
    report.fixture(&result)?;
    Ok(result)
}

/// Attempts every fixture in order, regardless of earlier failures.
pub async fn run_all<W: Write>(
    client: &ServiceClient,
    health_ok: bool,
    fixtures: &FixtureSet,
    report: &mut Report<W>,
) -> io::Result<RunSummary> {
    let mut results = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        results.push(run_fixture(client, fixture, report).await?);
    }
    Ok(RunSummary::new(health_ok, results))
}
