use std::io::{self, Write};

use tracing::Span;

use crate::{domain::ProbeResult, report::Report, ServiceClient};

/// Succeeds on status 200 with a JSON body of any shape. Transport and
/// parse failures are reported in the returned result, never as an `Err`.
#[tracing::instrument(
    name = "Checking service health",
    skip(client, report),
    fields(
        base_url = %client.base_url(),
        status_code = tracing::field::Empty,
    )
)]
pub async fn check_health<W: Write>(
    client: &ServiceClient,
    report: &mut Report<W>,
) -> io::Result<ProbeResult> {
    report.banner("Testing Health Endpoint")?;
    let result = match client.get_health().await {
        Ok(response) => {
            Span::current().record("status_code", response.status);
            ProbeResult::with_json_body(response.status, response.body)
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Health check did not complete",
            );
            ProbeResult::transport_failure(e.to_string())
        }
    };
    report.health(&result)?;
    Ok(result)
}
