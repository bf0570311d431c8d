use std::process::ExitCode;

use dotenvy::dotenv;
use spindine_smoke::{domain::FixtureSet, telemetry, Config, Harness};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    telemetry::init("spindine-smoke", "warn", std::io::stderr).map_err(anyhow::Error::msg)?;
    let config = Config::init()?;
    let fixtures = FixtureSet::reference().map_err(anyhow::Error::msg)?;
    let summary = Harness::build(config, fixtures)?
        .run(std::io::stdout())
        .await?;
    Ok(summary.exit_code())
}
