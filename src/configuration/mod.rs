mod target;

pub use target::TargetConfig;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub target: TargetConfig,
}

impl Config {
    /// Reference settings overridden by `SMOKE_`-prefixed environment variables,
    /// e.g. `SMOKE_TARGET__BASE_URL=http://staging:5000`.
    pub fn init() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(
                config::Environment::with_prefix("SMOKE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("target.base_url", target::DEFAULT_BASE_URL)?
            .set_default("target.health_path", target::DEFAULT_HEALTH_PATH)?
            .set_default(
                "target.timeout_milliseconds",
                target::DEFAULT_TIMEOUT_MILLISECONDS.to_string(),
            )
    }
}
