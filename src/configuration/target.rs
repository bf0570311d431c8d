use std::time::Duration;

use reqwest::Url;
use serde::{de, Deserialize};
use serde_aux::field_attributes::deserialize_number_from_string;

pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub(super) const DEFAULT_HEALTH_PATH: &str = "/health";
pub(super) const DEFAULT_TIMEOUT_MILLISECONDS: u64 = 10_000;

/// The service under test.
#[derive(Clone, Debug, Deserialize)]
pub struct TargetConfig {
    pub base_url: UrlWrapper,
    pub health_path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl TargetConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: UrlWrapper(base_url),
            health_path: DEFAULT_HEALTH_PATH.into(),
            timeout_milliseconds: DEFAULT_TIMEOUT_MILLISECONDS,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url.0
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Clone, Debug)]
pub struct UrlWrapper(Url);

impl<'de> Deserialize<'de> for UrlWrapper {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Url::parse(&String::deserialize(deserializer)?)
            .map_err(de::Error::custom)
            .map(UrlWrapper)
    }
}

impl From<UrlWrapper> for Url {
    fn from(wrapper: UrlWrapper) -> Self {
        wrapper.0
    }
}
