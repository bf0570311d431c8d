use reqwest::Url;
use serde::Serialize;

use crate::{configuration::TargetConfig, domain::Fixture};

pub const RANDOM_RESTAURANT_PATH: &str = "/api/random-restaurant";

/// Status and undecoded body of a completed exchange.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct ServiceClient {
    http_client: reqwest::Client,
    base_url: Url,
    health_path: String,
}

impl ServiceClient {
    pub fn new(config: TargetConfig) -> reqwest::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http_client,
            health_path: config.health_path,
            base_url: config.base_url.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_health(&self) -> reqwest::Result<RawResponse> {
        let response = self
            .http_client
            .get(self.endpoint(&self.health_path))
            .send()
            .await?;
        read(response).await
    }

    pub async fn post_random_restaurant(&self, fixture: &Fixture) -> reqwest::Result<RawResponse> {
        let request_body = RandomRestaurantRequest {
            latitude: fixture.latitude.degrees(),
            longitude: fixture.longitude.degrees(),
            radius: fixture.radius.meters(),
        };
        let response = self
            .http_client
            .post(self.endpoint(RANDOM_RESTAURANT_PATH))
            .json(&request_body)
            .send()
            .await?;
        read(response).await
    }

    // `Url::join` would drop any path prefix on the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

async fn read(response: reqwest::Response) -> reqwest::Result<RawResponse> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}

#[derive(Serialize)]
struct RandomRestaurantRequest {
    latitude: f64,
    longitude: f64,
    radius: u32,
}
