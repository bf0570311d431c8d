use once_cell::sync::Lazy;
use reqwest::Url;
use spindine_smoke::{
    configuration::TargetConfig,
    domain::{Fixture, FixtureSet},
    report::Report,
    service_client::RANDOM_RESTAURANT_PATH,
    telemetry, Harness, ServiceClient,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub static TELEMETRY: Lazy<Result<(), String>> = Lazy::new(|| {
    let (name, filter) = ("test", "debug");
    if std::env::var("TEST_LOG")
        .unwrap_or_default()
        .parse::<bool>()
        .unwrap_or_default()
    {
        telemetry::init(name, filter, std::io::stdout)
    } else {
        telemetry::init(name, filter, std::io::sink)
    }
});

pub struct TestBackend {
    pub server: MockServer,
}

impl TestBackend {
    pub async fn start() -> Self {
        Lazy::force(&TELEMETRY)
            .as_ref()
            .expect("Failed to initialize telemetry");
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> ServiceClient {
        client_for(Url::parse(&self.server.uri()).unwrap())
    }

    pub fn harness(&self, fixtures: FixtureSet) -> Harness {
        Harness::new(self.client(), fixtures)
    }

    pub async fn health_responds_with(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    pub fn random_restaurant() -> wiremock::MockBuilder {
        Mock::given(method("POST")).and(path(RANDOM_RESTAURANT_PATH))
    }
}

pub fn client_for(base_url: Url) -> ServiceClient {
    let mut config = TargetConfig::new(base_url);
    config.timeout_milliseconds = 500;
    ServiceClient::new(config).expect("Failed to build the service client")
}

/// A local address with nothing listening on it.
pub fn unreachable_base_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap()
}

pub fn nyc() -> Fixture {
    Fixture::new("NYC", 40.7128, -74.0060, 5000).unwrap()
}

pub fn silent_report() -> Report<Vec<u8>> {
    Report::new(Vec::new())
}

pub fn output(report: Report<Vec<u8>>) -> String {
    String::from_utf8(report.into_inner()).unwrap()
}
