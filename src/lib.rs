pub mod configuration;
pub mod domain;
pub mod fixture_runner;
pub mod harness;
pub mod health_probe;
pub mod report;
pub mod service_client;
pub mod telemetry;

pub use configuration::Config;
pub use harness::Harness;
pub use service_client::ServiceClient;
