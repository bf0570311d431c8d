mod coordinates;
mod fixture;
mod probe_result;
mod run_summary;

pub use coordinates::{Latitude, Longitude, Radius};
pub use fixture::{Fixture, FixtureName, FixtureSet};
pub use probe_result::{Failure, ProbeError, ProbeResult, ResponseBody};
pub use run_summary::RunSummary;
