use serde_json::json;
use spindine_smoke::{domain::FixtureSet, Harness};
use wiremock::ResponseTemplate;

use crate::helpers::{client_for, unreachable_base_url, TestBackend};

#[tokio::test]
async fn an_unhealthy_service_never_receives_fixture_requests() {
    let backend = TestBackend::start().await;
    backend
        .health_responds_with(ResponseTemplate::new(500))
        .await;
    TestBackend::random_restaurant()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;
    let mut out = Vec::new();

    let summary = backend
        .harness(FixtureSet::reference().unwrap())
        .run(&mut out)
        .await
        .unwrap();

    assert!(!summary.health_ok());
    assert!(summary.fixture_results().is_empty());
    assert!(!summary.all_passed());
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Backend is not running! Start it with: npm start"));
    assert!(!printed.contains("Test Summary"));
}

#[tokio::test]
async fn a_health_body_that_is_not_json_closes_the_gate() {
    let backend = TestBackend::start().await;
    backend
        .health_responds_with(ResponseTemplate::new(200).set_body_string("<html>502 proxy</html>"))
        .await;
    TestBackend::random_restaurant()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;
    let mut out = Vec::new();

    let summary = backend
        .harness(FixtureSet::try_from(Vec::new()).unwrap())
        .run(&mut out)
        .await
        .unwrap();

    assert!(!summary.health_ok());
    assert!(!summary.all_passed());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Backend is not running! Start it with: npm start"));
}

#[tokio::test]
async fn a_refused_connection_closes_the_gate() {
    let harness = Harness::new(
        client_for(unreachable_base_url()),
        FixtureSet::reference().unwrap(),
    );

    let summary = harness.run(std::io::sink()).await.unwrap();

    assert!(!summary.health_ok());
    assert!(!summary.all_passed());
}

#[tokio::test]
async fn a_healthy_service_runs_every_fixture_and_reports_success() {
    let backend = TestBackend::start().await;
    backend
        .health_responds_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .await;
    TestBackend::random_restaurant()
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"restaurant": "Joe's Pizza"})),
        )
        .expect(4)
        .mount(&backend.server)
        .await;
    let mut out = Vec::new();

    let summary = backend
        .harness(FixtureSet::reference().unwrap())
        .run(&mut out)
        .await
        .unwrap();

    assert!(summary.all_passed());
    assert_eq!(summary.fixture_results().len(), 4);
    let printed = String::from_utf8(out).unwrap();
    let positions: Vec<usize> = [
        "Backend is running!",
        "Testing Random Restaurant - NYC",
        "Testing Random Restaurant - San Francisco",
        "Testing Random Restaurant - Los Angeles",
        "Testing Random Restaurant - Delhi",
        "All tests passed!",
    ]
    .iter()
    .map(|needle| printed.find(needle).expect("missing report line"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn a_failing_fixture_fails_the_run() {
    let backend = TestBackend::start().await;
    backend
        .health_responds_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .await;
    TestBackend::random_restaurant()
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "Latitude and longitude required"
        })))
        .mount(&backend.server)
        .await;
    let mut out = Vec::new();

    let summary = backend
        .harness(FixtureSet::reference().unwrap())
        .run(&mut out)
        .await
        .unwrap();

    assert!(summary.health_ok());
    assert!(!summary.all_passed());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Some tests failed. Check the errors above."));
}
