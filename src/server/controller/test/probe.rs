use super::*;

/// Tests the debug endpoint when upstream fails.
///
/// Expected: 200 echoing the upstream status and raw body
#[tokio::test]
async fn echoes_upstream_response() {
    let app = TestApp::logged_in().await;
    app.stub.indicator_failure("NY.GDP.MKTP.CD").await;

    let response = app.get("/api/test/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], 500);
    assert_eq!(response.body["data"], "upstream exploded");
    assert!(response.body["url"]
        .as_str()
        .unwrap()
        .ends_with("/country/US/indicator/NY.GDP.MKTP.CD?format=json&date=2020:2022"));
}
