mod common;

use axum_test::TestServer;
use nasa_explorer::domain::upstream::UpstreamError;
use nasa_explorer::web::routes::page_routes;
use serde_json::json;

use common::StubNasa;

fn server(stub: std::sync::Arc<StubNasa>) -> TestServer {
    let state = common::create_test_state(stub);
    let app = page_routes().with_state(state);

    TestServer::new(app).unwrap()
}

fn apod_entry(date: &str, title: &str) -> serde_json::Value {
    json!({
        "date": date,
        "title": title,
        "explanation": "An explanation.",
        "media_type": "image",
        "url": "https://apod.nasa.gov/image.jpg"
    })
}

#[tokio::test]
async fn test_home_page_links_to_features() {
    let server = server(StubNasa::new());

    let response = server.get("/").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Welcome to NASA Explorer"));
    assert!(text.contains("/apod"));
    assert!(text.contains("/eonet"));
    assert!(text.contains("/neo"));
}

#[tokio::test]
async fn test_apod_page_renders_entry() {
    let stub = StubNasa::new();
    stub.push_apod(Ok(apod_entry("2024-01-10", "The Horsehead Nebula")));

    let server = server(stub.clone());

    let response = server
        .get("/apod")
        .add_query_param("date", "2024-01-10")
        .await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("The Horsehead Nebula"));
    assert!(!text.contains("not available yet"));
    assert_eq!(stub.recorded_apod(), vec![Some("2024-01-10".to_string())]);
}

#[tokio::test]
async fn test_apod_page_falls_back_to_yesterday_for_today() {
    let stub = StubNasa::new();
    stub.push_apod(Err(UpstreamError::Status(404)));
    stub.push_apod(Ok(apod_entry("2024-01-09", "Yesterday's picture")));

    let server = server(stub.clone());

    // No date parameter means "today", the one case where the fallback fires.
    let response = server.get("/apod").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Yesterday&#x27;s picture") || text.contains("Yesterday's picture"));
    assert!(text.contains("Showing yesterday"));
    assert_eq!(stub.recorded_apod().len(), 2);
}

#[tokio::test]
async fn test_apod_page_past_date_failure_shows_error_without_retry() {
    let stub = StubNasa::new();
    stub.push_apod(Err(UpstreamError::Status(404)));

    let server = server(stub.clone());

    let response = server
        .get("/apod")
        .add_query_param("date", "2000-06-01")
        .await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Please try another date"));
    assert_eq!(stub.recorded_apod().len(), 1);
}

#[tokio::test]
async fn test_eonet_page_renders_event_cards() {
    let stub = StubNasa::new();
    stub.push_eonet(Ok(json!({
        "events": [
            {"id": "EONET_1", "title": "Wildfire - California",
             "categories": [{"id": "wildfires", "title": "Wildfires"}],
             "geometry": [{"date": "2024-06-15T12:00:00Z"}]}
        ]
    })));

    let server = server(stub.clone());

    let response = server
        .get("/eonet")
        .add_query_param("days", "14")
        .add_query_param("status", "open")
        .await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Wildfire - California"));
    assert!(text.contains("Wildfires"));
    assert_eq!(
        stub.recorded_eonet(),
        vec![("14".to_string(), "open".to_string(), None)]
    );
}

#[tokio::test]
async fn test_eonet_page_with_no_events() {
    let stub = StubNasa::new();
    stub.push_eonet(Ok(json!({"events": []})));

    let server = server(stub);

    let response = server.get("/eonet").await;

    response.assert_status_ok();
    assert!(response.text().contains("No events found."));
}

#[tokio::test]
async fn test_neo_page_rejects_wide_range_without_network_call() {
    let stub = StubNasa::new();

    let server = server(stub.clone());

    let response = server
        .get("/neo")
        .add_query_param("start_date", "2024-01-01")
        .add_query_param("end_date", "2024-02-01")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Please select a date range of 7 days or fewer.")
    );
    assert!(stub.recorded_neo().is_empty());
}

#[tokio::test]
async fn test_neo_page_renders_chart() {
    let stub = StubNasa::new();
    stub.push_neo(Ok(json!({
        "near_earth_objects": {
            "2024-01-01": [
                {"estimated_diameter": {"meters": {"estimated_diameter_max": 10.0}}},
                {"estimated_diameter": {"meters": {"estimated_diameter_max": 15.0}}}
            ],
            "2024-01-02": []
        }
    })));

    let server = server(stub.clone());

    let response = server
        .get("/neo")
        .add_query_param("start_date", "2024-01-01")
        .add_query_param("end_date", "2024-01-02")
        .await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("25.00"));
    assert!(text.contains("0.00"));
    assert!(text.contains("2024-01-01"));
    assert_eq!(
        stub.recorded_neo(),
        vec![(Some("2024-01-01".to_string()), Some("2024-01-02".to_string()))]
    );
}

#[tokio::test]
async fn test_neo_page_masks_upstream_failure() {
    let stub = StubNasa::new();

    let server = server(stub);

    let response = server
        .get("/neo")
        .add_query_param("start_date", "2024-01-01")
        .add_query_param("end_date", "2024-01-02")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Failed to fetch data. Please try again.")
    );
}
