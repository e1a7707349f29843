//! Tests for the /formats endpoint.

mod common;

use common::fixtures::{instants, ALL_CODES};
use common::TestApp;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_formats_lists_all_codes() {
    let app = TestApp::new();

    let response = app.get("/formats").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    let formats = json["available_formats"].as_object().unwrap();
    assert_eq!(formats.len(), 5);
    for code in ALL_CODES {
        assert!(formats[code].is_string(), "Missing example for {code}");
    }
}

#[tokio::test]
async fn test_formats_in_declaration_order() {
    let app = TestApp::new();

    let body = app.get("/formats").await.text();

    let positions: Vec<usize> = ALL_CODES
        .iter()
        .map(|code| {
            body.find(&format!("\"{code}\""))
                .unwrap_or_else(|| panic!("{code} missing from {body}"))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "Codes out of order in {body}");
}

#[tokio::test]
async fn test_formats_examples_are_utc() {
    let app = TestApp::at(instants::SUMMER);

    let json: serde_json::Value = app.get("/formats").await.json();

    assert_eq!(
        json,
        serde_json::json!({
            "available_formats": {
                "iso8601": "2024-07-01T12:00:00+0000",
                "log_millis": "2024-07-01 12:00:00,250",
                "euro_tz": "01/Jul/2024:12:00:00 +0000",
                "us_ampm": "Jul 01, 2024 12:00:00 PM",
                "with_millis_tzname": "2024 Jul 01 12:00:00.250 UTC",
            }
        })
    );
}
