//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use regex::Regex;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is JSON
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("application/json"),
        "Expected Content-Type: application/json"
    );
}

/// Assert `value` matches the full-string regex `pattern`
pub fn assert_matches(value: &str, pattern: &str) {
    let re = Regex::new(&format!("^{pattern}$")).expect("Invalid test pattern");
    assert!(re.is_match(value), "Expected {value:?} to match {pattern:?}");
}

/// Fractional-second digits after `separator`, stopping at the first non-digit
pub fn fraction_after(value: &str, separator: char) -> &str {
    let start = value
        .rfind(separator)
        .unwrap_or_else(|| panic!("No {separator:?} in {value:?}"))
        + 1;
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..end]
}
