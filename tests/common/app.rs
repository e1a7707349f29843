//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use tempus::server::{build_app, build_router, create_app_state};
use tempus::services::{FixedClock, SystemClock};

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application reading the system clock
    pub fn new() -> Self {
        let state = create_app_state(Arc::new(SystemClock));
        Self {
            router: build_router(state),
        }
    }

    /// Create a test application whose clock is pinned to an RFC 3339 instant
    pub fn at(rfc3339: &str) -> Self {
        let instant = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid RFC 3339 instant")
            .with_timezone(&Utc);
        let state = create_app_state(Arc::new(FixedClock(instant)));
        Self {
            router: build_router(state),
        }
    }

    /// Create a test application including the documentation routes
    pub fn with_docs() -> Self {
        let state = create_app_state(Arc::new(SystemClock));
        Self {
            router: build_app(state, true),
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with an empty body
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// The `detail` field of an error body
    pub fn detail(&self) -> String {
        let json: serde_json::Value = self.json();
        json["detail"]
            .as_str()
            .expect("Expected a string detail field")
            .to_string()
    }
}
