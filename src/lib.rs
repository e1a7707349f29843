//! Tempus - the current time over HTTP
//!
//! Reports the current instant in a fixed set of textual formats,
//! optionally converted to an IANA timezone.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
