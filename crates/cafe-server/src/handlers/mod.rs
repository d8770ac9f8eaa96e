//! HTTP handlers

pub mod blogs;
pub mod cafes;
pub mod health;
pub mod pages;

pub use health::health;

use axum::http::StatusCode;

/// Error half of every page handler: a status and a short plain-text body
pub type PageError = (StatusCode, &'static str);

/// Parse a numeric id from a path segment. Anything that is not an integer
/// can never match a record.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
