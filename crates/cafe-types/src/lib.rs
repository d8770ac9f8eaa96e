//! Cafe Types - Pure record definitions
//!
//! This crate contains only the data shapes stored in the directory's JSON
//! document, with no I/O or async runtime dependencies.

pub mod blog;
pub mod cafe;
pub mod city;
pub mod document;
pub mod value;

pub use blog::*;
pub use cafe::*;
pub use city::*;
pub use document::*;
pub use value::*;

/// Normalize a city name or slug to the lowercase form used for storage and lookup
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase()
}
