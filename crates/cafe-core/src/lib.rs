//! Cafe Directory Core Library
//!
//! The JSON-file-backed record store, the city catalog, and the storage port
//! the store persists through.

// Re-export pure types from cafe-types
pub use cafe_types::*;

pub mod catalog;
pub mod error;
pub mod ports;
pub mod storage;
pub mod store;

pub use catalog::CityCatalog;
pub use error::{CafeError, Result};
pub use ports::DocumentStorage;
pub use storage::JsonFileStorage;
pub use store::RecordStore;
