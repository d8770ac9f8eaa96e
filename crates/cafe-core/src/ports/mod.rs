//! Port traits (interfaces) the store is built against

pub mod storage;

pub use storage::DocumentStorage;
