//! Services used by the handlers

pub mod uploads;

pub use uploads::UploadService;
