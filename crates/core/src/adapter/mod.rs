//! Image adapter façade.
//!
//! One upload/get surface over whichever provider is bound as main:
//! - Input validation (bucket, file name, source URL)
//! - File name normalization
//! - Dispatch to the main provider

mod options;
mod service;


pub use options::{AdapterOptions, DEFAULT_ALLOWED_EXTENSIONS, UploadReference};
pub use service::ImageAdapter;
