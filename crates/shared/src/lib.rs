//! Shared configuration for imgadapter.
//!
//! This crate provides the settings every binary loads at startup:
//! - Adapter options (allowed extensions, upload reference mode)
//! - Provider connection settings (Cloudinary, S3-compatible object store)
//! - Logging settings

pub mod config;

pub use config::{
    AdapterSettings, AppConfig, CloudinarySettings, LogSettings, ObjectStoreSettings,
    UploadReference,
};
