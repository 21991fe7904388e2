//! Application configuration management.

use serde::{Deserialize, Serialize};

/// Extensions accepted on upload when nothing else is configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Adapter behaviour.
    #[serde(default)]
    pub adapter: AdapterSettings,
    /// Signed-URL CDN provider. Absent means not bound.
    #[serde(default)]
    pub cloudinary: Option<CloudinarySettings>,
    /// S3-compatible object store. Absent means not bound.
    #[serde(default)]
    pub object_store: Option<ObjectStoreSettings>,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogSettings,
}

/// What a successful upload hands back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadReference {
    /// A freshly rendered private, signed delivery URL.
    #[default]
    SignedUrl,
    /// The normalized file name only.
    ///
    /// Deprecated: kept for callers that persisted bare file names.
    FileName,
}

/// Adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdapterSettings {
    /// Extensions the remote store accepts on upload.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Upload return mode.
    #[serde(default)]
    pub upload_reference: UploadReference,
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            upload_reference: UploadReference::default(),
        }
    }
}

/// Cloudinary configuration.
#[derive(Clone, Deserialize)]
pub struct CloudinarySettings {
    /// Connection string, `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    pub url: String,
}

impl std::fmt::Debug for CloudinarySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinarySettings")
            .field("url", &"<redacted>")
            .finish()
    }
}

/// S3-compatible object store configuration.
#[derive(Clone, Deserialize)]
pub struct ObjectStoreSettings {
    /// S3 endpoint URL.
    pub endpoint: String,
    /// Bucket name.
    pub bucket: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Region.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl ObjectStoreSettings {
    /// Create object store settings.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Debug for ObjectStoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStoreSettings")
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "imgadapter=info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `CLOUDINARY_URL`, `config/default`,
    /// `config/{RUN_MODE}`, then `IMGADAPTER__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        // The CDN's own convention, lowest precedence.
        if let Ok(url) = std::env::var("CLOUDINARY_URL") {
            builder = builder.set_default("cloudinary.url", url)?;
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("IMGADAPTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("adapter.allowed_extensions")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
