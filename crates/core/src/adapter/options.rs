//! Adapter options.

use imgadapter_shared::AdapterSettings;

pub use imgadapter_shared::UploadReference;
pub use imgadapter_shared::config::DEFAULT_ALLOWED_EXTENSIONS;

/// Options fixed when the adapter is created.
///
/// Providers copy what they need at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Extensions accepted on upload.
    pub allowed_extensions: Vec<String>,
    /// What a successful upload returns.
    pub upload_reference: UploadReference,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            upload_reference: UploadReference::default(),
        }
    }
}

impl AdapterOptions {
    /// Replace the allowed extensions.
    #[must_use]
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the upload return mode.
    #[must_use]
    pub fn with_upload_reference(mut self, upload_reference: UploadReference) -> Self {
        self.upload_reference = upload_reference;
        self
    }
}

impl From<&AdapterSettings> for AdapterOptions {
    fn from(settings: &AdapterSettings) -> Self {
        Self {
            allowed_extensions: settings.allowed_extensions.clone(),
            upload_reference: settings.upload_reference,
        }
    }
}
