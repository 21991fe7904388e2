//! S3-compatible object store provider using Apache OpenDAL.
//!
//! Experimental: the operator is built so bindings validate their settings,
//! but `get` and `upload` are identity pass-throughs and the provider is never
//! selected as main.

use opendal::{Operator, services};
use tracing::warn;

use imgadapter_shared::ObjectStoreSettings;

use crate::error::AdapterResult;
use crate::provider::{ImageProvider, ProviderKind};

/// Object store provider stub.
#[derive(Debug)]
pub struct ObjectStoreProvider {
    settings: ObjectStoreSettings,
}

impl ObjectStoreProvider {
    /// Validate settings by building an S3 operator. No network I/O happens
    /// here.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Configuration` if OpenDAL rejects the settings.
    pub fn new(settings: ObjectStoreSettings) -> AdapterResult<Self> {
        let builder = services::S3::default()
            .endpoint(&settings.endpoint)
            .bucket(&settings.bucket)
            .access_key_id(&settings.access_key_id)
            .secret_access_key(&settings.secret_access_key)
            .region(&settings.region);

        // Rejects unusable settings at bind time.
        Operator::new(builder)?;
        Ok(Self { settings })
    }

    /// Configured bucket.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.settings.bucket
    }
}

impl ImageProvider for ObjectStoreProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ObjectStore
    }

    fn get(
        &self,
        bucket: &str,
        file_name: &str,
        _transformation: Option<&str>,
    ) -> AdapterResult<String> {
        let key = format!("{bucket}/{file_name}");
        warn!(key = %key, "object store get not yet implemented");
        Ok(key)
    }

    async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        source_url: &str,
    ) -> AdapterResult<String> {
        warn!(bucket, file_name, "object store upload not yet implemented");
        Ok(source_url.to_string())
    }
}
