//! Image adapter implementation.

use std::collections::BTreeMap;

use tracing::{debug, info};

use imgadapter_shared::{AppConfig, ObjectStoreSettings};

use super::options::AdapterOptions;
use crate::error::{AdapterError, AdapterResult};
use crate::provider::{
    BoundProvider, CloudinaryProvider, ImageProvider, ObjectStoreProvider, ProviderKind,
};

/// Uploads and fetches images through the main provider.
///
/// Starts unbound: every call fails with `MainProviderNotSet` until a
/// `with_*` binding succeeds. Bindings consume and return the adapter, so
/// they all happen before it is shared.
///
/// Each call awaits at most one remote round trip. Uploads go to the main
/// provider only; [`ImageAdapter::bound_providers`] lists the others for a
/// future fan-out.
#[derive(Debug, Default)]
pub struct ImageAdapter {
    options: AdapterOptions,
    main: Option<ProviderKind>,
    providers: BTreeMap<ProviderKind, BoundProvider>,
}

impl ImageAdapter {
    /// Unbound adapter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unbound adapter; the last options supplied win, none means defaults.
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = AdapterOptions>,
    {
        Self {
            options: options.into_iter().last().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Build from loaded configuration and bind every configured provider.
    ///
    /// # Errors
    ///
    /// Returns the first binding error. Callers treat it as fatal.
    pub async fn from_config(config: &AppConfig) -> AdapterResult<Self> {
        let mut adapter = Self::from_options([AdapterOptions::from(&config.adapter)]);

        if let Some(cloudinary) = &config.cloudinary {
            adapter = adapter.with_cloudinary(&cloudinary.url).await?;
        }
        if let Some(object_store) = &config.object_store {
            adapter = adapter.with_object_store(object_store.clone())?;
        }

        Ok(adapter)
    }

    /// Bind the signed-URL CDN provider after a health check. Becomes main
    /// if nothing is main yet.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed connection string or a failed ping.
    /// This is a startup failure, not a runtime condition.
    pub async fn with_cloudinary(mut self, connection_url: &str) -> AdapterResult<Self> {
        let provider = CloudinaryProvider::connect(connection_url, &self.options).await?;
        self.bind(BoundProvider::Cloudinary(provider), true);
        Ok(self)
    }

    /// Bind the object store stub. It is never made main.
    ///
    /// # Errors
    ///
    /// Returns an error if the object store settings are rejected.
    pub fn with_object_store(mut self, settings: ObjectStoreSettings) -> AdapterResult<Self> {
        let provider = ObjectStoreProvider::new(settings)?;
        self.bind(BoundProvider::ObjectStore(provider), false);
        Ok(self)
    }

    pub(crate) fn bind(&mut self, provider: BoundProvider, eligible_for_main: bool) {
        let kind = provider.kind();
        if eligible_for_main && self.main.is_none() {
            self.main = Some(kind);
        }
        self.providers.insert(kind, provider);
        info!(provider = %kind, main = ?self.main, "provider bound");
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Kind of the main provider, if any.
    #[must_use]
    pub fn main_provider(&self) -> Option<ProviderKind> {
        self.main
    }

    /// Every bound provider kind, in kind order.
    pub fn bound_providers(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.providers.keys().copied()
    }

    fn main(&self) -> AdapterResult<&BoundProvider> {
        self.main
            .and_then(|kind| self.providers.get(&kind))
            .ok_or(AdapterError::MainProviderNotSet)
    }

    /// Ingest the image at `source_url` into `bucket` under `file_name`.
    ///
    /// # Errors
    ///
    /// Validation errors for an empty bucket, file name or source URL and for
    /// a missing main provider, raised in that order before any remote call.
    /// Otherwise whatever the main provider reports.
    pub async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        source_url: &str,
    ) -> AdapterResult<String> {
        if bucket.is_empty() {
            return Err(AdapterError::EmptyBucketName);
        }
        let file_name = normalize_file_name(file_name)?;
        if source_url.is_empty() {
            return Err(AdapterError::EmptySourceUrl);
        }
        let provider = self.main()?;

        debug!(provider = %provider.kind(), bucket, file_name = %file_name, "upload");
        provider.upload(bucket, &file_name, source_url).await
    }

    /// Reference to `bucket/file_name`, optionally transformed.
    ///
    /// An empty transformation means none.
    ///
    /// # Errors
    ///
    /// Validation errors for an empty bucket or file name and for a missing
    /// main provider. Otherwise whatever the main provider reports.
    pub fn get(
        &self,
        bucket: &str,
        file_name: &str,
        transformation: Option<&str>,
    ) -> AdapterResult<String> {
        if bucket.is_empty() {
            return Err(AdapterError::EmptyBucketName);
        }
        if file_name.is_empty() {
            return Err(AdapterError::EmptyFileName);
        }
        let provider = self.main()?;

        let transformation = transformation.filter(|t| !t.is_empty());
        debug!(provider = %provider.kind(), bucket, file_name, transformation, "get");
        provider.get(bucket, file_name, transformation)
    }
}

/// Standardized file name for storage.
///
/// Identity for now; this is where renaming rules will go.
pub(crate) fn normalize_file_name(file_name: &str) -> AdapterResult<String> {
    if file_name.is_empty() {
        return Err(AdapterError::EmptyFileName);
    }
    Ok(file_name.to_string())
}
