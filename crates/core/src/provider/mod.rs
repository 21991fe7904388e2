//! Storage providers behind the image adapter.
//!
//! Every backend implements [`ImageProvider`]. The adapter keeps bound
//! providers as [`BoundProvider`] values keyed by [`ProviderKind`] and
//! dispatches by matching on the variant.

pub mod cloudinary;
mod object_store;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::AdapterResult;

pub use cloudinary::{CloudinaryCredentials, CloudinaryProvider};
pub use object_store::ObjectStoreProvider;

/// Known provider backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Signed-URL image CDN.
    Cloudinary,
    /// S3-compatible object store. Not selectable as main yet.
    ObjectStore,
}

impl ProviderKind {
    /// Stable tag for logs and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cloudinary => "cloudinary",
            Self::ObjectStore => "object_store",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Upload and fetch capability of a storage backend.
pub trait ImageProvider: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> ProviderKind;

    /// Reference to the stored object at `bucket/file_name`.
    ///
    /// Never uploads anything.
    fn get(
        &self,
        bucket: &str,
        file_name: &str,
        transformation: Option<&str>,
    ) -> AdapterResult<String>;

    /// Ingest the object at `source_url` into `bucket` under `file_name`.
    fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        source_url: &str,
    ) -> impl Future<Output = AdapterResult<String>> + Send;
}

/// A provider bound to the adapter.
#[derive(Debug)]
pub enum BoundProvider {
    /// Signed-URL image CDN.
    Cloudinary(CloudinaryProvider),
    /// S3-compatible object store stub.
    ObjectStore(ObjectStoreProvider),
}

impl ImageProvider for BoundProvider {
    fn kind(&self) -> ProviderKind {
        match self {
            Self::Cloudinary(p) => p.kind(),
            Self::ObjectStore(p) => p.kind(),
        }
    }

    fn get(
        &self,
        bucket: &str,
        file_name: &str,
        transformation: Option<&str>,
    ) -> AdapterResult<String> {
        match self {
            Self::Cloudinary(p) => p.get(bucket, file_name, transformation),
            Self::ObjectStore(p) => p.get(bucket, file_name, transformation),
        }
    }

    async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        source_url: &str,
    ) -> AdapterResult<String> {
        match self {
            Self::Cloudinary(p) => p.upload(bucket, file_name, source_url).await,
            Self::ObjectStore(p) => p.upload(bucket, file_name, source_url).await,
        }
    }
}
