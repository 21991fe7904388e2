//! Signed-URL image CDN provider (Cloudinary).
//!
//! Only the slice of the remote API the adapter touches is implemented:
//! the admin ping used as a bind-time health check, upload by remote URL,
//! and private delivery URL rendering with optional signing.

mod client;
mod credentials;
mod delivery;
mod provider;
mod signer;

#[cfg(test)]
mod props;

pub use client::{ApiError, CloudinaryClient, PingResult, UploadParams, UploadResult};
pub use credentials::{CloudinaryCredentials, DEFAULT_API_PREFIX, DEFAULT_DELIVERY_HOST};
pub use delivery::{DeliveryUrl, PRIVATE_DELIVERY};
pub use provider::{CloudinaryProvider, public_id_for};
