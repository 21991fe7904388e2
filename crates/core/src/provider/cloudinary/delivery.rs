//! Delivery URL rendering for stored images.

use super::credentials::CloudinaryCredentials;
use super::signer::url_signature;
use crate::error::{AdapterError, AdapterResult};

/// Delivery type for assets that need a signature to be fetched.
pub const PRIVATE_DELIVERY: &str = "private";

/// Builder for an image delivery URL.
///
/// Rendering is local: no request is made to the remote service.
#[derive(Debug, Clone)]
pub struct DeliveryUrl<'a> {
    credentials: &'a CloudinaryCredentials,
    public_id: &'a str,
    delivery_type: &'a str,
    transformation: Option<&'a str>,
    sign_url: bool,
}

impl<'a> DeliveryUrl<'a> {
    /// Start an unsigned, public delivery URL for `public_id`.
    #[must_use]
    pub fn new(credentials: &'a CloudinaryCredentials, public_id: &'a str) -> Self {
        Self {
            credentials,
            public_id,
            delivery_type: "upload",
            transformation: None,
            sign_url: false,
        }
    }

    /// Set the delivery type (`upload`, `private`, `authenticated`).
    #[must_use]
    pub fn delivery_type(mut self, delivery_type: &'a str) -> Self {
        self.delivery_type = delivery_type;
        self
    }

    /// Apply a named or raw transformation. Empty means none.
    #[must_use]
    pub fn transformation(mut self, transformation: Option<&'a str>) -> Self {
        self.transformation = transformation.filter(|t| !t.is_empty());
        self
    }

    /// Add a signature component.
    #[must_use]
    pub fn signed(mut self, sign_url: bool) -> Self {
        self.sign_url = sign_url;
        self
    }

    /// Render the URL.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::InvalidKey` for an empty public id or one with
    /// an empty path segment.
    pub fn render(&self) -> AdapterResult<String> {
        if self.public_id.is_empty() || self.public_id.split('/').any(str::is_empty) {
            return Err(AdapterError::invalid_key(self.public_id));
        }

        let source = self
            .public_id
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let mut to_sign = Vec::with_capacity(2);
        if let Some(transformation) = self.transformation {
            to_sign.push(transformation);
        }
        to_sign.push(source.as_str());
        let to_sign = to_sign.join("/");

        let mut parts = vec![format!("https://{}", self.credentials.secure_distribution)];
        if self.credentials.uses_shared_host() {
            parts.push(self.credentials.cloud_name.clone());
        }
        parts.push("image".to_string());
        parts.push(self.delivery_type.to_string());
        if self.sign_url {
            parts.push(url_signature(&to_sign, &self.credentials.api_secret));
        }
        if let Some(transformation) = self.transformation {
            parts.push(transformation.to_string());
        }
        if needs_version(&source) {
            parts.push("v1".to_string());
        }
        parts.push(source);

        Ok(parts.join("/"))
    }
}

/// Foldered ids get a default version so the first segment is not read as a
/// transformation.
fn needs_version(source: &str) -> bool {
    if !source.contains('/') {
        return false;
    }
    let first = source.split('/').next().unwrap_or_default();
    let already_versioned = first.len() > 1
        && first.starts_with('v')
        && first[1..].chars().all(|c| c.is_ascii_digit());
    !already_versioned
}
