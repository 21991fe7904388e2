//! Cloudinary connection string parsing.

use url::Url;

use crate::error::{AdapterError, AdapterResult};

/// Shared delivery host. Paths on it carry the cloud name.
pub const DEFAULT_DELIVERY_HOST: &str = "res.cloudinary.com";

/// Admin and upload API base.
pub const DEFAULT_API_PREFIX: &str = "https://api.cloudinary.com";

/// Account credentials and endpoints parsed from a connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    /// Cloud (account) name.
    pub cloud_name: String,
    /// API key.
    pub api_key: String,
    /// API secret, used for signing. Never logged.
    pub api_secret: String,
    /// Delivery host.
    pub secure_distribution: String,
    /// Admin and upload API base URL.
    pub upload_prefix: String,
}

impl CloudinaryCredentials {
    /// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>[?query]`.
    ///
    /// Recognised query parameters: `secure_distribution`, `upload_prefix`.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Configuration` when the string is empty, not a
    /// URL, uses another scheme, or lacks the cloud name, key or secret.
    pub fn from_url(connection_url: &str) -> AdapterResult<Self> {
        if connection_url.trim().is_empty() {
            return Err(AdapterError::configuration("connection url is empty"));
        }

        let url = Url::parse(connection_url.trim())
            .map_err(|e| AdapterError::configuration(format!("invalid connection url: {e}")))?;

        if url.scheme() != "cloudinary" {
            return Err(AdapterError::configuration(format!(
                "invalid connection url scheme: expected cloudinary, got {}",
                url.scheme()
            )));
        }

        let cloud_name = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AdapterError::configuration("connection url is missing the cloud name"))?
            .to_string();

        if url.username().is_empty() {
            return Err(AdapterError::configuration(
                "connection url is missing the api key",
            ));
        }
        let api_key = decode(url.username())?;

        let api_secret = url
            .password()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AdapterError::configuration("connection url is missing the api secret"))
            .and_then(decode)?;

        let mut secure_distribution = DEFAULT_DELIVERY_HOST.to_string();
        let mut upload_prefix = DEFAULT_API_PREFIX.to_string();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "secure_distribution" if !value.is_empty() => {
                    secure_distribution = value.into_owned();
                }
                "upload_prefix" if !value.is_empty() => {
                    upload_prefix = value.trim_end_matches('/').to_string();
                }
                _ => {}
            }
        }

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            secure_distribution,
            upload_prefix,
        })
    }

    /// Whether delivery goes through the shared host, which needs the cloud
    /// name in the path.
    #[must_use]
    pub fn uses_shared_host(&self) -> bool {
        self.secure_distribution == DEFAULT_DELIVERY_HOST
    }
}

fn decode(raw: &str) -> AdapterResult<String> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| AdapterError::configuration(format!("invalid connection url encoding: {e}")))
}

impl std::fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("secure_distribution", &self.secure_distribution)
            .field("upload_prefix", &self.upload_prefix)
            .finish()
    }
}
