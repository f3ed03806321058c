use std::time::Duration;

use crate::domain::value::{ApiHost, ApiKey, ApiVersion, ResponseFormat};

/// Default response timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Invalid client configuration, reported before any request is made.
pub enum ConfigurationError {
    #[error("incorrect api key")]
    InvalidApiKey,

    #[error("incorrect api server: {0}")]
    InvalidHost(String),

    #[error("incorrect api version: {0}")]
    InvalidApiVersion(String),

    #[error("incorrect api response format: {0}")]
    InvalidResponseFormat(String),

    #[error("timeout can not be less than 0, got {0}")]
    NegativeTimeout(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable configuration of a [`crate::MobizonClient`].
///
/// Invariant: `skip_verify_ssl` is never `true` together with `force_http`.
pub struct ClientConfig {
    api_key: ApiKey,
    host: ApiHost,
    format: ResponseFormat,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    skip_verify_ssl: bool,
    force_http: bool,
}

impl ClientConfig {
    /// Configuration with default format, version and timeout.
    pub fn new(api_key: ApiKey, host: ApiHost) -> Self {
        Self {
            api_key,
            host,
            format: ResponseFormat::default(),
            api_version: ApiVersion::default(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            skip_verify_ssl: false,
            force_http: false,
        }
    }

    /// Configuration with every value given explicitly.
    ///
    /// A timeout of `0` seconds disables the timeout. `skip_verify_ssl` is ignored when
    /// `force_http` is set.
    pub fn with_options(
        api_key: ApiKey,
        host: ApiHost,
        format: ResponseFormat,
        timeout_secs: i64,
        api_version: ApiVersion,
        skip_verify_ssl: bool,
        force_http: bool,
    ) -> Result<Self, ConfigurationError> {
        let timeout = match u64::try_from(timeout_secs) {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => return Err(ConfigurationError::NegativeTimeout(timeout_secs)),
        };

        Ok(Self {
            api_key,
            host,
            format,
            api_version,
            timeout,
            skip_verify_ssl: skip_verify_ssl && !force_http,
            force_http,
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn host(&self) -> &ApiHost {
        &self.host
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Response timeout; `None` means the request may wait indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether certificate and hostname verification are disabled.
    pub fn skip_verify_ssl(&self) -> bool {
        self.skip_verify_ssl
    }

    pub fn force_http(&self) -> bool {
        self.force_http
    }

    /// URL scheme used for every request.
    pub fn scheme(&self) -> &'static str {
        if self.force_http { "http" } else { "https" }
    }
}
