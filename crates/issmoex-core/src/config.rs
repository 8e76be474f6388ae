//! Client configuration.

/// Default ISS host.
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com";

/// Passport endpoint that issues the `MicexPassportCert` cookie.
pub const DEFAULT_PASSPORT_URL: &str = "https://passport.moex.com/authenticate";

/// Connection settings for [`crate::IssClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host prepended to every catalog path, without a trailing slash.
    pub base_url: String,
    pub passport_url: String,
    /// Per-exchange timeout handed to the HTTP layer.
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Pre-issued passport certificate, sent as a cookie when present.
    pub passport_cert: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            passport_url: String::from(DEFAULT_PASSPORT_URL),
            timeout_ms: 30_000,
            user_agent: format!("issmoex/{}", env!("CARGO_PKG_VERSION")),
            passport_cert: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_passport_url(mut self, passport_url: impl Into<String>) -> Self {
        self.passport_url = passport_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_passport_cert(mut self, cert: impl Into<String>) -> Self {
        self.passport_cert = Some(cert.into());
        self
    }
}
