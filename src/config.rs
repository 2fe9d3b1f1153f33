//! Client configuration.

use std::fmt;

use serde::Deserialize;

/// Configuration for the FreedomPay API client.
///
/// The configuration is a read-only value object: operations read from it,
/// never write to it. The payout secret key, when configured, is resolved per
/// call via [`FreedomPayConfig::payout_secret`] rather than by swapping the
/// primary key in place, so a shared configuration is safe under concurrent
/// payment and payout calls.
///
/// Secret keys are kept out of the `Debug` output and out of every error
/// message produced by this crate.
#[derive(Clone, Deserialize)]
pub struct FreedomPayConfig {
    /// Merchant identifier issued by FreedomPay.
    pub merchant_id: String,

    /// Primary secret key used to sign payment and status requests.
    secret_key: String,

    /// Secret key for payout operations. Falls back to `secret_key` when
    /// absent.
    #[serde(default)]
    secret_key_payout: Option<String>,

    /// API base URL (e.g. `https://api.freedompay.uz`).
    pub base_url: String,

    /// Server-to-server result callback URL. Required for payment creation
    /// unless supplied on the request; the configured value takes precedence.
    #[serde(default)]
    pub result_url: Option<String>,

    /// Browser redirect URL on success.
    #[serde(default)]
    pub success_url: Option<String>,

    /// Browser redirect URL on failure.
    #[serde(default)]
    pub failure_url: Option<String>,

    /// Order-check callback URL.
    #[serde(default)]
    pub check_url: Option<String>,

    /// Payout notification URL.
    #[serde(default)]
    pub post_link: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl FreedomPayConfig {
    /// Create a new configuration with the default timeout and no callback
    /// URLs.
    pub fn new(
        merchant_id: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret_key: secret_key.into(),
            secret_key_payout: None,
            base_url: base_url.into(),
            result_url: None,
            success_url: None,
            failure_url: None,
            check_url: None,
            post_link: None,
            timeout_secs: default_timeout(),
        }
    }

    /// Set the payout-specific secret key.
    pub fn with_payout_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key_payout = Some(secret_key.into());
        self
    }

    /// Set the result callback URL.
    pub fn with_result_url(mut self, url: impl Into<String>) -> Self {
        self.result_url = Some(url.into());
        self
    }

    /// Set the success redirect URL.
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    /// Set the failure redirect URL.
    pub fn with_failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = Some(url.into());
        self
    }

    /// Set the order-check callback URL.
    pub fn with_check_url(mut self, url: impl Into<String>) -> Self {
        self.check_url = Some(url.into());
        self
    }

    /// Set the payout notification URL.
    pub fn with_post_link(mut self, url: impl Into<String>) -> Self {
        self.post_link = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The secret key for payment and status operations.
    pub(crate) fn payment_secret(&self) -> &str {
        &self.secret_key
    }

    /// The effective secret key for payout operations: the payout key when
    /// configured, otherwise the primary key.
    pub(crate) fn payout_secret(&self) -> &str {
        self.secret_key_payout
            .as_deref()
            .unwrap_or(&self.secret_key)
    }
}

impl fmt::Debug for FreedomPayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreedomPayConfig")
            .field("merchant_id", &self.merchant_id)
            .field("secret_key", &"<redacted>")
            .field(
                "secret_key_payout",
                &self.secret_key_payout.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .field("result_url", &self.result_url)
            .field("success_url", &self.success_url)
            .field("failure_url", &self.failure_url)
            .field("check_url", &self.check_url)
            .field("post_link", &self.post_link)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
