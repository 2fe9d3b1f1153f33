//! Caller-facing client.

use crate::config::FreedomPayConfig;
use crate::connection::FreedomPayConnection;
use crate::operations::{self, PaymentRequest, PayoutRequest};
use crate::response::Outcome;
use crate::urls;
use crate::Result;

/// Client for the FreedomPay payment API.
///
/// Every operation is a stateless pipeline: build the field set, sign it
/// with a fresh salt, send exactly one HTTP request, classify the reply.
/// Nothing persists between calls, so a shared client is safe to use from
/// concurrent tasks, including concurrent payment and payout calls signed
/// with different secret keys.
///
/// `Err` is returned only for pre-flight validation and construction
/// failures; a dispatched request always resolves to `Ok` with one of the
/// three [`Outcome`] variants.
///
/// # Example
///
/// ```rust,ignore
/// use freedompay_client::{FreedomPayClient, FreedomPayConfig, PaymentRequest};
///
/// let config = FreedomPayConfig::new("12345", "secret_key", "https://api.freedompay.uz")
///     .with_result_url("https://merchant.example/freedompay/result");
/// let client = FreedomPayClient::new(config)?;
///
/// let request = PaymentRequest::new("100.00")
///     .with_description("Order SO-0042")
///     .with_order_id("SO-0042");
/// let outcome = client.create_payment(&request).await?;
///
/// if let Some(data) = outcome.data() {
///     println!("payment id: {:?}", data.get("pg_payment_id"));
/// }
/// ```
pub struct FreedomPayClient {
    config: FreedomPayConfig,
    connection: FreedomPayConnection,
}

impl FreedomPayClient {
    /// Create a client from a configuration.
    pub fn new(config: FreedomPayConfig) -> Result<Self> {
        let connection = FreedomPayConnection::new(config.timeout_secs)?;
        Ok(Self { config, connection })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &FreedomPayConfig {
        &self.config
    }

    /// Create a payment.
    ///
    /// Fails with a validation error, before any request is sent, when no
    /// result callback URL is available from either the configuration or the
    /// request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, request), fields(amount = %request.amount))
    )]
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<Outcome> {
        let fields = operations::build_payment_create(&self.config, request)?;
        let url = urls::endpoint_url(&self.config.base_url, urls::INIT_PAYMENT);
        Ok(self
            .connection
            .post_form(&url, fields, self.config.payment_secret())
            .await)
    }

    /// Check the status of a payment by its FreedomPay payment id.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn check_status(&self, payment_id: &str) -> Result<Outcome> {
        let fields = operations::build_status_check(&self.config, payment_id)?;
        let url = urls::endpoint_url(&self.config.base_url, urls::GET_STATUS);
        Ok(self
            .connection
            .post_form(&url, fields, self.config.payment_secret())
            .await)
    }

    /// Create a payout.
    ///
    /// Signed with the payout secret key when one is configured; the primary
    /// key otherwise. The effective key is resolved for this call only.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, request), fields(amount = %request.amount))
    )]
    pub async fn create_payout(&self, request: &PayoutRequest) -> Result<Outcome> {
        let fields = operations::build_payout_create(&self.config, request)?;
        let url = urls::endpoint_url(&self.config.base_url, urls::INIT_PAYOUT);
        Ok(self
            .connection
            .post_form(&url, fields, self.config.payout_secret())
            .await)
    }

    /// Refund a payment, fully when `amount` is `None` or partially
    /// otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn refund(&self, payment_id: &str, amount: Option<&str>) -> Result<Outcome> {
        let fields = operations::build_refund(&self.config, payment_id, amount)?;
        let url = urls::endpoint_url(&self.config.base_url, urls::REFUND);
        Ok(self
            .connection
            .post_form(&url, fields, self.config.payment_secret())
            .await)
    }
}
