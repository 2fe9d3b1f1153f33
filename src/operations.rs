//! Per-operation field set construction and pre-flight validation.
//!
//! Each builder turns caller data plus configuration into the unsigned field
//! set for one API call. Required fields are validated here, before any
//! network traffic; optional fields are included only when present and
//! non-empty, because an omitted field and an empty field sign differently.

use crate::config::FreedomPayConfig;
use crate::errors::FreedomPayError;
use crate::fields::FieldSet;
use crate::Result;

/// Currency used when the caller does not specify one.
pub const DEFAULT_CURRENCY: &str = "UZS";

/// Parameters for creating a payment.
#[derive(Clone, Debug, Default)]
pub struct PaymentRequest {
    /// Payment amount, already formatted for the wire (e.g. `"100.00"`).
    pub amount: String,
    /// ISO currency code. Defaults to [`DEFAULT_CURRENCY`].
    pub currency: Option<String>,
    /// Human-readable payment description.
    pub description: Option<String>,
    /// Merchant-side order identifier.
    pub order_id: Option<String>,
    /// Merchant-side user identifier.
    pub user_id: Option<String>,
    /// Payer e-mail.
    pub email: Option<String>,
    /// Payer phone number.
    pub phone: Option<String>,
    /// Result callback URL; used only when the configuration has none.
    pub result_url: Option<String>,
    /// Success redirect URL; used only when the configuration has none.
    pub success_url: Option<String>,
    /// Failure redirect URL; used only when the configuration has none.
    pub failure_url: Option<String>,
    /// Order-check URL; used only when the configuration has none.
    pub check_url: Option<String>,
}

impl PaymentRequest {
    /// Create a payment request for the given amount.
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the merchant order id.
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Set the merchant user id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the payer e-mail.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the payer phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
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

    /// Set the order-check URL.
    pub fn with_check_url(mut self, url: impl Into<String>) -> Self {
        self.check_url = Some(url.into());
        self
    }
}

/// Parameters for creating a payout.
#[derive(Clone, Debug, Default)]
pub struct PayoutRequest {
    /// Payout amount, already formatted for the wire.
    pub amount: String,
    /// Destination card number.
    pub card_number: String,
    /// ISO currency code. Defaults to [`DEFAULT_CURRENCY`].
    pub currency: Option<String>,
    /// Cardholder name as printed on the card.
    pub cardholder_name: Option<String>,
    /// Payout notification URL; used only when the configuration has none.
    pub post_link: Option<String>,
}

impl PayoutRequest {
    /// Create a payout request for the given amount and destination card.
    pub fn new(amount: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            card_number: card_number.into(),
            ..Self::default()
        }
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the cardholder name.
    pub fn with_cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    /// Set the payout notification URL.
    pub fn with_post_link(mut self, url: impl Into<String>) -> Self {
        self.post_link = Some(url.into());
        self
    }
}

/// Build the unsigned field set for payment creation.
///
/// The result callback URL is required: the configured value wins, the
/// request value is the fallback, and missing both fails validation before
/// any request is sent.
pub(crate) fn build_payment_create(
    config: &FreedomPayConfig,
    request: &PaymentRequest,
) -> Result<FieldSet> {
    require("amount", &request.amount)?;

    let result_url = first_present(&config.result_url, &request.result_url).ok_or_else(|| {
        FreedomPayError::validation(
            "result_url",
            "required; set it in the configuration or on the request",
        )
    })?;

    let mut fields = FieldSet::new();
    fields.insert("pg_merchant_id", config.merchant_id.clone());
    fields.insert("pg_amount", request.amount.clone());
    fields.insert("pg_currency", currency(&request.currency));
    fields.insert(
        "pg_description",
        request.description.clone().unwrap_or_default(),
    );
    fields.insert("pg_result_url", result_url);
    fields.insert_opt(
        "pg_success_url",
        first_present(&config.success_url, &request.success_url),
    );
    fields.insert_opt(
        "pg_failure_url",
        first_present(&config.failure_url, &request.failure_url),
    );
    fields.insert_opt(
        "pg_check_url",
        first_present(&config.check_url, &request.check_url),
    );
    fields.insert_opt("pg_order_id", request.order_id.as_deref());
    fields.insert_opt("pg_user_id", request.user_id.as_deref());
    fields.insert_opt("pg_user_email", request.email.as_deref());
    fields.insert_opt("pg_user_phone", request.phone.as_deref());

    Ok(fields)
}

/// Build the unsigned field set for a status check.
pub(crate) fn build_status_check(config: &FreedomPayConfig, payment_id: &str) -> Result<FieldSet> {
    require("payment_id", payment_id)?;

    let mut fields = FieldSet::new();
    fields.insert("pg_merchant_id", config.merchant_id.clone());
    fields.insert("pg_payment_id", payment_id);
    Ok(fields)
}

/// Build the unsigned field set for payout creation.
pub(crate) fn build_payout_create(
    config: &FreedomPayConfig,
    request: &PayoutRequest,
) -> Result<FieldSet> {
    require("amount", &request.amount)?;
    require("card_number", &request.card_number)?;

    let mut fields = FieldSet::new();
    fields.insert("pg_merchant_id", config.merchant_id.clone());
    fields.insert("pg_amount", request.amount.clone());
    fields.insert("pg_currency", currency(&request.currency));
    fields.insert("pg_card_number", request.card_number.clone());
    fields.insert_opt("pg_cardholder_name", request.cardholder_name.as_deref());
    fields.insert_opt(
        "pg_post_link",
        first_present(&config.post_link, &request.post_link),
    );

    Ok(fields)
}

/// Build the unsigned field set for a refund.
pub(crate) fn build_refund(
    config: &FreedomPayConfig,
    payment_id: &str,
    amount: Option<&str>,
) -> Result<FieldSet> {
    require("payment_id", payment_id)?;

    let mut fields = FieldSet::new();
    fields.insert("pg_merchant_id", config.merchant_id.clone());
    fields.insert("pg_payment_id", payment_id);
    fields.insert_opt("pg_refund_amount", amount);
    Ok(fields)
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FreedomPayError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn currency(value: &Option<String>) -> String {
    value
        .clone()
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Configuration value first, caller value second; empty strings count as
/// absent.
fn first_present<'a>(configured: &'a Option<String>, supplied: &'a Option<String>) -> Option<&'a str> {
    present(configured).or_else(|| present(supplied))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
