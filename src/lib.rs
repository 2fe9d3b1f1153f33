//! FreedomPay payment API client.
//!
//! A signed-request client for the FreedomPay payment-processing API: each
//! operation canonicalizes its parameters, signs them with a salted MD5
//! digest, sends exactly one HTTP request, and normalizes the reply (JSON or
//! URL-encoded form body, success or error) into a uniform [`Outcome`].
//!
//! # Operations
//!
//! - [`FreedomPayClient::create_payment`]: `init_payment.php`
//! - [`FreedomPayClient::check_status`]: `get_status.php`
//! - [`FreedomPayClient::create_payout`]: `init_payout.php` (optionally
//!   signed with a payout-specific secret key)
//! - [`FreedomPayClient::refund`]: `refund.php`
//!
//! # Design
//!
//! The client is stateless across calls and holds no mutable state: salts
//! are generated per request and the effective secret key is passed
//! explicitly into each signing context, so concurrent calls cannot
//! cross-contaminate. There are no retries and no queuing; transport
//! resilience is a caller concern. Secret keys never appear in `Debug`
//! output or error messages.
//!
//! # Features
//!
//! - `tracing`: instrument client operations with `tracing` spans.

pub mod client;
pub mod config;
pub mod connection;
pub mod errors;
pub mod fields;
pub mod operations;
pub mod response;
pub mod signature;
pub mod urls;

pub use client::FreedomPayClient;
pub use config::FreedomPayConfig;
pub use errors::FreedomPayError;
pub use fields::FieldSet;
pub use operations::{PaymentRequest, PayoutRequest, DEFAULT_CURRENCY};
pub use response::Outcome;

/// Common result alias for client operations.
pub type Result<T> = std::result::Result<T, FreedomPayError>;
