//! Endpoint URL assembly and script-name extraction.
//!
//! The remote API routes operations to PHP scripts under a single base URL,
//! and the script name doubles as the leading token of every signature
//! string.

/// Script for creating a payment.
pub const INIT_PAYMENT: &str = "init_payment.php";
/// Script for checking a payment's status.
pub const GET_STATUS: &str = "get_status.php";
/// Script for creating a payout.
pub const INIT_PAYOUT: &str = "init_payout.php";
/// Script for refunding a payment.
pub const REFUND: &str = "refund.php";

/// Build the full URL for an operation script.
pub fn endpoint_url(base_url: &str, script: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), script)
}

/// Extract the script name from a URL: the trailing path segment, truncated
/// at the query string if one is present.
pub fn script_name(url: &str) -> &str {
    let tail = url.rsplit('/').next().unwrap_or(url);
    tail.split('?').next().unwrap_or(tail)
}
