//! HTTP transport for signed API calls.
//!
//! One outbound request per call, bounded by a fixed timeout, no retries:
//! resilience policy belongs to the caller, which keeps this layer free of
//! implicit resubmission. Network and read failures surface as
//! [`Outcome::TransportError`]; everything that reaches the remote API comes
//! back through [`response::decode`].

use std::time::Duration;

use serde::Serialize;

use crate::errors::FreedomPayError;
use crate::fields::FieldSet;
use crate::response::{self, Outcome};
use crate::signature;
use crate::urls;
use crate::Result;

/// HTTP connection that signs and dispatches API requests.
///
/// The secret key is passed explicitly into each call rather than stored
/// here, so one connection can serve operations signed with different keys
/// concurrently.
pub struct FreedomPayConnection {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl FreedomPayConnection {
    /// Create a connection with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FreedomPayError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Sign the field set and POST it as `application/x-www-form-urlencoded`.
    pub async fn post_form(&self, url: &str, mut fields: FieldSet, secret: &str) -> Outcome {
        signature::seal(urls::script_name(url), &mut fields, secret);
        let request = self.client.post(url).form(&fields);
        self.dispatch(url, request).await
    }

    /// Sign the field set and send it as the query string of a GET request.
    pub async fn get(&self, url: &str, mut fields: FieldSet, secret: &str) -> Outcome {
        signature::seal(urls::script_name(url), &mut fields, secret);
        let request = self.client.get(url).query(&fields);
        self.dispatch(url, request).await
    }

    /// POST a JSON payload without form signing.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> Outcome {
        let request = self.client.post(url).json(payload);
        self.dispatch(url, request).await
    }

    async fn dispatch(&self, url: &str, request: reqwest::RequestBuilder) -> Outcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return self.map_reqwest_error(url, e),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => response::decode(status, &body),
            Err(e) => Outcome::transport(format!("failed to read response body: {e}")),
        }
    }

    fn map_reqwest_error(&self, url: &str, e: reqwest::Error) -> Outcome {
        if e.is_timeout() {
            Outcome::transport(format!(
                "request to {url} timed out after {}s",
                self.timeout_secs
            ))
        } else if e.is_connect() {
            Outcome::transport(format!("connection to {url} failed: {e}"))
        } else {
            Outcome::transport(format!("request to {url} failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_builds_with_default_timeout() {
        let connection = FreedomPayConnection::new(30).unwrap();
        assert_eq!(connection.timeout_secs, 30);
    }
}
