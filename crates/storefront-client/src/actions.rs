// crates/storefront-client/src/actions.rs
// ============================================================================
// Module: HTTP Action Helpers
// Description: Typed wrappers for storefront create, delete, and lookup calls.
// Purpose: Issue one request per action and return normalized results.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Each helper issues exactly one HTTP request and returns an [`ApiResponse`]
//! carrying the status code and the parsed JSON body. A 4xx response is a
//! normal return value (a first-class test outcome); only transport failures
//! and unparsable bodies surface as errors. No helper retries: flakiness from
//! the remote service is out of scope for mitigation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::StorefrontConfig;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the action helpers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Expected 4xx responses never appear here; they are [`ApiResponse`]
///   values.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("http transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// An extra header name or value was not representable.
    #[error("invalid header: {name}")]
    Header {
        /// Name of the rejected header.
        name: String,
    },
    /// Response body was not parsable JSON.
    #[error("response body for {context} is not valid json: {message}")]
    Body {
        /// Operation that produced the body.
        context: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Typed decoding of a response body failed.
    #[error("response decode failed: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Normalized Responses
// ============================================================================

/// Normalized result of one storefront API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON response body.
    pub body: Value,
}

impl ApiResponse {
    /// Returns true for a 4xx status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status <= 499
    }

    /// Decodes the body into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body does not match the
    /// target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.body.clone())
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the storefront API.
pub struct StorefrontClient {
    /// Endpoint configuration.
    config: StorefrontConfig,
    /// Underlying transport with the default timeout applied.
    client: Client,
}

impl StorefrontClient {
    /// Builds a client with the given configuration and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport cannot be constructed.
    pub fn new(config: StorefrontConfig, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Issues a product creation request.
    ///
    /// Sends `Content-Type: application/json` by default; `extra_headers`
    /// are merged over the defaults (override wins), so a scenario can
    /// inject or replace headers for malformed-request testing. May create
    /// a durable resource on the remote service: every caller must pair a
    /// successful creation with exactly one deletion.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an unrepresentable extra
    /// header, or an unparsable response body.
    pub async fn create_product(
        &self,
        payload: &Value,
        extra_headers: &[(String, String)],
    ) -> Result<ApiResponse, ClientError> {
        let headers = merge_headers(extra_headers)?;
        let response = self
            .client
            .post(self.config.products_url())
            .headers(headers)
            .body(payload.to_string())
            .send()
            .await?;
        normalize(response, "create_product").await
    }

    /// Issues a deletion request for a product identifier.
    ///
    /// Deletion is not assumed idempotent: a second delete on the same
    /// identifier is expected to fail, and that failure is the remote
    /// service's concern, never retried here.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparsable response body.
    pub async fn delete_product(&self, id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(self.config.product_url(id)).send().await?;
        normalize(response, "delete_product").await
    }

    /// Issues a lookup request for a product slug.
    ///
    /// Slug matching on the service side is exact-match and case-sensitive;
    /// the slug is forwarded without normalization.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparsable response body.
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<ApiResponse, ClientError> {
        let response = self.client.get(self.config.product_slug_url(slug)).send().await?;
        normalize(response, "get_product_by_slug").await
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Merges caller headers over the default content-type header.
fn merge_headers(extra_headers: &[(String, String)]) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| ClientError::Header {
                name: name.clone(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| ClientError::Header {
            name: name.clone(),
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

/// Converts a raw response into a normalized result.
async fn normalize(
    response: reqwest::Response,
    context: &str,
) -> Result<ApiResponse, ClientError> {
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.map_err(|err| ClientError::Body {
        context: context.to_string(),
        message: err.to_string(),
    })?;
    Ok(ApiResponse {
        status,
        body,
    })
}
