// crates/storefront-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Base URL configuration and endpoint derivation.
// Purpose: Point the harness at a production or staging storefront instance.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! The harness has a single configuration point: the API base URL. The
//! default targets the production instance; callers override it to point at
//! staging. Overrides are validated eagerly so a bad URL fails at harness
//! construction, not in the middle of a scenario.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base URL of the production storefront API.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL was empty or whitespace.
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    /// Base URL failed to parse.
    #[error("invalid base url {value}: {message}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Base URL used a scheme other than http or https.
    #[error("unsupported base url scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Client configuration for one storefront instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL without a trailing slash.
    base_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Creates a configuration from a base URL override.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is empty, fails to parse as a URL, or
    /// does not use the http or https scheme.
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            message: err.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the product collection endpoint.
    #[must_use]
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the endpoint for one product by identifier.
    #[must_use]
    pub fn product_url(&self, id: i64) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    /// Returns the lookup endpoint for one product by slug.
    ///
    /// The slug is forwarded byte-for-byte; the harness never normalizes
    /// casing.
    #[must_use]
    pub fn product_slug_url(&self, slug: &str) -> String {
        format!("{}/products/slug/{slug}", self.base_url)
    }
}
