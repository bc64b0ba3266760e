// crates/storefront-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Wire shapes for storefront API requests and responses.
// Purpose: Provide typed payloads and records mirrored by the schemas.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the typed request and response shapes exchanged with
//! the storefront API. [`ProductPayload`] is caller-owned input for creation
//! calls; [`ProductRecord`] and [`ClientErrorRecord`] are read-only views of
//! what the service returns. The harness never mutates a record after it is
//! decoded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Request Payloads
// ============================================================================

/// Caller-constructed body for a product creation request.
///
/// # Invariants
/// - Owned by the caller for the lifetime of a single creation call.
/// - `category_id` must reference an existing category for the service to
///   accept the payload; the harness does not pre-validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Product title; the service derives the slug from it.
    pub title: String,
    /// Product price.
    pub price: f64,
    /// Product description.
    pub description: String,
    /// Identifier of an existing category.
    pub category_id: i64,
    /// Ordered image URLs.
    pub images: Vec<String>,
}

impl ProductPayload {
    /// Creates a payload from its field values.
    #[must_use]
    pub fn new(
        title: &str,
        price: f64,
        description: &str,
        category_id: i64,
        images: Vec<String>,
    ) -> Self {
        Self {
            title: title.to_string(),
            price,
            description: description.to_string(),
            category_id,
            images,
        }
    }

    /// Renders the payload as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_value(&self) -> Result<Value, String> {
        serde_json::to_value(self).map_err(|err| format!("payload serialization failed: {err}"))
    }
}

// ============================================================================
// SECTION: Response Records
// ============================================================================

/// Category embedded in a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Server-assigned category identifier.
    pub id: i64,
    /// Category display name.
    pub name: String,
    /// Category image URL.
    pub image: String,
    /// URL-safe category slug.
    pub slug: String,
}

/// Server-assigned product entity returned on a successful creation or lookup.
///
/// # Invariants
/// - `slug` is deterministically derived from `title` by the service.
/// - Never mutated by the harness; referenced by `id` for deletion only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Server-assigned product identifier.
    pub id: i64,
    /// URL-safe slug derived from the title.
    pub slug: String,
    /// Product title as submitted.
    pub title: String,
    /// Product price as submitted.
    pub price: f64,
    /// Product description as submitted.
    pub description: String,
    /// Ordered image URLs as submitted.
    pub images: Vec<String>,
    /// Category the product was filed under.
    pub category: CategoryRecord,
    /// Creation timestamp string.
    #[serde(default)]
    pub creation_at: Option<String>,
    /// Last-update timestamp string.
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ============================================================================
// SECTION: Client Errors
// ============================================================================

/// Violation messages carried by a client error.
///
/// The service reports either a single message string or a list of per-field
/// violations; both decode into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// A single message string.
    One(String),
    /// A list of violation messages.
    Many(Vec<String>),
}

impl ErrorMessage {
    /// Normalizes the message into a list.
    #[must_use]
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::One(message) => vec![message.clone()],
            Self::Many(messages) => messages.clone(),
        }
    }
}

/// Standard shape the service uses to report a 4xx failure.
///
/// # Invariants
/// - Read-only and ephemeral: exists only for the duration of one assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientErrorRecord {
    /// Violation messages for the rejected request.
    pub message: ErrorMessage,
    /// HTTP reason phrase, for example "Bad Request".
    pub error: String,
    /// HTTP status code echoed in the body.
    pub status_code: i64,
}
