// crates/storefront-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON schema definitions for storefront API response shapes.
// Purpose: Provide the canonical validation schemas for products and errors.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the draft-07 JSON Schema payloads for the three
//! response shapes the harness validates: the record returned by a creation
//! call, the record returned by a slug lookup, and the standard client-error
//! body. Schema content is frozen; builders return the same document on every
//! call. None of the schemas sets `additionalProperties: false`, so fields the
//! service adds beyond the declared contract are tolerated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Schema Names
// ============================================================================

/// Canonical names for the registry schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaName {
    /// Record returned by a successful product creation.
    CreatedProduct,
    /// Record returned by a product lookup.
    FetchedProduct,
    /// Standard client-error body for 4xx responses.
    ClientError,
}

impl SchemaName {
    /// Returns every registry schema name.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::CreatedProduct, Self::FetchedProduct, Self::ClientError]
    }

    /// Returns the stable string form of the name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedProduct => "created_product",
            Self::FetchedProduct => "fetched_product",
            Self::ClientError => "client_error",
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Public Schema Entrypoints
// ============================================================================

/// Returns the schema document for a registry name.
#[must_use]
pub fn schema_for(name: SchemaName) -> Value {
    match name {
        SchemaName::CreatedProduct => created_product_schema(),
        SchemaName::FetchedProduct => fetched_product_schema(),
        SchemaName::ClientError => client_error_schema(),
    }
}

/// Returns the JSON schema for the record returned by product creation.
#[must_use]
pub fn created_product_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "storefront://contract/schemas/created-product.schema.json",
        "title": "Storefront Created Product",
        "description": "Record returned by a successful product creation call.",
        "type": "object",
        "required": [
            "title",
            "slug",
            "price",
            "description",
            "images",
            "category",
            "id",
            "creationAt",
            "updatedAt"
        ],
        "properties": {
            "id": number_schema("Server-assigned product identifier."),
            "title": string_schema("Product title as submitted."),
            "slug": string_schema("URL-safe slug derived from the title."),
            "price": number_schema("Product price as submitted."),
            "description": string_schema("Product description as submitted."),
            "images": string_array_schema("Ordered image URLs as submitted."),
            "category": category_schema(),
            "creationAt": string_schema("Creation timestamp string."),
            "updatedAt": string_schema("Last-update timestamp string.")
        }
    })
}

/// Returns the JSON schema for the record returned by a product lookup.
#[must_use]
pub fn fetched_product_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "storefront://contract/schemas/fetched-product.schema.json",
        "title": "Storefront Fetched Product",
        "description": "Record returned by a product lookup call.",
        "type": "object",
        "required": [
            "id",
            "title",
            "slug",
            "price",
            "description",
            "category",
            "images"
        ],
        "properties": {
            "id": number_schema("Server-assigned product identifier."),
            "title": string_schema("Product title."),
            "slug": string_schema("URL-safe product slug."),
            "price": number_schema("Product price."),
            "description": string_schema("Product description."),
            "category": category_schema(),
            "images": string_array_schema("Ordered image URLs.")
        }
    })
}

/// Returns the JSON schema for the standard client-error body.
#[must_use]
pub fn client_error_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "storefront://contract/schemas/client-error.schema.json",
        "title": "Storefront Client Error",
        "description": "Standard body the service returns for a 4xx failure.",
        "type": "object",
        "required": ["message", "error", "statusCode"],
        "properties": {
            "message": string_array_schema("Per-field violation messages."),
            "error": string_schema("HTTP reason phrase."),
            "statusCode": number_schema("HTTP status code echoed in the body.")
        }
    })
}

// ============================================================================
// SECTION: Shared Sub-Schemas
// ============================================================================

/// Builds the nested category object schema.
fn category_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "name", "image", "slug"],
        "properties": {
            "id": number_schema("Server-assigned category identifier."),
            "name": string_schema("Category display name."),
            "image": string_schema("Category image URL."),
            "slug": string_schema("URL-safe category slug.")
        }
    })
}

/// Builds a described string schema.
fn string_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Builds a described number schema.
fn number_schema(description: &str) -> Value {
    json!({
        "type": "number",
        "description": description
    })
}

/// Builds a described array-of-string schema.
fn string_array_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}
