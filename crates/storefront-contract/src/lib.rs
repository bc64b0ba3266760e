// crates/storefront-contract/src/lib.rs
// ============================================================================
// Module: Storefront Contract Library
// Description: Canonical response contracts for the storefront REST API.
// Purpose: Provide wire types, schema definitions, and the validation harness.
// Dependencies: jsonschema, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The contract library is the single source of truth for the response shapes
//! the storefront API is expected to produce: the created-product record, the
//! fetched-product record, and the standard client-error record. Schemas are
//! static draft-07 documents; the validation harness compiles them once and
//! reports violation lists instead of failing on invalid documents.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schemas;
pub mod types;
pub mod validation;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised while constructing the contract harness.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A malformed schema definition is a programming error and surfaces here
///   at harness construction time, never during document evaluation.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A registry schema failed to compile.
    #[error("schema {name} failed to compile: {message}")]
    Schema {
        /// Name of the schema that failed to compile.
        name: schemas::SchemaName,
        /// Compiler diagnostic for the failure.
        message: String,
    },
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use schemas::SchemaName;
pub use types::CategoryRecord;
pub use types::ClientErrorRecord;
pub use types::ErrorMessage;
pub use types::ProductPayload;
pub use types::ProductRecord;
pub use validation::SchemaSet;
pub use validation::ValidationReport;
