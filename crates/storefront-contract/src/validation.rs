// crates/storefront-contract/src/validation.rs
// ============================================================================
// Module: Validation Harness
// Description: Compiled schema set and violation reporting for responses.
// Purpose: Check response documents against registry schemas without panics.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! The validation harness compiles every registry schema once at construction
//! and evaluates response documents against them. A structurally invalid
//! document is an expected negative-test outcome: evaluation reports the list
//! of violated constraints and never fails. A malformed schema definition, by
//! contrast, is a programming error and fails loudly in [`SchemaSet::compile`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;

use crate::ContractError;
use crate::schemas;
use crate::schemas::SchemaName;

// ============================================================================
// SECTION: Validation Report
// ============================================================================

/// Outcome of evaluating one document against one schema.
///
/// # Invariants
/// - `violations` is empty exactly when the document conforms.
/// - Entries are human-readable, one per violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Schema the document was evaluated against.
    pub schema: SchemaName,
    /// Violated constraints, empty on conformance.
    pub violations: Vec<String>,
}

impl ValidationReport {
    /// Returns true when the document conforms to the schema.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Converts the report into an assertion result for test suites.
    ///
    /// # Errors
    ///
    /// Returns the joined violation list when the document does not conform.
    pub fn assert_conforms(&self, label: &str) -> Result<(), String> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(format!(
                "schema {} violated ({label}): {}",
                self.schema,
                self.violations.join("; ")
            ))
        }
    }
}

// ============================================================================
// SECTION: Schema Set
// ============================================================================

/// Registry schemas compiled once for the lifetime of the harness.
pub struct SchemaSet {
    /// Validator for the created-product record.
    created_product: Validator,
    /// Validator for the fetched-product record.
    fetched_product: Validator,
    /// Validator for the client-error body.
    client_error: Validator,
}

impl SchemaSet {
    /// Compiles every registry schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Schema`] when a schema definition does not
    /// compile; this indicates a harness bug, not a service failure.
    pub fn compile() -> Result<Self, ContractError> {
        Ok(Self {
            created_product: compile_schema(SchemaName::CreatedProduct)?,
            fetched_product: compile_schema(SchemaName::FetchedProduct)?,
            client_error: compile_schema(SchemaName::ClientError)?,
        })
    }

    /// Evaluates a document against the named schema.
    ///
    /// Invalid documents are reported, never raised: the returned report
    /// carries one entry per violated constraint.
    #[must_use]
    pub fn evaluate(&self, name: SchemaName, document: &Value) -> ValidationReport {
        let validator = match name {
            SchemaName::CreatedProduct => &self.created_product,
            SchemaName::FetchedProduct => &self.fetched_product,
            SchemaName::ClientError => &self.client_error,
        };
        let violations = validator.iter_errors(document).map(|err| err.to_string()).collect();
        ValidationReport {
            schema: name,
            violations,
        }
    }
}

// ============================================================================
// SECTION: Compilation
// ============================================================================

/// Compiles a single registry schema with draft-07 semantics.
fn compile_schema(name: SchemaName) -> Result<Validator, ContractError> {
    let schema = schemas::schema_for(name);
    jsonschema::options().with_draft(Draft::Draft7).build(&schema).map_err(|err| {
        ContractError::Schema {
            name,
            message: err.to_string(),
        }
    })
}
