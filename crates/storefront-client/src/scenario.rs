// crates/storefront-client/src/scenario.rs
// ============================================================================
// Module: Scenario Runner
// Description: Fixture lifecycle and phase ordering for test scenarios.
// Purpose: Guarantee setup/act/assert/teardown ordering with cleanup always.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! A scenario progresses through `SETUP -> ACT -> ASSERT -> TEARDOWN` on a
//! single logical thread of control, and always reaches teardown even when
//! the assert phase fails: teardown is unconditional cleanup, not a retry.
//! The one exception is a setup that produced no usable identifier, in which
//! case there is nothing to delete and teardown is skipped by construction.
//! Fixture state is scenario-scoped and passed explicitly through
//! [`ScenarioContext`]; there is no shared mutable state between scenarios.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::actions::ApiResponse;
use crate::actions::StorefrontClient;

// ============================================================================
// SECTION: Phases
// ============================================================================

/// Phase of the scenario state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioPhase {
    /// Fixture creation.
    Setup,
    /// The operation under test.
    Act,
    /// Assertions over the captured result.
    Assert,
    /// Unconditional fixture cleanup.
    Teardown,
}

impl ScenarioPhase {
    /// Returns the stable string form of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Act => "act",
            Self::Assert => "assert",
            Self::Teardown => "teardown",
        }
    }
}

impl fmt::Display for ScenarioPhase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Failure of one scenario, tagged with the phase that produced it.
#[derive(Debug, Error)]
#[error("{phase} phase failed: {message}")]
pub struct ScenarioError {
    /// Phase that failed.
    pub phase: ScenarioPhase,
    /// Failure description.
    pub message: String,
}

impl ScenarioError {
    /// Creates a phase-tagged error.
    #[must_use]
    pub fn new(phase: ScenarioPhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Fixture Guard
// ============================================================================

/// Scenario-scoped view of the fixture handed to the scenario body.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    /// Normalized response from the creation call.
    pub response: ApiResponse,
    /// Identifier captured during setup, absent when creation was rejected.
    pub product_id: Option<i64>,
    /// Slug captured during setup, absent when creation was rejected.
    pub slug: Option<String>,
}

/// Guard for a product created during setup.
///
/// # Invariants
/// - Holds the identifier as an optional resource: teardown deletes when the
///   identifier is present and no-ops when it is absent.
/// - The guard is consumed by teardown, so a fixture is deleted at most once.
#[derive(Debug)]
pub struct ProductFixture {
    /// Identifier captured from the creation response.
    product_id: Option<i64>,
    /// Slug captured from the creation response.
    slug: Option<String>,
    /// Normalized creation response.
    response: ApiResponse,
}

impl ProductFixture {
    /// Issues the creation call and captures the fixture state.
    ///
    /// A 4xx rejection is not a setup failure: the fixture simply holds no
    /// identifier and teardown becomes a no-op.
    ///
    /// # Errors
    ///
    /// Returns a setup-phase error when the transport fails.
    pub async fn create(
        client: &StorefrontClient,
        payload: &Value,
    ) -> Result<Self, ScenarioError> {
        let response = client
            .create_product(payload, &[])
            .await
            .map_err(|err| ScenarioError::new(ScenarioPhase::Setup, err.to_string()))?;
        Ok(Self::from_response(response))
    }

    /// Captures fixture state from a creation response.
    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        let (product_id, slug) = if response.status == 201 {
            (
                response.body.get("id").and_then(Value::as_i64),
                response.body.get("slug").and_then(Value::as_str).map(str::to_string),
            )
        } else {
            (None, None)
        };
        Self {
            product_id,
            slug,
            response,
        }
    }

    /// Returns the captured identifier, when setup produced one.
    #[must_use]
    pub const fn product_id(&self) -> Option<i64> {
        self.product_id
    }

    /// Returns the captured slug, when setup produced one.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Returns the normalized creation response.
    #[must_use]
    pub const fn response(&self) -> &ApiResponse {
        &self.response
    }

    /// Returns the scenario-scoped context for the scenario body.
    #[must_use]
    pub fn context(&self) -> ScenarioContext {
        ScenarioContext {
            response: self.response.clone(),
            product_id: self.product_id,
            slug: self.slug.clone(),
        }
    }

    /// Deletes the fixture when an identifier was captured.
    ///
    /// # Errors
    ///
    /// Returns a teardown-phase error when the deletion call fails at the
    /// transport level or the service rejects it.
    pub async fn teardown(self, client: &StorefrontClient) -> Result<(), ScenarioError> {
        let Some(id) = self.product_id else {
            return Ok(());
        };
        let response = client
            .delete_product(id)
            .await
            .map_err(|err| ScenarioError::new(ScenarioPhase::Teardown, err.to_string()))?;
        if response.status >= 200 && response.status <= 299 {
            Ok(())
        } else {
            Err(ScenarioError::new(
                ScenarioPhase::Teardown,
                format!("delete of product {id} returned status {}", response.status),
            ))
        }
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs one scenario with guaranteed teardown.
///
/// Setup creates the fixture; the scenario body covers act and assert and
/// reports its verdict; teardown always runs afterwards. An assert failure
/// takes precedence over a teardown failure in the reported outcome, but a
/// teardown failure alone also fails the scenario.
///
/// # Errors
///
/// Returns the phase-tagged failure of the first phase that failed.
pub async fn run_scenario<F, Fut>(
    client: &StorefrontClient,
    payload: &Value,
    scenario: F,
) -> Result<(), ScenarioError>
where
    F: FnOnce(ScenarioContext) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let fixture = ProductFixture::create(client, payload).await?;
    let context = fixture.context();
    let verdict = scenario(context).await;
    let teardown = fixture.teardown(client).await;
    combine_outcomes(verdict, teardown)
}

/// Combines the scenario verdict with the teardown outcome.
fn combine_outcomes(
    verdict: Result<(), String>,
    teardown: Result<(), ScenarioError>,
) -> Result<(), ScenarioError> {
    match (verdict, teardown) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(message), _) => Err(ScenarioError::new(ScenarioPhase::Assert, message)),
        (Ok(()), Err(err)) => Err(err),
    }
}

// ============================================================================
// SECTION: Defensive Cleanup
// ============================================================================

/// Deletes a resource created by an unexpectedly accepted invalid payload.
///
/// Negative scenarios call this before reporting the assertion failure so a
/// service that erroneously accepts bad input does not leak state across
/// test runs. Returns the identifier that was cleaned up, when any.
///
/// # Errors
///
/// Returns a teardown-phase error when the cleanup deletion fails.
pub async fn cleanup_unexpected_success(
    client: &StorefrontClient,
    response: &ApiResponse,
) -> Result<Option<i64>, ScenarioError> {
    if response.status != 201 {
        return Ok(None);
    }
    let Some(id) = response.body.get("id").and_then(Value::as_i64) else {
        return Ok(None);
    };
    client
        .delete_product(id)
        .await
        .map_err(|err| ScenarioError::new(ScenarioPhase::Teardown, err.to_string()))?;
    Ok(Some(id))
}
