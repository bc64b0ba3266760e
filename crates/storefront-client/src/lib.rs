// crates/storefront-client/src/lib.rs
// ============================================================================
// Module: Storefront Client Library
// Description: HTTP action helpers and scenario orchestration for the API.
// Purpose: Issue storefront requests and drive setup/act/assert/teardown.
// Dependencies: reqwest, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Thin, typed glue over the HTTP transport: each action helper issues exactly
//! one request against the storefront API and returns a normalized status plus
//! parsed JSON body. The scenario module layers the fixture lifecycle on top,
//! guaranteeing teardown on every exit path. There are no retries anywhere:
//! transport failures propagate and fail the enclosing scenario.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod actions;
pub mod config;
pub mod scenario;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use actions::ApiResponse;
pub use actions::ClientError;
pub use actions::StorefrontClient;
pub use config::ConfigError;
pub use config::StorefrontConfig;
pub use scenario::ProductFixture;
pub use scenario::ScenarioContext;
pub use scenario::ScenarioError;
pub use scenario::ScenarioPhase;
pub use scenario::cleanup_unexpected_success;
pub use scenario::run_scenario;
