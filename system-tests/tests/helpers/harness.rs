// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Client Harness
// Description: Helpers for building the storefront client in system-tests.
// Purpose: Resolve configuration and construct clients consistently.
// Dependencies: system-tests, storefront-client, storefront-contract
// ============================================================================

use std::time::Duration;

use storefront_client::StorefrontClient;
use storefront_client::StorefrontConfig;
use storefront_contract::SchemaSet;
use system_tests::config::SystemTestConfig;

use super::timeouts;

/// Default per-request timeout for live suites.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds a storefront client from the test environment.
///
/// Honors the base-URL override for staging instances and the timeout
/// override as a minimum.
pub fn storefront_client() -> Result<StorefrontClient, String> {
    let env = SystemTestConfig::load()?;
    let config = match env.base_url {
        Some(raw) => StorefrontConfig::from_base_url(&raw)
            .map_err(|err| format!("base url override rejected: {err}"))?,
        None => StorefrontConfig::default(),
    };
    let timeout = timeouts::resolve_timeout(DEFAULT_REQUEST_TIMEOUT);
    StorefrontClient::new(config, timeout)
        .map_err(|err| format!("failed to build storefront client: {err}"))
}

/// Compiles the registry schemas for suite assertions.
pub fn schema_set() -> Result<SchemaSet, String> {
    SchemaSet::compile().map_err(|err| format!("schema registry failed to compile: {err}"))
}
