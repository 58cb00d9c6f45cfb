/**
 * Server Initialization
 *
 * Builds the provider, registers the built-in actions and mounts them on
 * an axum router.
 *
 * # Initialization Steps
 *
 * 1. Create a `MemoryProvider` accepting the configured token
 * 2. Register the built-in actions on a `RouteTable` that authenticates
 *    bearer tokens against that provider
 * 3. Mount the table at `{path}/{version}/{action}`
 */

use crate::backend::provider::MemoryProvider;
use crate::backend::routes::{create_router, register_actions, RouteTable};
use crate::shared::ServerConfig;
use std::sync::Arc;

/// Create the axum application and the provider behind it
///
/// The provider is returned so the caller can publish events or seed
/// logins and resources.
pub fn create_app(config: &ServerConfig) -> (axum::Router, Arc<MemoryProvider>) {
    tracing::info!("Initializing xfmarkup server at {}", config.base_url());

    let mut provider = MemoryProvider::new();
    if let Some(token) = &config.token {
        provider = provider.with_token(token.clone());
    }
    let provider = Arc::new(provider);

    let mut table = RouteTable::new().with_auth(provider.clone());
    register_actions(&mut table, Arc::clone(&provider));

    (create_router(Arc::new(table), config), provider)
}
