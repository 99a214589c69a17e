pub mod account;
pub mod agent;
pub mod market;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(market::routes())
        .merge(agent::routes())
        .merge(account::routes())
}
