use axum::Router;
use std::sync::Arc;

use crate::presentation::state::AppState;

mod auth;
mod friends;
mod habits;
mod health;
mod journal;

/// Every endpoint, relative to `/api`
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(habits::routes())
        .merge(friends::routes())
        .merge(journal::routes())
}
