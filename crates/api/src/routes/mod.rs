pub mod health;
pub mod mission;

use axum::Router;

use crate::state::AppState;

/// Build the mission route tree.
///
/// The resource is served under both `/mision` and `/mission`; the two
/// prefixes share one router.
///
/// ```text
/// /mision                      list, create
/// /mision/nombre?prefijo=      filter by name prefix
/// /mision/nivel?nivel=         filter by maximum level
/// /mision/recompensa/{id}      reward of one mission
/// /mision/reinicio             reset all (POST)
/// /mision/{id}                 get, mark completed (PUT), mark inactive (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/mision", mission::router())
        .nest("/mission", mission::router())
}
