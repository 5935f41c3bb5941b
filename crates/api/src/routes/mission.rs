//! Route definitions for missions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/mision`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /nombre?prefijo=     -> list_by_name_prefix
/// GET    /nivel?nivel=        -> list_by_level
/// GET    /recompensa/{id}     -> get_reward
/// POST   /reinicio            -> reset_all
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> mark_completed
/// DELETE /{id}                -> mark_inactive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route("/nombre", get(mission::list_by_name_prefix))
        .route("/nivel", get(mission::list_by_level))
        .route("/recompensa/{id}", get(mission::get_reward))
        .route("/reinicio", post(mission::reset_all))
        .route(
            "/{id}",
            get(mission::get_by_id)
                .put(mission::mark_completed)
                .delete(mission::mark_inactive),
        )
}
