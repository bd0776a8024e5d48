//! Route definitions for the player catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Player routes, mounted at `/api/players`.
///
/// ```text
/// GET    /                  -> list_players
/// GET    /export            -> export_players
/// GET    /{id}              -> get_player
/// ```
///
/// `/export` is a static segment, so axum matches it ahead of `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(players::list_players))
        .route("/export", get(players::export_players))
        .route("/{id}", get(players::get_player))
}
