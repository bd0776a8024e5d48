pub mod health;
pub mod players;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /players                 list (filter, sort, paginate)
/// /players/export          CSV download of the filtered set
/// /players/{id}            detail with radar profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/players", players::router())
}
