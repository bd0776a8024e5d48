//! Handlers for the player catalog endpoints.
//!
//! All three are thin: query parsing is lenient (see
//! [`PlayersQuery::normalize`]) and the work happens in
//! [`PlayerCatalog`](crate::catalog::PlayerCatalog).
//!
//! The query string is decoded as raw pairs rather than straight into a
//! struct, so a repeated key keeps its first value instead of rejecting
//! the request.

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use scout_core::player::{PlayerDetail, PlayerDto};
use scout_core::player_query::PlayersQuery;
use scout_core::types::DbId;

use crate::error::AppResult;
use crate::response::Paginated;
use crate::state::AppState;

/// Decoded query-string pairs, in request order.
type RawParams = Query<Vec<(String, String)>>;

// ---------------------------------------------------------------------------
// GET /api/players
// ---------------------------------------------------------------------------

/// List players matching the query, one page at a time.
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): RawParams,
) -> AppResult<Json<Paginated<PlayerDto>>> {
    let page = state.catalog.list(&PlayersQuery::from_pairs(params)).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /api/players/export
// ---------------------------------------------------------------------------

/// Download every player matching the query as `players.csv`.
///
/// Paging parameters are ignored.
pub async fn export_players(
    State(state): State<AppState>,
    Query(params): RawParams,
) -> AppResult<impl IntoResponse> {
    let csv = state
        .catalog
        .export_csv(&PlayersQuery::from_pairs(params))
        .await?;

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"players.csv\""),
        ],
        csv,
    ))
}

// ---------------------------------------------------------------------------
// GET /api/players/{id}
// ---------------------------------------------------------------------------

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlayerDetail>> {
    let detail = state.catalog.get_by_id(id).await?;
    Ok(Json(detail))
}
