use crate::catalog::PlayerCatalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the catalog holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Listing, export and detail operations over the configured backend.
    pub catalog: PlayerCatalog,
}
