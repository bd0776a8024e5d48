use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scout_core::error::CoreError;
use scout_db::repositories::RepositoryError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RepositoryError`] for
/// storage failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scout_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure in the player repository backend.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with ID {id} not found."),
            ),
            AppError::Repository(RepositoryError::Database(err)) => database_error(err),
            AppError::Repository(RepositoryError::Seed(msg)) => {
                tracing::error!(error = %msg, "Seed data error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Log a sqlx error and map it to a sanitized 500.
///
/// Reads use `fetch_optional`, so a missing player arrives as
/// `CoreError::NotFound` and every sqlx error here is a server fault.
fn database_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    internal_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(CoreError::NotFound {
            entity: "Player",
            id: 9,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let response =
            AppError::from(RepositoryError::Database(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            AppError::from(RepositoryError::Seed("bad json".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn sqlx_row_not_found_is_a_server_error() {
        let response =
            AppError::from(RepositoryError::Database(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
