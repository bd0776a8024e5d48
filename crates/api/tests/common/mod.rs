#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use scout_core::player::Player;
use scout_core::types::DbId;
use sqlx::PgPool;
use tower::ServiceExt;

use scout_api::catalog::PlayerCatalog;
use scout_api::config::{LogFormat, PlayerBackend, ServerConfig};
use scout_api::router::build_app_router;
use scout_api::state::AppState;
use scout_db::repositories::{InMemoryPlayerRepo, PgPlayerRepo, PlayerRepository};

/// Origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:4200";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(backend: PlayerBackend) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        backend,
        players_seed_path: seed_path(),
        log_format: LogFormat::Text,
    }
}

/// Absolute path of the checked-in seed file.
pub fn seed_path() -> String {
    format!("{}/../../db/seeds/players.json", env!("CARGO_MANIFEST_DIR"))
}

pub fn player(
    id: DbId,
    name: &str,
    club: &str,
    position: &str,
    rating: Option<i32>,
    speed: Option<i32>,
) -> Player {
    Player {
        id,
        name: name.to_string(),
        club: club.to_string(),
        position: position.to_string(),
        nationality: "Brazil".to_string(),
        rating,
        speed,
        shooting: Some(70),
        dribbling: Some(75),
        passing: Some(80),
    }
}

/// Six players covering the cases the API tests rely on: a name with a
/// comma, a player with no rating, and two clubs sharing a prefix.
pub fn fixture_players() -> Vec<Player> {
    vec![
        player(1, "Beta", "Santos", "ST", Some(95), Some(88)),
        player(2, "Alpha", "Flamengo", "CM", Some(91), Some(72)),
        player(3, "Gamma", "Santos B", "GK", Some(70), None),
        player(4, "Delta, Jr.", "Palmeiras", "CB", None, Some(60)),
        player(5, "Epsilon", "Santos", "LW", Some(84), Some(93)),
        player(6, "Zeta", "Corinthians", "RW", Some(79), Some(90)),
    ]
}

fn app_for(repo: Arc<dyn PlayerRepository>, backend: PlayerBackend) -> Router {
    let state = AppState {
        catalog: PlayerCatalog::new(repo),
    };
    build_app_router(state, &test_config(backend))
}

/// Build the full application router over the in-memory backend.
///
/// Uses the same middleware stack as `main.rs` (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app() -> Router {
    build_test_app_with(fixture_players())
}

pub fn build_test_app_with(players: Vec<Player>) -> Router {
    build_test_app_from_repo(InMemoryPlayerRepo::new(players))
}

pub fn build_test_app_from_repo(repo: InMemoryPlayerRepo) -> Router {
    app_for(Arc::new(repo), PlayerBackend::Memory)
}

/// Build the full application router over PostgreSQL.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    app_for(Arc::new(PgPlayerRepo::new(pool)), PlayerBackend::Postgres)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Names of the `items` array in a list response.
pub fn item_names(json: &serde_json::Value) -> Vec<String> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
