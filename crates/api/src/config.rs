/// Which [`PlayerRepository`](scout_db::repositories::PlayerRepository)
/// backend the server reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerBackend {
    /// The `players` table in PostgreSQL (`DATABASE_URL` required).
    Postgres,
    /// A JSON seed file held in memory.
    Memory,
}

impl PlayerBackend {
    pub fn from_str_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" | "in-memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_str_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Player storage backend (default: `postgres`).
    pub backend: PlayerBackend,
    /// Seed file for the memory backend.
    pub players_seed_path: String,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:4200`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PLAYER_BACKEND`       | `postgres`                 |
    /// | `PLAYERS_SEED_PATH`    | `db/seeds/players.json`    |
    /// | `LOG_FORMAT`           | `text`                     |
    ///
    /// `DATABASE_URL` is read separately at startup, only for the
    /// postgres backend.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:4200".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend_raw = std::env::var("PLAYER_BACKEND").unwrap_or_else(|_| "postgres".into());
        let backend = PlayerBackend::from_str_value(&backend_raw)
            .unwrap_or_else(|| panic!("PLAYER_BACKEND must be 'postgres' or 'memory', got '{backend_raw}'"));

        let players_seed_path =
            std::env::var("PLAYERS_SEED_PATH").unwrap_or_else(|_| "db/seeds/players.json".into());

        let log_format_raw = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let log_format = LogFormat::from_str_value(&log_format_raw)
            .unwrap_or_else(|| panic!("LOG_FORMAT must be 'text' or 'json', got '{log_format_raw}'"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            backend,
            players_seed_path,
            log_format,
        }
    }
}
