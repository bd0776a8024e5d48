//! Storage-agnostic player queries.
//!
//! [`PlayerRepository`] is the seam between the catalog service and the
//! data store. Backends are picked once at startup and shared behind an
//! `Arc<dyn PlayerRepository>`:
//!
//! - [`PgPlayerRepo`]: the `players` table in PostgreSQL.
//! - [`InMemoryPlayerRepo`]: a fixed list, optionally loaded from a JSON seed.
//!
//! Both backends apply the same semantics: case-insensitive substring
//! filters, inclusive stat ranges with missing stats read as 0, every sort
//! key honoured in order (name ascending by default), and `id` ascending
//! as the final tiebreak.

use async_trait::async_trait;
use scout_core::player::Player;
use scout_core::player_query::PlayerListQuery;
use scout_core::types::DbId;

pub mod memory_repo;
pub mod player_repo;

pub use memory_repo::InMemoryPlayerRepo;
pub use player_repo::PgPlayerRepo;

/// Errors a repository backend can report.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to load player seed data: {0}")]
    Seed(String),
}

/// One page of a filtered listing.
#[derive(Debug, Clone, Default)]
pub struct PlayerPage {
    /// Rows after filtering, ordering and slicing.
    pub rows: Vec<Player>,
    /// Number of matching rows before slicing.
    pub count: i64,
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), RepositoryError>;

    async fn find_one_by_id(&self, id: DbId) -> Result<Option<Player>, RepositoryError>;

    async fn find_many_and_count(
        &self,
        query: &PlayerListQuery,
    ) -> Result<PlayerPage, RepositoryError>;
}
