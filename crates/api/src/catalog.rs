//! Listing, export and detail operations over a player repository.
//!
//! Every operation runs the same path: normalize the raw query, ask the
//! repository, then shape rows into DTOs so that no missing stat leaves
//! the service as anything but 0.

use std::sync::Arc;

use scout_core::csv::build_players_csv;
use scout_core::error::CoreError;
use scout_core::pagination::PageMeta;
use scout_core::player::{PlayerDetail, PlayerDto, PLAYER_ENTITY};
use scout_core::player_query::PlayersQuery;
use scout_core::types::DbId;
use scout_db::repositories::PlayerRepository;

use crate::error::AppResult;
use crate::response::Paginated;

#[derive(Clone)]
pub struct PlayerCatalog {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerCatalog {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &dyn PlayerRepository {
        self.repo.as_ref()
    }

    /// One page of players matching the query, with page metadata.
    pub async fn list(&self, query: &PlayersQuery) -> AppResult<Paginated<PlayerDto>> {
        let normalized = query.normalize();
        let page = self
            .repo
            .find_many_and_count(&normalized.page_query())
            .await?;

        Ok(Paginated {
            items: page.rows.iter().map(PlayerDto::from).collect(),
            meta: PageMeta::new(page.count, normalized.page, normalized.limit),
        })
    }

    /// Every player matching the query (up to the export cap) as CSV.
    pub async fn export_csv(&self, query: &PlayersQuery) -> AppResult<String> {
        let normalized = query.normalize();
        let page = self
            .repo
            .find_many_and_count(&normalized.export_query())
            .await?;

        if page.count > page.rows.len() as i64 {
            tracing::warn!(
                matched = page.count,
                exported = page.rows.len(),
                "Player export truncated at row cap"
            );
        }

        let rows: Vec<PlayerDto> = page.rows.iter().map(PlayerDto::from).collect();
        Ok(build_players_csv(&rows))
    }

    /// A single player with its radar profile.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<PlayerDetail> {
        let player = self
            .repo
            .find_one_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: PLAYER_ENTITY,
                id,
            })?;
        Ok(PlayerDetail::from(&player))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
