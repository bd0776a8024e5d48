//! In-memory backend over a fixed list of players.
//!
//! Used for local development without PostgreSQL and by the API tests.
//! The list never changes after construction, so no locking is needed.

use std::cmp::Ordering;
use std::path::Path;

use async_trait::async_trait;
use scout_core::player::{stat_or_zero, Player};
use scout_core::player_query::{PlayerFilter, PlayerListQuery};
use scout_core::types::DbId;

use super::{PlayerPage, PlayerRepository, RepositoryError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerRepo {
    players: Vec<Player>,
}

impl InMemoryPlayerRepo {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Load players from a JSON array file (the format of `db/seeds/players.json`).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RepositoryError::Seed(format!("{}: {e}", path.display())))?;
        let players: Vec<Player> = serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::Seed(format!("{}: {e}", path.display())))?;

        tracing::info!(path = %path.display(), count = players.len(), "Loaded player seed data");
        Ok(Self::new(players))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

fn matches(filter: &PlayerFilter, player: &Player) -> bool {
    let text_ok = [
        (&filter.name, &player.name),
        (&filter.club, &player.club),
        (&filter.nationality, &player.nationality),
        (&filter.position, &player.position),
    ]
    .into_iter()
    .all(|(term, value)| term.as_deref().map_or(true, |t| contains_ci(value, t)));

    text_ok
        && within(
            stat_or_zero(player.rating),
            filter.min_rating,
            filter.max_rating,
        )
        && within(stat_or_zero(player.speed), filter.min_speed, filter.max_speed)
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepo {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_one_by_id(&self, id: DbId) -> Result<Option<Player>, RepositoryError> {
        Ok(self.players.iter().find(|p| p.id == id).cloned())
    }

    async fn find_many_and_count(
        &self,
        query: &PlayerListQuery,
    ) -> Result<PlayerPage, RepositoryError> {
        let order = query.effective_order();

        let mut matched: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| matches(&query.filter, p))
            .collect();
        matched.sort_by(|a, b| {
            order
                .iter()
                .fold(Ordering::Equal, |acc, key| {
                    acc.then_with(|| key.compare(a, b))
                })
                .then_with(|| a.id.cmp(&b.id))
        });

        let count = matched.len() as i64;
        let offset = usize::try_from(query.offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit.max(0)).unwrap_or(usize::MAX);
        let rows: Vec<Player> = matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        tracing::debug!(
            backend = "memory",
            count,
            returned = rows.len(),
            limit = query.limit,
            offset = query.offset,
            "Listed players"
        );

        Ok(PlayerPage { rows, count })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use scout_core::player_query::{PlayersQuery, SortField, SortKey};

    use super::*;

    fn player(id: DbId, name: &str, club: &str, rating: Option<i32>, speed: Option<i32>) -> Player {
        Player {
            id,
            name: name.to_string(),
            club: club.to_string(),
            position: "ST".to_string(),
            nationality: "Brazil".to_string(),
            rating,
            speed,
            shooting: None,
            dribbling: None,
            passing: None,
        }
    }

    fn repo() -> InMemoryPlayerRepo {
        InMemoryPlayerRepo::new(vec![
            player(1, "Beta", "Santos", Some(95), Some(80)),
            player(2, "alpha", "Flamengo", Some(91), Some(90)),
            player(3, "Gamma", "santos B", Some(70), None),
            player(4, "Delta", "Palmeiras", None, Some(60)),
            player(5, "Epsilon", "Santos", Some(91), Some(75)),
        ])
    }

    fn list_query(filter: PlayerFilter, order: Vec<SortKey>) -> PlayerListQuery {
        PlayerListQuery {
            filter,
            limit: 10,
            offset: 0,
            order,
        }
    }

    fn ids(page: &PlayerPage) -> Vec<DbId> {
        page.rows.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn min_rating_with_default_order_sorts_by_name() {
        let repo = InMemoryPlayerRepo::new(vec![
            player(1, "Beta", "X", Some(95), None),
            player(2, "Alpha", "Y", Some(91), None),
            player(3, "Low", "Z", Some(60), None),
        ]);
        let filter = PlayerFilter {
            min_rating: Some(90),
            ..PlayerFilter::default()
        };

        let page = repo
            .find_many_and_count(&list_query(filter, Vec::new()))
            .await
            .unwrap();
        let names: Vec<&str> = page.rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(page.count, 2);
    }

    #[tokio::test]
    async fn text_filters_are_case_insensitive_substrings() {
        let filter = PlayerFilter {
            club: Some("SANTOS".to_string()),
            ..PlayerFilter::default()
        };
        let page = repo()
            .find_many_and_count(&list_query(filter, Vec::new()))
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![1, 5, 3]);
    }

    #[tokio::test]
    async fn missing_stats_count_as_zero_in_ranges() {
        let filter = PlayerFilter {
            max_rating: Some(0),
            ..PlayerFilter::default()
        };
        let page = repo()
            .find_many_and_count(&list_query(filter, Vec::new()))
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![4]);

        let filter = PlayerFilter {
            min_speed: Some(1),
            ..PlayerFilter::default()
        };
        let page = repo()
            .find_many_and_count(&list_query(filter, Vec::new()))
            .await
            .unwrap();
        assert!(!ids(&page).contains(&3));
    }

    #[tokio::test]
    async fn every_sort_key_is_applied() {
        let order = vec![SortKey::desc(SortField::Rating), SortKey::asc(SortField::Speed)];
        let page = repo()
            .find_many_and_count(&list_query(PlayerFilter::default(), order))
            .await
            .unwrap();
        // 95, then the two 91s by speed ascending, then 70, then missing (0).
        assert_eq!(ids(&page), vec![1, 5, 2, 3, 4]);
    }

    #[tokio::test]
    async fn accented_names_sort_by_base_letter() {
        let repo = InMemoryPlayerRepo::new(vec![
            player(1, "Zico", "X", Some(80), None),
            player(2, "Bruno", "X", Some(80), None),
            player(3, "Álvaro", "X", Some(80), None),
            player(4, "Vancouver", "X", Some(80), None),
            player(5, "Van Dijk", "X", Some(80), None),
            player(6, "Müller", "X", Some(80), None),
        ]);
        let page = repo
            .find_many_and_count(&list_query(PlayerFilter::default(), Vec::new()))
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![3, 2, 6, 5, 4, 1]);
    }

    #[tokio::test]
    async fn count_is_taken_before_slicing() {
        let query = PlayerListQuery {
            filter: PlayerFilter::default(),
            limit: 2,
            offset: 2,
            order: vec![SortKey::asc(SortField::Name)],
        };
        let page = repo().find_many_and_count(&query).await.unwrap();
        assert_eq!(page.count, 5);
        // alpha, Beta | Delta, Epsilon | Gamma
        assert_eq!(ids(&page), vec![4, 5]);
    }

    #[tokio::test]
    async fn offset_past_end_returns_no_rows() {
        let query = PlayerListQuery {
            offset: 100,
            ..list_query(PlayerFilter::default(), Vec::new())
        };
        let page = repo().find_many_and_count(&query).await.unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.count, 5);
    }

    #[tokio::test]
    async fn filtering_is_idempotent() {
        let raw = PlayersQuery {
            club: Some("santos".to_string()),
            min_rating: Some("80".to_string()),
            sort: Some("-rating".to_string()),
            ..PlayersQuery::default()
        };
        let query = raw.normalize().page_query();
        let repo = repo();

        let first = repo.find_many_and_count(&query).await.unwrap();
        let second = repo.find_many_and_count(&query).await.unwrap();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.count, second.count);
    }

    #[tokio::test]
    async fn find_one_by_id_returns_none_for_unknown_id() {
        let repo = repo();
        assert_matches!(repo.find_one_by_id(2).await, Ok(Some(p)) if p.name == "alpha");
        assert_matches!(repo.find_one_by_id(99).await, Ok(None));
    }

    #[test]
    fn missing_seed_file_is_a_seed_error() {
        let result = InMemoryPlayerRepo::from_json_file("/nonexistent/players.json");
        assert_matches!(result, Err(RepositoryError::Seed(_)));
    }
}
