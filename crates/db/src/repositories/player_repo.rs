//! PostgreSQL backend for the `players` table.

use async_trait::async_trait;
use scout_core::player::Player;
use scout_core::player_query::{PlayerFilter, PlayerListQuery, SortField};
use scout_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{PlayerPage, PlayerRepository, RepositoryError};
use crate::models::player::PlayerRow;

/// Maps raw table columns onto catalog field names.
///
/// `positions` keeps the full comma-separated list for filtering while
/// `position` exposes only the primary one. Blank text columns fall back
/// to placeholder labels.
const PLAYER_PROJECTION: &str = "\
    SELECT id, \
           long_name AS name, \
           COALESCE(NULLIF(TRIM(club_name), ''), 'Unknown Club') AS club, \
           COALESCE(NULLIF(TRIM(split_part(player_positions, ',', 1)), ''), 'Unknown') AS position, \
           COALESCE(NULLIF(TRIM(nationality_name), ''), 'Unknown Nationality') AS nationality, \
           COALESCE(player_positions, '') AS positions, \
           overall AS rating, \
           pace AS speed, \
           shooting, \
           dribbling, \
           passing \
    FROM players";

/// Column list selected from the projection.
const COLUMNS: &str =
    "p.id, p.name, p.club, p.position, p.nationality, p.rating, p.speed, p.shooting, p.dribbling, p.passing";

/// Reads players from PostgreSQL.
#[derive(Clone)]
pub struct PgPlayerRepo {
    pool: PgPool,
}

impl PgPlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE metacharacters and wrap the term for a substring match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// SQL expression a sort field orders by.
///
/// Text keys are folded and compared byte-wise so the order is the one
/// [`text_sort_key`](scout_core::player_query::text_sort_key) produces,
/// independent of the database's default collation.
fn sort_expr(field: SortField) -> &'static str {
    match field {
        SortField::Name => r#"LOWER(unaccent(p.name)) COLLATE "C""#,
        SortField::Club => r#"LOWER(unaccent(p.club)) COLLATE "C""#,
        SortField::Nationality => r#"LOWER(unaccent(p.nationality)) COLLATE "C""#,
        SortField::Position => r#"LOWER(unaccent(p.position)) COLLATE "C""#,
        SortField::Rating => "COALESCE(p.rating, 0)",
        SortField::Speed => "COALESCE(p.speed, 0)",
    }
}

/// Append `FROM (projection) AS p WHERE ...` for the given filter.
fn push_from_and_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PlayerFilter) {
    builder.push(" FROM (");
    builder.push(PLAYER_PROJECTION);
    builder.push(") AS p WHERE TRUE");

    let text_filters = [
        ("p.name", &filter.name),
        ("p.club", &filter.club),
        ("p.nationality", &filter.nationality),
        ("p.positions", &filter.position),
    ];
    for (column, value) in text_filters {
        if let Some(term) = value {
            builder.push(format!(" AND {column} ILIKE "));
            builder.push_bind(like_pattern(term));
        }
    }

    let range_filters = [
        ("COALESCE(p.rating, 0) >= ", filter.min_rating),
        ("COALESCE(p.rating, 0) <= ", filter.max_rating),
        ("COALESCE(p.speed, 0) >= ", filter.min_speed),
        ("COALESCE(p.speed, 0) <= ", filter.max_speed),
    ];
    for (condition, bound) in range_filters {
        if let Some(bound) = bound {
            builder.push(" AND ");
            builder.push(condition);
            builder.push_bind(bound);
        }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepo {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_one_by_id(&self, id: DbId) -> Result<Option<Player>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM ({PLAYER_PROJECTION}) AS p WHERE p.id = $1");
        let row = sqlx::query_as::<_, PlayerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Player::from))
    }

    async fn find_many_and_count(
        &self,
        query: &PlayerListQuery,
    ) -> Result<PlayerPage, RepositoryError> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        push_from_and_filters(&mut count_builder, &query.filter);
        let count: i64 = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS}"));
        push_from_and_filters(&mut builder, &query.filter);

        builder.push(" ORDER BY ");
        for key in query.effective_order() {
            builder.push(sort_expr(key.field));
            builder.push(" ");
            builder.push(key.direction.as_sql());
            builder.push(", ");
        }
        builder.push("p.id ASC LIMIT ");
        builder.push_bind(query.limit.max(0));
        builder.push(" OFFSET ");
        builder.push_bind(query.offset.max(0));

        let rows = builder
            .build_query_as::<PlayerRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            backend = "postgres",
            count,
            returned = rows.len(),
            limit = query.limit,
            offset = query.offset,
            "Listed players"
        );

        Ok(PlayerPage {
            rows: rows.into_iter().map(Player::from).collect(),
            count,
        })
    }
}
