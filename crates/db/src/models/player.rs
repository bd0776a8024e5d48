//! Row model for the `players` table.
//!
//! The table keeps the source dataset's column names (`long_name`,
//! `club_name`, `overall`, `pace`, ...). Queries project them onto the
//! catalog's field names, so this struct mirrors [`Player`] one to one.

use scout_core::player::Player;
use scout_core::types::DbId;
use sqlx::FromRow;

/// A projected row from the `players` table.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: DbId,
    pub name: String,
    pub club: String,
    pub position: String,
    pub nationality: String,
    pub rating: Option<i32>,
    pub speed: Option<i32>,
    pub shooting: Option<i32>,
    pub dribbling: Option<i32>,
    pub passing: Option<i32>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id,
            name: row.name,
            club: row.club,
            position: row.position,
            nationality: row.nationality,
            rating: row.rating,
            speed: row.speed,
            shooting: row.shooting,
            dribbling: row.dribbling,
            passing: row.passing,
        }
    }
}
