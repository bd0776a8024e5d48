//! Player record and the response shapes built from it.
//!
//! [`Player`] is what repository backends hand back: stats may be missing
//! because the source dataset has gaps. [`PlayerDto`] is what leaves the
//! service boundary, with every stat coerced to a concrete number.

use serde::{Deserialize, Serialize};

use crate::radar::{build_radar, RadarPoint};
use crate::types::DbId;

/// Entity name used in not-found errors.
pub const PLAYER_ENTITY: &str = "Player";

/// A player as returned by a repository backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub club: String,
    pub position: String,
    pub nationality: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub speed: Option<i32>,
    #[serde(default)]
    pub shooting: Option<i32>,
    #[serde(default)]
    pub dribbling: Option<i32>,
    #[serde(default)]
    pub passing: Option<i32>,
}

/// Missing stats count as zero everywhere: filters, sorting and output.
pub fn stat_or_zero(value: Option<i32>) -> i32 {
    value.unwrap_or(0)
}

/// A player row as serialized in list responses and CSV exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDto {
    pub id: DbId,
    pub name: String,
    pub club: String,
    pub position: String,
    pub nationality: String,
    pub rating: i32,
    pub speed: i32,
    pub shooting: i32,
    pub dribbling: i32,
    pub passing: i32,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            club: player.club.clone(),
            position: player.position.clone(),
            nationality: player.nationality.clone(),
            rating: stat_or_zero(player.rating),
            speed: stat_or_zero(player.speed),
            shooting: stat_or_zero(player.shooting),
            dribbling: stat_or_zero(player.dribbling),
            passing: stat_or_zero(player.passing),
        }
    }
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self::from(&player)
    }
}

/// Detail view of a single player: the row plus its radar profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: PlayerDto,
    pub radar: Vec<RadarPoint>,
}

impl From<&Player> for PlayerDetail {
    fn from(player: &Player) -> Self {
        Self {
            player: PlayerDto::from(player),
            radar: build_radar(player),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_player() -> Player {
        Player {
            id: 7,
            name: "Sparse".to_string(),
            club: "Nowhere FC".to_string(),
            position: "CM".to_string(),
            nationality: "Chile".to_string(),
            rating: Some(70),
            speed: None,
            shooting: Some(55),
            dribbling: None,
            passing: None,
        }
    }

    #[test]
    fn dto_coerces_missing_stats_to_zero() {
        let dto = PlayerDto::from(&sparse_player());
        assert_eq!(dto.rating, 70);
        assert_eq!(dto.speed, 0);
        assert_eq!(dto.shooting, 55);
        assert_eq!(dto.dribbling, 0);
        assert_eq!(dto.passing, 0);
    }

    #[test]
    fn detail_serializes_flat_with_radar() {
        let detail = PlayerDetail::from(&sparse_player());
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Sparse");
        assert_eq!(json["speed"], 0);
        assert_eq!(json["radar"].as_array().unwrap().len(), 4);
        assert_eq!(json["radar"][0]["label"], "Speed");
        assert_eq!(json["radar"][0]["value"], 0);
    }

    #[test]
    fn seed_json_may_omit_stats() {
        let player: Player = serde_json::from_str(
            r#"{"id":1,"name":"A","club":"B","position":"ST","nationality":"C"}"#,
        )
        .unwrap();
        assert_eq!(player.rating, None);
        assert_eq!(PlayerDto::from(player).rating, 0);
    }
}
