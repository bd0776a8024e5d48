//! CSV serialization for player exports.

use crate::player::PlayerDto;

/// Export columns, in output order.
pub const PLAYER_CSV_COLUMNS: [&str; 10] = [
    "id",
    "name",
    "club",
    "position",
    "nationality",
    "rating",
    "speed",
    "shooting",
    "dribbling",
    "passing",
];

/// Quote a value if it contains a comma, quote, or line break.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn player_row(player: &PlayerDto) -> String {
    [
        player.id.to_string(),
        csv_escape(&player.name),
        csv_escape(&player.club),
        csv_escape(&player.position),
        csv_escape(&player.nationality),
        player.rating.to_string(),
        player.speed.to_string(),
        player.shooting.to_string(),
        player.dribbling.to_string(),
        player.passing.to_string(),
    ]
    .join(",")
}

/// Build the export document: a header row followed by one row per player.
///
/// An empty slice yields the header alone.
pub fn build_players_csv(players: &[PlayerDto]) -> String {
    let mut lines = Vec::with_capacity(players.len() + 1);
    lines.push(PLAYER_CSV_COLUMNS.join(","));
    lines.extend(players.iter().map(player_row));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: i64, name: &str, club: &str) -> PlayerDto {
        PlayerDto {
            id,
            name: name.to_string(),
            club: club.to_string(),
            position: "ST".to_string(),
            nationality: "Argentina".to_string(),
            rating: 90,
            speed: 85,
            shooting: 92,
            dribbling: 94,
            passing: 88,
        }
    }

    #[test]
    fn header_has_fixed_column_order() {
        let csv = build_players_csv(&[]);
        assert_eq!(
            csv,
            "id,name,club,position,nationality,rating,speed,shooting,dribbling,passing"
        );
    }

    #[test]
    fn rows_follow_header_columns() {
        let csv = build_players_csv(&[dto(1, "Lionel Messi", "Inter Miami")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1,Lionel Messi,Inter Miami,ST,Argentina,90,85,92,94,88");
    }

    #[test]
    fn values_with_delimiters_are_quoted() {
        let csv = build_players_csv(&[dto(2, "Said \"The Wall\" Ali", "Club, United")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2,\"Said \"\"The Wall\"\" Ali\",\"Club, United\",ST,Argentina,90,85,92,94,88"
        );
    }
}
