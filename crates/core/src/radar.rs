//! Radar (attribute profile) derivation for the player detail view.

use serde::Serialize;

use crate::player::{stat_or_zero, Player};

/// Axis labels in the order the detail chart draws them.
pub const RADAR_LABELS: [&str; 4] = ["Speed", "Shooting", "Passing", "Dribbling"];

/// One axis of a player's radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub label: &'static str,
    pub value: i32,
}

/// Build the four-axis radar for a player. Missing stats plot as 0.
pub fn build_radar(player: &Player) -> Vec<RadarPoint> {
    let values = [
        player.speed,
        player.shooting,
        player.passing,
        player.dribbling,
    ];

    RADAR_LABELS
        .into_iter()
        .zip(values)
        .map(|(label, value)| RadarPoint {
            label,
            value: stat_or_zero(value),
        })
        .collect()
}
