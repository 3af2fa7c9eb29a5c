//! # Analysis-Mode Resolution
//!
//! The dashboard controls hand over a player name and a mode label; this
//! module resolves which card to build, auto-detecting the player's primary
//! role from delivery counts when asked to.

use serde::{Deserialize, Serialize};

use crate::models::{DeliveryTable, PlayerSummary};

use super::{batting_summary, bowling_summary};

/// Analysis mode as selected in the dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    Auto,
    Batting,
    Bowling,
}

impl AnalysisMode {
    /// Parse a UI label ("Auto detect" / "Batting card" / "Bowling card",
    /// any casing). Unrecognized labels fall back to Auto; mode selection
    /// never faults.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.starts_with("bat") {
            AnalysisMode::Batting
        } else if lower.starts_with("bowl") {
            AnalysisMode::Bowling
        } else {
            AnalysisMode::Auto
        }
    }
}

/// Which card a player resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Batting,
    Bowling,
}

impl PlayerRole {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerRole::Batting => "batting",
            PlayerRole::Bowling => "bowling",
        }
    }
}

/// Auto-detect a player's primary role: the bowling card is selected only
/// when the player bowled strictly more deliveries than they faced. Ties
/// (including the absent player's 0/0) resolve to batting.
pub fn detect_role(table: &DeliveryTable, player: &str) -> PlayerRole {
    let bowled = table.balls_bowled(player);
    let faced = table.balls_faced(player);
    log::debug!("role auto-detect for {player}: {bowled} bowled vs {faced} faced");
    if bowled > faced {
        PlayerRole::Bowling
    } else {
        PlayerRole::Batting
    }
}

/// Resolve an analysis mode to a concrete role.
pub fn resolve_role(mode: AnalysisMode, table: &DeliveryTable, player: &str) -> PlayerRole {
    match mode {
        AnalysisMode::Auto => detect_role(table, player),
        AnalysisMode::Batting => PlayerRole::Batting,
        AnalysisMode::Bowling => PlayerRole::Bowling,
    }
}

/// Run the full selection + aggregation pass for one player.
/// `None` means the resolved card has no data for this player.
pub fn analyze_player(
    table: &DeliveryTable,
    player: &str,
    mode: AnalysisMode,
) -> (PlayerRole, Option<PlayerSummary>) {
    let role = resolve_role(mode, table, player);
    let summary = match role {
        PlayerRole::Batting => batting_summary(table, player).map(PlayerSummary::Batting),
        PlayerRole::Bowling => bowling_summary(table, player).map(PlayerSummary::Bowling),
    };
    (role, summary)
}
