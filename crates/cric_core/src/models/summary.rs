use serde::{Deserialize, Serialize};

use crate::classify::{BowlerType, Phase};

/// Whether an analyst note reads as a strength or a concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    Positive,
    Negative,
}

/// A single analyst note attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub tone: InsightTone,
    pub text: String,
}

/// Per-phase batting breakdown row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseBattingRow {
    pub phase: Phase,
    pub runs: u32,
    pub balls: u32,
    pub dots: u32,
}

/// Pace-vs-spin batting breakdown row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlerTypeRow {
    pub bowler_type: BowlerType,
    pub runs: u32,
    pub balls: u32,
}

/// Aggregated batting card for one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattingSummary {
    pub player: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dots: u32,
    pub dismissals: u32,
    /// runs / balls * 100.
    pub strike_rate: f64,
    /// runs / dismissals; None while the player is undismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    pub dot_pct: f64,
    pub boundary_pct: f64,
    /// One row per phase present in the data, in phase order.
    pub by_phase: Vec<PhaseBattingRow>,
    /// One row per bowler type present in the data.
    pub by_bowler_type: Vec<BowlerTypeRow>,
    pub insights: Vec<Insight>,
}

/// Per-phase bowling breakdown row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseBowlingRow {
    pub phase: Phase,
    pub balls: u32,
    pub runs: u32,
    pub dots: u32,
    pub wickets: u32,
}

/// Opponent-handedness breakdown row ("RHB" / "LHB" / "UNKNOWN").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingStyleRow {
    pub style: String,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
}

/// One entry of the ordered runs-conceded-by-over sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverRuns {
    pub over: u16,
    pub runs: u32,
}

/// Aggregated bowling card for one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BowlingSummary {
    pub player: String,
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub dots: u32,
    /// balls / 6.
    pub overs: f64,
    /// runs / overs, 0.0 when no overs were bowled.
    pub economy: f64,
    /// runs / wickets, 0.0 while wicketless.
    pub average: f64,
    /// balls / wickets, 0.0 while wicketless.
    pub strike_rate: f64,
    pub balls_per_boundary: f64,
    pub balls_per_dismissal: f64,
    pub by_phase: Vec<PhaseBowlingRow>,
    /// Sorted by style label.
    pub by_batting_style: Vec<BattingStyleRow>,
    /// Ordered by over number; overs the source could not parse are absent.
    pub runs_by_over: Vec<OverRuns>,
    pub insights: Vec<Insight>,
}

/// The card handed to the renderer, tagged by which analysis produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "card", rename_all = "snake_case")]
pub enum PlayerSummary {
    Batting(BattingSummary),
    Bowling(BowlingSummary),
}

impl PlayerSummary {
    pub fn player(&self) -> &str {
        match self {
            PlayerSummary::Batting(s) => &s.player,
            PlayerSummary::Bowling(s) => &s.player,
        }
    }
}
