//! # Bowling Card Aggregation
//!
//! Mirrors the batting pass over the balls a player bowled: scalar figures,
//! phase and opponent-handedness breakdowns, and the ordered runs-conceded
//! sequence that feeds the per-over bar chart.

use std::collections::{BTreeMap, HashMap};

use crate::classify::Phase;
use crate::models::{
    BattingStyleRow, BowlingSummary, Delivery, DeliveryTable, OverRuns, PhaseBowlingRow,
};

use super::insights::{bowling_insights, BowlingFigures};
use super::ratio;

/// Balls per over.
const BALLS_PER_OVER: f64 = 6.0;

/// Group label for rows whose batting_style column is absent.
const UNKNOWN_STYLE: &str = "UNKNOWN";

/// Build the bowling card for `player`, or `None` when the player bowled no
/// deliveries (the non-fatal "no data" signal).
pub fn bowling_summary(table: &DeliveryTable, player: &str) -> Option<BowlingSummary> {
    let bowled: Vec<&Delivery> = table.bowled_by(player).collect();
    if bowled.is_empty() {
        return None;
    }

    let balls = bowled.len() as u32;
    let runs_conceded: u32 = bowled.iter().map(|d| d.total_runs as u32).sum();
    let wickets = bowled.iter().filter(|d| d.player_dismissed.is_some()).count() as u32;
    let dots = bowled.iter().filter(|d| d.is_dot()).count() as u32;
    let boundaries = bowled.iter().filter(|d| d.is_boundary()).count() as u32;

    let overs = balls as f64 / BALLS_PER_OVER;
    let economy = ratio(runs_conceded as f64, overs);
    let average = ratio(runs_conceded as f64, wickets as f64);
    let strike_rate = ratio(balls as f64, wickets as f64);
    let balls_per_boundary = balls as f64 / boundaries.max(1) as f64;
    let balls_per_dismissal = balls as f64 / wickets.max(1) as f64;

    let mut phase_acc: HashMap<Phase, PhaseBowlingRow> = HashMap::new();
    let mut style_acc: BTreeMap<String, BattingStyleRow> = BTreeMap::new();
    let mut over_acc: BTreeMap<u16, u32> = BTreeMap::new();
    for d in &bowled {
        let phase = Phase::from_over(d.over);
        let row = phase_acc.entry(phase).or_insert(PhaseBowlingRow {
            phase,
            balls: 0,
            runs: 0,
            dots: 0,
            wickets: 0,
        });
        row.balls += 1;
        row.runs += d.total_runs as u32;
        if d.is_dot() {
            row.dots += 1;
        }
        if d.player_dismissed.is_some() {
            row.wickets += 1;
        }

        let style = d
            .batting_style
            .as_deref()
            .unwrap_or(UNKNOWN_STYLE)
            .to_string();
        let row = style_acc.entry(style.clone()).or_insert(BattingStyleRow {
            style,
            balls: 0,
            runs: 0,
            wickets: 0,
        });
        row.balls += 1;
        row.runs += d.total_runs as u32;
        if d.player_dismissed.is_some() {
            row.wickets += 1;
        }

        // Unparseable overs cannot be placed in the sequence; they still
        // count in the Unknown phase bucket above.
        if let Some(over) = d.over {
            *over_acc.entry(over).or_insert(0) += d.total_runs as u32;
        }
    }

    let by_phase: Vec<PhaseBowlingRow> = Phase::ALL
        .iter()
        .filter_map(|p| phase_acc.remove(p))
        .collect();
    let by_batting_style = style_acc.into_values().collect();
    let runs_by_over = over_acc
        .into_iter()
        .map(|(over, runs)| OverRuns { over, runs })
        .collect();

    let phase_runs = |phase: Phase| -> u32 {
        by_phase
            .iter()
            .find(|r| r.phase == phase)
            .map(|r| r.runs)
            .unwrap_or(0)
    };
    let insights = bowling_insights(&BowlingFigures {
        economy,
        wickets,
        powerplay_runs: phase_runs(Phase::Powerplay),
        death_runs: phase_runs(Phase::Death),
    });

    Some(BowlingSummary {
        player: player.to_string(),
        balls,
        runs_conceded,
        wickets,
        dots,
        overs,
        economy,
        average,
        strike_rate,
        balls_per_boundary,
        balls_per_dismissal,
        by_phase,
        by_batting_style,
        runs_by_over,
        insights,
    })
}
