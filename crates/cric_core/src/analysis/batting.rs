//! # Batting Card Aggregation
//!
//! Filters the table to the balls a player faced, computes the scalar
//! metrics and derived ratios, and buckets the balls by phase and by the
//! bowler type they were faced against.

use std::collections::HashMap;

use crate::classify::{BowlerType, Phase};
use crate::models::{BattingSummary, BowlerTypeRow, Delivery, DeliveryTable, PhaseBattingRow};

use super::insights::{batting_insights, BattingFigures};
use super::pct;

/// Build the batting card for `player`, or `None` when the player faced no
/// deliveries. The empty case is the non-fatal "no data" signal; callers
/// surface a notice, never an error.
pub fn batting_summary(table: &DeliveryTable, player: &str) -> Option<BattingSummary> {
    let faced: Vec<&Delivery> = table.faced_by(player).collect();
    if faced.is_empty() {
        return None;
    }

    // When the batsman_runs column is absent the dataset cannot separate
    // extras, so credited runs fall back to total_runs and boundary counts
    // stay at zero.
    let use_batsman_runs = table.has_batsman_runs();
    let credited = |d: &Delivery| -> u32 {
        if use_batsman_runs {
            d.batsman_runs.unwrap_or(0) as u32
        } else {
            d.total_runs as u32
        }
    };

    let balls = faced.len() as u32;
    let runs: u32 = faced.iter().map(|d| credited(d)).sum();
    let fours = faced.iter().filter(|d| d.batsman_runs == Some(4)).count() as u32;
    let sixes = faced.iter().filter(|d| d.batsman_runs == Some(6)).count() as u32;
    let dots = faced.iter().filter(|d| d.is_dot()).count() as u32;
    let dismissals = table.dismissals_of(player) as u32;

    let strike_rate = pct(runs, balls);
    let average = if dismissals == 0 {
        None
    } else {
        Some(runs as f64 / dismissals as f64)
    };
    let dot_pct = pct(dots, balls);
    let boundary_pct = pct(fours + sixes, balls);

    let mut phase_acc: HashMap<Phase, PhaseBattingRow> = HashMap::new();
    let mut type_acc: HashMap<BowlerType, BowlerTypeRow> = HashMap::new();
    for d in &faced {
        let phase = Phase::from_over(d.over);
        let row = phase_acc.entry(phase).or_insert(PhaseBattingRow {
            phase,
            runs: 0,
            balls: 0,
            dots: 0,
        });
        row.runs += credited(d);
        row.balls += 1;
        if d.is_dot() {
            row.dots += 1;
        }

        let bowler_type = BowlerType::from_action(d.bowling_action.as_deref());
        let row = type_acc.entry(bowler_type).or_insert(BowlerTypeRow {
            bowler_type,
            runs: 0,
            balls: 0,
        });
        row.runs += credited(d);
        row.balls += 1;
    }

    // Only categories present in the data, in canonical order
    let by_phase = Phase::ALL
        .iter()
        .filter_map(|p| phase_acc.remove(p))
        .collect();
    let by_bowler_type = BowlerType::ALL
        .iter()
        .filter_map(|t| type_acc.remove(t))
        .collect();

    let insights = batting_insights(&BattingFigures {
        strike_rate,
        dot_pct,
        boundary_pct,
    });

    Some(BattingSummary {
        player: player.to_string(),
        runs,
        balls,
        fours,
        sixes,
        dots,
        dismissals,
        strike_rate,
        average,
        dot_pct,
        boundary_pct,
        by_phase,
        by_bowler_type,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn faced(player: &str, over: u16, batsman_runs: u8) -> Delivery {
        Delivery {
            batsman: player.to_string(),
            bowler: "Bowler".to_string(),
            over: Some(over),
            batsman_runs: Some(batsman_runs),
            total_runs: batsman_runs,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_data_for_unknown_player() {
        let table = DeliveryTable::new(vec![faced("Kohli", 3, 4)]);
        assert!(batting_summary(&table, "Nobody").is_none());
        assert!(batting_summary(&DeliveryTable::default(), "Kohli").is_none());
    }

    #[test]
    fn test_twelve_ball_innings() {
        let sequence = [0u8, 4, 1, 1, 6, 0, 2, 4, 1, 0, 0, 4];
        let table = DeliveryTable::new(
            sequence.iter().map(|&r| faced("Kohli", 7, r)).collect(),
        );

        let summary = batting_summary(&table, "Kohli").expect("summary");
        assert_eq!(summary.balls, 12);
        assert_eq!(summary.runs, 23);
        assert_eq!(summary.fours, 3);
        assert_eq!(summary.sixes, 1);
        assert_eq!(summary.dots, 4);
        assert!(
            (summary.strike_rate - 191.666_666).abs() < 0.001,
            "SR should be runs/balls*100, got {}",
            summary.strike_rate
        );
        assert!((summary.dot_pct - 33.333_333).abs() < 0.001);
        assert!((summary.boundary_pct - 33.333_333).abs() < 0.001);
    }

    #[test]
    fn test_average_sentinel_tracks_dismissals() {
        let table = DeliveryTable::new(vec![faced("Kohli", 2, 4), faced("Kohli", 3, 1)]);
        let summary = batting_summary(&table, "Kohli").unwrap();
        assert_eq!(summary.dismissals, 0);
        assert!(summary.average.is_none(), "undismissed => no average");

        // The dismissal lands on the partner's delivery (run out off strike)
        let mut partner_row = faced("Partner", 4, 1);
        partner_row.player_dismissed = Some("Kohli".to_string());
        let table = DeliveryTable::new(vec![faced("Kohli", 2, 4), faced("Kohli", 3, 1), partner_row]);

        let summary = batting_summary(&table, "Kohli").unwrap();
        assert_eq!(summary.dismissals, 1);
        assert_eq!(summary.average, Some(5.0));
        // Partner's row does not add to Kohli's balls faced
        assert_eq!(summary.balls, 2);
    }

    #[test]
    fn test_runs_fall_back_to_total_when_column_absent() {
        let rows = vec![
            Delivery {
                batsman: "Kohli".to_string(),
                bowler: "Bowler".to_string(),
                over: Some(1),
                total_runs: 4,
                ..Default::default()
            },
            Delivery {
                batsman: "Kohli".to_string(),
                bowler: "Bowler".to_string(),
                over: Some(1),
                total_runs: 2,
                ..Default::default()
            },
        ];
        let summary = batting_summary(&DeliveryTable::new(rows), "Kohli").unwrap();

        assert_eq!(summary.runs, 6);
        // Boundary counts need the batsman_runs column
        assert_eq!(summary.fours, 0);
        assert_eq!(summary.sixes, 0);
    }

    #[test]
    fn test_phase_rows_present_only_and_ordered() {
        let mut no_over = faced("Kohli", 0, 1);
        no_over.over = None;
        let table = DeliveryTable::new(vec![
            faced("Kohli", 16, 6),
            faced("Kohli", 3, 4),
            no_over,
            faced("Kohli", 10, 0),
        ]);

        let summary = batting_summary(&table, "Kohli").unwrap();
        let phases: Vec<Phase> = summary.by_phase.iter().map(|r| r.phase).collect();
        assert_eq!(
            phases,
            vec![Phase::Powerplay, Phase::Middle, Phase::Death, Phase::Unknown]
        );

        let death = &summary.by_phase[2];
        assert_eq!(death.runs, 6);
        assert_eq!(death.balls, 1);
        assert_eq!(death.dots, 0);
    }

    #[test]
    fn test_bowler_type_breakdown() {
        let mut vs_pace = faced("Kohli", 2, 4);
        vs_pace.bowling_action = Some("Right-arm fast".to_string());
        let mut vs_spin = faced("Kohli", 8, 1);
        vs_spin.bowling_action = Some("OFF BREAK".to_string());
        let unlabeled = faced("Kohli", 9, 0);

        let summary =
            batting_summary(&DeliveryTable::new(vec![vs_pace, vs_spin, unlabeled]), "Kohli")
                .unwrap();

        let types: Vec<BowlerType> = summary.by_bowler_type.iter().map(|r| r.bowler_type).collect();
        assert_eq!(
            types,
            vec![BowlerType::Pace, BowlerType::Spin, BowlerType::Unknown]
        );
        assert_eq!(summary.by_bowler_type[0].runs, 4);
        assert_eq!(summary.by_bowler_type[1].balls, 1);
    }

    #[test]
    fn test_insights_attached() {
        let table = DeliveryTable::new(vec![faced("Kohli", 1, 6), faced("Kohli", 1, 4)]);
        let summary = batting_summary(&table, "Kohli").unwrap();
        assert!(!summary.insights.is_empty());
        // SR 500 fires the high-impact rule
        assert!(summary.insights[0].text.contains("High-impact"));
    }

    proptest! {
        #[test]
        fn prop_ratios_stay_within_bounds(runs in proptest::collection::vec(0u8..=6, 1..200)) {
            let table = DeliveryTable::new(
                runs.iter().map(|&r| faced("Kohli", 7, r)).collect(),
            );
            let summary = batting_summary(&table, "Kohli").unwrap();

            prop_assert!((0.0..=100.0).contains(&summary.dot_pct));
            prop_assert!((0.0..=100.0).contains(&summary.boundary_pct));
            prop_assert!(summary.strike_rate >= 0.0);
        }
    }
}
