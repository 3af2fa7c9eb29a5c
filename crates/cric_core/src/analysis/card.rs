//! Plain-text rendering of summary cards for terminal output.
//!
//! The dashboard renderer consumes the serialized summaries directly; these
//! formatters are the CLI-facing view of the same data.

use crate::models::{BattingSummary, BowlingSummary, InsightTone};

fn insight_lines(lines: &mut Vec<String>, insights: &[crate::models::Insight]) {
    lines.push("\nAnalyst Insights:".to_string());
    for insight in insights {
        let marker = match insight.tone {
            InsightTone::Positive => '+',
            InsightTone::Negative => '-',
        };
        lines.push(format!("  {} {}", marker, insight.text));
    }
}

/// Render a batting card as plain text.
pub fn batting_card_text(summary: &BattingSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Batting Card: {} ===", summary.player));
    lines.push(format!(
        "Runs: {}  Balls: {}  SR: {:.1}",
        summary.runs, summary.balls, summary.strike_rate
    ));
    let avg = summary
        .average
        .map(|a| format!("{:.1}", a))
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!(
        "Average: {}  Dismissals: {}",
        avg, summary.dismissals
    ));
    lines.push(format!(
        "4s/6s: {}/{}  Dot %: {:.1}  Boundary %: {:.1}",
        summary.fours, summary.sixes, summary.dot_pct, summary.boundary_pct
    ));

    if !summary.by_phase.is_empty() {
        lines.push("\nPhase Breakdown:".to_string());
        for row in &summary.by_phase {
            lines.push(format!(
                "  {:<10} {:>4} runs  {:>4} balls  {:>4} dots",
                row.phase.display(),
                row.runs,
                row.balls,
                row.dots
            ));
        }
    }

    if !summary.by_bowler_type.is_empty() {
        lines.push("\nPace vs Spin:".to_string());
        for row in &summary.by_bowler_type {
            lines.push(format!(
                "  {:<10} {:>4} runs  {:>4} balls",
                row.bowler_type.display(),
                row.runs,
                row.balls
            ));
        }
    }

    insight_lines(&mut lines, &summary.insights);
    lines.join("\n")
}

/// Render a bowling card as plain text.
pub fn bowling_card_text(summary: &BowlingSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Bowling Card: {} ===", summary.player));
    lines.push(format!(
        "Overs: {:.1}  Runs: {}  Wickets: {}  Econ: {:.2}",
        summary.overs, summary.runs_conceded, summary.wickets, summary.economy
    ));
    lines.push(format!(
        "Avg: {:.1}  SR: {:.1}  Dots: {}",
        summary.average, summary.strike_rate, summary.dots
    ));
    lines.push(format!(
        "Balls/Boundary: {:.1}  Balls/Dismissal: {:.1}",
        summary.balls_per_boundary, summary.balls_per_dismissal
    ));

    if !summary.by_phase.is_empty() {
        lines.push("\nPhase Breakdown:".to_string());
        for row in &summary.by_phase {
            lines.push(format!(
                "  {:<10} {:>4} balls  {:>4} runs  {:>4} dots  {:>3} wkts",
                row.phase.display(),
                row.balls,
                row.runs,
                row.dots,
                row.wickets
            ));
        }
    }

    if !summary.by_batting_style.is_empty() {
        lines.push("\nVs Batting Style:".to_string());
        for row in &summary.by_batting_style {
            lines.push(format!(
                "  {:<10} {:>4} balls  {:>4} runs  {:>3} wkts",
                row.style, row.balls, row.runs, row.wickets
            ));
        }
    }

    if !summary.runs_by_over.is_empty() {
        lines.push("\nRuns by Over:".to_string());
        for entry in &summary.runs_by_over {
            lines.push(format!("  over {:>2}: {}", entry.over, entry.runs));
        }
    }

    insight_lines(&mut lines, &summary.insights);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{batting_summary, bowling_summary};
    use crate::models::{Delivery, DeliveryTable};

    fn sample_table() -> DeliveryTable {
        let mut rows = Vec::new();
        for (over, runs) in [(1u16, 4u8), (2, 0), (7, 1), (16, 6)] {
            rows.push(Delivery {
                batsman: "Kohli".to_string(),
                bowler: "Bumrah".to_string(),
                over: Some(over),
                batsman_runs: Some(runs),
                total_runs: runs,
                bowling_action: Some("Right-arm fast".to_string()),
                batting_style: Some("RHB".to_string()),
                ..Default::default()
            });
        }
        DeliveryTable::new(rows)
    }

    #[test]
    fn test_batting_card_text() {
        let summary = batting_summary(&sample_table(), "Kohli").unwrap();
        let text = batting_card_text(&summary);

        assert!(text.contains("=== Batting Card: Kohli ==="));
        assert!(text.contains("Phase Breakdown:"));
        assert!(text.contains("Pace vs Spin:"));
        assert!(text.contains("Analyst Insights:"));
        assert!(text.contains("  + "), "positives carry a + marker");
        // Undismissed average renders as the dash sentinel
        assert!(text.contains("Average: -"));
    }

    #[test]
    fn test_bowling_card_text() {
        let summary = bowling_summary(&sample_table(), "Bumrah").unwrap();
        let text = bowling_card_text(&summary);

        assert!(text.contains("=== Bowling Card: Bumrah ==="));
        assert!(text.contains("Vs Batting Style:"));
        assert!(text.contains("Runs by Over:"));
        assert!(text.contains("over  1: 4"));
    }
}
