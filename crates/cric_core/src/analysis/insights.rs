//! # Analyst Insight Rules
//!
//! Each card evaluates an ordered table of (predicate, message) rules.
//! Rules fire independently and at most once; when no rule of a tone fires,
//! a fixed fallback note for that tone is emitted instead, so every card
//! carries at least one positive and one negative line.

use crate::models::{Insight, InsightTone};

/// Strike rate at or above which a batter counts as high-impact.
pub const BATTING_IMPACT_SR: f64 = 130.0;
/// Dot-ball percentage above which strike rotation is flagged.
pub const BATTING_DOT_PCT_LIMIT: f64 = 45.0;
/// Boundary percentage below which boundary output is flagged.
pub const BATTING_BOUNDARY_PCT_FLOOR: f64 = 10.0;
/// Economy rate at or below which a bowler counts as economical.
pub const BOWLING_ECONOMY_CEILING: f64 = 6.0;

/// Metrics the batting rules read.
#[derive(Debug, Clone, Copy, Default)]
pub struct BattingFigures {
    pub strike_rate: f64,
    pub dot_pct: f64,
    pub boundary_pct: f64,
}

/// Metrics the bowling rules read.
#[derive(Debug, Clone, Copy, Default)]
pub struct BowlingFigures {
    pub economy: f64,
    pub wickets: u32,
    pub powerplay_runs: u32,
    pub death_runs: u32,
}

struct Rule<M> {
    tone: InsightTone,
    message: &'static str,
    applies: fn(&M) -> bool,
}

fn high_strike_rate(f: &BattingFigures) -> bool {
    f.strike_rate >= BATTING_IMPACT_SR
}

fn heavy_dot_share(f: &BattingFigures) -> bool {
    f.dot_pct > BATTING_DOT_PCT_LIMIT
}

fn thin_boundary_output(f: &BattingFigures) -> bool {
    f.boundary_pct < BATTING_BOUNDARY_PCT_FLOOR
}

fn economical(f: &BowlingFigures) -> bool {
    f.economy <= BOWLING_ECONOMY_CEILING
}

fn expensive_at_death(f: &BowlingFigures) -> bool {
    f.death_runs > f.powerplay_runs
}

fn wicketless(f: &BowlingFigures) -> bool {
    f.wickets == 0
}

const BATTING_RULES: [Rule<BattingFigures>; 3] = [
    Rule {
        tone: InsightTone::Positive,
        message: "High-impact striker (SR >= 130).",
        applies: high_strike_rate,
    },
    Rule {
        tone: InsightTone::Negative,
        message: "Too many dots - improve rotation in the middle overs.",
        applies: heavy_dot_share,
    },
    Rule {
        tone: InsightTone::Negative,
        message: "Boundary % low - add more scoring shots in the powerplay.",
        applies: thin_boundary_output,
    },
];

const BOWLING_RULES: [Rule<BowlingFigures>; 3] = [
    Rule {
        tone: InsightTone::Positive,
        message: "Economical - keeps the run rate in check (econ <= 6).",
        applies: economical,
    },
    Rule {
        tone: InsightTone::Negative,
        message: "Expensive at the death - concedes more than in the powerplay.",
        applies: expensive_at_death,
    },
    Rule {
        tone: InsightTone::Negative,
        message: "No wicket-taking threat in this sample.",
        applies: wicketless,
    },
];

const DEFAULT_BATTING_POSITIVE: &str = "Stable batter - solid base for partnerships.";
const DEFAULT_BATTING_NEGATIVE: &str = "Balanced innings, no major weak zone.";
const DEFAULT_BOWLING_POSITIVE: &str = "Steady option - holds an end for the captain.";
const DEFAULT_BOWLING_NEGATIVE: &str = "No major weak phase in the spell.";

fn evaluate<M>(
    rules: &[Rule<M>],
    figures: &M,
    default_positive: &'static str,
    default_negative: &'static str,
) -> Vec<Insight> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for rule in rules {
        if (rule.applies)(figures) {
            let insight = Insight {
                tone: rule.tone,
                text: rule.message.to_string(),
            };
            match rule.tone {
                InsightTone::Positive => positive.push(insight),
                InsightTone::Negative => negative.push(insight),
            }
        }
    }

    if positive.is_empty() {
        positive.push(Insight {
            tone: InsightTone::Positive,
            text: default_positive.to_string(),
        });
    }
    if negative.is_empty() {
        negative.push(Insight {
            tone: InsightTone::Negative,
            text: default_negative.to_string(),
        });
    }

    positive.append(&mut negative);
    positive
}

/// Evaluate the batting rule table. Positives precede negatives.
pub fn batting_insights(figures: &BattingFigures) -> Vec<Insight> {
    evaluate(
        &BATTING_RULES,
        figures,
        DEFAULT_BATTING_POSITIVE,
        DEFAULT_BATTING_NEGATIVE,
    )
}

/// Evaluate the bowling rule table. Positives precede negatives.
pub fn bowling_insights(figures: &BowlingFigures) -> Vec<Insight> {
    evaluate(
        &BOWLING_RULES,
        figures,
        DEFAULT_BOWLING_POSITIVE,
        DEFAULT_BOWLING_NEGATIVE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(insights: &[Insight], tone: InsightTone) -> Vec<&str> {
        insights
            .iter()
            .filter(|i| i.tone == tone)
            .map(|i| i.text.as_str())
            .collect()
    }

    #[test]
    fn test_batting_high_impact() {
        let figures = BattingFigures {
            strike_rate: 150.0,
            dot_pct: 20.0,
            boundary_pct: 15.0,
        };
        let insights = batting_insights(&figures);

        let positives = texts(&insights, InsightTone::Positive);
        assert_eq!(positives.len(), 1);
        assert!(positives[0].contains("High-impact"));
        // No negative rule fired, so the fallback appears
        let negatives = texts(&insights, InsightTone::Negative);
        assert_eq!(negatives, vec![DEFAULT_BATTING_NEGATIVE]);
    }

    #[test]
    fn test_batting_both_negatives_fire() {
        let figures = BattingFigures {
            strike_rate: 95.0,
            dot_pct: 52.0,
            boundary_pct: 4.0,
        };
        let insights = batting_insights(&figures);

        assert_eq!(texts(&insights, InsightTone::Positive), vec![DEFAULT_BATTING_POSITIVE]);
        assert_eq!(texts(&insights, InsightTone::Negative).len(), 2);
    }

    #[test]
    fn test_batting_dot_threshold_is_exclusive() {
        // Exactly 45 does not fire the dots rule
        let figures = BattingFigures {
            strike_rate: 140.0,
            dot_pct: BATTING_DOT_PCT_LIMIT,
            boundary_pct: 12.0,
        };
        let insights = batting_insights(&figures);
        assert_eq!(texts(&insights, InsightTone::Negative), vec![DEFAULT_BATTING_NEGATIVE]);
    }

    #[test]
    fn test_bowling_economical() {
        let figures = BowlingFigures {
            economy: 5.5,
            wickets: 2,
            powerplay_runs: 20,
            death_runs: 10,
        };
        let insights = bowling_insights(&figures);

        let positives = texts(&insights, InsightTone::Positive);
        assert!(positives[0].contains("Economical"));
        assert_eq!(texts(&insights, InsightTone::Negative), vec![DEFAULT_BOWLING_NEGATIVE]);
    }

    #[test]
    fn test_bowling_expensive_and_wicketless() {
        let figures = BowlingFigures {
            economy: 9.2,
            wickets: 0,
            powerplay_runs: 10,
            death_runs: 30,
        };
        let insights = bowling_insights(&figures);

        assert_eq!(texts(&insights, InsightTone::Positive), vec![DEFAULT_BOWLING_POSITIVE]);
        let negatives = texts(&insights, InsightTone::Negative);
        assert_eq!(negatives.len(), 2);
        assert!(negatives[0].contains("death"));
        assert!(negatives[1].contains("wicket"));
    }

    #[test]
    fn test_positives_precede_negatives() {
        let figures = BattingFigures {
            strike_rate: 150.0,
            dot_pct: 60.0,
            boundary_pct: 5.0,
        };
        let insights = batting_insights(&figures);

        assert_eq!(insights[0].tone, InsightTone::Positive);
        assert!(insights[1..].iter().all(|i| i.tone == InsightTone::Negative));
    }
}
