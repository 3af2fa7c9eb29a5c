//! # Phase and Bowling-Action Classification
//!
//! Fixed-constant classifiers applied per delivery:
//! - overs 1-5 are the powerplay, 6-14 the middle overs, 15+ the death;
//! - a free-text bowling action maps to PACE or SPIN by case-insensitive
//!   keyword match, pace keywords checked first.
//!
//! Both classifiers degrade instead of failing: absent or unparseable input
//! maps to the Unknown bucket.

use serde::{Deserialize, Serialize};

/// Last over (inclusive) of the powerplay.
pub const POWERPLAY_MAX_OVER: u16 = 5;
/// Last over (inclusive) of the middle phase.
pub const MIDDLE_MAX_OVER: u16 = 14;

/// Action keywords marking a pace bowler.
const PACE_KEYWORDS: [&str; 6] = ["RAMF", "LAMF", "FAST", "MEDIUM", "RFM", "LFM"];
/// Action keywords marking a spin bowler.
const SPIN_KEYWORDS: [&str; 4] = ["OFF", "LEG", "ORTHODOX", "CHINAMAN"];

/// Innings phase bucket for breakdown tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Powerplay,
    Middle,
    Death,
    Unknown,
}

impl Phase {
    /// Canonical ordering for breakdown tables.
    pub const ALL: [Phase; 4] = [Phase::Powerplay, Phase::Middle, Phase::Death, Phase::Unknown];

    /// Classify an over number. Absent or unparseable overs arrive as `None`
    /// and map to Unknown instead of failing.
    pub fn from_over(over: Option<u16>) -> Self {
        match over {
            Some(o) if o <= POWERPLAY_MAX_OVER => Phase::Powerplay,
            Some(o) if o <= MIDDLE_MAX_OVER => Phase::Middle,
            Some(_) => Phase::Death,
            None => Phase::Unknown,
        }
    }

    /// Display label for UI tables.
    pub fn display(&self) -> &'static str {
        match self {
            Phase::Powerplay => "Powerplay",
            Phase::Middle => "Middle",
            Phase::Death => "Death",
            Phase::Unknown => "Unknown",
        }
    }
}

/// Bowler category derived from the free-text bowling action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BowlerType {
    Pace,
    Spin,
    Unknown,
}

impl BowlerType {
    /// Canonical ordering for breakdown tables.
    pub const ALL: [BowlerType; 3] = [BowlerType::Pace, BowlerType::Spin, BowlerType::Unknown];

    /// Classify a bowling-action label. First matching category wins;
    /// no keyword hit or absent input maps to Unknown.
    pub fn from_action(action: Option<&str>) -> Self {
        let Some(action) = action else {
            return BowlerType::Unknown;
        };
        let upper = action.to_uppercase();
        if PACE_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            return BowlerType::Pace;
        }
        if SPIN_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            return BowlerType::Spin;
        }
        BowlerType::Unknown
    }

    /// Display label for UI tables.
    pub fn display(&self) -> &'static str {
        match self {
            BowlerType::Pace => "PACE",
            BowlerType::Spin => "SPIN",
            BowlerType::Unknown => "UNKNOWN",
        }
    }
}
