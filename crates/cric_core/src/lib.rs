//! # cric_core - Ball-by-Ball Cricket Statistics Engine
//!
//! Computes batting and bowling summary cards from ball-by-ball delivery
//! data and hands them to an external renderer as serde-serializable values
//! or through a schema-versioned JSON API.
//!
//! ## Features
//! - One synchronous pass of filtering and aggregation over an in-memory
//!   delivery table; every request recomputes from scratch
//! - Phase (Powerplay/Middle/Death) and pace-vs-spin breakdowns
//! - Rule-based analyst insights with fixed fallback notes
//! - Graceful degradation for missing columns, malformed overs and zero
//!   denominators; no degenerate input surfaces as an error

pub mod analysis;
pub mod api;
pub mod classify;
pub mod error;
pub mod models;

pub use analysis::{
    analyze_player, batting_card_text, batting_summary, bowling_card_text, bowling_summary,
    detect_role, resolve_role, AnalysisMode, PlayerRole,
};
pub use api::{analyze_player_json, SummaryRequest, SummaryResponse};
pub use classify::{BowlerType, Phase};
pub use error::{CoreError, Result};
pub use models::{
    BattingStyleRow, BattingSummary, BowlerTypeRow, BowlingSummary, Delivery, DeliveryTable,
    Insight, InsightTone, OverRuns, PhaseBattingRow, PhaseBowlingRow, PlayerSummary,
};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// JSON API schema version.
pub const SCHEMA_VERSION: u8 = 1;
