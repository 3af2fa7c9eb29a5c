pub mod delivery;
pub mod summary;

pub use delivery::{Delivery, DeliveryTable};
pub use summary::{
    BattingStyleRow, BattingSummary, BowlerTypeRow, BowlingSummary, Insight, InsightTone,
    OverRuns, PhaseBattingRow, PhaseBowlingRow, PlayerSummary,
};
