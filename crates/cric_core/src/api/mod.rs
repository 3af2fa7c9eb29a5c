pub mod summary_json;

pub use summary_json::{analyze_player_json, SummaryRequest, SummaryResponse};
