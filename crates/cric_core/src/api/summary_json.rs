//! # JSON Summary API
//!
//! String-in/string-out boundary for the dashboard renderer. The caller
//! sends the full delivery table with every request and receives a
//! schema-versioned card payload: recomputation is request-scoped and
//! nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_player, AnalysisMode, PlayerRole};
use crate::error::{CoreError, Result};
use crate::models::{Delivery, DeliveryTable, PlayerSummary};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub schema_version: u8,
    pub player: String,
    /// UI mode label ("Auto detect" / "Batting card" / "Bowling card");
    /// absent means auto-detect.
    #[serde(default)]
    pub mode: Option<String>,
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub schema_version: u8,
    pub player: String,
    pub role: PlayerRole,
    /// Absent when the resolved card has no data for the player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlayerSummary>,
    /// The user-visible "no data" notice; never an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Compute a player's card from a JSON request.
pub fn analyze_player_json(request_json: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::SchemaMismatch {
            expected: SCHEMA_VERSION,
            found: request.schema_version,
        });
    }
    if request.player.trim().is_empty() {
        return Err(CoreError::InvalidParameter(
            "player must not be empty".to_string(),
        ));
    }

    let mode = request
        .mode
        .as_deref()
        .map(AnalysisMode::from_label)
        .unwrap_or_default();
    let table = DeliveryTable::new(request.deliveries);
    log::debug!(
        "recomputing {:?} card for {} over {} deliveries",
        mode,
        request.player,
        table.len()
    );

    let (role, summary) = analyze_player(&table, &request.player, mode);
    let notice = summary
        .is_none()
        .then(|| format!("No {} data for {}.", role.label(), request.player));

    let response = SummaryResponse {
        schema_version: SCHEMA_VERSION,
        player: request.player,
        role,
        summary,
        notice,
    };
    Ok(serde_json::to_string(&response)?)
}
