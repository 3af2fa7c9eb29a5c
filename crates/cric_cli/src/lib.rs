//! CSV Ingestion - Ball-by-Ball Data Pipeline
//!
//! CSV -> `DeliveryTable` + `ParseStats`. Required columns are `batsman`,
//! `bowler` and `total_runs`; every other column is optional and degrades
//! per the core's optional-field model. Rows with unparseable required
//! cells are skipped with a warning and counted, never fatal; a non-numeric
//! `over` degrades to the Unknown phase instead of dropping the row.

use std::path::Path;

use anyhow::{bail, Context, Result};
use cric_core::{Delivery, DeliveryTable};

/// CSV parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    match_id: Option<usize>,
    innings: Option<usize>,
    over: Option<usize>,
    ball: Option<usize>,
    batsman: Option<usize>,
    bowler: Option<usize>,
    bowling_action: Option<usize>,
    batsman_runs: Option<usize>,
    total_runs: Option<usize>,
    dismissal_kind: Option<usize>,
    player_dismissed: Option<usize>,
    batting_style: Option<usize>,
    batting_team: Option<usize>,
    bowling_team: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();
        for (idx, name) in headers.iter().enumerate() {
            // Strip BOM
            let name = name.trim().trim_start_matches('\u{feff}').to_lowercase();
            match name.as_str() {
                "match_id" => map.match_id = Some(idx),
                "innings" | "inning" => map.innings = Some(idx),
                "over" => map.over = Some(idx),
                "ball" => map.ball = Some(idx),
                "batsman" => map.batsman = Some(idx),
                "bowler" => map.bowler = Some(idx),
                "bowling_action" => map.bowling_action = Some(idx),
                "batsman_runs" => map.batsman_runs = Some(idx),
                "total_runs" => map.total_runs = Some(idx),
                "dismissal_kind" => map.dismissal_kind = Some(idx),
                "player_dismissed" => map.player_dismissed = Some(idx),
                "batting_style" => map.batting_style = Some(idx),
                "batting_team" => map.batting_team = Some(idx),
                "bowling_team" => map.bowling_team = Some(idx),
                _ => {}
            }
        }
        map
    }
}

/// Non-empty trimmed cell text, None for absent columns and blank cells.
fn opt_text(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a ball-by-ball CSV file into a `DeliveryTable`.
///
/// # Returns
///
/// * `Ok((DeliveryTable, ParseStats))` - table plus ingest statistics
/// * `Err(anyhow::Error)` - unreadable file, missing required columns, or
///   zero parseable rows
pub fn load_deliveries(csv_path: &Path) -> Result<(DeliveryTable, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    let columns = ColumnMap::from_headers(&headers);

    let (Some(batsman_col), Some(bowler_col), Some(total_runs_col)) =
        (columns.batsman, columns.bowler, columns.total_runs)
    else {
        bail!(
            "CSV is missing required columns (need batsman, bowler, total_runs), found: {:?}",
            headers.iter().collect::<Vec<_>>()
        );
    };

    let mut deliveries = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.records() {
        stats.total_rows += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.failed += 1;
                eprintln!(
                    "Warning: Line {} - CSV parse error: {}",
                    stats.total_rows, e
                );
                continue;
            }
        };

        let Some(batsman) = opt_text(&record, Some(batsman_col)) else {
            stats.failed += 1;
            eprintln!("Warning: Line {} - empty batsman, skipping", stats.total_rows);
            continue;
        };
        let Some(bowler) = opt_text(&record, Some(bowler_col)) else {
            stats.failed += 1;
            eprintln!("Warning: Line {} - empty bowler, skipping", stats.total_rows);
            continue;
        };
        let total_runs = match record.get(total_runs_col).unwrap_or("").trim().parse::<u8>() {
            Ok(v) => v,
            Err(_) => {
                stats.failed += 1;
                eprintln!(
                    "Warning: Line {} - invalid total_runs value: '{}', skipping",
                    stats.total_rows,
                    record.get(total_runs_col).unwrap_or("")
                );
                continue;
            }
        };

        // Optional columns: absent or unparseable cells degrade, never skip
        let over = opt_text(&record, columns.over).and_then(|s| s.parse::<u16>().ok());
        let innings = opt_text(&record, columns.innings)
            .and_then(|s| s.parse::<u8>().ok())
            .unwrap_or(0);
        let ball = opt_text(&record, columns.ball)
            .and_then(|s| s.parse::<u8>().ok())
            .unwrap_or(0);
        let batsman_runs =
            opt_text(&record, columns.batsman_runs).and_then(|s| s.parse::<u8>().ok());

        deliveries.push(Delivery {
            match_id: opt_text(&record, columns.match_id).unwrap_or_default(),
            innings,
            over,
            ball,
            batsman,
            bowler,
            bowling_action: opt_text(&record, columns.bowling_action),
            batsman_runs,
            total_runs,
            dismissal_kind: opt_text(&record, columns.dismissal_kind),
            player_dismissed: opt_text(&record, columns.player_dismissed),
            batting_style: opt_text(&record, columns.batting_style),
            batting_team: opt_text(&record, columns.batting_team).unwrap_or_default(),
            bowling_team: opt_text(&record, columns.bowling_team).unwrap_or_default(),
        });
        stats.parsed += 1;
    }

    if stats.parsed == 0 {
        bail!("No valid deliveries parsed from {}", csv_path.display());
    }

    Ok((DeliveryTable::new(deliveries), stats))
}
