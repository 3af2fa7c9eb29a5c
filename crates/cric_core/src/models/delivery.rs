use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One ball bowled, as ingested from ball-by-ball match data.
///
/// Optional fields correspond to columns the source dataset may omit.
/// Consumers branch on presence; a missing column never becomes an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Delivery {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub innings: u8,
    /// None when the source value was absent or non-numeric.
    #[serde(default)]
    pub over: Option<u16>,
    #[serde(default)]
    pub ball: u8,
    pub batsman: String,
    pub bowler: String,
    /// Free-text action descriptor, e.g. "Right-arm fast" or "OFF BREAK".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling_action: Option<String>,
    /// Runs off the bat, excluding extras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batsman_runs: Option<u8>,
    /// Runs off the delivery including extras.
    pub total_runs: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal_kind: Option<String>,
    /// Dismissals are recorded on the delivery that ended the innings,
    /// which need not have the dismissed player on strike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_dismissed: Option<String>,
    /// Batter handedness, e.g. "RHB" / "LHB".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_style: Option<String>,
    #[serde(default)]
    pub batting_team: String,
    #[serde(default)]
    pub bowling_team: String,
}

impl Delivery {
    /// A dot ball concedes nothing, extras included.
    pub fn is_dot(&self) -> bool {
        self.total_runs == 0
    }

    /// Boundary off the bat (four or six).
    pub fn is_boundary(&self) -> bool {
        matches!(self.batsman_runs, Some(4) | Some(6))
    }
}

/// In-memory ball-by-ball table. Ordered as ingested, read-only once built;
/// every analysis pass recomputes from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryTable {
    deliveries: Vec<Delivery>,
}

impl DeliveryTable {
    pub fn new(deliveries: Vec<Delivery>) -> Self {
        Self { deliveries }
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Whether the batsman_runs column carried any value. When it did not,
    /// batting aggregation falls back to total_runs.
    pub fn has_batsman_runs(&self) -> bool {
        self.deliveries.iter().any(|d| d.batsman_runs.is_some())
    }

    pub fn has_bowling_action(&self) -> bool {
        self.deliveries.iter().any(|d| d.bowling_action.is_some())
    }

    pub fn has_batting_style(&self) -> bool {
        self.deliveries.iter().any(|d| d.batting_style.is_some())
    }

    /// Deliveries faced by the named batter.
    pub fn faced_by<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a Delivery> {
        self.deliveries.iter().filter(move |d| d.batsman == player)
    }

    /// Deliveries bowled by the named bowler.
    pub fn bowled_by<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a Delivery> {
        self.deliveries.iter().filter(move |d| d.bowler == player)
    }

    pub fn balls_faced(&self, player: &str) -> usize {
        self.faced_by(player).count()
    }

    pub fn balls_bowled(&self, player: &str) -> usize {
        self.bowled_by(player).count()
    }

    /// Dismissals of the named player anywhere in the table. Scans the full
    /// table, not the batter filter: a run out can fall on a delivery where
    /// the dismissed player was off strike.
    pub fn dismissals_of(&self, player: &str) -> usize {
        self.deliveries
            .iter()
            .filter(|d| d.player_dismissed.as_deref() == Some(player))
            .count()
    }

    /// Distinct player names appearing as batter or bowler, sorted.
    pub fn player_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for d in &self.deliveries {
            names.insert(d.batsman.clone());
            names.insert(d.bowler.clone());
        }
        names.into_iter().collect()
    }
}

impl From<Vec<Delivery>> for DeliveryTable {
    fn from(deliveries: Vec<Delivery>) -> Self {
        Self::new(deliveries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(batsman: &str, bowler: &str, total_runs: u8) -> Delivery {
        Delivery {
            batsman: batsman.to_string(),
            bowler: bowler.to_string(),
            total_runs,
            ..Default::default()
        }
    }

    #[test]
    fn test_filters_and_counts() {
        let table = DeliveryTable::new(vec![
            ball("A", "X", 4),
            ball("A", "Y", 0),
            ball("B", "X", 1),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.balls_faced("A"), 2);
        assert_eq!(table.balls_faced("B"), 1);
        assert_eq!(table.balls_bowled("X"), 2);
        assert_eq!(table.balls_bowled("A"), 0);
    }

    #[test]
    fn test_dismissals_scan_full_table() {
        let mut partner_row = ball("Partner", "X", 1);
        partner_row.player_dismissed = Some("A".to_string());

        let table = DeliveryTable::new(vec![ball("A", "X", 4), partner_row]);

        // A was run out off the partner's delivery
        assert_eq!(table.dismissals_of("A"), 1);
        assert_eq!(table.dismissals_of("Partner"), 0);
    }

    #[test]
    fn test_capability_checks() {
        let mut with_runs = ball("A", "X", 4);
        with_runs.batsman_runs = Some(4);

        let bare = DeliveryTable::new(vec![ball("A", "X", 4)]);
        let rich = DeliveryTable::new(vec![with_runs]);

        assert!(!bare.has_batsman_runs());
        assert!(!bare.has_bowling_action());
        assert!(rich.has_batsman_runs());
    }

    #[test]
    fn test_player_names_sorted_distinct() {
        let table = DeliveryTable::new(vec![
            ball("Kohli", "Bumrah", 1),
            ball("Kohli", "Ashwin", 0),
            ball("Rahul", "Bumrah", 6),
        ]);

        assert_eq!(
            table.player_names(),
            vec!["Ashwin", "Bumrah", "Kohli", "Rahul"]
        );
    }
}
