use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::records::PlacementRecord;

/// One row of the team leaderboard. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub team: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub fourth: u32,
    pub points: u64,
}

impl TeamStanding {
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            gold: 0,
            silver: 0,
            bronze: 0,
            fourth: 0,
            points: 0,
        }
    }

    fn add(&mut self, position: Option<u32>, points: u32) {
        match position {
            Some(1) => self.gold += 1,
            Some(2) => self.silver += 1,
            Some(3) => self.bronze += 1,
            Some(4) => self.fourth += 1,
            _ => {}
        }
        self.points += u64::from(points);
    }
}

/// Fold a snapshot of records into team standings.
///
/// Individual entries (no team) are skipped. Missing points count as 0.
/// Sorted by points descending; the sort is stable so tied teams keep the
/// order in which they first appear in `records`.
pub fn aggregate(records: &[PlacementRecord]) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let team = match record.team.as_deref() {
            Some(team) if !team.trim().is_empty() => team,
            _ => continue,
        };

        let slot = *slots.entry(team).or_insert_with(|| {
            standings.push(TeamStanding::new(team));
            standings.len() - 1
        });
        standings[slot].add(record.position, record.points.unwrap_or(0));
    }

    standings.sort_by(|a, b| b.points.cmp(&a.points));
    standings
}

/// Creation time of the newest record, if any
pub fn last_updated(records: &[PlacementRecord]) -> Option<DateTime<Utc>> {
    records.iter().map(|r| r.created_at).max()
}
