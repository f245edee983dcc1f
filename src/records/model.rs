use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::catalog::{AgeClass, Sport};

pub type RecordId = u64;

/// One finish slot in one sport for one age class.
///
/// `points` is fixed when the record is created or edited and is never
/// re-derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub id: RecordId,
    /// `None` for an individual entry
    #[serde(default, deserialize_with = "lenient::name")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient::name")]
    pub player: Option<String>,
    pub sport: Sport,
    pub age_class: AgeClass,
    #[serde(default, deserialize_with = "lenient::number")]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub points: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl PlacementRecord {
    pub fn is_individual(&self) -> bool {
        self.team.is_none()
    }
}

/// A record ready to be stored; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlacement {
    pub team: Option<String>,
    pub player: Option<String>,
    pub sport: Sport,
    pub age_class: AgeClass,
    pub position: u32,
    pub points: u32,
    pub created_at: DateTime<Utc>,
}

impl NewPlacement {
    pub fn into_record(self, id: RecordId) -> PlacementRecord {
        PlacementRecord {
            id,
            team: self.team,
            player: self.player,
            sport: self.sport,
            age_class: self.age_class,
            position: Some(self.position),
            points: Some(self.points),
            created_at: self.created_at,
        }
    }
}
