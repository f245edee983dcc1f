use serde::{Deserialize, Serialize};

use super::table::{PointScale, ScoringTable, TEAM_EVENTS};
use crate::catalog::Sport;

/// Optional override of the point table.
///
/// Every field is optional; anything left out keeps the published value.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   team_events: ["Football", "Volleyball", "Basketball", "Kabaddi", "Tug of War"]
///   team_scale: { first: 10, second: 5, third: 3, fourth: 3 }
///   standard_scale: { first: 5, second: 3, third: 1, fourth: 0 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Sports scored on the team scale, by display name
    #[serde(default)]
    pub team_events: Option<Vec<String>>,

    /// Scale for team events
    #[serde(default)]
    pub team_scale: Option<ScaleConfig>,

    /// Scale for every other sport
    #[serde(default)]
    pub standard_scale: Option<ScaleConfig>,
}

/// Points for 1st through 4th place.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

impl From<ScaleConfig> for PointScale {
    fn from(scale: ScaleConfig) -> Self {
        PointScale::new(scale.first, scale.second, scale.third, scale.fourth)
    }
}

impl ScoringConfig {
    /// Build the lookup table. Unknown team event names are skipped here;
    /// `validate_scoring` reports them at startup.
    pub fn to_table(&self) -> ScoringTable {
        let team_events = match &self.team_events {
            Some(names) => names.iter().filter_map(|n| Sport::from_name(n)).collect(),
            None => TEAM_EVENTS.to_vec(),
        };
        ScoringTable::new(
            team_events,
            self.team_scale.map(PointScale::from).unwrap_or(PointScale::TEAM),
            self.standard_scale
                .map(PointScale::from)
                .unwrap_or(PointScale::STANDARD),
        )
    }
}
