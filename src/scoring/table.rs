use crate::catalog::Sport;

/// Team events score on the larger scale.
pub const TEAM_EVENTS: [Sport; 5] = [
    Sport::Football,
    Sport::Volleyball,
    Sport::Basketball,
    Sport::Kabaddi,
    Sport::TugOfWar,
];

/// Which point scale a sport is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SportCategory {
    Team,
    Standard,
}

/// Points for finishing 1st through 4th.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointScale([u32; 4]);

impl PointScale {
    pub const TEAM: PointScale = PointScale([10, 5, 3, 3]);
    pub const STANDARD: PointScale = PointScale([5, 3, 1, 0]);

    pub fn new(first: u32, second: u32, third: u32, fourth: u32) -> Self {
        Self([first, second, third, fourth])
    }

    /// Points for a finishing position. Anything outside 1-4 earns nothing.
    pub fn points(&self, position: u32) -> u32 {
        match position {
            1..=4 => self.0[(position - 1) as usize],
            _ => 0,
        }
    }

    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }
}

/// Lookup from (category, position) to points.
///
/// `ScoringTable::default()` is the organizer's published table. A meet may
/// override either scale or the list of team events from its config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTable {
    team_events: Vec<Sport>,
    team: PointScale,
    standard: PointScale,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            team_events: TEAM_EVENTS.to_vec(),
            team: PointScale::TEAM,
            standard: PointScale::STANDARD,
        }
    }
}

impl ScoringTable {
    pub fn new(team_events: Vec<Sport>, team: PointScale, standard: PointScale) -> Self {
        Self {
            team_events,
            team,
            standard,
        }
    }

    pub fn category(&self, sport: Sport) -> SportCategory {
        if self.team_events.contains(&sport) {
            SportCategory::Team
        } else {
            SportCategory::Standard
        }
    }

    pub fn scale(&self, category: SportCategory) -> &PointScale {
        match category {
            SportCategory::Team => &self.team,
            SportCategory::Standard => &self.standard,
        }
    }

    /// Points for `sport` at `position`; zero when either is missing.
    pub fn points_for(&self, sport: Option<Sport>, position: Option<u32>) -> u32 {
        match (sport, position) {
            (Some(sport), Some(position)) => self.scale(self.category(sport)).points(position),
            _ => 0,
        }
    }

    pub fn team_events(&self) -> &[Sport] {
        &self.team_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_scale_positions() {
        let scale = PointScale::new(7, 4, 2, 1);
        assert_eq!(scale.points(1), 7);
        assert_eq!(scale.points(4), 1);
        assert_eq!(scale.points(0), 0);
        assert_eq!(scale.points(5), 0);
        assert_eq!(scale.points(u32::MAX), 0);
    }

    #[test]
    fn test_default_categories() {
        let table = ScoringTable::default();
        for sport in TEAM_EVENTS {
            assert_eq!(table.category(sport), SportCategory::Team);
        }
        assert_eq!(table.category(Sport::Chess), SportCategory::Standard);
        assert_eq!(table.category(Sport::LawnTennis), SportCategory::Standard);
    }

    #[test]
    fn test_default_scales() {
        let table = ScoringTable::default();
        assert_eq!(table.scale(SportCategory::Team).as_array(), [10, 5, 3, 3]);
        assert_eq!(table.scale(SportCategory::Standard).as_array(), [5, 3, 1, 0]);
    }

    #[test]
    fn test_custom_table() {
        let table = ScoringTable::new(
            vec![Sport::Chess],
            PointScale::new(20, 10, 5, 1),
            PointScale::new(2, 1, 0, 0),
        );
        assert_eq!(table.points_for(Some(Sport::Chess), Some(1)), 20);
        assert_eq!(table.points_for(Some(Sport::Football), Some(1)), 2);
    }

    #[test]
    fn test_missing_inputs_score_zero() {
        let table = ScoringTable::default();
        assert_eq!(table.points_for(None, Some(1)), 0);
        assert_eq!(table.points_for(Some(Sport::Football), None), 0);
        assert_eq!(table.points_for(None, None), 0);
    }
}
