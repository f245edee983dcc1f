use super::table::ScoringTable;
use crate::catalog::Sport;

/// Points for finishing `position` in `sport` under the published table.
///
/// Total over its inputs: a missing sport or position, or a position outside
/// 1-4, scores 0.
pub fn points_for(sport: Option<Sport>, position: Option<u32>) -> u32 {
    ScoringTable::default().points_for(sport, position)
}

/// Like [`ScoringTable::points_for`] but starting from a free-text sport name.
/// Names that are not in the catalog score 0.
pub fn points_by_name(table: &ScoringTable, sport: &str, position: Option<u32>) -> u32 {
    table.points_for(Sport::from_name(sport), position)
}
