use thiserror::Error;

use super::model::{PlacementRecord, RecordId};
use super::submission::resolve_team;
use crate::scoring::ScoringTable;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("No entry with id {0}.")]
    NotFound(RecordId),

    #[error("Position must be between 1 and 4, got {0}.")]
    PositionOutOfRange(i64),

    #[error("Unknown team '{0}'.")]
    UnknownTeam(String),
}

/// Administrative correction of a stored entry.
///
/// `None` keeps the current value. For team and player an empty string
/// clears the field. A position that does not parse as a whole number keeps
/// the current position; any whole number outside 1-4 is refused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEdit {
    pub team: Option<String>,
    pub player: Option<String>,
    pub position: Option<String>,
}

fn cleared_or(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Apply `edit` to a copy of `record`. Points are always recomputed from the
/// record's sport and the resulting position.
pub fn apply_edit(
    record: &PlacementRecord,
    edit: &EntryEdit,
    roster: &[String],
    table: &ScoringTable,
) -> Result<PlacementRecord, EditError> {
    let mut updated = record.clone();

    if let Some(ref team) = edit.team {
        updated.team = match cleared_or(team) {
            Some(name) => Some(
                resolve_team(roster, &name).ok_or_else(|| EditError::UnknownTeam(name.clone()))?,
            ),
            None => None,
        };
    }

    if let Some(ref player) = edit.player {
        updated.player = cleared_or(player);
    }

    if let Some(ref position) = edit.position {
        if let Ok(parsed) = position.trim().parse::<i64>() {
            let position = u32::try_from(parsed)
                .ok()
                .filter(|p| (1..=4).contains(p))
                .ok_or(EditError::PositionOutOfRange(parsed))?;
            updated.position = Some(position);
        }
    }

    updated.points = Some(table.points_for(Some(updated.sport), updated.position));
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgeClass, Sport};
    use chrono::Utc;

    fn record() -> PlacementRecord {
        PlacementRecord {
            id: 3,
            team: Some("Mandi".to_string()),
            player: Some("Asha".to_string()),
            sport: Sport::Volleyball,
            age_class: AgeClass::WomenOpen,
            position: Some(1),
            points: Some(10),
            created_at: Utc::now(),
        }
    }

    fn roster() -> Vec<String> {
        vec!["Mandi".to_string(), "Solan".to_string()]
    }

    fn edit(record: &PlacementRecord, e: EntryEdit) -> Result<PlacementRecord, EditError> {
        apply_edit(record, &e, &roster(), &ScoringTable::default())
    }

    #[test]
    fn test_position_change_recomputes_points() {
        let updated = edit(
            &record(),
            EntryEdit {
                position: Some("2".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.position, Some(2));
        assert_eq!(updated.points, Some(5));
        assert_eq!(updated.team.as_deref(), Some("Mandi"));
        assert_eq!(updated.id, 3);
    }

    #[test]
    fn test_unparsable_position_keeps_current() {
        let updated = edit(
            &record(),
            EntryEdit {
                position: Some("second".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.position, Some(1));
        assert_eq!(updated.points, Some(10));
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        let result = edit(
            &record(),
            EntryEdit {
                position: Some("5".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(EditError::PositionOutOfRange(5)));
    }

    #[test]
    fn test_negative_position_rejected() {
        for input in ["-1", " -3 ", "0"] {
            let result = edit(
                &record(),
                EntryEdit {
                    position: Some(input.to_string()),
                    ..Default::default()
                },
            );
            let expected: i64 = input.trim().parse().unwrap();
            assert_eq!(result, Err(EditError::PositionOutOfRange(expected)));
        }
    }

    #[test]
    fn test_blank_team_makes_individual() {
        let updated = edit(
            &record(),
            EntryEdit {
                team: Some("  ".to_string()),
                player: Some(" ".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(updated.team.is_none());
        assert!(updated.player.is_none());
        assert_eq!(updated.points, Some(10));
    }

    #[test]
    fn test_team_change_uses_roster_spelling() {
        let updated = edit(
            &record(),
            EntryEdit {
                team: Some("solan".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.team.as_deref(), Some("Solan"));
    }

    #[test]
    fn test_unknown_team_rejected() {
        let result = edit(
            &record(),
            EntryEdit {
                team: Some("Atlantis".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(EditError::UnknownTeam("Atlantis".to_string())));
    }

    #[test]
    fn test_stale_points_are_repaired() {
        let mut stale = record();
        stale.points = Some(99);
        let updated = edit(&stale, EntryEdit::default()).unwrap();
        assert_eq!(updated.points, Some(10));
    }
}
