use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use super::model::NewPlacement;
use crate::catalog::{AgeClass, Sport};
use crate::eligibility::is_sport_allowed;
use crate::scoring::ScoringTable;

/// Why a result sheet was refused. Every variant is a user-facing message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Please select an age class.")]
    MissingAgeClass,

    #[error("Please select a sport.")]
    MissingSport,

    #[error("Unknown age class '{0}'.")]
    UnknownAgeClass(String),

    #[error("Unknown sport '{0}'.")]
    UnknownSport(String),

    #[error("The sport \"{sport}\" is not permitted for {age_class}.")]
    SportNotPermitted { sport: Sport, age_class: AgeClass },

    #[error("Unknown team '{team}' for position {position}.")]
    UnknownTeam { team: String, position: u32 },

    #[error("No positions filled, nothing to submit.")]
    NothingToSubmit,
}

/// Who finished in one position. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSlot {
    pub team: Option<String>,
    pub player: Option<String>,
}

impl PositionSlot {
    pub fn new(team: Option<&str>, player: Option<&str>) -> Self {
        Self {
            team: team.map(str::to_string),
            player: player.map(str::to_string),
        }
    }
}

/// Results for one sport in one age class, as typed in by the desk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSheet {
    pub age_class: Option<String>,
    pub sport: Option<String>,
    /// Slots for 1st, 2nd, 3rd and 4th place
    pub slots: [PositionSlot; 4],
}

impl ResultSheet {
    /// Switch age class. The sport and every slot are cleared since the
    /// eligible sports may have changed.
    pub fn set_age_class(&mut self, age_class: Option<String>) {
        self.age_class = age_class;
        self.sport = None;
        self.slots = Default::default();
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve a team against the roster, returning the roster spelling.
/// An empty roster accepts any team name as given.
pub(crate) fn resolve_team(roster: &[String], team: &str) -> Option<String> {
    if roster.is_empty() {
        return Some(team.to_string());
    }
    roster
        .iter()
        .map(|t| t.trim())
        .find(|t| t.eq_ignore_ascii_case(team))
        .map(str::to_string)
}

/// Validate a result sheet and turn its filled slots into placements.
///
/// Slots with neither a team nor a player are skipped. Every placement gets
/// its points from `table` and shares the `now` timestamp.
pub fn prepare_submission(
    sheet: &ResultSheet,
    roster: &[String],
    table: &ScoringTable,
    now: DateTime<Utc>,
) -> Result<Vec<NewPlacement>, SubmissionError> {
    let age_class_name =
        non_blank(sheet.age_class.as_deref()).ok_or(SubmissionError::MissingAgeClass)?;
    let sport_name = non_blank(sheet.sport.as_deref()).ok_or(SubmissionError::MissingSport)?;

    let age_class = AgeClass::from_name(age_class_name)
        .ok_or_else(|| SubmissionError::UnknownAgeClass(age_class_name.to_string()))?;
    let sport = Sport::from_name(sport_name)
        .ok_or_else(|| SubmissionError::UnknownSport(sport_name.to_string()))?;

    if !is_sport_allowed(age_class, sport) {
        return Err(SubmissionError::SportNotPermitted { sport, age_class });
    }

    let mut placements = Vec::new();
    for (position, slot) in (1u32..).zip(sheet.slots.iter()) {
        let team = non_blank(slot.team.as_deref());
        let player = non_blank(slot.player.as_deref());
        if team.is_none() && player.is_none() {
            continue;
        }

        let team = match team {
            Some(name) => Some(resolve_team(roster, name).ok_or_else(|| {
                SubmissionError::UnknownTeam {
                    team: name.to_string(),
                    position,
                }
            })?),
            None => None,
        };

        placements.push(NewPlacement {
            team,
            player: player.map(str::to_string),
            sport,
            age_class,
            position,
            points: table.points_for(Some(sport), Some(position)),
            created_at: now,
        });
    }

    if placements.is_empty() {
        return Err(SubmissionError::NothingToSubmit);
    }

    debug!(
        sport = %sport,
        age_class = %age_class,
        rows = placements.len(),
        "Prepared result sheet"
    );
    Ok(placements)
}
