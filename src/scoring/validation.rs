use std::collections::HashSet;

use super::config::{ScaleConfig, ScoringConfig};
use crate::catalog::Sport;

/// Validate the scoring override at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref names) = config.team_events {
        let mut seen = HashSet::new();
        for (i, name) in names.iter().enumerate() {
            match Sport::from_name(name) {
                Some(sport) => {
                    if !seen.insert(sport) {
                        errors.push(format!(
                            "scoring.team_events[{}]: '{}' is listed more than once",
                            i, name
                        ));
                    }
                }
                None => errors.push(format!(
                    "scoring.team_events[{}]: unknown sport '{}'",
                    i, name
                )),
            }
        }
    }

    if let Some(ref scale) = config.team_scale {
        check_scale("scoring.team_scale", scale, &mut errors);
    }
    if let Some(ref scale) = config.standard_scale {
        check_scale("scoring.standard_scale", scale, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// A worse finish may never earn more than a better one.
fn check_scale(field: &str, scale: &ScaleConfig, errors: &mut Vec<String>) {
    let points = [scale.first, scale.second, scale.third, scale.fourth];
    if points[0] == 0 {
        errors.push(format!("{}.first: winner must earn points", field));
    }
    let labels = ["first", "second", "third", "fourth"];
    for i in 1..points.len() {
        if points[i] > points[i - 1] {
            errors.push(format!(
                "{}.{}: {} is more than {} ({})",
                field,
                labels[i],
                points[i],
                labels[i - 1],
                points[i - 1]
            ));
        }
    }
}
