pub mod rules;

pub use rules::{rule_for, ClassRule, SportRule, CLASS_RULES};

use crate::catalog::{normalize_name, AgeClass, Sport};

/// Sports an age class may enter, in catalog order.
///
/// No class means nothing is selectable yet, so the list is empty.
pub fn allowed_sports(age_class: Option<AgeClass>) -> Vec<Sport> {
    match age_class {
        None => Vec::new(),
        Some(class) => {
            let rule = rule_for(class);
            Sport::ALL
                .into_iter()
                .filter(|sport| rule.permits(*sport))
                .collect()
        }
    }
}

/// Same as [`allowed_sports`] but starting from free text.
///
/// A blank name counts as no class. A name that matches no known class falls
/// back to the whole catalog.
pub fn allowed_sports_by_name(age_class: &str) -> Vec<Sport> {
    if normalize_name(age_class).is_empty() {
        return Vec::new();
    }
    match AgeClass::from_name(age_class) {
        Some(class) => allowed_sports(Some(class)),
        None => Sport::ALL.to_vec(),
    }
}

/// Whether `sport` is open to `age_class`.
pub fn is_sport_allowed(age_class: AgeClass, sport: Sport) -> bool {
    rule_for(age_class).permits(sport)
}
