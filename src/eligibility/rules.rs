use crate::catalog::names::names_match;
use crate::catalog::{AgeClass, Sport};

/// How a class narrows the sport catalog.
///
/// Sport names are kept as the organizer wrote them in the policy sheet and
/// matched against the catalog ignoring case and extra whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportRule {
    /// Whole catalog.
    Unrestricted,
    /// Whole catalog minus the listed sports.
    AllExcept(&'static [&'static str]),
    /// Only the listed sports.
    Only(&'static [&'static str]),
}

impl SportRule {
    pub fn permits(&self, sport: Sport) -> bool {
        match self {
            SportRule::Unrestricted => true,
            SportRule::AllExcept(denied) => !lists(denied, sport),
            SportRule::Only(allowed) => lists(allowed, sport),
        }
    }
}

fn lists(names: &[&str], sport: Sport) -> bool {
    names.iter().any(|name| names_match(name, sport.name()))
}

#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    pub class: AgeClass,
    pub rule: SportRule,
}

/// Eligibility policy, one row per class.
pub const CLASS_RULES: [ClassRule; 5] = [
    ClassRule {
        class: AgeClass::MenOpen,
        rule: SportRule::AllExcept(&["400 m walking", "800 m walking"]),
    },
    ClassRule {
        class: AgeClass::MenVeteran,
        rule: SportRule::AllExcept(&[
            "800 m",
            "1500 m",
            "5000 m",
            "4x100 m relay",
            "triple jump",
            "400 m walking",
            "800 m walking",
            "carrom (singles)",
            "carrom (doubles)",
        ]),
    },
    ClassRule {
        class: AgeClass::MenSeniorVeteran,
        rule: SportRule::Only(&[
            "800 m walking",
            "table tennis(singles)",
            "table tennis(doubles)",
            "table tennis (mix doubles)",
            "badminton (singles)",
            "badminton (doubles)",
            "badminton (mixed doubles)",
            "quiz",
            "10k marathon",
        ]),
    },
    ClassRule {
        class: AgeClass::WomenOpen,
        rule: SportRule::AllExcept(&["football", "lawn tennis"]),
    },
    ClassRule {
        class: AgeClass::WomenVeteran,
        rule: SportRule::Only(&["800 m walking", "quiz", "10k marathon"]),
    },
];

/// Rule for a class. A class without a row is unrestricted.
pub fn rule_for(class: AgeClass) -> SportRule {
    CLASS_RULES
        .iter()
        .find(|row| row.class == class)
        .map(|row| row.rule)
        .unwrap_or(SportRule::Unrestricted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_a_row() {
        for class in AgeClass::ALL {
            assert!(CLASS_RULES.iter().any(|row| row.class == class));
        }
    }

    #[test]
    fn test_every_policy_name_resolves_to_catalog() {
        // A typo in the policy table would silently drop a sport
        for row in &CLASS_RULES {
            let names: &[&str] = match row.rule {
                SportRule::Unrestricted => &[],
                SportRule::AllExcept(names) | SportRule::Only(names) => names,
            };
            for name in names {
                assert!(
                    Sport::from_name(name).is_some(),
                    "'{}' in {} rule is not in the catalog",
                    name,
                    row.class
                );
            }
        }
    }

    #[test]
    fn test_permits() {
        let rule = SportRule::Only(&["QUIZ"]);
        assert!(rule.permits(Sport::Quiz));
        assert!(!rule.permits(Sport::Chess));

        let rule = SportRule::AllExcept(&["  chess "]);
        assert!(!rule.permits(Sport::Chess));
        assert!(rule.permits(Sport::Quiz));

        assert!(SportRule::Unrestricted.permits(Sport::Football));
    }
}
