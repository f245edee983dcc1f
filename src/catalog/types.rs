use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::names::normalize_name;

/// Competition class, split by gender and veteran age tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeClass {
    MenOpen,
    MenVeteran,
    MenSeniorVeteran,
    WomenOpen,
    WomenVeteran,
}

impl AgeClass {
    /// Every class, in the order the results desk lists them.
    pub const ALL: [AgeClass; 5] = [
        AgeClass::MenOpen,
        AgeClass::MenVeteran,
        AgeClass::MenSeniorVeteran,
        AgeClass::WomenOpen,
        AgeClass::WomenVeteran,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AgeClass::MenOpen => "Men - Open",
            AgeClass::MenVeteran => "Men - Veteran (45+)",
            AgeClass::MenSeniorVeteran => "Men - Senior Veteran (53+)",
            AgeClass::WomenOpen => "Women - Open",
            AgeClass::WomenVeteran => "Women - Veteran (40+)",
        }
    }

    /// Look up a class by its display name (case and whitespace tolerant).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|class| normalize_name(class.name()) == wanted)
    }
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event in the meet's fixed sport catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Sprint100m,
    Sprint200m,
    Run400m,
    Run800m,
    Run1500m,
    Run5000m,
    Relay4x100m,
    LongJump,
    HighJump,
    TripleJump,
    DiscusThrow,
    Shotput,
    JavelinThrow,
    Walk400m,
    Walk800m,
    Chess,
    CarromSingles,
    CarromDoubles,
    TableTennisSingles,
    TableTennisDoubles,
    TableTennisMixedDoubles,
    BadmintonSingles,
    BadmintonDoubles,
    BadmintonMixedDoubles,
    Volleyball,
    Kabaddi,
    Basketball,
    TugOfWar,
    Football,
    LawnTennis,
    Quiz,
    Marathon10k,
}

impl Sport {
    /// The catalog in canonical order. Every filtered list preserves this order.
    pub const ALL: [Sport; 32] = [
        Sport::Sprint100m,
        Sport::Sprint200m,
        Sport::Run400m,
        Sport::Run800m,
        Sport::Run1500m,
        Sport::Run5000m,
        Sport::Relay4x100m,
        Sport::LongJump,
        Sport::HighJump,
        Sport::TripleJump,
        Sport::DiscusThrow,
        Sport::Shotput,
        Sport::JavelinThrow,
        Sport::Walk400m,
        Sport::Walk800m,
        Sport::Chess,
        Sport::CarromSingles,
        Sport::CarromDoubles,
        Sport::TableTennisSingles,
        Sport::TableTennisDoubles,
        Sport::TableTennisMixedDoubles,
        Sport::BadmintonSingles,
        Sport::BadmintonDoubles,
        Sport::BadmintonMixedDoubles,
        Sport::Volleyball,
        Sport::Kabaddi,
        Sport::Basketball,
        Sport::TugOfWar,
        Sport::Football,
        Sport::LawnTennis,
        Sport::Quiz,
        Sport::Marathon10k,
    ];

    /// Display name as printed on the organizer's event sheet.
    pub fn name(self) -> &'static str {
        match self {
            Sport::Sprint100m => "100 m",
            Sport::Sprint200m => "200 m",
            Sport::Run400m => "400 m",
            Sport::Run800m => "800 m",
            Sport::Run1500m => "1500 m",
            Sport::Run5000m => "5000 m",
            Sport::Relay4x100m => "4x100 m relay",
            Sport::LongJump => "Long Jump",
            Sport::HighJump => "High Jump",
            Sport::TripleJump => "Triple Jump",
            Sport::DiscusThrow => "Discuss Throw",
            Sport::Shotput => "Shotput",
            Sport::JavelinThrow => "Javelin throw",
            Sport::Walk400m => "400 m walking",
            Sport::Walk800m => "800 m walking",
            Sport::Chess => "Chess",
            Sport::CarromSingles => "Carrom (Singles)",
            Sport::CarromDoubles => "Carrom (Doubles)",
            Sport::TableTennisSingles => "Table Tennis(Singles)",
            Sport::TableTennisDoubles => "Table Tennis(Doubles)",
            Sport::TableTennisMixedDoubles => "Table Tennis (Mix Doubles)",
            Sport::BadmintonSingles => "Badminton (Singles)",
            Sport::BadmintonDoubles => "Badminton (Doubles)",
            Sport::BadmintonMixedDoubles => "Badminton (Mixed Doubles)",
            Sport::Volleyball => "Volleyball",
            Sport::Kabaddi => "Kabaddi",
            Sport::Basketball => "Basketball",
            Sport::TugOfWar => "Tug of War",
            Sport::Football => "Football",
            Sport::LawnTennis => "Lawn Tennis",
            Sport::Quiz => "Quiz",
            Sport::Marathon10k => "10k Marathon",
        }
    }

    /// Look up a sport by its display name (case and whitespace tolerant).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|sport| normalize_name(sport.name()) == wanted)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Both enums travel as their display names so the snapshot file stays
// readable by people editing it by hand.

impl Serialize for AgeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AgeClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        AgeClass::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown age class '{}'", name)))
    }
}

impl Serialize for Sport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Sport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Sport::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown sport '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_no_duplicate_names() {
        let names: HashSet<String> = Sport::ALL
            .iter()
            .map(|s| normalize_name(s.name()))
            .collect();
        assert_eq!(names.len(), Sport::ALL.len());
    }

    #[test]
    fn test_sport_from_name_tolerant() {
        assert_eq!(Sport::from_name("football"), Some(Sport::Football));
        assert_eq!(Sport::from_name("  TUG   of war "), Some(Sport::TugOfWar));
        assert_eq!(Sport::from_name("100 M"), Some(Sport::Sprint100m));
    }

    #[test]
    fn test_sport_from_name_rejects_partial() {
        assert_eq!(Sport::from_name("Carrom"), None);
        assert_eq!(Sport::from_name("100"), None);
        assert_eq!(Sport::from_name(""), None);
    }

    #[test]
    fn test_age_class_from_name() {
        assert_eq!(
            AgeClass::from_name("men - senior veteran (53+)"),
            Some(AgeClass::MenSeniorVeteran)
        );
        assert_eq!(AgeClass::from_name("Juniors"), None);
    }

    #[test]
    fn test_names_roundtrip_through_lookup() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_name(sport.name()), Some(sport));
        }
        for class in AgeClass::ALL {
            assert_eq!(AgeClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Sport::TableTennisMixedDoubles).unwrap();
        assert_eq!(json, "\"Table Tennis (Mix Doubles)\"");

        let class: AgeClass = serde_json::from_str("\"women - open\"").unwrap();
        assert_eq!(class, AgeClass::WomenOpen);

        assert!(serde_json::from_str::<Sport>("\"Curling\"").is_err());
    }
}
