use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

/// Teams taking part, as listed on the entry sheet.
pub const DEFAULT_TEAMS: [&str; 13] = [
    "Chamba",
    "Dharamshala",
    "Mandi",
    "Solan",
    "Hamirpur",
    "Bilaspur",
    "Nahan",
    "Wildlife",
    "Kullu",
    "Rampur",
    "Shimla",
    "HPSFDC",
    "Direction",
];

pub const DEFAULT_TITLE: &str = "26th H.P. Forest Sports & Duty Meet, 2025";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub meet: MeetConfig,

    /// Team roster. Submissions naming another team are refused.
    /// An empty list accepts any team name.
    #[serde(default = "default_teams")]
    pub teams: Vec<String>,

    /// Where entries are kept (defaults to ~/.config/meet-board/entries.json)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MeetConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Public leaderboard link appended to shared messages
    #[serde(default)]
    pub portal_url: Option<String>,
}

fn default_teams() -> Vec<String> {
    DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for MeetConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            portal_url: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meet: MeetConfig::default(),
            teams: default_teams(),
            data_file: None,
            scoring: None,
        }
    }
}
