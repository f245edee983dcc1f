pub mod config;
pub mod engine;
pub mod table;
pub mod validation;

pub use config::*;
pub use engine::{points_by_name, points_for};
pub use table::{PointScale, ScoringTable, SportCategory, TEAM_EVENTS};
pub use validation::validate_scoring;
