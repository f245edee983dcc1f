//! Results desk for a multi-day sports meet.
//!
//! The core is three pure functions: [`eligibility::allowed_sports`] decides
//! which sports an age class may enter, [`scoring::points_for`] prices a
//! finishing position, and [`leaderboard::aggregate`] folds placement records
//! into ranked team standings. The rest of the crate is the workflow and
//! presentation around them.

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod leaderboard;
pub mod logging;
pub mod output;
pub mod records;
pub mod scoring;

pub use catalog::{AgeClass, Sport};
pub use eligibility::allowed_sports;
pub use leaderboard::{aggregate, TeamStanding};
pub use records::PlacementRecord;
pub use scoring::points_for;
