pub mod standings;

pub use standings::{aggregate, last_updated, TeamStanding};
