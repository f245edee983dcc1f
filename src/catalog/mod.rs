pub mod names;
pub mod types;

pub use names::normalize_name;
pub use types::{AgeClass, Sport};
