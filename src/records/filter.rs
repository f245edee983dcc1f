use super::model::PlacementRecord;
use crate::catalog::{AgeClass, Sport};

/// Narrow the entries list by age class and/or sport. `None` matches all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub age_class: Option<AgeClass>,
    pub sport: Option<Sport>,
}

impl EntryFilter {
    pub fn matches(&self, record: &PlacementRecord) -> bool {
        self.age_class.map_or(true, |c| c == record.age_class)
            && self.sport.map_or(true, |s| s == record.sport)
    }

    pub fn is_empty(&self) -> bool {
        self.age_class.is_none() && self.sport.is_none()
    }
}

/// Keep only entries matching `filter`, preserving order
pub fn filter_entries(records: Vec<PlacementRecord>, filter: &EntryFilter) -> Vec<PlacementRecord> {
    records.into_iter().filter(|r| filter.matches(r)).collect()
}
