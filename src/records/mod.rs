pub mod edit;
pub mod filter;
pub mod lenient;
pub mod model;
pub mod store;
pub mod submission;

pub use edit::{apply_edit, EditError, EntryEdit};
pub use filter::{filter_entries, EntryFilter};
pub use model::{NewPlacement, PlacementRecord, RecordId};
pub use store::{get_store_path, load_store, save_store, RecordStore};
pub use submission::{prepare_submission, PositionSlot, ResultSheet, SubmissionError};
