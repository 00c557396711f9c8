//! Finished-game records and the history storage seam.

pub mod record;
pub mod store;

pub use record::GameRecord;
pub use store::{HistoryError, HistoryStore, MemoryHistoryStore};
