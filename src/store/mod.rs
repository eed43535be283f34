//! The student record store.
//!
//! Holds the records, enforces the field and key rules, and renders the
//! record table.

mod record_store;
pub mod table;

pub use record_store::RecordStore;
pub use table::EMPTY_NOTICE;
