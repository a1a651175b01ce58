//! Infrastructure layer: the session record store and file import/export.
//!
//! The metrics engine never touches the store; callers take a snapshot from
//! here and hand it to `invopt-inventory`.

pub mod io;
pub mod store;

mod integration_tests;

pub use store::{InMemoryRecordStore, RecordStore};
