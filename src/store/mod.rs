//! Record storage.
//!
//! The record store owns both the ingested records and the inverted index
//! derived from them, which keeps record ids, the record count and the
//! index in sync.

pub mod record_store;

pub use record_store::RecordStore;
