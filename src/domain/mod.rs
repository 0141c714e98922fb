//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts. Record ids
//! are positional, so the wrapper keeps them from being mixed up with
//! counts or other plain integers.

pub mod record_id;

pub use record_id::RecordId;
