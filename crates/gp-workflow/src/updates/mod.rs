//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are applied; the project validates them against its team and
//! template before touching the store.

pub mod task;
