//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot data-access contract used by the habit service.
//! - Isolate SQLite and JSON details from service/business orchestration.
//!
//! # Invariants
//! - A missing or malformed snapshot loads as an empty collection, never as
//!   an error.
//! - Writes always persist the full collection under one fixed key.

pub mod snapshot_repo;
