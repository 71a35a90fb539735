//! Repository layer for parcel persistence.
//!
//! # Responsibility
//! - Define the parcel data-access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every operation issues exactly one SQL statement.
//! - State guards live in the statement's `WHERE` clause, never in a
//!   preceding read.
//! - Engine errors, including "no rows", are propagated unchanged.

pub mod parcel_store;
