//! Domain model for tracked parcels.
//!
//! # Responsibility
//! - Define the canonical parcel record shared by storage and services.
//! - Own the closed set of delivery statuses and their storage text.
//!
//! # Invariants
//! - Every stored parcel is identified by a store-assigned `ParcelNumber`.
//! - Only `registered` parcels accept address edits and deletion.

pub mod parcel;
