//! Parcel use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into delivery workflow APIs.
//! - Keep callers decoupled from SQL details.

pub mod parcel_service;
