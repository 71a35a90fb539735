//! Parcel workflow service.
//!
//! # Responsibility
//! - Register new parcels with a creation timestamp.
//! - Advance parcels through `registered -> sent -> delivered`.
//! - Delegate address edits and deletion to the store's guarded statements.
//!
//! # Invariants
//! - Service APIs never bypass `ParcelStore` persistence contracts.
//! - Guarded no-op semantics of the store are preserved, not re-checked.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_store::{ParcelStore, RepoResult};
use chrono::{SecondsFormat, Utc};
use log::{debug, info};

/// Use-case wrapper over a parcel store.
pub struct ParcelService<S: ParcelStore> {
    store: S,
}

impl<S: ParcelStore> ParcelService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new parcel for `client` stamped with the current UTC time.
    ///
    /// # Contract
    /// - Status is `registered`.
    /// - `created_at` is RFC3339 with second precision and `Z` suffix.
    /// - Returns the stored parcel including its assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut parcel = Parcel::new(client, address, created_at);
        parcel.number = self.store.add(&parcel)?;

        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Lists parcels of one client in unspecified order.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.store.get_by_client(client)
    }

    /// Moves a parcel to its next delivery status.
    ///
    /// Returns the new status, or `None` when the parcel is already
    /// delivered (nothing is written in that case).
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let parcel = self.store.get(number)?;
        let Some(next) = parcel.status.next() else {
            debug!(
                "event=parcel_next_status module=service status=skipped number={} reason=final_status",
                number
            );
            return Ok(None);
        };

        self.store.set_status(number, next)?;
        info!(
            "event=parcel_next_status module=service status=ok number={} from={} to={}",
            number, parcel.status, next
        );
        Ok(Some(next))
    }

    /// Changes the delivery address; no-op unless the parcel is `registered`.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.store.set_address(number, address)
    }

    /// Deletes a parcel; no-op unless the parcel is `registered`.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.store.delete(number)
    }
}
