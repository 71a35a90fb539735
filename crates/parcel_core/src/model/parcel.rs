//! Parcel domain model.
//!
//! # Responsibility
//! - Define the parcel record persisted in the `parcel` table.
//! - Map delivery statuses to and from their storage text.
//!
//! # Invariants
//! - `number` is assigned by the store and never reused.
//! - `client` and `created_at` are fixed at creation.
//! - `address` may change only while `status == Registered`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned parcel identifier (SQLite rowid).
pub type ParcelNumber = i64;

/// Opaque identifier of the client owning a parcel.
pub type ClientId = i64;

/// Delivery lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted but not yet handed to a carrier. Initial state.
    Registered,
    /// In transit.
    Sent,
    /// Handed over to the recipient.
    Delivered,
}

impl ParcelStatus {
    /// Storage and wire text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Returns the follow-up status, or `None` once delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a known parcel status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParcelStatusError(pub String);

impl Display for ParseParcelStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for ParseParcelStatusError {}

impl FromStr for ParcelStatus {
    type Err = ParseParcelStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "registered" => Ok(Self::Registered),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            other => Err(ParseParcelStatusError(other.to_string())),
        }
    }
}

/// Canonical parcel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Zero until the store assigns a number on insert.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    pub address: String,
    /// RFC3339 timestamp, e.g. `2024-01-01T00:00:00Z`.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved `registered` parcel.
    ///
    /// # Invariants
    /// - `number` is `0` until returned from the store.
    pub fn new(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Returns whether address edits and deletion are still allowed.
    pub fn is_registered(&self) -> bool {
        self.status == ParcelStatus::Registered
    }
}

#[cfg(test)]
mod tests {
    use super::{Parcel, ParcelStatus};

    #[test]
    fn status_text_parses_back() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        let err = "lost".parse::<ParcelStatus>().unwrap_err();
        assert!(err.to_string().contains("lost"));
    }

    #[test]
    fn new_parcel_starts_registered_and_unnumbered() {
        let parcel = Parcel::new(7, "Main st. 1", "2024-01-01T00:00:00Z");
        assert_eq!(parcel.number, 0);
        assert!(parcel.is_registered());
    }
}
