//! Parcel store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `parcel` table.
//! - Map rows to and from `Parcel`.
//!
//! # Invariants
//! - The store borrows an already-migrated connection and never manages its
//!   lifecycle.
//! - `set_address` and `delete` only touch rows whose status is
//!   `registered`; zero affected rows is not an error.
//! - Read paths reject unknown persisted status text instead of masking it.

use crate::db::DbError;
use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for parcel persistence and query operations.
///
/// A missing parcel on `get` is reported as `Db` carrying the engine's
/// no-rows error; see [`RepoError::is_no_rows`].
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    /// Returns whether the engine reported that the query matched no rows.
    pub fn is_no_rows(&self) -> bool {
        match self {
            Self::Db(err) => err.is_no_rows(),
            Self::InvalidData(_) => false,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access contract for parcels.
pub trait ParcelStore {
    /// Inserts `parcel` (its `number` is ignored) and returns the new number.
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    /// Fetches one parcel; fails with the engine's no-rows error when absent.
    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Lists every parcel of `client` in unspecified order.
    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;
    /// No-op unless the parcel is currently `registered`.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// No-op unless the parcel is currently `registered`.
    fn delete(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel store.
pub struct SqliteParcelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParcelStore for SqliteParcelStore<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let row = self.conn.query_row(
            &format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"),
            [number],
            ParcelRow::read,
        )?;

        row.into_parcel()
    }

    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = ?1;"))?;
        let mut rows = stmt.query([client])?;
        let mut parcels = Vec::new();

        while let Some(row) = rows.next()? {
            parcels.push(ParcelRow::read(row)?.into_parcel()?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status.as_str(), number],
        )?;
        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2 AND status = ?3;",
            params![address, number, ParcelStatus::Registered.as_str()],
        )?;
        Ok(())
    }

    fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM parcel WHERE number = ?1 AND status = ?2;",
            params![number, ParcelStatus::Registered.as_str()],
        )?;
        Ok(())
    }
}

/// Raw column values, decoded before status validation so engine errors and
/// data errors stay distinguishable.
struct ParcelRow {
    number: ParcelNumber,
    client: ClientId,
    status: String,
    address: String,
    created_at: String,
}

impl ParcelRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            number: row.get("number")?,
            client: row.get("client")?,
            status: row.get("status")?,
            address: row.get("address")?,
            created_at: row.get("created_at")?,
        })
    }

    fn into_parcel(self) -> RepoResult<Parcel> {
        let status = self.status.parse::<ParcelStatus>().map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid status `{}` in parcel.status for number {}",
                self.status, self.number
            ))
        })?;

        Ok(Parcel {
            number: self.number,
            client: self.client,
            status,
            address: self.address,
            created_at: self.created_at,
        })
    }
}
