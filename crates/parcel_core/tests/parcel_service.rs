use chrono::DateTime;
use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, ParcelStore, SqliteParcelStore};

#[test]
fn register_stores_registered_parcel_with_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let parcel = service.register(1000, "Pushkina st. 10").unwrap();

    assert!(parcel.number > 0);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert!(parcel.created_at.ends_with('Z'));
    DateTime::parse_from_rfc3339(&parcel.created_at).unwrap();

    let stored = SqliteParcelStore::new(&conn).get(parcel.number).unwrap();
    assert_eq!(stored, parcel);
}

#[test]
fn next_status_walks_lifecycle_and_stops_at_delivered() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));
    let number = service.register(1, "a").unwrap().number;

    assert_eq!(service.next_status(number).unwrap(), Some(ParcelStatus::Sent));
    assert_eq!(
        service.next_status(number).unwrap(),
        Some(ParcelStatus::Delivered)
    );
    assert_eq!(service.next_status(number).unwrap(), None);

    let stored = SqliteParcelStore::new(&conn).get(number).unwrap();
    assert_eq!(stored.status, ParcelStatus::Delivered);
}

#[test]
fn next_status_of_missing_parcel_propagates_no_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let err = service.next_status(12345).unwrap_err();
    assert!(err.is_no_rows());
}

#[test]
fn change_address_and_delete_respect_registered_guard() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));
    let kept = service.register(7, "old").unwrap().number;
    let removed = service.register(7, "gone").unwrap().number;

    service.next_status(kept).unwrap();
    service.change_address(kept, "new").unwrap();
    service.delete(kept).unwrap();
    service.change_address(removed, "renamed").unwrap();
    service.delete(removed).unwrap();

    let parcels = service.client_parcels(7).unwrap();
    assert_eq!(parcels.len(), 1);
    assert_eq!(parcels[0].number, kept);
    assert_eq!(parcels[0].address, "old");
    assert_eq!(parcels[0].status, ParcelStatus::Sent);
}
