use parcel_core::{Parcel, ParcelStatus};

#[test]
fn status_walks_delivery_lifecycle() {
    assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
    assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
    assert_eq!(ParcelStatus::Delivered.next(), None);
}

#[test]
fn parcel_serialization_uses_expected_wire_fields() {
    let mut parcel = Parcel::new(1000, "test", "2024-01-01T00:00:00Z");
    parcel.number = 42;
    parcel.status = ParcelStatus::Sent;

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 42);
    assert_eq!(json["client"], 1000);
    assert_eq!(json["status"], "sent");
    assert_eq!(json["address"], "test");
    assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "number": 1,
        "client": 1,
        "status": "lost",
        "address": "nowhere",
        "created_at": "2024-01-01T00:00:00Z"
    });

    assert!(serde_json::from_value::<Parcel>(value).is_err());
}

#[test]
fn only_registered_parcels_are_editable() {
    let mut parcel = Parcel::new(1, "a", "2024-01-01T00:00:00Z");
    assert!(parcel.is_registered());

    parcel.status = ParcelStatus::Delivered;
    assert!(!parcel.is_registered());
}
