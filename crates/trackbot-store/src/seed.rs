use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;
use trackbot_core::shipment::*;
use trackbot_core::tracking::TrackingNumber;

pub const DEMO_TRACKING_NUMBER: &str = "TRK123456";

/// Estimated delivery for the demo shipment is always two days out.
pub fn demo_estimated_delivery(today: NaiveDate) -> NaiveDate {
    today + Duration::days(2)
}

/// The New York -> Los Angeles demo shipment, currently in Chicago.
pub fn demo_shipment(today: NaiveDate) -> ShipmentRecord {
    let new_york = Place::new("New York", 40.7128, -74.0060);
    let chicago = Place::new("Chicago", 41.8781, -87.6298);
    let denver = GeoPoint::new(39.7392, -104.9903);
    let los_angeles = Place::new("Los Angeles", 34.0522, -118.2437);

    ShipmentRecord {
        tracking_number: TrackingNumber::parse(DEMO_TRACKING_NUMBER)
            .expect("demo tracking number is well-formed"),
        status: ShipmentStatus::InTransit,
        route: vec![new_york.coords, chicago.coords, denver, los_angeles.coords],
        origin: new_york,
        destination: los_angeles,
        current_location: chicago,
        estimated_delivery: demo_estimated_delivery(today),
        updates: vec![
            StatusUpdate {
                timestamp: "2024-10-28 10:00".into(),
                location: "New York".into(),
                status: "Package Picked Up".into(),
                temperature: 72.0,
                weather: "Clear".into(),
            },
            StatusUpdate {
                timestamp: "2024-10-28 15:30".into(),
                location: "Chicago".into(),
                status: "In Transit".into(),
                temperature: 68.0,
                weather: "Cloudy".into(),
            },
        ],
        package: PackageDetails {
            weight: "5.2 kg".into(),
            dimensions: "30x20x15 cm".into(),
            package_type: "Priority".into(),
            handling: "Fragile".into(),
        },
        carbon_footprint: 245.5,
        preferences: DeliveryPreferences {
            signature_required: true,
            safe_place: "Front Porch".into(),
            notifications: BTreeSet::from([NotificationChannel::Email, NotificationChannel::Sms]),
        },
    }
}

pub fn demo_shipments() -> Vec<ShipmentRecord> {
    vec![demo_shipment(Local::now().date_naive())]
}
