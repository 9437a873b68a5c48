use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::tracking::TrackingNumber;

/// Timestamp layout used by status updates, e.g. `2024-10-28 15:30`.
pub const UPDATE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub coords: GeoPoint,
}

impl Place {
    pub fn new(city: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            city: city.into(),
            coords: GeoPoint::new(lat, lon),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Exception,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickedUp => write!(f, "Picked Up"),
            Self::InTransit => write!(f, "In Transit"),
            Self::OutForDelivery => write!(f, "Out for Delivery"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Exception => write!(f, "Exception"),
        }
    }
}

/// One event in a shipment's history. Updates are kept in insertion order,
/// which is also chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub timestamp: String,
    pub location: String,
    pub status: String,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub weather: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub weight: String,
    pub dimensions: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub handling: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [Self::Email, Self::Sms, Self::Push];
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "Email"),
            Self::Sms => write!(f, "SMS"),
            Self::Push => write!(f, "Push Notifications"),
        }
    }
}

impl std::str::FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" | "push notifications" => Ok(Self::Push),
            other => Err(format!("unknown notification channel: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPreferences {
    pub signature_required: bool,
    pub safe_place: String,
    pub notifications: BTreeSet<NotificationChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub tracking_number: TrackingNumber,
    pub status: ShipmentStatus,
    pub origin: Place,
    pub destination: Place,
    pub current_location: Place,
    pub route: Vec<GeoPoint>,
    pub estimated_delivery: NaiveDate,
    pub updates: Vec<StatusUpdate>,
    pub package: PackageDetails,
    /// Kilograms of CO2.
    pub carbon_footprint: f64,
    pub preferences: DeliveryPreferences,
}

impl ShipmentRecord {
    /// The most recent status update, which describes the shipment as it is now.
    pub fn current_update(&self) -> Option<&StatusUpdate> {
        self.updates.last()
    }

    pub fn stop_count(&self) -> usize {
        self.updates.len()
    }
}
