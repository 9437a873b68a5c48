use serde::{Deserialize, Serialize};
use trackbot_core::shipment::{GeoPoint, Place, ShipmentRecord};

const DEFAULT_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Origin,
    Destination,
    CurrentLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    Green,
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub coords: GeoPoint,
    pub popup: String,
    pub color: MarkerColor,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<GeoPoint>,
    pub weight: u8,
    pub color: MarkerColor,
    pub opacity: f64,
}

/// Renderable description of a shipment's route. The renderer decides how
/// to draw it; nothing here touches the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMap {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub route: Polyline,
}

impl RouteMap {
    pub fn marker(&self, kind: MarkerKind) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.kind == kind)
    }
}

pub fn build_route_map(record: &ShipmentRecord) -> RouteMap {
    RouteMap {
        center: record.current_location.coords,
        zoom: DEFAULT_ZOOM,
        markers: vec![
            marker(MarkerKind::Origin, &record.origin, "Origin", MarkerColor::Green, "info-sign"),
            marker(
                MarkerKind::Destination,
                &record.destination,
                "Destination",
                MarkerColor::Red,
                "info-sign",
            ),
            marker(
                MarkerKind::CurrentLocation,
                &record.current_location,
                "Current Location",
                MarkerColor::Blue,
                "truck",
            ),
        ],
        route: Polyline {
            points: record.route.clone(),
            weight: 2,
            color: MarkerColor::Blue,
            opacity: 0.8,
        },
    }
}

fn marker(kind: MarkerKind, place: &Place, label: &str, color: MarkerColor, icon: &str) -> MapMarker {
    MapMarker {
        kind,
        coords: place.coords,
        popup: format!("{label}: {}", place.city),
        color,
        icon: icon.into(),
    }
}
