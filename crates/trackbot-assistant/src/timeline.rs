use serde::{Deserialize, Serialize};
use trackbot_core::shipment::StatusUpdate;

pub const TIMELINE_TITLE: &str = "Delivery Timeline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub timestamp: String,
    pub location: String,
    pub status: String,
    pub temperature: f64,
    pub weather: String,
}

/// Categorical timeline: one row per location, coloured by status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub title: String,
    pub segments: Vec<TimelineSegment>,
}

/// Segments come out in update order. No sorting or dedup.
pub fn build_timeline(updates: &[StatusUpdate]) -> Timeline {
    Timeline {
        title: TIMELINE_TITLE.into(),
        segments: updates
            .iter()
            .map(|u| TimelineSegment {
                timestamp: u.timestamp.clone(),
                location: u.location.clone(),
                status: u.status.clone(),
                temperature: u.temperature,
                weather: u.weather.clone(),
            })
            .collect(),
    }
}
