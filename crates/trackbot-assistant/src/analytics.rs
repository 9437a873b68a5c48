use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use trackbot_core::config::{AnalyticsMode, AppConfig};
use trackbot_core::error::AnalyticsError;
use trackbot_core::shipment::{GeoPoint, ShipmentRecord, StatusUpdate, UPDATE_TIMESTAMP_FORMAT};

const EARTH_RADIUS_MILES: f64 = 3958.8;

pub const DISTANCE_RANGE_MI: RangeInclusive<f64> = 800.0..=1200.0;
pub const TRANSIT_RANGE_HRS: RangeInclusive<f64> = 24.0..=72.0;
pub const EFFICIENCY_RANGE_PCT: RangeInclusive<f64> = 85.0..=98.0;
pub const FUEL_RANGE_GAL: RangeInclusive<f64> = 10.0..=30.0;

/// Per-request delivery summary. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Miles
    pub distance_covered: f64,
    /// Hours
    pub time_in_transit: f64,
    pub stops_made: usize,
    /// Percent
    pub efficiency_score: f64,
    /// Gallons
    pub estimated_fuel_usage: f64,
}

pub trait AnalyticsProvider: Send {
    fn synthesize(&mut self, record: &ShipmentRecord) -> Result<Analytics, AnalyticsError>;

    fn name(&self) -> &'static str;
}

pub fn provider_from_config(config: &AppConfig) -> Box<dyn AnalyticsProvider> {
    match config.analytics {
        AnalyticsMode::Placeholder => Box::new(match config.rng_seed {
            Some(seed) => PlaceholderAnalytics::seeded(seed),
            None => PlaceholderAnalytics::new(),
        }),
        AnalyticsMode::Route => Box::new(RouteAnalytics::new(config.fuel_mpg)),
    }
}

/// Draws every figure except the stop count from a fixed plausible range.
/// Only the stop count reflects the record.
pub struct PlaceholderAnalytics {
    rng: StdRng,
}

impl Default for PlaceholderAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderAnalytics {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AnalyticsProvider for PlaceholderAnalytics {
    fn synthesize(&mut self, record: &ShipmentRecord) -> Result<Analytics, AnalyticsError> {
        Ok(Analytics {
            distance_covered: self.rng.gen_range(DISTANCE_RANGE_MI),
            time_in_transit: self.rng.gen_range(TRANSIT_RANGE_HRS),
            stops_made: record.stop_count(),
            efficiency_score: self.rng.gen_range(EFFICIENCY_RANGE_PCT),
            estimated_fuel_usage: self.rng.gen_range(FUEL_RANGE_GAL),
        })
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Derives the figures from the route geometry and the update timestamps.
pub struct RouteAnalytics {
    fuel_mpg: f64,
}

impl RouteAnalytics {
    pub fn new(fuel_mpg: f64) -> Self {
        Self { fuel_mpg }
    }
}

impl AnalyticsProvider for RouteAnalytics {
    fn synthesize(&mut self, record: &ShipmentRecord) -> Result<Analytics, AnalyticsError> {
        if record.route.is_empty() {
            return Err(AnalyticsError::EmptyRoute(record.tracking_number.to_string()));
        }

        let reached = nearest_waypoint(&record.route, record.current_location.coords);
        let distance_covered = path_length_miles(&record.route[..=reached]);

        let full_route = path_length_miles(&record.route);
        let direct = haversine_miles(record.origin.coords, record.destination.coords);
        let efficiency_score = if full_route > 0.0 {
            (direct / full_route * 100.0).min(100.0)
        } else {
            100.0
        };

        Ok(Analytics {
            distance_covered,
            time_in_transit: elapsed_hours(&record.updates)?,
            stops_made: record.stop_count(),
            efficiency_score,
            estimated_fuel_usage: distance_covered / self.fuel_mpg,
        })
    }

    fn name(&self) -> &'static str {
        "route"
    }
}

/// Great-circle distance between two points.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

fn path_length_miles(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_miles(leg[0], leg[1]))
        .sum()
}

// Index of the waypoint closest to `position`; route must be non-empty.
fn nearest_waypoint(route: &[GeoPoint], position: GeoPoint) -> usize {
    route
        .iter()
        .enumerate()
        .map(|(i, p)| (i, haversine_miles(*p, position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn elapsed_hours(updates: &[StatusUpdate]) -> Result<f64, AnalyticsError> {
    let (Some(first), Some(last)) = (updates.first(), updates.last()) else {
        return Ok(0.0);
    };
    let start = parse_timestamp(&first.timestamp)?;
    let end = parse_timestamp(&last.timestamp)?;
    Ok((end - start).num_minutes() as f64 / 60.0)
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, AnalyticsError> {
    NaiveDateTime::parse_from_str(value, UPDATE_TIMESTAMP_FORMAT).map_err(|e| {
        AnalyticsError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}
