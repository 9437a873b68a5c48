/// Above this temperature (°F) packages may need special handling.
pub const HEAT_THRESHOLD_F: f64 = 85.0;

/// Below this temperature (°F) deliveries may be delayed.
pub const FREEZE_THRESHOLD_F: f64 = 32.0;

/// Weather-based delivery alerts for one location. The heat and freeze
/// ranges do not overlap, so at most one alert comes back.
pub fn weather_alert(location: &str, temperature: f64) -> Vec<String> {
    let mut alerts = Vec::new();
    if temperature > HEAT_THRESHOLD_F {
        alerts.push(format!(
            "⚠️ High temperature alert in {location}. Package may require special handling."
        ));
    } else if temperature < FREEZE_THRESHOLD_F {
        alerts.push(format!("❄️ Freezing conditions in {location}. Delay possible."));
    }
    alerts
}
