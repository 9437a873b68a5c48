use trackbot_core::shipment::ShipmentRecord;

pub const FORMAT_PROMPT: &str = "Please provide a valid tracking number in the format TRK######";

pub const NOT_FOUND: &str = "Sorry, I couldn't find that tracking number in our system.";

pub const CARBON_REPLY: &str = "We calculate the carbon footprint of each delivery and offset it \
     through our environmental programs. Would you like to see the environmental impact of a \
     specific delivery?";

pub const WEATHER_REPLY: &str = "I can provide real-time weather updates along your package's \
     route. Please provide a tracking number.";

pub const ANALYTICS_REPLY: &str = "I can show you detailed analytics including distance covered, \
     time in transit, and efficiency scores. Please provide a tracking number.";

pub const GREETING_REPLY: &str = "Hello! How can I help you with your delivery today?";

pub const DELIVERY_TIME_REPLY: &str = "Standard delivery typically takes 2-5 business days. \
     Express delivery is available for 1-2 business days.";

pub const HELP_REPLY: &str = "I can help you with:
- 📍 Real-time GPS tracking
- 🌡️ Weather alerts along delivery route
- 📊 Delivery analytics and performance metrics
- 🌱 Carbon footprint tracking
- 📱 Delivery preferences management
- 📦 Package details and status updates

What would you like to know more about?";

pub const FALLBACK_REPLY: &str =
    "I'm not sure I understand. Could you rephrase that or ask for 'help' to see what I can do?";

/// The text block shown for a successful track request.
pub fn format_shipment(record: &ShipmentRecord) -> String {
    let package = &record.package;
    let prefs = &record.preferences;

    format!(
        "📦 Tracking Number: {tn}
Status: {status}
Origin: {origin}
Destination: {destination}
Estimated Delivery: {eta}
Current Location: {current}

Package Details:
- Weight: {weight}
- Dimensions: {dimensions}
- Type: {package_type}

🌱 Carbon Footprint: {carbon:?} kg CO2

Delivery Preferences:
- Signature Required: {signature}
- Safe Place: {safe_place}",
        tn = record.tracking_number,
        status = record.status,
        origin = record.origin.city,
        destination = record.destination.city,
        eta = record.estimated_delivery.format("%Y-%m-%d"),
        current = record.current_location.city,
        weight = package.weight,
        dimensions = package.dimensions,
        package_type = package.package_type,
        carbon = record.carbon_footprint,
        signature = if prefs.signature_required { "Yes" } else { "No" },
        safe_place = prefs.safe_place,
    )
}
