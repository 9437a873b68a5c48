use trackbot_assistant::analytics::Analytics;
use trackbot_assistant::route_map::{MarkerColor, RouteMap};
use trackbot_assistant::timeline::Timeline;
use trackbot_assistant::Reply;
use trackbot_core::message::{ChatRole, ChatTurn};

pub fn render_reply(reply: &Reply) {
    if let Some(map) = &reply.map {
        render_map(map);
    }
    if let Some(timeline) = &reply.timeline {
        render_timeline(timeline);
    }
    if let Some(analytics) = &reply.analytics {
        render_analytics(analytics);
    }
    for alert in &reply.alerts {
        eprintln!("\x1b[33;1m{alert}\x1b[0m");
    }
    if reply.has_payloads() || !reply.alerts.is_empty() {
        println!();
    }

    println!("🤖 Assistant: {}", reply.text);
}

pub fn render_turn(turn: &ChatTurn) {
    let time = turn.created_at.format("%H:%M:%S");
    match turn.role {
        ChatRole::User => println!("\x1b[90m{time}\x1b[0m You: {}", turn.text),
        ChatRole::Bot => println!("\x1b[90m{time}\x1b[0m 🤖 Assistant: {}", turn.text),
    }
}

fn render_map(map: &RouteMap) {
    println!("\x1b[1m📍 Live Location Tracking\x1b[0m");
    for marker in &map.markers {
        println!(
            "  {}●\x1b[0m {:<28} ({:.4}, {:.4})",
            color_code(marker.color),
            marker.popup,
            marker.coords.lat,
            marker.coords.lon
        );
    }
    let route: Vec<String> = map
        .route
        .points
        .iter()
        .map(|p| format!("({:.2}, {:.2})", p.lat, p.lon))
        .collect();
    println!("  \x1b[90mroute:\x1b[0m {}", route.join(" → "));
    println!();
}

fn render_timeline(timeline: &Timeline) {
    println!("\x1b[1m📅 {}\x1b[0m", timeline.title);
    for segment in &timeline.segments {
        println!(
            "  {}  {:<12} {:<20} \x1b[90m{:.0}°F, {}\x1b[0m",
            segment.timestamp,
            segment.location,
            segment.status,
            segment.temperature,
            segment.weather
        );
    }
    println!();
}

fn render_analytics(analytics: &Analytics) {
    println!("\x1b[1m📊 Delivery Analytics\x1b[0m");
    println!(
        "  Distance Covered: {:.1} mi | Time in Transit: {:.1} hrs | Efficiency Score: {:.1}%",
        analytics.distance_covered, analytics.time_in_transit, analytics.efficiency_score
    );
    println!(
        "  \x1b[90mStops: {} | Est. fuel: {:.1} gal\x1b[0m",
        analytics.stops_made, analytics.estimated_fuel_usage
    );
}

fn color_code(color: MarkerColor) -> &'static str {
    match color {
        MarkerColor::Green => "\x1b[32m",
        MarkerColor::Red => "\x1b[31m",
        MarkerColor::Blue => "\x1b[34m",
    }
}
