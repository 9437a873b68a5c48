use chrono::NaiveDate;
use trackbot_core::config::{AnalyticsMode, AppConfig};
use trackbot_core::message::ChatRole;
use trackbot_core::shipment::{ShipmentRecord, StatusUpdate};
use trackbot_core::tracking::TrackingNumber;
use trackbot_store::seed::{demo_shipment, DEMO_TRACKING_NUMBER};
use trackbot_store::{SessionStore, ShipmentRepo};

use super::analytics::*;
use super::formatter::*;
use super::intent::Intent;
use super::route_map::*;
use super::timeline::*;
use super::{Assistant, QuickAction};

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 28).unwrap()
}

fn repo_with(record: ShipmentRecord) -> ShipmentRepo {
    let mut repo = ShipmentRepo::new();
    repo.insert(record).unwrap();
    repo
}

fn seeded_assistant() -> Assistant {
    Assistant::new(Box::new(PlaceholderAnalytics::seeded(7)))
}

fn update(timestamp: &str, location: &str, status: &str, temperature: f64) -> StatusUpdate {
    StatusUpdate {
        timestamp: timestamp.into(),
        location: location.into(),
        status: status.into(),
        temperature,
        weather: "Clear".into(),
    }
}

#[test]
fn test_track_known_shipment() {
    let store = SessionStore::with_demo_data().unwrap();
    let tn = TrackingNumber::parse(DEMO_TRACKING_NUMBER).unwrap();
    let eta = store
        .shipments()
        .get(&tn)
        .unwrap()
        .estimated_delivery
        .format("%Y-%m-%d")
        .to_string();

    let mut assistant = seeded_assistant();
    let reply = assistant.classify_and_respond(store.shipments(), "Track TRK123456 please");

    assert_eq!(reply.intent, Intent::Track);
    assert!(reply.text.contains("Tracking Number: TRK123456"));
    assert!(reply.text.contains("In Transit"));
    assert!(reply.text.contains("New York"));
    assert!(reply.text.contains("Los Angeles"));
    assert!(reply.text.contains(&eta));
    assert!(reply.text.contains("Carbon Footprint: 245.5 kg CO2"));
    assert!(reply.text.contains("Signature Required: Yes"));
    assert!(reply.text.contains("Safe Place: Front Porch"));
    assert!(reply.map.is_some());
    assert!(reply.timeline.is_some());
    assert!(reply.analytics.is_some());
    // Chicago is 68°F
    assert!(reply.alerts.is_empty());
}

#[test]
fn test_track_is_case_insensitive() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    let reply = assistant.classify_and_respond(&repo, "what's the STATUS of trk123456?");
    assert!(reply.text.contains("Tracking Number: TRK123456"));
}

#[test]
fn test_unknown_tracking_number() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    for _ in 0..3 {
        let reply = assistant.classify_and_respond(&repo, "track TRK999999");
        assert_eq!(reply.intent, Intent::Track);
        assert_eq!(reply.text, NOT_FOUND);
        assert!(!reply.has_payloads());
        assert!(reply.alerts.is_empty());
    }
}

#[test]
fn test_first_tracking_number_wins() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    let reply = assistant.classify_and_respond(&repo, "track TRK999999 or maybe TRK123456");
    assert_eq!(reply.text, NOT_FOUND);

    let reply = assistant.classify_and_respond(&repo, "status: TRK123456, TRK999999");
    assert!(reply.text.contains("TRK123456"));
}

#[test]
fn test_track_without_number_prompts_for_format() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    for input in ["track my package", "status?", "track TRK12345", "track TRK 123456"] {
        let reply = assistant.classify_and_respond(&repo, input);
        assert_eq!(reply.intent, Intent::Track, "input {input:?}");
        assert_eq!(reply.text, FORMAT_PROMPT, "input {input:?}");
    }
}

#[test]
fn test_track_finds_number_touching_other_text() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    for input in [
        "status_TRK123456",
        "track order#1TRK123456",
        "track TRK1234567",
        "追踪TRK123456 status",
        "status TRK123456x",
    ] {
        let reply = assistant.classify_and_respond(&repo, input);
        assert_eq!(reply.intent, Intent::Track, "input {input:?}");
        assert!(
            reply.text.contains("Tracking Number: TRK123456"),
            "input {input:?}: {}",
            reply.text
        );
        assert!(reply.map.is_some(), "input {input:?}");
    }
}

#[test]
fn test_whole_carbon_figure_keeps_decimal() {
    let mut record = demo_shipment(fixed_date());
    record.carbon_footprint = 245.0;

    let text = format_shipment(&record);
    assert!(text.contains("Carbon Footprint: 245.0 kg CO2"), "{text}");
}

#[test]
fn test_bare_tracking_number_is_not_a_track_request() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    let reply = assistant.classify_and_respond(&repo, "TRK123456");
    assert_eq!(reply.intent, Intent::Unknown);
    assert_eq!(reply.text, FALLBACK_REPLY);
}

#[test]
fn test_greetings() {
    let repo = ShipmentRepo::new();
    let mut assistant = seeded_assistant();

    for input in ["hello", "hi", "hey", "HELLO", "Hi there", "Hey!"] {
        let reply = assistant.classify_and_respond(&repo, input);
        assert_eq!(reply.text, GREETING_REPLY, "input {input:?}");
    }
}

#[test]
fn test_canned_intents() {
    let repo = ShipmentRepo::new();
    let mut assistant = seeded_assistant();

    let cases = [
        ("what's my carbon impact", CARBON_REPLY),
        ("Environmental stuff?", CARBON_REPLY),
        ("how is the weather", WEATHER_REPLY),
        ("show me analytics", ANALYTICS_REPLY),
        ("what is the usual delivery time", DELIVERY_TIME_REPLY),
        ("I need help", HELP_REPLY),
        ("asdf", FALLBACK_REPLY),
        ("", FALLBACK_REPLY),
    ];
    for (input, expected) in cases {
        let reply = assistant.classify_and_respond(&repo, input);
        assert_eq!(reply.text, expected, "input {input:?}");
        assert!(!reply.has_payloads());
    }
}

#[test]
fn test_first_match_priority_is_preserved() {
    let repo = ShipmentRepo::new();
    let mut assistant = seeded_assistant();

    let reply = assistant.classify_and_respond(&repo, "weather and analytics");
    assert_eq!(reply.intent, Intent::Weather);

    let reply = assistant.classify_and_respond(&repo, "hello, help me with delivery time");
    assert_eq!(reply.intent, Intent::Greeting);
}

#[test]
fn test_placeholder_analytics_ranges() {
    let record = demo_shipment(fixed_date());
    let mut providers: Vec<Box<dyn AnalyticsProvider>> = vec![
        Box::new(PlaceholderAnalytics::new()),
        Box::new(PlaceholderAnalytics::seeded(42)),
    ];

    for provider in providers.iter_mut() {
        for _ in 0..200 {
            let a = provider.synthesize(&record).unwrap();
            assert_eq!(a.stops_made, 2);
            assert!(DISTANCE_RANGE_MI.contains(&a.distance_covered));
            assert!(TRANSIT_RANGE_HRS.contains(&a.time_in_transit));
            assert!(EFFICIENCY_RANGE_PCT.contains(&a.efficiency_score));
            assert!(FUEL_RANGE_GAL.contains(&a.estimated_fuel_usage));
        }
    }
}

#[test]
fn test_seeded_placeholder_is_reproducible() {
    let record = demo_shipment(fixed_date());
    let mut a = PlaceholderAnalytics::seeded(99);
    let mut b = PlaceholderAnalytics::seeded(99);
    assert_eq!(a.synthesize(&record).unwrap(), b.synthesize(&record).unwrap());
}

#[test]
fn test_route_analytics_derives_from_record() {
    let record = demo_shipment(fixed_date());
    let mut provider = RouteAnalytics::new(6.5);

    let a = provider.synthesize(&record).unwrap();
    assert_eq!(a.stops_made, 2);
    // New York -> Chicago leg
    assert!((a.distance_covered - 711.0).abs() < 2.0, "{}", a.distance_covered);
    assert_eq!(a.time_in_transit, 5.5);
    assert!(a.efficiency_score > 99.0 && a.efficiency_score <= 100.0);
    assert!((a.estimated_fuel_usage - a.distance_covered / 6.5).abs() < 1e-9);
}

#[test]
fn test_route_analytics_rejects_bad_timestamps() {
    let mut record = demo_shipment(fixed_date());
    record.updates[0].timestamp = "yesterday-ish".into();

    let err = RouteAnalytics::new(6.5).synthesize(&record).unwrap_err();
    assert!(matches!(
        err,
        trackbot_core::error::AnalyticsError::InvalidTimestamp { .. }
    ));

    // The reply still goes out, just without analytics
    let repo = repo_with(record);
    let mut assistant = Assistant::new(Box::new(RouteAnalytics::new(6.5)));
    let reply = assistant.classify_and_respond(&repo, "track TRK123456");
    assert!(reply.analytics.is_none());
    assert!(reply.map.is_some());
    assert!(reply.text.contains("TRK123456"));
}

#[test]
fn test_route_analytics_rejects_empty_route() {
    let mut record = demo_shipment(fixed_date());
    record.route.clear();

    let err = RouteAnalytics::new(6.5).synthesize(&record).unwrap_err();
    assert!(matches!(
        err,
        trackbot_core::error::AnalyticsError::EmptyRoute(_)
    ));
}

#[test]
fn test_haversine_is_symmetric() {
    let record = demo_shipment(fixed_date());
    let ab = haversine_miles(record.origin.coords, record.destination.coords);
    let ba = haversine_miles(record.destination.coords, record.origin.coords);
    assert!((ab - ba).abs() < 1e-9);
    assert!((ab - 2445.6).abs() < 2.0);
    assert_eq!(haversine_miles(record.origin.coords, record.origin.coords), 0.0);
}

#[test]
fn test_provider_from_config() {
    let config = AppConfig::default();
    assert_eq!(provider_from_config(&config).name(), "placeholder");

    let config = AppConfig {
        analytics: AnalyticsMode::Route,
        ..Default::default()
    };
    assert_eq!(Assistant::from_config(&config).analytics_provider(), "route");
}

#[test]
fn test_route_map_markers() {
    let record = demo_shipment(fixed_date());
    let map = build_route_map(&record);

    assert_eq!(map.center, record.current_location.coords);
    assert_eq!(map.zoom, 4);
    assert_eq!(map.markers.len(), 3);

    let origin = map.marker(MarkerKind::Origin).unwrap();
    assert_eq!(origin.color, MarkerColor::Green);
    assert_eq!(origin.popup, "Origin: New York");
    assert_eq!(origin.coords, record.origin.coords);

    let destination = map.marker(MarkerKind::Destination).unwrap();
    assert_eq!(destination.color, MarkerColor::Red);
    assert_eq!(destination.popup, "Destination: Los Angeles");

    let current = map.marker(MarkerKind::CurrentLocation).unwrap();
    assert_eq!(current.color, MarkerColor::Blue);
    assert_eq!(current.icon, "truck");
    assert_eq!(current.popup, "Current Location: Chicago");

    assert_eq!(map.route.points, record.route);
    assert_eq!(map.route.weight, 2);
    assert_eq!(map.route.opacity, 0.8);
}

#[test]
fn test_route_map_copies_coordinates_verbatim() {
    let mut record = demo_shipment(fixed_date());
    // Out-of-range coordinates are passed through untouched
    record.current_location.coords.lat = 123.0;

    let map = build_route_map(&record);
    assert_eq!(map.marker(MarkerKind::CurrentLocation).unwrap().coords.lat, 123.0);
    assert_eq!(map.center.lat, 123.0);
}

#[test]
fn test_timeline_preserves_order() {
    let updates = vec![
        update("2024-10-29 09:00", "Denver", "In Transit", 50.0),
        update("2024-10-28 10:00", "New York", "Package Picked Up", 72.0),
        update("2024-10-28 10:00", "New York", "Package Picked Up", 72.0),
    ];

    let timeline = build_timeline(&updates);
    assert_eq!(timeline.title, "Delivery Timeline");
    assert_eq!(timeline.segments.len(), 3);
    assert_eq!(timeline.segments[0].location, "Denver");
    assert_eq!(timeline.segments[1], timeline.segments[2]);
}

#[test]
fn test_alert_uses_latest_update() {
    let mut record = demo_shipment(fixed_date());
    record.updates.push(update("2024-10-29 12:00", "Denver", "In Transit", 20.0));

    let repo = repo_with(record);
    let mut assistant = seeded_assistant();
    let reply = assistant.classify_and_respond(&repo, "track TRK123456");

    assert_eq!(reply.alerts.len(), 1);
    assert!(reply.alerts[0].contains("Freezing conditions in Denver"));
    assert_eq!(reply.analytics.unwrap().stops_made, 3);
}

#[test]
fn test_handle_message_appends_both_turns() {
    let mut session = SessionStore::with_demo_data().unwrap();
    let mut assistant = seeded_assistant();

    let reply = assistant.handle_message(&mut session, "hello");
    assert_eq!(reply.text, GREETING_REPLY);

    let turns = session.chat().list();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, ChatRole::User);
    assert_eq!(turns[0].text, "hello");
    assert_eq!(turns[1].role, ChatRole::Bot);
    assert_eq!(turns[1].text, GREETING_REPLY);
}

#[test]
fn test_quick_actions_post_bot_turns_only() {
    let mut session = SessionStore::with_demo_data().unwrap();
    let assistant = seeded_assistant();

    for action in QuickAction::ALL {
        let text = assistant.quick_action(&mut session, action);
        assert!(text.contains("tracking number"));
    }

    let turns = session.chat().list();
    assert_eq!(turns.len(), 4);
    assert!(turns.iter().all(|t| t.role == ChatRole::Bot));
    assert_eq!(
        turns[0].text,
        "Please enter a tracking number in the format TRK######"
    );
}

#[test]
fn test_clear_after_tracking_keeps_shipments() {
    let mut session = SessionStore::with_demo_data().unwrap();
    let mut assistant = seeded_assistant();

    assistant.handle_message(&mut session, "track TRK123456");
    assert_eq!(session.chat().len(), 2);
    session.clear_chat();
    assert!(session.chat().is_empty());

    let reply = assistant.handle_message(&mut session, "track TRK123456");
    assert!(reply.text.contains("In Transit"));
}

#[test]
fn test_reply_json_shape() {
    let repo = repo_with(demo_shipment(fixed_date()));
    let mut assistant = seeded_assistant();

    let reply = assistant.classify_and_respond(&repo, "hi");
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["intent"], "greeting");
    assert!(json.get("map").is_none());
    assert_eq!(json["alerts"], serde_json::json!([]));

    let reply = assistant.classify_and_respond(&repo, "track TRK123456");
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["map"]["markers"][2]["kind"], "current_location");
    assert_eq!(json["timeline"]["segments"][0]["location"], "New York");
    assert_eq!(json["analytics"]["stops_made"], 2);
}
