use trackbot_core::config::AppConfig;
use trackbot_core::shipment::ShipmentRecord;
use trackbot_core::tracking::TrackingNumber;
use trackbot_store::{SessionStore, ShipmentRepo};

use crate::analytics::{provider_from_config, AnalyticsProvider};
use crate::formatter::{self, format_shipment};
use crate::intent::{Intent, IntentClassifier};
use crate::quick_action::QuickAction;
use crate::reply::Reply;
use crate::route_map::build_route_map;
use crate::timeline::build_timeline;
use crate::weather::weather_alert;

pub struct Assistant {
    classifier: IntentClassifier,
    analytics: Box<dyn AnalyticsProvider>,
}

impl Assistant {
    pub fn new(analytics: Box<dyn AnalyticsProvider>) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            analytics,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(provider_from_config(config))
    }

    pub fn analytics_provider(&self) -> &str {
        self.analytics.name()
    }

    /// Answers one utterance against the given shipments. Reads only; the
    /// caller decides whether the exchange goes into a chat log.
    pub fn classify_and_respond(&mut self, shipments: &ShipmentRepo, utterance: &str) -> Reply {
        let result = self.classifier.classify(utterance);
        tracing::debug!(
            intent = %result.intent,
            keyword = ?result.matched_keyword,
            "classified utterance"
        );

        match result.intent {
            Intent::Track => match result.tracking_number {
                Some(tn) => self.track(shipments, &tn),
                None => Reply::text_only(Intent::Track, formatter::FORMAT_PROMPT),
            },
            Intent::Carbon => Reply::text_only(Intent::Carbon, formatter::CARBON_REPLY),
            Intent::Weather => Reply::text_only(Intent::Weather, formatter::WEATHER_REPLY),
            Intent::Analytics => Reply::text_only(Intent::Analytics, formatter::ANALYTICS_REPLY),
            Intent::Greeting => Reply::text_only(Intent::Greeting, formatter::GREETING_REPLY),
            Intent::DeliveryTime => {
                Reply::text_only(Intent::DeliveryTime, formatter::DELIVERY_TIME_REPLY)
            }
            Intent::Help => Reply::text_only(Intent::Help, formatter::HELP_REPLY),
            Intent::Unknown => Reply::text_only(Intent::Unknown, formatter::FALLBACK_REPLY),
        }
    }

    /// One send action: logs the user turn, answers it and logs the bot turn.
    pub fn handle_message(&mut self, session: &mut SessionStore, utterance: &str) -> Reply {
        let reply = self.classify_and_respond(session.shipments(), utterance);
        let chat = session.chat_mut();
        chat.append_user(utterance);
        chat.append_bot(reply.text.clone());
        reply
    }

    /// Posts a quick action's canned bot turn and returns its text.
    pub fn quick_action(&self, session: &mut SessionStore, action: QuickAction) -> &'static str {
        let text = action.canned_reply();
        session.chat_mut().append_bot(text);
        tracing::debug!(action = ?action, "quick action");
        text
    }

    fn track(&mut self, shipments: &ShipmentRepo, tracking_number: &TrackingNumber) -> Reply {
        match shipments.get(tracking_number) {
            Some(record) => self.shipment_reply(record),
            None => {
                tracing::warn!(%tracking_number, "tracking number not found");
                Reply::text_only(Intent::Track, formatter::NOT_FOUND)
            }
        }
    }

    fn shipment_reply(&mut self, record: &ShipmentRecord) -> Reply {
        let analytics = match self.analytics.synthesize(record) {
            Ok(analytics) => Some(analytics),
            Err(e) => {
                tracing::warn!(
                    tracking_number = %record.tracking_number,
                    provider = self.analytics.name(),
                    "analytics unavailable: {e}"
                );
                None
            }
        };

        let alerts = record
            .current_update()
            .map(|u| weather_alert(&u.location, u.temperature))
            .unwrap_or_default();

        Reply {
            intent: Intent::Track,
            text: format_shipment(record),
            map: Some(build_route_map(record)),
            timeline: Some(build_timeline(&record.updates)),
            analytics,
            alerts,
        }
    }
}
