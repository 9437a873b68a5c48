//! Keyword intent classification.
//!
//! Branches are tested in a fixed priority order and the first match wins,
//! so an utterance never mixes two intents in one reply.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use trackbot_core::tracking::TrackingNumber;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Track or status request (track, status)
    Track,
    /// Environmental impact question (carbon, environmental)
    Carbon,
    /// Weather along the route
    Weather,
    /// Delivery analytics
    Analytics,
    /// Greeting (hello, hi, hey)
    ///
    /// Matched as whole words only: "this" or "shipment" contain "hi" but
    /// are not greetings.
    Greeting,
    /// Typical delivery durations
    DeliveryTime,
    /// Capability overview
    Help,
    /// Nothing matched
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Track => "track",
            Intent::Carbon => "carbon",
            Intent::Weather => "weather",
            Intent::Analytics => "analytics",
            Intent::Greeting => "greeting",
            Intent::DeliveryTime => "delivery_time",
            Intent::Help => "help",
            Intent::Unknown => "unknown",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: Intent,
    /// Keyword that selected the branch
    pub matched_keyword: Option<String>,
    /// First tracking number in the utterance, only looked for on track requests
    pub tracking_number: Option<TrackingNumber>,
}

struct IntentPattern {
    intent: Intent,
    pattern: &'static LazyLock<Regex>,
}

// Substring keywords, matched against the lowercased utterance. "tracking"
// and "statuses" count as track requests.
static TRACK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"track|status").expect("Invalid regex: track keywords"));

static CARBON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"carbon|environmental").expect("Invalid regex: carbon keywords"));

static WEATHER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"weather").expect("Invalid regex: weather keyword"));

static ANALYTICS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"analytics").expect("Invalid regex: analytics keyword"));

// Whole words only, so "this" or "shipping" are not greetings.
static GREETING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(hello|hi|hey)\b").expect("Invalid regex: greetings"));

static DELIVERY_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"delivery time").expect("Invalid regex: delivery time phrase")
});

static HELP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"help").expect("Invalid regex: help keyword"));

/// Intent classifier using ordered keyword patterns
pub struct IntentClassifier {
    patterns: Vec<IntentPattern>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        let patterns = vec![
            IntentPattern {
                intent: Intent::Track,
                pattern: &TRACK_PATTERN,
            },
            IntentPattern {
                intent: Intent::Carbon,
                pattern: &CARBON_PATTERN,
            },
            IntentPattern {
                intent: Intent::Weather,
                pattern: &WEATHER_PATTERN,
            },
            IntentPattern {
                intent: Intent::Analytics,
                pattern: &ANALYTICS_PATTERN,
            },
            IntentPattern {
                intent: Intent::Greeting,
                pattern: &GREETING_PATTERN,
            },
            IntentPattern {
                intent: Intent::DeliveryTime,
                pattern: &DELIVERY_TIME_PATTERN,
            },
            IntentPattern {
                intent: Intent::Help,
                pattern: &HELP_PATTERN,
            },
        ];

        Self { patterns }
    }

    /// Classify an utterance. Pure: no lookup happens here.
    pub fn classify(&self, text: &str) -> IntentResult {
        let normalized = text.to_lowercase();

        for group in &self.patterns {
            if let Some(m) = group.pattern.find(&normalized) {
                let tracking_number = match group.intent {
                    Intent::Track => TrackingNumber::find_first(text),
                    _ => None,
                };
                return IntentResult {
                    intent: group.intent,
                    matched_keyword: Some(m.as_str().to_string()),
                    tracking_number,
                };
            }
        }

        IntentResult {
            intent: Intent::Unknown,
            matched_keyword: None,
            tracking_number: None,
        }
    }
}
