use serde::{Deserialize, Serialize};

use crate::analytics::Analytics;
use crate::intent::Intent;
use crate::route_map::RouteMap;
use crate::timeline::Timeline;

/// Structured answer to one utterance. Only `text` goes into the chat log;
/// the payloads are for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RouteMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    #[serde(default)]
    pub alerts: Vec<String>,
}

impl Reply {
    pub fn text_only(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            intent,
            text: text.into(),
            map: None,
            timeline: None,
            analytics: None,
            alerts: Vec::new(),
        }
    }

    pub fn has_payloads(&self) -> bool {
        self.map.is_some() || self.timeline.is_some() || self.analytics.is_some()
    }
}
