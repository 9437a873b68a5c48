use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortcut triggers offered next to the chat box. Each one posts a canned
/// bot turn without a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    TrackPackage,
    WeatherAlerts,
    ViewAnalytics,
    CarbonFootprint,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        Self::TrackPackage,
        Self::WeatherAlerts,
        Self::ViewAnalytics,
        Self::CarbonFootprint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TrackPackage => "📍 Track Package",
            Self::WeatherAlerts => "🌡️ Weather Alerts",
            Self::ViewAnalytics => "📊 View Analytics",
            Self::CarbonFootprint => "🌱 Carbon Footprint",
        }
    }

    pub fn canned_reply(&self) -> &'static str {
        match self {
            Self::TrackPackage => "Please enter a tracking number in the format TRK######",
            Self::WeatherAlerts => {
                "I'll check for weather conditions along your package's route. \
                 Please provide a tracking number."
            }
            Self::ViewAnalytics => {
                "I can show you detailed delivery analytics. Please provide a tracking number."
            }
            Self::CarbonFootprint => {
                "I can show you the environmental impact of your delivery. \
                 Please provide a tracking number."
            }
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
