use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::StoreError;

// Matches anywhere in free text; surrounding characters are ignored.
static TRACKING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TRK(\d{6})").expect("Invalid regex: tracking number"));

static TRACKING_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^TRK(\d{6})$").expect("Invalid regex: exact tracking number"));

/// A shipment identifier, always stored in canonical `TRK######` form.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parses a whole string as a tracking number.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        TRACKING_EXACT
            .captures(raw.trim())
            .and_then(|caps| caps.get(1))
            .map(|digits| Self::from_digits(digits.as_str()))
            .ok_or_else(|| StoreError::InvalidTrackingNumber(raw.to_string()))
    }

    /// Returns the first tracking number mentioned anywhere in `text`.
    ///
    /// Only the first six digits after the prefix are taken, so
    /// `TRK1234567` yields `TRK123456`.
    pub fn find_first(text: &str) -> Option<Self> {
        TRACKING_PATTERN
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|digits| Self::from_digits(digits.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_digits(digits: &str) -> Self {
        Self(format!("TRK{digits}"))
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TrackingNumber> for String {
    fn from(value: TrackingNumber) -> Self {
        value.0
    }
}

impl std::str::FromStr for TrackingNumber {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
