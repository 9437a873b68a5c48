use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackbotError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    File(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Invalid tracking number: {0} (expected TRK followed by 6 digits)")]
    InvalidTrackingNumber(String),

    #[error("Tracking number already registered: {0}")]
    DuplicateTrackingNumber(String),

    #[error("Shipment {0} has no status updates")]
    EmptyUpdates(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid status update timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Shipment {0} has no route waypoints")]
    EmptyRoute(String),
}
