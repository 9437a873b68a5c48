use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use trackbot_core::error::StoreError;
use trackbot_core::shipment::{NotificationChannel, ShipmentRecord};

use crate::{ChatRepo, ShipmentRepo};

/// Everything one interactive session owns: the shipment records, the chat
/// log and the user's settings. Built once per session and handed to every
/// handler; never shared between sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    id: String,
    created_at: DateTime<Utc>,
    shipments: ShipmentRepo,
    chat: ChatRepo,
    notification_preferences: BTreeSet<NotificationChannel>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// An empty session with no registered shipments.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            shipments: ShipmentRepo::new(),
            chat: ChatRepo::new(),
            notification_preferences: BTreeSet::from([NotificationChannel::Email]),
        }
    }

    pub fn with_shipments(
        records: impl IntoIterator<Item = ShipmentRecord>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.shipments.insert(record)?;
        }
        tracing::info!(
            session_id = %store.id,
            shipments = store.shipments.len(),
            "session started"
        );
        Ok(store)
    }

    /// A session seeded with the demo shipment.
    pub fn with_demo_data() -> Result<Self, StoreError> {
        Self::with_shipments(crate::seed::demo_shipments())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn shipments(&self) -> &ShipmentRepo {
        &self.shipments
    }

    pub fn shipments_mut(&mut self) -> &mut ShipmentRepo {
        &mut self.shipments
    }

    pub fn chat(&self) -> &ChatRepo {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatRepo {
        &mut self.chat
    }

    /// Clears the conversation. Shipment records and settings are untouched.
    pub fn clear_chat(&mut self) -> usize {
        let removed = self.chat.clear();
        tracing::info!(session_id = %self.id, removed, "chat cleared");
        removed
    }

    pub fn notification_preferences(&self) -> &BTreeSet<NotificationChannel> {
        &self.notification_preferences
    }

    pub fn set_notification_preferences(
        &mut self,
        channels: impl IntoIterator<Item = NotificationChannel>,
    ) {
        self.notification_preferences = channels.into_iter().collect();
        tracing::debug!(
            session_id = %self.id,
            channels = ?self.notification_preferences,
            "notification preferences updated"
        );
    }
}
