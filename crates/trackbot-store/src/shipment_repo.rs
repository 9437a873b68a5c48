use std::collections::BTreeMap;
use trackbot_core::error::StoreError;
use trackbot_core::shipment::ShipmentRecord;
use trackbot_core::tracking::TrackingNumber;

/// Tracking number -> shipment record, ordered by tracking number.
#[derive(Debug, Clone, Default)]
pub struct ShipmentRepo {
    records: BTreeMap<TrackingNumber, ShipmentRecord>,
}

impl ShipmentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ShipmentRecord) -> Result<(), StoreError> {
        if record.updates.is_empty() {
            return Err(StoreError::EmptyUpdates(record.tracking_number.to_string()));
        }
        if self.records.contains_key(&record.tracking_number) {
            return Err(StoreError::DuplicateTrackingNumber(
                record.tracking_number.to_string(),
            ));
        }

        tracing::debug!(tracking_number = %record.tracking_number, "shipment registered");
        self.records.insert(record.tracking_number.clone(), record);
        Ok(())
    }

    pub fn get(&self, tracking_number: &TrackingNumber) -> Option<&ShipmentRecord> {
        self.records.get(tracking_number)
    }

    /// Known tracking numbers, for display as examples.
    pub fn tracking_numbers(&self) -> impl Iterator<Item = &TrackingNumber> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
