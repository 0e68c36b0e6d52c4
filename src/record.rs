//! QR Record
//!
//! Minimal record model for the surrounding CRUD layer: a type, the user's
//! field values, the static/dynamic flag and the derived destination payload.
//! The identifier is assigned once and survives every edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::payload::{format_payload, FieldValues, RecordType};
use crate::tracking::{Clock, TrackingEncoder};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub fields: FieldValues,
    pub is_static: bool,
    /// Canonical payload, recomputed whenever fields change
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QrRecord {
    pub fn new(record_type: RecordType, fields: FieldValues, is_static: bool) -> Self {
        Self::with_id(RecordId::generate(), record_type, fields, is_static)
    }

    pub fn with_id(
        id: RecordId,
        record_type: RecordType,
        fields: FieldValues,
        is_static: bool,
    ) -> Self {
        let now = Utc::now();
        let destination = format_payload(&record_type, &fields);
        Self {
            id,
            record_type,
            fields,
            is_static,
            destination,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the field values. The id never changes.
    pub fn update_fields(&mut self, fields: FieldValues) {
        self.destination = format_payload(&self.record_type, &fields);
        self.fields = fields;
        self.updated_at = Utc::now();
        log::debug!("Updated QR record {} destination", self.id);
    }

    /// What the QR renderer should encode for this record
    pub fn encoded_data<C: Clock>(&self, encoder: &TrackingEncoder<C>) -> String {
        encoder.resolve_encoding(&self.destination, self.id.as_str(), self.is_static)
    }
}
