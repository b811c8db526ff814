//! The envelope handed to the broker publisher.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::subject::Subject;
use crate::timestamp::current_timestamp;

/// A single plate event as consumed by the events warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub uuid: String,
    pub event_type: String,
    /// Spelling matches the warehouse consumer's schema.
    pub occured_at: String,
    pub user_identifier: String,
    pub subjects: Vec<Subject>,
    /// Always empty for now.
    pub metadata: Map<String, Value>,
}

impl Event {
    /// Stamps a new event with a fresh v4 uuid and the current time.
    #[must_use]
    pub fn new(event_type: &str, user_identifier: &str, subjects: Vec<Subject>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            event_type: event_type.to_string(),
            occured_at: current_timestamp(),
            user_identifier: user_identifier.to_string(),
            subjects,
            metadata: Map::new(),
        }
    }
}

/// An event wrapped with the LIMS it originates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub event: Event,
    pub lims: String,
}

impl Message {
    #[must_use]
    pub fn new(event: Event, lims: &str) -> Self {
        Self {
            event,
            lims: lims.to_string(),
        }
    }

    /// Serialises the message into its compact wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
