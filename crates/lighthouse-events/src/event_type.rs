use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlateEventError;

pub const PLATE_EVENT_SOURCE_COMPLETED: &str = "source_completed";
pub const PLATE_EVENT_SOURCE_NOT_RECOGNISED: &str = "source_not_recognised";
pub const PLATE_EVENT_SOURCE_NO_MAP_DATA: &str = "source_no_map_data";
pub const PLATE_EVENT_SOURCE_ALL_NEGATIVES: &str = "source_all_negatives";

pub const FIELD_BARCODE: &str = "barcode";
pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_ROBOT: &str = "robot";

/// The plate events lighthouse knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateEventType {
    /// All wanted samples have been picked from a source plate.
    SourceCompleted,
    /// The robot could not read the source plate barcode.
    SourceNotRecognised,
    /// The source plate has no plate map data.
    SourceNoMapData,
    /// The source plate has no positive samples.
    SourceAllNegatives,
}

impl PlateEventType {
    pub const ALL: [PlateEventType; 4] = [
        PlateEventType::SourceCompleted,
        PlateEventType::SourceNotRecognised,
        PlateEventType::SourceNoMapData,
        PlateEventType::SourceAllNegatives,
    ];

    /// Wire name of the event type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlateEventType::SourceCompleted => PLATE_EVENT_SOURCE_COMPLETED,
            PlateEventType::SourceNotRecognised => PLATE_EVENT_SOURCE_NOT_RECOGNISED,
            PlateEventType::SourceNoMapData => PLATE_EVENT_SOURCE_NO_MAP_DATA,
            PlateEventType::SourceAllNegatives => PLATE_EVENT_SOURCE_ALL_NEGATIVES,
        }
    }

    /// Request parameters that must be non-empty for this event type.
    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            PlateEventType::SourceNotRecognised => &[FIELD_USER_ID, FIELD_ROBOT],
            PlateEventType::SourceCompleted
            | PlateEventType::SourceNoMapData
            | PlateEventType::SourceAllNegatives => &[FIELD_BARCODE, FIELD_USER_ID, FIELD_ROBOT],
        }
    }
}

impl fmt::Display for PlateEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlateEventType {
    type Err = PlateEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlateEventType::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| PlateEventError::UnrecognisedEventType(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip_through_from_str() {
        for event_type in PlateEventType::ALL {
            assert_eq!(event_type.as_str().parse::<PlateEventType>().unwrap(), event_type);
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&PlateEventType::SourceAllNegatives).unwrap();
        assert_eq!(json, "\"source_all_negatives\"");
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "Source_Completed".parse::<PlateEventType>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognised event type 'Source_Completed'");
    }

    #[test]
    fn only_not_recognised_skips_the_barcode() {
        for event_type in PlateEventType::ALL {
            let needs_barcode = event_type.required_fields().contains(&FIELD_BARCODE);
            assert_eq!(needs_barcode, event_type != PlateEventType::SourceNotRecognised);
            assert!(event_type.required_fields().contains(&FIELD_ROBOT));
        }
    }
}
