use lighthouse_core::Message;
use thiserror::Error;

use crate::event_type::PlateEventType;

/// Why a plate event message could not be constructed.
///
/// The `Display` output is the error string returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateEventError {
    #[error("Unrecognised event type '{0}'")]
    UnrecognisedEventType(String),
    #[error(
        "{} are required to construct a {} event message",
        quote_fields(.fields),
        .event_type
    )]
    MissingFields {
        event_type: PlateEventType,
        fields: &'static [&'static str],
    },
    #[error("Unable to determine a uuid for robot '{0}'")]
    UnknownRobot(String),
    #[error("Unable to determine a uuid for source plate '{0}'")]
    UnknownSourcePlate(String),
    #[error("Unable to determine samples that belong to source plate '{0}'")]
    SamplesUnavailable(String),
    /// Details are logged, not returned.
    #[error("An unexpected error occurred attempting to construct the {0} event message")]
    Unexpected(PlateEventType),
}

pub type Result<T> = std::result::Result<T, PlateEventError>;

/// Splits a construction result into its error list and optional message.
///
/// Exactly one side is populated.
#[must_use]
pub fn into_parts(result: Result<Message>) -> (Vec<String>, Option<Message>) {
    match result {
        Ok(message) => (Vec::new(), Some(message)),
        Err(err) => (vec![err.to_string()], None),
    }
}

/// `'a'`, `'a' and 'b'`, `'a', 'b' and 'c'`.
fn quote_fields(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_type::{FIELD_BARCODE, FIELD_ROBOT, FIELD_USER_ID};

    #[test]
    fn quote_fields_joins_naturally() {
        assert_eq!(quote_fields(&[]), "");
        assert_eq!(quote_fields(&["robot"]), "'robot'");
        assert_eq!(quote_fields(&["user_id", "robot"]), "'user_id' and 'robot'");
        assert_eq!(
            quote_fields(&["barcode", "user_id", "robot"]),
            "'barcode', 'user_id' and 'robot'"
        );
    }

    #[test]
    fn missing_fields_message() {
        let err = PlateEventError::MissingFields {
            event_type: PlateEventType::SourceCompleted,
            fields: &[FIELD_BARCODE, FIELD_USER_ID, FIELD_ROBOT],
        };
        assert_eq!(
            err.to_string(),
            "'barcode', 'user_id' and 'robot' are required to construct a source_completed event message"
        );
    }

    #[test]
    fn unexpected_message_hides_detail() {
        let err = PlateEventError::Unexpected(PlateEventType::SourceNoMapData);
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred attempting to construct the source_no_map_data event message"
        );
    }

    #[test]
    fn into_parts_is_mutually_exclusive() {
        let (errors, message) =
            into_parts(Err(PlateEventError::UnknownRobot("BKRB0001".into())));
        assert_eq!(errors, vec!["Unable to determine a uuid for robot 'BKRB0001'"]);
        assert!(message.is_none());
    }
}
