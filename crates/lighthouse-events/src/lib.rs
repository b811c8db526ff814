#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Plate event message construction.
//!
//! A plate event request names an event type and carries free-form
//! parameters (`barcode`, `user_id`, `robot`). [`construct_event_message`]
//! picks the matching constructor, which validates the request, resolves the
//! robot, source plate and samples through a [`LookupGateway`] and returns a
//! [`Message`] ready for publishing.
//!
//! Every failure comes back as a single [`PlateEventError`]; use
//! [`into_parts`] where the `(errors, message)` pair is wanted.

pub mod assembler;
pub mod config;
pub mod error;
pub mod event_type;

pub use assembler::{
    construct_source_plate_all_negatives_message, construct_source_plate_completed_message,
    construct_source_plate_no_map_data_message, construct_source_plate_not_recognised_message,
    PlateEventParams,
};
pub use config::{ConfigError, EventConfig};
pub use error::{into_parts, PlateEventError, Result};
pub use event_type::PlateEventType;

use lighthouse_core::{LookupGateway, Message};

/// Constructs the message for an event type given by its wire name.
///
/// Unknown names are rejected before the gateway is touched.
pub fn construct_event_message<G: LookupGateway + ?Sized>(
    event_type: &str,
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    let event_type: PlateEventType = event_type.parse()?;
    construct_message(event_type, params, gateway, config)
}

/// Constructs the message for a known event type.
pub fn construct_message<G: LookupGateway + ?Sized>(
    event_type: PlateEventType,
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    match event_type {
        PlateEventType::SourceCompleted => {
            construct_source_plate_completed_message(params, gateway, config)
        }
        PlateEventType::SourceNotRecognised => {
            construct_source_plate_not_recognised_message(params, gateway, config)
        }
        PlateEventType::SourceNoMapData => {
            construct_source_plate_no_map_data_message(params, gateway, config)
        }
        PlateEventType::SourceAllNegatives => {
            construct_source_plate_all_negatives_message(params, gateway, config)
        }
    }
}
