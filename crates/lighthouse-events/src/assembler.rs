//! Builds plate event messages from request parameters.
//!
//! Each constructor validates the request, resolves identifiers through the
//! [`LookupGateway`] and assembles the subjects. Checks run in a fixed order
//! and stop at the first failure: required fields, robot, source plate,
//! samples. Gateway errors never escape; they are logged and reported as
//! [`PlateEventError::Unexpected`].

use lighthouse_core::{
    robot_subject, source_plate_subject, Event, LookupError, LookupGateway, Message, Subject,
};
use std::collections::HashMap;

use crate::config::EventConfig;
use crate::error::{PlateEventError, Result};
use crate::event_type::{PlateEventType, FIELD_BARCODE, FIELD_ROBOT, FIELD_USER_ID};

/// Free-form parameters of a plate event request.
pub type PlateEventParams = HashMap<String, String>;

/// Constructs a `source_completed` message: robot, source plate and every
/// sample on the plate.
pub fn construct_source_plate_completed_message<G: LookupGateway + ?Sized>(
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    let event_type = PlateEventType::SourceCompleted;
    contain(event_type, || {
        let request = RequestFields::validated(event_type, params)?;
        let robot_uuid = resolve_robot(gateway, request.robot)?;
        let source_plate_uuid = resolve_source_plate(gateway, request.barcode)?;

        let samples = gateway
            .samples_in_source_plate(&source_plate_uuid)?
            .ok_or_else(|| PlateEventError::SamplesUnavailable(request.barcode.to_string()))?;

        let mut subjects = Vec::with_capacity(samples.len() + 2);
        subjects.push(robot_subject(request.robot, &robot_uuid));
        subjects.push(source_plate_subject(request.barcode, &source_plate_uuid));
        for sample in &samples {
            subjects.push(gateway.sample_subject(sample)?);
        }

        Ok(build_message(event_type, request.user_id, subjects, config))
    })
}

/// Constructs a `source_not_recognised` message, which only names the robot.
pub fn construct_source_plate_not_recognised_message<G: LookupGateway + ?Sized>(
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    let event_type = PlateEventType::SourceNotRecognised;
    contain(event_type, || {
        let request = RequestFields::validated(event_type, params)?;
        let robot_uuid = resolve_robot(gateway, request.robot)?;

        let subjects = vec![robot_subject(request.robot, &robot_uuid)];
        Ok(build_message(event_type, request.user_id, subjects, config))
    })
}

/// Constructs a `source_no_map_data` message.
pub fn construct_source_plate_no_map_data_message<G: LookupGateway + ?Sized>(
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    construct_source_plate_on_robot_message(PlateEventType::SourceNoMapData, params, gateway, config)
}

/// Constructs a `source_all_negatives` message.
pub fn construct_source_plate_all_negatives_message<G: LookupGateway + ?Sized>(
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    construct_source_plate_on_robot_message(
        PlateEventType::SourceAllNegatives,
        params,
        gateway,
        config,
    )
}

/// Robot and source plate, no samples.
fn construct_source_plate_on_robot_message<G: LookupGateway + ?Sized>(
    event_type: PlateEventType,
    params: &PlateEventParams,
    gateway: &G,
    config: &EventConfig,
) -> Result<Message> {
    contain(event_type, || {
        let request = RequestFields::validated(event_type, params)?;
        let robot_uuid = resolve_robot(gateway, request.robot)?;
        let source_plate_uuid = resolve_source_plate(gateway, request.barcode)?;

        let subjects = vec![
            robot_subject(request.robot, &robot_uuid),
            source_plate_subject(request.barcode, &source_plate_uuid),
        ];
        Ok(build_message(event_type, request.user_id, subjects, config))
    })
}

/// Failure inside a constructor, before it is contained.
#[derive(Debug)]
enum Failure {
    Rejected(PlateEventError),
    Lookup(LookupError),
}

impl From<PlateEventError> for Failure {
    fn from(err: PlateEventError) -> Self {
        Failure::Rejected(err)
    }
}

impl From<LookupError> for Failure {
    fn from(err: LookupError) -> Self {
        Failure::Lookup(err)
    }
}

fn contain(
    event_type: PlateEventType,
    build: impl FnOnce() -> std::result::Result<Message, Failure>,
) -> Result<Message> {
    match build() {
        Ok(message) => {
            log_constructed(event_type, &message);
            Ok(message)
        }
        Err(Failure::Rejected(err)) => {
            log_rejected(event_type, &err);
            Err(err)
        }
        Err(Failure::Lookup(err)) => {
            log_unexpected(event_type, &err);
            Err(PlateEventError::Unexpected(event_type))
        }
    }
}

/// The recognised request parameters; absent ones read as empty.
#[derive(Debug, Clone, Copy)]
struct RequestFields<'a> {
    barcode: &'a str,
    user_id: &'a str,
    robot: &'a str,
}

impl<'a> RequestFields<'a> {
    fn validated(
        event_type: PlateEventType,
        params: &'a PlateEventParams,
    ) -> std::result::Result<Self, PlateEventError> {
        let request = Self {
            barcode: param(params, FIELD_BARCODE),
            user_id: param(params, FIELD_USER_ID),
            robot: param(params, FIELD_ROBOT),
        };

        let fields = event_type.required_fields();
        if fields.iter().any(|field| request.field(field).is_empty()) {
            return Err(PlateEventError::MissingFields { event_type, fields });
        }
        Ok(request)
    }

    fn field(&self, name: &str) -> &'a str {
        match name {
            FIELD_BARCODE => self.barcode,
            FIELD_USER_ID => self.user_id,
            FIELD_ROBOT => self.robot,
            _ => "",
        }
    }
}

fn param<'a>(params: &'a PlateEventParams, key: &str) -> &'a str {
    params.get(key).map_or("", String::as_str)
}

fn resolve_robot<G: LookupGateway + ?Sized>(
    gateway: &G,
    serial_number: &str,
) -> std::result::Result<String, Failure> {
    Ok(gateway
        .robot_uuid(serial_number)?
        .ok_or_else(|| PlateEventError::UnknownRobot(serial_number.to_string()))?)
}

fn resolve_source_plate<G: LookupGateway + ?Sized>(
    gateway: &G,
    barcode: &str,
) -> std::result::Result<String, Failure> {
    Ok(gateway
        .source_plate_uuid(barcode)?
        .ok_or_else(|| PlateEventError::UnknownSourcePlate(barcode.to_string()))?)
}

fn build_message(
    event_type: PlateEventType,
    user_id: &str,
    subjects: Vec<Subject>,
    config: &EventConfig,
) -> Message {
    Message::new(
        Event::new(event_type.as_str(), user_id, subjects),
        &config.lims_id,
    )
}

#[cfg(feature = "telemetry")]
fn log_constructed(event_type: PlateEventType, message: &Message) {
    tracing::debug!(
        event_type = %event_type,
        uuid = %message.event.uuid,
        subjects = message.event.subjects.len(),
        "Constructed plate event message"
    );
}

#[cfg(not(feature = "telemetry"))]
fn log_constructed(_event_type: PlateEventType, _message: &Message) {}

#[cfg(feature = "telemetry")]
fn log_rejected(event_type: PlateEventType, err: &PlateEventError) {
    tracing::debug!(event_type = %event_type, reason = %err, "Plate event message rejected");
}

#[cfg(not(feature = "telemetry"))]
fn log_rejected(_event_type: PlateEventType, _err: &PlateEventError) {}

#[cfg(feature = "telemetry")]
fn log_unexpected(event_type: PlateEventType, err: &LookupError) {
    tracing::error!(
        event_type = %event_type,
        error = %err,
        detail = ?err,
        "Failed to construct a {event_type} message"
    );
}

#[cfg(not(feature = "telemetry"))]
fn log_unexpected(event_type: PlateEventType, err: &LookupError) {
    eprintln!("Failed to construct a {event_type} message: {err} ({err:?})");
}
