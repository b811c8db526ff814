#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Core types for lighthouse plate events.
//!
//! Holds the wire model handed to the message broker ([`Message`], [`Event`],
//! [`Subject`]), the pure subject builders, the message timestamp helper and
//! the [`LookupGateway`] contract through which robots, source plates and
//! samples are resolved.

pub mod gateway;
pub mod message;
pub mod subject;
pub mod timestamp;

pub use gateway::{InMemoryGateway, LookupError, LookupGateway};
pub use message::{Event, Message};
pub use subject::{robot_subject, source_plate_subject, RoleType, SampleRef, Subject, SubjectType};
pub use timestamp::current_timestamp;
