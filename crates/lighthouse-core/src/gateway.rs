//! Identifier resolution for robots, source plates and samples.
//!
//! The assembler never talks to a store directly. It goes through
//! [`LookupGateway`], whose methods distinguish three outcomes:
//!
//! - `Ok(Some(_))`: resolved.
//! - `Ok(None)`: not found (or, for samples, no data available). These turn
//!   into user-facing validation errors.
//! - `Err(_)`: the lookup itself broke. These are unexpected failures and are
//!   reported generically.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::subject::{RoleType, SampleRef, Subject, SubjectType};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup backend failed: {0}")]
    Backend(String),
    #[error("Sample '{0}' has no lh_sample_uuid")]
    MissingSampleUuid(String),
    #[error("Lookup data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Resolves the identifiers a plate event needs.
pub trait LookupGateway {
    /// Resolves a robot serial number to the robot's uuid.
    fn robot_uuid(&self, serial_number: &str) -> Result<Option<String>>;

    /// Resolves a source plate barcode to the plate's uuid.
    fn source_plate_uuid(&self, barcode: &str) -> Result<Option<String>>;

    /// Lists the samples on a source plate.
    ///
    /// `Ok(None)` means the samples could not be determined, which is not the
    /// same as a plate with no samples (`Ok(Some(vec![]))`).
    fn samples_in_source_plate(&self, source_plate_uuid: &str) -> Result<Option<Vec<SampleRef>>>;

    /// Builds the subject for a single sample.
    fn sample_subject(&self, sample: &SampleRef) -> Result<Subject> {
        let uuid = sample
            .lh_sample_uuid
            .clone()
            .ok_or_else(|| LookupError::MissingSampleUuid(sample.root_sample_id.clone()))?;

        Ok(Subject {
            role_type: RoleType::Sample,
            subject_type: SubjectType::Sample,
            friendly_name: sample.friendly_name(),
            uuid,
        })
    }
}

/// Gateway backed by maps held in memory, typically loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryGateway {
    /// Robot serial number to robot uuid.
    #[serde(default)]
    pub robots: HashMap<String, String>,
    /// Source plate barcode to plate uuid.
    #[serde(default)]
    pub source_plates: HashMap<String, String>,
    /// Source plate uuid to the samples on it. Plates without an entry have
    /// no sample data available.
    #[serde(default)]
    pub samples: HashMap<String, Vec<SampleRef>>,
}

impl InMemoryGateway {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_robot(mut self, serial_number: &str, uuid: &str) -> Self {
        self.robots.insert(serial_number.into(), uuid.into());
        self
    }

    #[must_use]
    pub fn with_source_plate(mut self, barcode: &str, uuid: &str) -> Self {
        self.source_plates.insert(barcode.into(), uuid.into());
        self
    }

    #[must_use]
    pub fn with_samples(mut self, source_plate_uuid: &str, samples: Vec<SampleRef>) -> Self {
        self.samples.insert(source_plate_uuid.into(), samples);
        self
    }
}

impl LookupGateway for InMemoryGateway {
    fn robot_uuid(&self, serial_number: &str) -> Result<Option<String>> {
        Ok(self.robots.get(serial_number).cloned())
    }

    fn source_plate_uuid(&self, barcode: &str) -> Result<Option<String>> {
        Ok(self.source_plates.get(barcode).cloned())
    }

    fn samples_in_source_plate(&self, source_plate_uuid: &str) -> Result<Option<Vec<SampleRef>>> {
        Ok(self.samples.get(source_plate_uuid).cloned())
    }
}
