//! Subjects describe what a plate event pertains to.
//!
//! Every event carries an ordered list of subjects: the robot first, then the
//! source plate, then any samples. Consumers of the events warehouse key off
//! `role_type` and `subject_type`, so both are closed vocabularies here.

use serde::{Deserialize, Serialize};

/// Role a subject plays within an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    Robot,
    CherrypickingSourceLabware,
    Plate,
    Sample,
}

/// Kind of thing a subject refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Robot,
    Plate,
    Sample,
}

/// A typed reference to a robot, plate or sample involved in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub role_type: RoleType,
    pub subject_type: SubjectType,
    pub friendly_name: String,
    pub uuid: String,
}

/// Builds the subject for the robot an event happened on.
#[must_use]
pub fn robot_subject(serial_number: &str, uuid: &str) -> Subject {
    Subject {
        role_type: RoleType::Robot,
        subject_type: SubjectType::Robot,
        friendly_name: serial_number.to_string(),
        uuid: uuid.to_string(),
    }
}

/// Builds the subject for the source plate being cherry-picked from.
#[must_use]
pub fn source_plate_subject(barcode: &str, uuid: &str) -> Subject {
    Subject {
        role_type: RoleType::CherrypickingSourceLabware,
        subject_type: SubjectType::Plate,
        friendly_name: barcode.to_string(),
        uuid: uuid.to_string(),
    }
}

/// A sample as stored against a source plate.
///
/// Field names follow the sample store documents, which is why they carry
/// spaces on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRef {
    #[serde(rename = "Root Sample ID")]
    pub root_sample_id: String,
    #[serde(rename = "RNA ID")]
    pub rna_id: String,
    #[serde(rename = "Lab ID", default, skip_serializing_if = "Option::is_none")]
    pub lab_id: Option<String>,
    #[serde(rename = "Result")]
    pub result: String,
    /// Not every sample has been assigned a uuid yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lh_sample_uuid: Option<String>,
}

impl SampleRef {
    /// Human-readable identifier used as the subject's friendly name.
    #[must_use]
    pub fn friendly_name(&self) -> String {
        format!(
            "{}__{}__{}__{}",
            self.root_sample_id,
            self.rna_id,
            self.lab_id.as_deref().unwrap_or_default(),
            self.result
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn robot_subject_uses_serial_as_friendly_name() {
        let subject = robot_subject("BKRB0001", "uuid-123");
        assert_eq!(
            serde_json::to_value(&subject).unwrap(),
            json!({
                "role_type": "robot",
                "subject_type": "robot",
                "friendly_name": "BKRB0001",
                "uuid": "uuid-123",
            })
        );
    }

    #[test]
    fn source_plate_subject_is_cherrypicking_labware() {
        let subject = source_plate_subject("plate-barcode", "uuid-456");
        assert_eq!(
            serde_json::to_value(&subject).unwrap(),
            json!({
                "role_type": "cherrypicking_source_labware",
                "subject_type": "plate",
                "friendly_name": "plate-barcode",
                "uuid": "uuid-456",
            })
        );
    }

    #[test]
    fn sample_ref_reads_store_field_names() {
        let sample: SampleRef = serde_json::from_value(json!({
            "Root Sample ID": "MCM001",
            "RNA ID": "DS000010003_A01",
            "Lab ID": "Lab 1",
            "Result": "Positive",
            "lh_sample_uuid": "0a53e7b6-7ce8-4ebc-95c3-02dd64942531",
        }))
        .unwrap();

        assert_eq!(sample.root_sample_id, "MCM001");
        assert_eq!(
            sample.friendly_name(),
            "MCM001__DS000010003_A01__Lab 1__Positive"
        );
    }

    #[test]
    fn friendly_name_tolerates_missing_lab_id() {
        let sample = SampleRef {
            root_sample_id: "MCM002".into(),
            rna_id: "DS000010003_A02".into(),
            lab_id: None,
            result: "Negative".into(),
            lh_sample_uuid: None,
        };
        assert_eq!(sample.friendly_name(), "MCM002__DS000010003_A02____Negative");
    }
}
