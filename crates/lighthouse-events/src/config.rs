use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Environment variable holding the LIMS identifier.
pub const LIMS_ID_ENV: &str = "RMQ_LIMS_ID";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} env var is required")]
    MissingLimsId(&'static str),
}

/// Process-wide settings read when a message is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Identifies which LIMS instance produced an event, e.g. `LH_TEST`.
    pub lims_id: String,
}

impl EventConfig {
    #[must_use]
    pub fn new(lims_id: impl Into<String>) -> Self {
        Self {
            lims_id: lims_id.into(),
        }
    }

    /// Reads the LIMS identifier from `RMQ_LIMS_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(LIMS_ID_ENV) {
            Some(lims_id) if !lims_id.trim().is_empty() => Ok(Self::new(lims_id.trim())),
            _ => Err(ConfigError::MissingLimsId(LIMS_ID_ENV)),
        }
    }
}
