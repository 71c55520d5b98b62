//! Error types for EWS time zone handling.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::timezone::TransitionKind;

/// Errors that can occur while resolving or mapping time zones.
#[derive(Error, Debug)]
pub enum EwsError {
    #[error("No Windows time zone id found for the standard id '{0}'")]
    WindowsIdNotFound(String),

    #[error("No standard ids found for the Windows time zone id '{0}'")]
    StandardIdsNotFound(String),

    #[error(
        "Consecutive transitions at {first} and {second} both enter {kind} time; \
         cannot derive a standard/daylight rule pair"
    )]
    NonAlternatingTransitions {
        first: DateTime<Utc>,
        second: DateTime<Utc>,
        kind: TransitionKind,
    },

    #[error("Day of week number {0} is outside 1..=7")]
    InvalidDayOfWeek(u32),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Could not determine the system time zone: {0}")]
    SystemTimeZone(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Generated XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl EwsError {
    /// True when an identifier has no counterpart in the mapping table.
    ///
    /// The table is static, so retrying with the same input never helps.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EwsError::WindowsIdNotFound(_) | EwsError::StandardIdsNotFound(_)
        )
    }
}

/// Result type alias for EWS time zone operations.
pub type EwsResult<T> = Result<T, EwsError>;
