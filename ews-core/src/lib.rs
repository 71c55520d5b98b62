//! Core types for talking time zones to Exchange Web Services.
//!
//! This crate provides:
//! - `timezone` for turning IANA zones into EWS `SerializableTimeZone` values
//!   and mapping IANA ids to Windows zone names
//! - `ns` for EWS namespace URIs and qualified names
//! - `xml` for rendering time zones as EWS wire XML
//! - `config` for the user configuration file

pub mod config;
pub mod error;
pub mod ns;
pub mod timezone;
pub mod xml;

pub use error::{EwsError, EwsResult};
pub use timezone::{
    DayOfWeek, SerializableTimeZone, TransitionKind, TransitionRule, WindowsZones, ZoneRules,
};
