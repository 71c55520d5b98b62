pub mod config;
pub mod resolve;
pub mod standard_ids;
pub mod windows_id;
pub mod zones;

use anyhow::Result;
use chrono_tz::Tz;
use ews_core::config::EwsConfig;
use ews_core::timezone;

/// Zone given on the command line, else the configured zone, else the system zone.
pub fn select_zone(zone: Option<&str>, config: &EwsConfig) -> Result<Tz> {
    let tz = match zone {
        Some(id) => timezone::parse_zone(id)?,
        None => config.zone()?,
    };
    tracing::debug!(zone = tz.name(), "Selected time zone");
    Ok(tz)
}
