//! Looking up IANA zones by name and detecting the host's zone.

use chrono_tz::Tz;

use crate::error::{EwsError, EwsResult};

/// Parse an IANA zone id such as "America/Los_Angeles".
pub fn parse_zone(id: &str) -> EwsResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| EwsError::UnknownTimeZone(id.to_string()))
}

/// The zone the host is configured with.
pub fn system_zone() -> EwsResult<Tz> {
    let id = iana_time_zone::get_timezone().map_err(|e| EwsError::SystemTimeZone(e.to_string()))?;
    parse_zone(&id)
}
