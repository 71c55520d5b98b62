//! The EWS `SerializableTimeZone` value and its parts.
//!
//! Field names serialize to the EWS element names (`Bias`, `Time`,
//! `DayOrder`, ...) so JSON output lines up with the wire XML.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EwsError, EwsResult};

/// Day of week in EWS order (Sunday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Convert ISO 8601 numbering (Monday = 1 .. Sunday = 7).
    ///
    /// Sunday is 7 in ISO numbering but sits first in the EWS enumeration,
    /// so it is handled separately; 1..=6 index straight into `ALL`.
    pub fn from_iso_number(day: u32) -> EwsResult<Self> {
        match day {
            7 => Ok(DayOfWeek::Sunday),
            1..=6 => Ok(Self::ALL[day as usize]),
            _ => Err(EwsError::InvalidDayOfWeek(day)),
        }
    }

    /// Position in the EWS enumeration, Sunday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which period a transition switches the clocks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    Standard,
    Daylight,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Standard => f.write_str("standard"),
            TransitionKind::Daylight => f.write_str("daylight"),
        }
    }
}

/// When a zone switches into standard or daylight time (EWS `SerializableTimeZoneTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransitionRule {
    /// Minutes added to the zone bias after the transition (-60 for a one hour DST shift)
    #[serde(rename = "Bias")]
    pub offset_delta_minutes: i32,
    /// Local wall-clock time of the transition
    #[serde(rename = "Time", with = "wall_clock")]
    pub time_of_day: NaiveTime,
    /// Day of month, 1-31
    #[serde(rename = "DayOrder")]
    pub day_of_month: u8,
    /// Month, 1-12
    pub month: u8,
    pub day_of_week: DayOfWeek,
    /// Set for one-time transitions, absent for yearly rules
    #[serde(default, skip_serializing_if = "Option::is_none", with = "year")]
    pub year: Option<i32>,
}

impl TransitionRule {
    /// Placeholder standard-time rule for zones without transitions.
    pub fn fixed_standard() -> Self {
        TransitionRule {
            offset_delta_minutes: 0,
            time_of_day: NaiveTime::default(),
            day_of_month: 1,
            month: 1,
            day_of_week: DayOfWeek::Sunday,
            year: None,
        }
    }

    /// Placeholder daylight-time rule for zones without transitions.
    pub fn fixed_daylight() -> Self {
        TransitionRule {
            month: 12,
            ..Self::fixed_standard()
        }
    }

    /// Time of day as `HH:mm:ss`.
    pub fn time_string(&self) -> String {
        self.time_of_day.format(wall_clock::FORMAT).to_string()
    }

    /// Year as a 4-digit string, if this is a one-time transition.
    pub fn year_string(&self) -> Option<String> {
        self.year.map(|y| format!("{y:04}"))
    }
}

/// EWS representation of a time zone: a standard bias plus two transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableTimeZone {
    /// Minutes to add to local standard time to get UTC
    pub bias: i32,
    pub standard_time: TransitionRule,
    pub daylight_time: TransitionRule,
}

impl SerializableTimeZone {
    /// A zone with a constant offset; both rules are the fixed placeholders.
    pub fn fixed(bias: i32) -> Self {
        SerializableTimeZone {
            bias,
            standard_time: TransitionRule::fixed_standard(),
            daylight_time: TransitionRule::fixed_daylight(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.standard_time == TransitionRule::fixed_standard()
            && self.daylight_time == TransitionRule::fixed_daylight()
    }
}

mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

mod year {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(year: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        match year {
            Some(y) => serializer.serialize_str(&format!("{y:04}")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i32>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|y| y.parse::<i32>().map_err(serde::de::Error::custom))
            .transpose()
    }
}
