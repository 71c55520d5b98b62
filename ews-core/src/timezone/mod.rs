//! Time zone normalization for EWS.

mod resolver;
mod rules;
mod serializable;
mod system;
pub mod windows_zones;
mod windows_zones_data;

pub use resolver::{default_time_zone, resolve, resolve_now, windows_id_for};
pub use rules::ZoneRules;
pub use serializable::{DayOfWeek, SerializableTimeZone, TransitionKind, TransitionRule};
pub use system::{parse_zone, system_zone};
pub use windows_zones::{WindowsZoneEntry, WindowsZones, standard_ids, windows_id};
