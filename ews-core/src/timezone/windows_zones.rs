//! Bidirectional mapping between Windows zone names and IANA zone ids.
//!
//! EWS identifies zones by their Windows name ("Pacific Standard Time"),
//! while the rest of the world uses IANA ids ("America/Los_Angeles"). The
//! table is built once from the CLDR dataset on first access and is
//! read-only afterwards.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use super::windows_zones_data::WINDOWS_ZONES;
use crate::error::{EwsError, EwsResult};

static GLOBAL: LazyLock<WindowsZones> = LazyLock::new(|| WindowsZones::build(WINDOWS_ZONES));

/// One row of the CLDR mapping: a Windows zone, the territory it applies
/// to, and the space-separated IANA ids for that territory.
#[derive(Debug, Clone, Copy)]
pub struct WindowsZoneEntry {
    pub windows_id: &'static str,
    pub territory: &'static str,
    pub standard_ids: &'static str,
}

/// Lookup table between Windows zone names and IANA ids.
#[derive(Debug, Default)]
pub struct WindowsZones {
    standard_to_windows: HashMap<&'static str, &'static str>,
    windows_to_standard: HashMap<&'static str, BTreeSet<&'static str>>,
}

impl WindowsZones {
    /// The table built from the bundled CLDR data.
    pub fn global() -> &'static WindowsZones {
        &GLOBAL
    }

    /// Build a table from mapping rows. Territories only group the rows and
    /// are not kept.
    pub fn build(entries: &[WindowsZoneEntry]) -> Self {
        let mut zones = WindowsZones::default();
        for entry in entries {
            for standard_id in entry.standard_ids.split_whitespace() {
                zones.insert(entry.windows_id, standard_id);
            }
        }
        zones
    }

    fn insert(&mut self, windows_id: &'static str, standard_id: &'static str) {
        self.standard_to_windows.insert(standard_id, windows_id);
        self.windows_to_standard
            .entry(windows_id)
            .or_default()
            .insert(standard_id);
    }

    /// Windows zone name for an IANA id.
    pub fn windows_id(&self, standard_id: &str) -> EwsResult<&'static str> {
        self.standard_to_windows
            .get(standard_id)
            .copied()
            .ok_or_else(|| EwsError::WindowsIdNotFound(standard_id.to_string()))
    }

    /// All IANA ids that map to a Windows zone name.
    pub fn standard_ids(&self, windows_id: &str) -> EwsResult<&BTreeSet<&'static str>> {
        self.windows_to_standard
            .get(windows_id)
            .ok_or_else(|| EwsError::StandardIdsNotFound(windows_id.to_string()))
    }

    /// Every Windows zone name in the table, sorted.
    pub fn windows_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut ids: Vec<_> = self.windows_to_standard.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
    }

    /// Number of IANA ids with a mapping.
    pub fn len(&self) -> usize {
        self.standard_to_windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standard_to_windows.is_empty()
    }
}

/// Windows zone name for an IANA id, using the bundled CLDR table.
pub fn windows_id(standard_id: &str) -> EwsResult<&'static str> {
    WindowsZones::global().windows_id(standard_id)
}

/// IANA ids for a Windows zone name, using the bundled CLDR table.
pub fn standard_ids(windows_id: &str) -> EwsResult<&'static BTreeSet<&'static str>> {
    WindowsZones::global().standard_ids(windows_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacific_standard_time() {
        assert_eq!(
            windows_id("America/Los_Angeles").unwrap(),
            "Pacific Standard Time"
        );

        let ids = standard_ids("Pacific Standard Time").unwrap();
        for id in ["America/Los_Angeles", "America/Vancouver", "America/Tijuana", "PST8PDT"] {
            assert!(ids.contains(id), "Missing {} in {:?}", id, ids);
        }
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let err = windows_id("unknown/zone").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, EwsError::WindowsIdNotFound(ref id) if id == "unknown/zone"));

        let err = standard_ids("Martian Standard Time").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, EwsError::StandardIdsNotFound(_)));
    }

    #[test]
    fn test_every_forward_mapping_is_in_reverse_set() {
        let zones = WindowsZones::global();
        for entry in WINDOWS_ZONES {
            for standard_id in entry.standard_ids.split_whitespace() {
                let windows_id = zones.windows_id(standard_id).unwrap();
                let reverse = zones.standard_ids(windows_id).unwrap();
                assert!(
                    reverse.contains(standard_id),
                    "{} -> {} is missing from the reverse set",
                    standard_id,
                    windows_id
                );
            }
        }
    }

    #[test]
    fn test_territory_rows_collapse_into_one_set() {
        static ROWS: &[WindowsZoneEntry] = &[
            WindowsZoneEntry {
                windows_id: "Example Standard Time",
                territory: "001",
                standard_ids: "Example/A",
            },
            WindowsZoneEntry {
                windows_id: "Example Standard Time",
                territory: "EX",
                standard_ids: "Example/A Example/B  Example/C",
            },
        ];

        let zones = WindowsZones::build(ROWS);
        let ids: Vec<_> = zones
            .standard_ids("Example Standard Time")
            .unwrap()
            .iter()
            .copied()
            .collect();

        assert_eq!(ids, vec!["Example/A", "Example/B", "Example/C"]);
        assert_eq!(zones.len(), 3);
        assert_eq!(zones.windows_ids().collect::<Vec<_>>(), vec!["Example Standard Time"]);
    }

    #[test]
    fn test_later_rows_win_for_forward_lookup() {
        static ROWS: &[WindowsZoneEntry] = &[
            WindowsZoneEntry {
                windows_id: "First Standard Time",
                territory: "001",
                standard_ids: "Example/Shared",
            },
            WindowsZoneEntry {
                windows_id: "Second Standard Time",
                territory: "001",
                standard_ids: "Example/Shared",
            },
        ];

        let zones = WindowsZones::build(ROWS);
        assert_eq!(zones.windows_id("Example/Shared").unwrap(), "Second Standard Time");
    }

    #[test]
    fn test_bundled_table_size() {
        let zones = WindowsZones::global();
        assert!(!zones.is_empty());
        assert_eq!(zones.windows_ids().count(), 100);
        assert_eq!(zones.len(), 432);
    }
}
