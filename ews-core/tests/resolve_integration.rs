use chrono::{DateTime, Datelike, TimeDelta, Utc};
use chrono_tz::Tz;
use ews_core::timezone::{self, WindowsZones};
use ews_core::{DayOfWeek, SerializableTimeZone, ZoneRules};
use proptest::prelude::*;

/// Zones with a one hour DST shift on a stable yearly schedule. Dublin is
/// modelled with negative DST by the tz database.
const DST_ZONES: &[Tz] = &[
    chrono_tz::America::Los_Angeles,
    chrono_tz::America::New_York,
    chrono_tz::Europe::Berlin,
    chrono_tz::Europe::London,
    chrono_tz::Europe::Dublin,
    chrono_tz::Australia::Sydney,
    chrono_tz::Pacific::Auckland,
];

const FIXED_ZONES: &[Tz] = &[
    chrono_tz::UTC,
    chrono_tz::Etc::GMTPlus12,
    chrono_tz::Etc::GMTMinus14,
    chrono_tz::Asia::Kolkata,
    chrono_tz::America::Phoenix,
];

fn instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// Lowest offset observed over the year after `at`, sampled monthly.
fn winter_offset(tz: &Tz, at: DateTime<Utc>) -> TimeDelta {
    (0..=12)
        .map(|month| tz.offset(at + TimeDelta::days(30 * month)))
        .min()
        .unwrap()
}

// 2000-01-01 .. 2030-01-01
fn reference_secs() -> impl Strategy<Value = i64> {
    946_684_800i64..1_893_456_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolve_is_deterministic(zone in 0..DST_ZONES.len(), secs in reference_secs()) {
        let tz = DST_ZONES[zone];
        let at = instant(secs);

        let first = timezone::resolve(&tz, at).unwrap();
        let second = timezone::resolve(&tz, at).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dst_zones_get_both_upcoming_rules(zone in 0..DST_ZONES.len(), secs in reference_secs()) {
        let tz = DST_ZONES[zone];
        let at = instant(secs);
        let resolved = timezone::resolve(&tz, at).unwrap();

        prop_assert_eq!(
            resolved.bias as i64,
            -winter_offset(&tz, at).num_minutes()
        );
        prop_assert_eq!(resolved.standard_time.offset_delta_minutes, 0);
        prop_assert_eq!(resolved.daylight_time.offset_delta_minutes, -60);

        // Both transitions fall within the year following the reference instant
        for rule in [&resolved.standard_time, &resolved.daylight_time] {
            let year = rule.year.expect("Derived rules carry a year");
            prop_assert!(year == at.year() || year == at.year() + 1);
            prop_assert!((1..=12).contains(&rule.month));
            prop_assert!((1..=31).contains(&rule.day_of_month));
        }
    }

    #[test]
    fn fixed_zones_get_placeholders(zone in 0..FIXED_ZONES.len(), secs in reference_secs()) {
        let tz = FIXED_ZONES[zone];
        let at = instant(secs);
        let resolved = timezone::resolve(&tz, at).unwrap();

        let expected_bias = -tz.standard_offset(at).num_minutes() as i32;
        prop_assert_eq!(resolved, SerializableTimeZone::fixed(expected_bias));
    }
}

#[test]
fn los_angeles_reference_scenario() {
    let at = DateTime::parse_from_rfc3339("2013-08-20T14:39:38Z")
        .unwrap()
        .with_timezone(&Utc);
    let resolved = timezone::resolve(&chrono_tz::America::Los_Angeles, at).unwrap();

    assert_eq!(resolved.bias, 480);
    assert_eq!(resolved.standard_time.time_string(), "01:00:00");
    assert_eq!(resolved.standard_time.day_of_month, 3);
    assert_eq!(resolved.standard_time.month, 11);
    assert_eq!(resolved.standard_time.day_of_week, DayOfWeek::Sunday);
    assert_eq!(resolved.standard_time.year_string().as_deref(), Some("2013"));

    assert_eq!(resolved.daylight_time.offset_delta_minutes, -60);
    assert_eq!(resolved.daylight_time.time_string(), "03:00:00");
    assert_eq!(resolved.daylight_time.day_of_month, 9);
    assert_eq!(resolved.daylight_time.month, 3);
    assert_eq!(resolved.daylight_time.day_of_week, DayOfWeek::Sunday);
    assert_eq!(resolved.daylight_time.year_string().as_deref(), Some("2014"));
}

#[test]
fn dublin_winter_is_standard_time() {
    let at = instant(1_705_276_800); // 2024-01-15T00:00:00Z
    let resolved = timezone::resolve(&chrono_tz::Europe::Dublin, at).unwrap();

    assert_eq!(resolved.bias, 0);

    assert_eq!(resolved.standard_time.offset_delta_minutes, 0);
    assert_eq!(resolved.standard_time.time_string(), "01:00:00");
    assert_eq!(resolved.standard_time.day_of_month, 27);
    assert_eq!(resolved.standard_time.month, 10);
    assert_eq!(resolved.standard_time.year_string().as_deref(), Some("2024"));

    assert_eq!(resolved.daylight_time.offset_delta_minutes, -60);
    assert_eq!(resolved.daylight_time.time_string(), "02:00:00");
    assert_eq!(resolved.daylight_time.day_of_month, 31);
    assert_eq!(resolved.daylight_time.month, 3);
    assert_eq!(resolved.daylight_time.day_of_week, DayOfWeek::Sunday);
    assert_eq!(resolved.daylight_time.year_string().as_deref(), Some("2024"));
}

#[test]
fn dublin_resolves_like_london() {
    // Same clocks since 1996, only the zone data disagrees on which offset is standard
    let at = instant(1_720_000_000);
    let dublin = timezone::resolve(&chrono_tz::Europe::Dublin, at).unwrap();
    let london = timezone::resolve(&chrono_tz::Europe::London, at).unwrap();

    assert_eq!(dublin, london);
}

#[test]
fn extreme_instants_resolve_without_panicking() {
    for at in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
        for tz in DST_ZONES {
            let resolved = timezone::resolve(tz, at).unwrap();
            assert!(resolved.is_fixed(), "{} at {} gave {:?}", tz, at, resolved);
        }
    }
}

#[test]
fn utc_resolves_to_placeholders_at_any_instant() {
    for secs in [0, 1_377_022_378, 4_102_444_800] {
        let resolved = timezone::resolve(&chrono_tz::UTC, instant(secs)).unwrap();
        assert_eq!(resolved, SerializableTimeZone::fixed(0));
        assert!(resolved.is_fixed());
    }
}

#[test]
fn every_mapped_id_round_trips() {
    let zones = WindowsZones::global();
    let mut checked = 0;

    for windows_id in zones.windows_ids() {
        for standard_id in zones.standard_ids(windows_id).unwrap() {
            let mapped = zones.windows_id(standard_id).unwrap();
            assert!(
                zones.standard_ids(mapped).unwrap().contains(standard_id),
                "{} -> {} does not map back",
                standard_id,
                mapped
            );
            checked += 1;
        }
    }

    assert_eq!(checked, zones.len());
}

#[test]
fn transition_lookups_follow_each_other() {
    let tz = chrono_tz::America::New_York;
    let start = instant(1_700_000_000);

    let first = tz.next_transition(start).unwrap();
    let second = tz.next_transition(first).unwrap();

    assert!(first > start);
    assert!(second > first);
    assert!(second - first < TimeDelta::days(366));
    assert_ne!(tz.is_standard_offset(first), tz.is_standard_offset(second));
}
