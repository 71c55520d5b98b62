//! Derive an EWS `SerializableTimeZone` from a zone's upcoming transitions.
//!
//! The result is a snapshot "as of" a reference instant: the next two
//! transitions after it become the standard and daylight rules. Both rules
//! carry the calendar year of the transition they came from.

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use super::rules::ZoneRules;
use super::serializable::{DayOfWeek, SerializableTimeZone, TransitionKind, TransitionRule};
use super::system::system_zone;
use super::windows_zones;
use crate::error::{EwsError, EwsResult};

/// Convert `zone` into its EWS representation as of `reference`.
pub fn resolve<Z: ZoneRules + ?Sized>(
    zone: &Z,
    reference: DateTime<Utc>,
) -> EwsResult<SerializableTimeZone> {
    let bias = to_bias(zone.standard_offset(reference));

    if zone.is_fixed() {
        return Ok(SerializableTimeZone::fixed(bias));
    }

    // at-or-after the reference instant
    let Some(first) = reference
        .checked_sub_signed(TimeDelta::nanoseconds(1))
        .and_then(|before| zone.next_transition(before))
    else {
        debug!(%reference, bias, "No upcoming transition, using fixed rules");
        return Ok(SerializableTimeZone::fixed(bias));
    };

    let Some(second) = zone.next_transition(first) else {
        warn!(%first, bias, "Zone has a final transition and no DST after it, using fixed rules");
        return Ok(SerializableTimeZone::fixed(bias));
    };

    let mut first = Transition::observe(zone, first);
    let mut second = Transition::observe(zone, second);

    // Negative DST: the zone reports its summer offset as standard, so the
    // lower offset of the pair is the one EWS calls standard.
    let bias = if first.is_negative_dst() || second.is_negative_dst() {
        let standard = first.offset.min(second.offset);
        first.standard = standard;
        second.standard = standard;
        debug!(
            first = %first.at,
            second = %second.at,
            "Zone uses negative DST, taking the lower offset as standard"
        );
        to_bias(standard)
    } else {
        bias
    };

    let (Some(first_rule), Some(second_rule)) = (first.rule()?, second.rule()?) else {
        debug!(
            first = %first.at,
            second = %second.at,
            bias,
            "Transition local time is out of range, using fixed rules"
        );
        return Ok(SerializableTimeZone::fixed(bias));
    };

    let (first_kind, second_kind) = (first.kind(), second.kind());

    if first_kind == second_kind {
        warn!(
            first = %first.at,
            second = %second.at,
            kind = %first_kind,
            "Consecutive transitions do not alternate"
        );
        return Err(EwsError::NonAlternatingTransitions {
            first: first.at,
            second: second.at,
            kind: first_kind,
        });
    }

    let (standard_time, daylight_time) = match first_kind {
        TransitionKind::Standard => (first_rule, second_rule),
        TransitionKind::Daylight => (second_rule, first_rule),
    };

    debug!(bias, first = %first.at, second = %second.at, "Resolved transition rules");

    Ok(SerializableTimeZone {
        bias,
        standard_time,
        daylight_time,
    })
}

/// Convert `zone` into its EWS representation as of now.
pub fn resolve_now<Z: ZoneRules + ?Sized>(zone: &Z) -> EwsResult<SerializableTimeZone> {
    resolve(zone, Utc::now())
}

/// EWS representation of the host's time zone.
pub fn default_time_zone() -> EwsResult<SerializableTimeZone> {
    resolve_now(&system_zone()?)
}

/// Windows zone name for `zone`, e.g. "Pacific Standard Time" for America/Los_Angeles.
pub fn windows_id_for(zone: &Tz) -> EwsResult<&'static str> {
    windows_zones::windows_id(zone.name())
}

/// A transition instant with the offsets in effect from it on.
struct Transition {
    at: DateTime<Utc>,
    offset: TimeDelta,
    standard: TimeDelta,
}

impl Transition {
    fn observe<Z: ZoneRules + ?Sized>(zone: &Z, at: DateTime<Utc>) -> Self {
        Transition {
            at,
            offset: zone.offset(at),
            standard: zone.standard_offset(at),
        }
    }

    fn is_negative_dst(&self) -> bool {
        self.offset < self.standard
    }

    fn kind(&self) -> TransitionKind {
        if self.offset == self.standard {
            TransitionKind::Standard
        } else {
            TransitionKind::Daylight
        }
    }

    /// The rule for this transition in local wall-clock terms, or `None` when
    /// the local time falls outside chrono's range.
    fn rule(&self) -> EwsResult<Option<TransitionRule>> {
        let Some(local) = self.at.naive_utc().checked_add_signed(self.offset) else {
            return Ok(None);
        };

        Ok(Some(TransitionRule {
            offset_delta_minutes: to_bias(self.offset - self.standard),
            time_of_day: local.time(),
            day_of_month: local.day() as u8,
            month: local.month() as u8,
            day_of_week: DayOfWeek::from_iso_number(local.weekday().number_from_monday())?,
            year: Some(local.year()),
        }))
    }
}

/// EWS bias is the negated offset from UTC, in minutes.
fn to_bias(offset: TimeDelta) -> i32 {
    -(offset.num_minutes() as i32)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveTime};

    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    /// Zone with a hand-written list of transitions, all with the same standard offset.
    struct ScriptedZone {
        standard: TimeDelta,
        /// (instant, offset in effect from that instant on)
        transitions: Vec<(DateTime<Utc>, TimeDelta)>,
        initial: TimeDelta,
    }

    impl ZoneRules for ScriptedZone {
        fn standard_offset(&self, _at: DateTime<Utc>) -> TimeDelta {
            self.standard
        }

        fn offset(&self, at: DateTime<Utc>) -> TimeDelta {
            self.transitions
                .iter()
                .take_while(|(t, _)| *t <= at)
                .last()
                .map(|(_, o)| *o)
                .unwrap_or(self.initial)
        }

        fn next_transition(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
            self.transitions
                .iter()
                .map(|(t, _)| *t)
                .find(|t| *t > after)
        }
    }

    #[test]
    fn test_resolve_los_angeles() {
        let tz = chrono_tz::America::Los_Angeles;
        let actual = resolve(&tz, utc("2013-08-20T14:39:38Z")).expect("Should resolve");

        let expected = SerializableTimeZone {
            bias: 480,
            standard_time: TransitionRule {
                offset_delta_minutes: 0,
                time_of_day: time(1, 0, 0),
                day_of_month: 3,
                month: 11,
                day_of_week: DayOfWeek::Sunday,
                year: Some(2013),
            },
            daylight_time: TransitionRule {
                offset_delta_minutes: -60,
                time_of_day: time(3, 0, 0),
                day_of_month: 9,
                month: 3,
                day_of_week: DayOfWeek::Sunday,
                year: Some(2014),
            },
        };

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_resolve_southern_hemisphere_assigns_slots_by_kind() {
        // Sydney enters standard time in April and daylight time in October
        let tz = chrono_tz::Australia::Sydney;
        let actual = resolve(&tz, utc("2024-01-15T00:00:00Z")).expect("Should resolve");

        assert_eq!(actual.bias, -600);
        assert_eq!(actual.standard_time.month, 4);
        assert_eq!(actual.standard_time.day_of_month, 7);
        assert_eq!(actual.standard_time.time_of_day, time(2, 0, 0));
        assert_eq!(actual.standard_time.offset_delta_minutes, 0);
        assert_eq!(actual.standard_time.year, Some(2024));

        assert_eq!(actual.daylight_time.month, 10);
        assert_eq!(actual.daylight_time.day_of_month, 6);
        assert_eq!(actual.daylight_time.time_of_day, time(3, 0, 0));
        assert_eq!(actual.daylight_time.offset_delta_minutes, -60);
        assert_eq!(actual.daylight_time.day_of_week, DayOfWeek::Sunday);
    }

    #[test]
    fn test_resolve_utc_is_fixed() {
        let actual = resolve(&chrono_tz::UTC, utc("2013-08-20T14:39:38Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(0));

        let actual = resolve(&Utc, utc("1999-12-31T23:59:59Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(0));
    }

    #[test]
    fn test_resolve_fixed_offset_keeps_bias() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let actual = resolve(&ist, utc("2024-06-01T00:00:00Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(-330));

        let etc = chrono_tz::Etc::GMTPlus5;
        let actual = resolve(&etc, utc("2024-06-01T00:00:00Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(300));
    }

    #[test]
    fn test_resolve_zone_that_dropped_dst_is_fixed() {
        let tz = chrono_tz::Asia::Tokyo;
        let actual = resolve(&tz, utc("2024-06-01T00:00:00Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(-540));
    }

    #[test]
    fn test_resolve_single_final_transition_is_fixed() {
        let zone = ScriptedZone {
            standard: TimeDelta::hours(-3),
            initial: TimeDelta::hours(-2),
            transitions: vec![(utc("2024-04-01T02:00:00Z"), TimeDelta::hours(-3))],
        };

        let actual = resolve(&zone, utc("2024-01-01T00:00:00Z")).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(180));
    }

    #[test]
    fn test_resolve_rejects_non_alternating_transitions() {
        let zone = ScriptedZone {
            standard: TimeDelta::hours(1),
            initial: TimeDelta::hours(2),
            transitions: vec![
                (utc("2024-03-01T00:00:00Z"), TimeDelta::hours(3)),
                (utc("2024-06-01T00:00:00Z"), TimeDelta::hours(2)),
            ],
        };

        match resolve(&zone, utc("2024-01-01T00:00:00Z")) {
            Err(EwsError::NonAlternatingTransitions {
                first,
                second,
                kind,
            }) => {
                assert_eq!(first, utc("2024-03-01T00:00:00Z"));
                assert_eq!(second, utc("2024-06-01T00:00:00Z"));
                assert_eq!(kind, TransitionKind::Daylight);
            }
            other => panic!("Expected NonAlternatingTransitions, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_includes_transition_at_reference_instant() {
        let zone = ScriptedZone {
            standard: TimeDelta::zero(),
            initial: TimeDelta::zero(),
            transitions: vec![
                (utc("2024-03-31T01:00:00Z"), TimeDelta::hours(1)),
                (utc("2024-10-27T01:00:00Z"), TimeDelta::zero()),
            ],
        };

        let actual = resolve(&zone, utc("2024-03-31T01:00:00Z")).expect("Should resolve");
        assert_eq!(actual.bias, 0);
        assert_eq!(actual.daylight_time.month, 3);
        assert_eq!(actual.daylight_time.day_of_month, 31);
        assert_eq!(actual.daylight_time.time_of_day, time(2, 0, 0));
        assert_eq!(actual.standard_time.month, 10);
        assert_eq!(actual.standard_time.time_of_day, time(1, 0, 0));
    }

    #[test]
    fn test_resolve_dublin_takes_lower_offset_as_standard() {
        // chrono-tz models Irish Standard Time (+01:00) as standard and winter GMT
        // as a negative DST offset.
        let tz = chrono_tz::Europe::Dublin;
        let actual = resolve(&tz, utc("2024-01-15T00:00:00Z")).expect("Should resolve");

        let expected = SerializableTimeZone {
            bias: 0,
            standard_time: TransitionRule {
                offset_delta_minutes: 0,
                time_of_day: time(1, 0, 0),
                day_of_month: 27,
                month: 10,
                day_of_week: DayOfWeek::Sunday,
                year: Some(2024),
            },
            daylight_time: TransitionRule {
                offset_delta_minutes: -60,
                time_of_day: time(2, 0, 0),
                day_of_month: 31,
                month: 3,
                day_of_week: DayOfWeek::Sunday,
                year: Some(2024),
            },
        };

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_resolve_negative_dst_from_summer_reference() {
        let zone = ScriptedZone {
            standard: TimeDelta::hours(1),
            initial: TimeDelta::hours(1),
            transitions: vec![
                (utc("2024-10-27T01:00:00Z"), TimeDelta::zero()),
                (utc("2025-03-30T01:00:00Z"), TimeDelta::hours(1)),
            ],
        };

        let actual = resolve(&zone, utc("2024-07-01T00:00:00Z")).expect("Should resolve");

        assert_eq!(actual.bias, 0);
        assert_eq!(actual.standard_time.offset_delta_minutes, 0);
        assert_eq!(actual.standard_time.month, 10);
        assert_eq!(actual.standard_time.year, Some(2024));
        assert_eq!(actual.daylight_time.offset_delta_minutes, -60);
        assert_eq!(actual.daylight_time.month, 3);
        assert_eq!(actual.daylight_time.time_of_day, time(2, 0, 0));
        assert_eq!(actual.daylight_time.year, Some(2025));
    }

    #[test]
    fn test_resolve_at_earliest_instant_is_fixed() {
        let tz = chrono_tz::America::Los_Angeles;
        let at = DateTime::<Utc>::MIN_UTC;

        let actual = resolve(&tz, at).expect("Should resolve");
        assert!(actual.is_fixed(), "Expected placeholders, got {:?}", actual);
        assert_eq!(actual.bias, to_bias(tz.standard_offset(at)));
    }

    #[test]
    fn test_resolve_at_latest_instant_is_fixed() {
        let tz = chrono_tz::Europe::Berlin;
        let at = DateTime::<Utc>::MAX_UTC;

        let actual = resolve(&tz, at).expect("Should resolve");
        assert!(actual.is_fixed(), "Expected placeholders, got {:?}", actual);
        assert_eq!(actual.bias, to_bias(tz.standard_offset(at)));
    }

    #[test]
    fn test_resolve_transition_past_local_range_is_fixed() {
        let max = DateTime::<Utc>::MAX_UTC;
        let zone = ScriptedZone {
            standard: TimeDelta::hours(1),
            initial: TimeDelta::hours(1),
            transitions: vec![
                (max - TimeDelta::seconds(2), TimeDelta::hours(2)),
                (max - TimeDelta::seconds(1), TimeDelta::hours(1)),
            ],
        };

        let actual = resolve(&zone, max - TimeDelta::days(1)).expect("Should resolve");
        assert_eq!(actual, SerializableTimeZone::fixed(-60));
    }

    #[test]
    fn test_windows_id_for_los_angeles() {
        let windows_id = windows_id_for(&chrono_tz::America::Los_Angeles).expect("Should map");
        assert_eq!(windows_id, "Pacific Standard Time");
    }
}
