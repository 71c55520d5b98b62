//! Offset and transition queries the resolver needs from a time zone.

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

/// Step between samples when scanning for the next transition.
const SCAN_STEP_SECS: i64 = 6 * 60 * 60;

/// How far ahead to look before deciding a zone has no more transitions.
const SCAN_HORIZON_SECS: i64 = 2 * 366 * 24 * 60 * 60;

/// A time zone that can report its offsets and transitions.
pub trait ZoneRules {
    /// Offset from UTC ignoring daylight saving time.
    fn standard_offset(&self, at: DateTime<Utc>) -> TimeDelta;

    /// Actual offset from UTC in effect at `at`.
    fn offset(&self, at: DateTime<Utc>) -> TimeDelta;

    /// First instant strictly after `after` at which the offsets change.
    fn next_transition(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>>;

    /// True when the zone never has transitions.
    fn is_fixed(&self) -> bool {
        false
    }

    fn is_standard_offset(&self, at: DateTime<Utc>) -> bool {
        self.offset(at) == self.standard_offset(at)
    }
}

impl ZoneRules for Utc {
    fn standard_offset(&self, _at: DateTime<Utc>) -> TimeDelta {
        TimeDelta::zero()
    }

    fn offset(&self, _at: DateTime<Utc>) -> TimeDelta {
        TimeDelta::zero()
    }

    fn next_transition(&self, _after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        None
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

impl ZoneRules for FixedOffset {
    fn standard_offset(&self, _at: DateTime<Utc>) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.local_minus_utc()))
    }

    fn offset(&self, at: DateTime<Utc>) -> TimeDelta {
        self.standard_offset(at)
    }

    fn next_transition(&self, _after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        None
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

impl ZoneRules for Tz {
    fn standard_offset(&self, at: DateTime<Utc>) -> TimeDelta {
        self.offset_from_utc_datetime(&at.naive_utc())
            .base_utc_offset()
    }

    fn offset(&self, at: DateTime<Utc>) -> TimeDelta {
        let offset = self.offset_from_utc_datetime(&at.naive_utc()).fix();
        TimeDelta::seconds(i64::from(offset.local_minus_utc()))
    }

    // chrono-tz keeps its transition tables private, so scan forward and
    // narrow the first change down to the second.
    fn next_transition(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        scan_for_transition(self, after)
    }
}

/// Offsets that identify which period a zone is in at a given second.
fn period_at<Z: ZoneRules + ?Sized>(zone: &Z, secs: i64) -> Option<(TimeDelta, TimeDelta)> {
    let at = DateTime::from_timestamp(secs, 0)?;
    Some((zone.offset(at), zone.standard_offset(at)))
}

fn scan_for_transition<Z: ZoneRules + ?Sized>(
    zone: &Z,
    after: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let start = after.timestamp();
    let initial = period_at(zone, start)?;

    let mut lo = start;
    while lo - start < SCAN_HORIZON_SECS {
        let hi = lo + SCAN_STEP_SECS;
        if period_at(zone, hi)? != initial {
            return bisect(zone, initial, lo, hi);
        }
        lo = hi;
    }

    None
}

/// Narrow `(lo, hi]` down to the first second whose period differs from `initial`.
fn bisect<Z: ZoneRules + ?Sized>(
    zone: &Z,
    initial: (TimeDelta, TimeDelta),
    mut lo: i64,
    mut hi: i64,
) -> Option<DateTime<Utc>> {
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if period_at(zone, mid)? == initial {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    DateTime::from_timestamp(hi, 0)
}
