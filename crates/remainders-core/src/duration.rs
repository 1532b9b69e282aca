//! Calendar-correct duration decomposition.
//!
//! [`decompose`] breaks the difference between two instants into
//! years/months/days/hours/minutes/seconds the way a person would state it
//! ("1 month 3 days", not "33 days"). Month lengths are taken from the
//! calendar, so a borrowed month contributes its actual number of days.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// A signed calendar duration, decomposed into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    /// True when the target instant is before the reference instant.
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationParts {
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }
}

/// Calendar difference between `now` and `target`.
///
/// The two instants are ordered before subtraction, so the unit fields are
/// always non-negative magnitudes; `negative` carries the sign. Borrowing
/// runs in a fixed order: minute borrows 60 seconds, hour borrows 60
/// minutes, day borrows 24 hours, and a day underflow borrows a month at
/// that month's actual length. The month borrow loops, since a short
/// borrowed month (a 28-day February against a 31st-of-month anchor) can
/// leave the day count still negative after one pass.
pub fn decompose(now: NaiveDateTime, target: NaiveDateTime) -> DurationParts {
    let negative = target < now;
    let (earlier, later) = if negative { (target, now) } else { (now, target) };

    let mut years = i64::from(later.year() - earlier.year());
    let mut months = i64::from(later.month()) - i64::from(earlier.month());
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let mut seconds = i64::from(later.second()) - i64::from(earlier.second());
    let mut minutes = i64::from(later.minute()) - i64::from(earlier.minute());
    let mut hours = i64::from(later.hour()) - i64::from(earlier.hour());
    let mut days = i64::from(later.day()) - i64::from(earlier.day());

    if seconds < 0 {
        minutes -= 1;
        seconds += 60;
    }
    if minutes < 0 {
        hours -= 1;
        minutes += 60;
    }
    if hours < 0 {
        days -= 1;
        hours += 24;
    }

    // Walk backwards from the month preceding `later`, borrowing whole
    // months into days until the day count is non-negative.
    let (mut year, mut month) = (later.year(), later.month());
    while days < 0 {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
        days += days_in_month(year, month);
        months -= 1;
        if months < 0 {
            years -= 1;
            months += 12;
        }
    }

    DurationParts {
        negative,
        years: years as u32,
        months: months as u32,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}

fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => b.signed_duration_since(a).num_days(),
        _ => 30,
    }
}

impl fmt::Display for DurationParts {
    /// Zero-valued units are omitted, except seconds, which always print.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let units = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
        ];
        for (value, unit) in units {
            if value > 0 {
                write!(f, "{value} {unit}{} ", if value == 1 { "" } else { "s" })?;
            }
        }
        write!(
            f,
            "{} second{}",
            self.seconds,
            if self.seconds == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn same_instant_is_zero_and_non_negative() {
        let t = at(2026, 3, 14, 15, 9, 26);
        let parts = decompose(t, t);
        assert!(parts.is_zero());
        assert!(!parts.negative);
    }

    #[test]
    fn simple_forward_difference() {
        let now = at(2026, 1, 1, 0, 0, 0);
        let target = at(2026, 1, 4, 2, 30, 15);
        let parts = decompose(now, target);
        assert_eq!(
            parts,
            DurationParts {
                negative: false,
                years: 0,
                months: 0,
                days: 3,
                hours: 2,
                minutes: 30,
                seconds: 15
            }
        );
    }

    #[test]
    fn past_target_flips_sign_with_same_magnitudes() {
        let a = at(2025, 6, 10, 8, 0, 0);
        let b = at(2026, 2, 1, 12, 45, 30);
        let forward = decompose(a, b);
        let backward = decompose(b, a);
        assert!(!forward.negative);
        assert!(backward.negative);
        assert_eq!(forward.years, backward.years);
        assert_eq!(forward.months, backward.months);
        assert_eq!(forward.days, backward.days);
        assert_eq!(forward.hours, backward.hours);
        assert_eq!(forward.minutes, backward.minutes);
        assert_eq!(forward.seconds, backward.seconds);
    }

    #[test]
    fn day_underflow_borrows_the_actual_month_length() {
        // Jan 30 -> Mar 1: the borrowed month is February (28 days in 2026).
        let parts = decompose(at(2026, 1, 30, 0, 0, 0), at(2026, 3, 1, 0, 0, 0));
        assert_eq!(parts.months, 0);
        assert_eq!(parts.days, 30);

        // Same span over a leap February: the 29-day borrow absorbs the
        // whole underflow in one pass.
        let leap = decompose(at(2024, 1, 30, 0, 0, 0), at(2024, 3, 1, 0, 0, 0));
        assert_eq!(leap.months, 1);
        assert_eq!(leap.days, 0);
    }

    #[test]
    fn month_difference_without_borrow() {
        let parts = decompose(at(2026, 1, 15, 0, 0, 0), at(2026, 3, 18, 0, 0, 0));
        assert_eq!(parts.months, 2);
        assert_eq!(parts.days, 3);
        assert_eq!(parts.years, 0);
    }

    #[test]
    fn time_of_day_borrow_cascades_into_days() {
        // One millisecond short of a full month, field-wise: the hour borrow
        // pushes the day count negative, which borrows January (31 days).
        let parts = decompose(at(2026, 1, 15, 23, 0, 0), at(2026, 2, 15, 22, 0, 0));
        assert_eq!(parts.months, 0);
        assert_eq!(parts.days, 30);
        assert_eq!(parts.hours, 23);
    }

    #[test]
    fn year_and_month_rollover() {
        let parts = decompose(at(2025, 11, 20, 0, 0, 0), at(2026, 2, 5, 0, 0, 0));
        assert_eq!(parts.years, 0);
        assert_eq!(parts.months, 2);
        assert_eq!(parts.days, 16);
    }

    #[test]
    fn display_omits_zero_units_but_always_prints_seconds() {
        let parts = decompose(at(2026, 1, 1, 0, 0, 0), at(2026, 2, 4, 0, 5, 0));
        assert_eq!(parts.to_string(), "1 month 3 days 5 minutes 0 seconds");

        let zero = decompose(at(2026, 1, 1, 0, 0, 0), at(2026, 1, 1, 0, 0, 0));
        assert_eq!(zero.to_string(), "0 seconds");

        let single = decompose(at(2026, 1, 1, 0, 0, 0), at(2026, 1, 1, 0, 0, 1));
        assert_eq!(single.to_string(), "1 second");
    }

    #[test]
    fn display_prefixes_negative_spans() {
        let parts = decompose(at(2026, 1, 2, 0, 0, 0), at(2026, 1, 1, 0, 0, 0));
        assert_eq!(parts.to_string(), "-1 day 0 seconds");
    }
}
