// File: crates/calwall-core/src/period.rs
// Summary: Period arithmetic: which day of the month/year a shifted UTC instant falls on.
// Notes:
// - Timezones are simulated by shifting the UTC clock by a fixed offset; there is
//   no timezone database and no DST.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::params::Mode;

/// Day counts for the period that contains a given local instant.
///
/// Invariant: `units_elapsed + units_remaining == total_units` and
/// `1 <= units_elapsed <= total_units`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodState {
    pub mode: Mode,
    /// The shifted ("local") instant the counts were derived from.
    pub local: NaiveDateTime,
    pub total_units: u32,
    pub units_elapsed: u32,
    pub units_remaining: u32,
    pub percent_complete: u32,
    /// "March 2025" in month mode, "Year 2025" in year mode.
    pub title: String,
}

impl PeriodState {
    pub fn compute(now: DateTime<Utc>, timezone_offset_hours: f64, mode: Mode) -> Self {
        let local = shift_instant(now, timezone_offset_hours);
        let (total_units, units_elapsed, title) = match mode {
            Mode::Month => (days_in_month(local.date()), local.day(), local.format("%B %Y").to_string()),
            Mode::Year => {
                let total = if is_leap_year(local.year()) { 366 } else { 365 };
                (total, day_of_year(local), format!("Year {}", local.year()))
            }
        };
        let units_remaining = total_units.saturating_sub(units_elapsed);
        let percent_complete = units_elapsed * 100 / total_units.max(1);
        Self { mode, local, total_units, units_elapsed, units_remaining, percent_complete, title }
    }

    /// Time left until local midnight, i.e. until the current dot moves on.
    pub fn time_until_rollover(&self) -> Duration {
        let midnight = self
            .local
            .date()
            .succ_opt()
            .map(|d| d.and_time(NaiveTime::MIN));
        match midnight {
            Some(m) => m - self.local,
            None => Duration::zero(),
        }
    }
}

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days from the first of `date`'s month to the first of the next month.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// 1-based day of year: whole days since Jan 1 00:00, floored, plus one.
pub fn day_of_year(local: NaiveDateTime) -> u32 {
    let start = match local.date().with_ordinal(1) {
        Some(jan1) => jan1.and_time(NaiveTime::MIN),
        None => return local.ordinal(),
    };
    // `local >= start`, so truncating num_days() is a floor.
    ((local - start).num_days() + 1) as u32
}

/// Add `hours` to `now` and drop the zone.
///
/// The offset is truncated to whole milliseconds. An offset that would push the
/// instant off the representable calendar leaves it unshifted.
pub fn shift_instant(now: DateTime<Utc>, hours: f64) -> NaiveDateTime {
    let millis = (hours * 3_600_000.0).trunc();
    let delta = if millis.is_finite() && millis.abs() < i64::MAX as f64 {
        Duration::try_milliseconds(millis as i64)
    } else {
        None
    };
    delta
        .and_then(|d| now.checked_add_signed(d))
        .unwrap_or(now)
        .naive_utc()
}
