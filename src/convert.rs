//! Gregorian instant → lunar date conversion.

use chrono::{DateTime, TimeZone, Utc};
use lunar_types::LunarDate;

use crate::alias;
use crate::error::ConvertError;
use crate::index::CalendarIndex;

/// Start of lunar year 1900: 1900-01-30 16:00:00 UTC, i.e. midnight of
/// 1900-01-31 in UTC+8. All elapsed-day counts are measured from here.
pub fn epoch() -> DateTime<Utc> {
    // The literal components are in range, so the lookup cannot fail.
    Utc.with_ymd_and_hms(1900, 1, 30, 16, 0, 0).unwrap()
}

/// Convert an instant to its lunar calendar date.
///
/// Pure function of `(instant, index)`: no shared state, no I/O, at most
/// 201 + 13 loop iterations. Instants before the epoch or beyond the last
/// day covered by the table are rejected with
/// [`ConvertError::OutOfSupportedRange`].
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunar_convert::{convert, CalendarIndex};
///
/// let index = CalendarIndex::build();
/// let date = convert(Utc.with_ymd_and_hms(1900, 1, 30, 16, 0, 0).unwrap(), &index).unwrap();
/// assert_eq!((1900, 1, 1, false), (date.year, date.month, date.day, date.leap_month));
/// ```
pub fn convert(instant: DateTime<Utc>, index: &CalendarIndex) -> Result<LunarDate, ConvertError> {
    // Whole 24-hour periods since the epoch, truncated toward zero.
    let elapsed_days = instant.signed_duration_since(epoch()).num_hours() / 24;

    if elapsed_days < 0 || elapsed_days >= index.span_days() {
        return Err(ConvertError::OutOfSupportedRange {
            instant,
            first_year: index.first_year(),
            last_year: index.last_year(),
        });
    }

    // Year search: walk the table subtracting whole-year day counts; the
    // year containing the offset and the remainder within it fall out of
    // the same scan.
    let records = index.records();
    let (year_pos, year_offset) = locate(records.iter().map(|r| r.total_days), elapsed_days);
    let record = &records[year_pos];

    // Month search: same scan over the year's month lengths. `walk` is the
    // 0-based position in the (possibly 13-entry) sequence.
    let (walk, day_offset) = locate(record.month_days.iter().map(|&d| d as i64), year_offset);
    let walk = walk as u32;

    // Leap correction. With a leap month after month `leap`, the inserted
    // slot sits at 0-based position `leap`; positions past it are one ahead
    // of the displayed month number.
    let leap = record.leap_month;
    let (month, is_leap_month) = if leap > 0 && walk == leap {
        (leap, true)
    } else if leap > 0 && walk > leap {
        (walk, false)
    } else {
        (walk + 1, false)
    };

    // The scan's termination condition can push the offset past 29 on a
    // malformed query; clamp rather than overflow the day-name table.
    let day = day_offset.clamp(0, 29) as u32 + 1;

    let animal_sign = (record.year - 4).rem_euclid(12) as u32;

    Ok(LunarDate {
        year: record.year,
        year_alias: alias::sexagenary_alias(record.year),
        month,
        month_alias: alias::month_alias(month).to_string(),
        day,
        day_alias: alias::day_alias(day).to_string(),
        animal_sign,
        animal_sign_alias: alias::animal_sign_alias(animal_sign).to_string(),
        year_months: record.months(),
        year_days: record.total_days,
        leap_month: is_leap_month,
    })
}

/// Cumulative-sum search: find the position whose day span contains
/// `offset`, returning it with the remainder within that span.
///
/// Falls back to the last position if `offset` reaches past the sequence
/// total; callers rule that out by validating against the covered span.
fn locate(day_counts: impl Iterator<Item = i64>, offset: i64) -> (usize, i64) {
    let mut remaining = offset;
    let mut pos = 0;
    for (i, days) in day_counts.enumerate() {
        pos = i;
        if remaining < days {
            return (i, remaining);
        }
        remaining -= days;
    }
    (pos, remaining)
}
