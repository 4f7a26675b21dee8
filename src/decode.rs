//! Decoding of bit-packed year entries into month-length records.

/// One decoded lunar year: its month lengths in calendar order, leap-month
/// metadata, and the total day count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRecord {
    /// Calendar year number, assigned by the caller (not derivable from the
    /// encoded bits).
    pub year: i32,
    /// Month lengths in order; 12 entries, or 13 with the intercalary
    /// month's length inserted right after the month it follows.
    pub month_days: Vec<u32>,
    /// Exact sum of `month_days`.
    pub total_days: i64,
    /// Regular month the intercalary month follows, 0 if none.
    pub leap_month: u32,
    /// True if the intercalary month has 30 days (meaningless when
    /// `leap_month` is 0).
    pub leap_is_long: bool,
}

impl YearRecord {
    /// Number of months in this lunar year (12 or 13).
    pub fn months(&self) -> u32 {
        self.month_days.len() as u32
    }
}

/// Decode one packed table entry into a [`YearRecord`].
///
/// Total over its input domain: a malformed bit pattern decodes to a
/// structurally valid but semantically wrong record. Validation of the
/// embedded table happens in tests, not here.
pub fn decode_year(year: i32, encoded: u32) -> YearRecord {
    let leap_month = encoded & 0x0f;
    let leap_is_long = (encoded >> 16) != 0;

    let mut month_days = Vec::with_capacity(13);
    let mut total_days: i64 = 0;
    for m in 1..=12u32 {
        let days = if (encoded >> (16 - m)) & 1 == 1 { 30 } else { 29 };
        month_days.push(days);
        total_days += days as i64;

        if m == leap_month {
            let days = if leap_is_long { 30 } else { 29 };
            month_days.push(days);
            total_days += days as i64;
        }
    }

    YearRecord {
        year,
        month_days,
        total_days,
        leap_month,
        leap_is_long,
    }
}
