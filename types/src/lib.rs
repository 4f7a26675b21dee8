use serde::{Deserialize, Serialize};

// ── Lunar date result ────────────────────────────────────────────────────

/// A fully resolved Chinese lunar calendar date.
///
/// Constructed once per conversion and never mutated afterwards; the JSON
/// field names follow the established wire shape of the conversion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year number (1900..=2100).
    pub year: i32,
    /// Sexagenary (干支) rendering of the year, e.g. "庚子".
    pub year_alias: String,
    /// Displayed month number, 1..=12. A leap month carries the number of
    /// the regular month it follows, with `leap_month` set.
    pub month: u32,
    /// Month display name, e.g. "正" for the first month.
    pub month_alias: String,
    /// Day of the lunar month, 1..=30.
    pub day: u32,
    /// Day display name in traditional ordinal form, e.g. "初一".
    pub day_alias: String,
    /// Zodiac animal index, 0..=11 (0 = 鼠).
    pub animal_sign: u32,
    /// Zodiac animal display name.
    pub animal_sign_alias: String,
    /// Number of months in the lunar year: 12, or 13 with a leap month.
    pub year_months: u32,
    /// Total day count of the lunar year.
    pub year_days: i64,
    /// True only when the date falls inside the intercalary month itself.
    pub leap_month: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let date = LunarDate {
            year: 1900,
            year_alias: "庚子".into(),
            month: 1,
            month_alias: "正".into(),
            day: 1,
            day_alias: "初一".into(),
            animal_sign: 0,
            animal_sign_alias: "鼠".into(),
            year_months: 13,
            year_days: 384,
            leap_month: false,
        };
        let json = serde_json::to_value(&date).unwrap();
        assert_eq!(json["year"], 1900);
        assert_eq!(json["year_alias"], "庚子");
        assert_eq!(json["month_alias"], "正");
        assert_eq!(json["animal_sign_alias"], "鼠");
        assert_eq!(json["leap_month"], false);
    }
}
