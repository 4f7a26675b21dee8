//! The decoded calendar table, built once and read-only afterwards.

use tracing::debug;

use crate::decode::{decode_year, YearRecord};
use crate::table::{ENCODED_YEARS, FIRST_YEAR, LAST_YEAR};

/// Ordered, immutable sequence of decoded year records for the full
/// supported range (offset 0 = year 1900, offset 200 = year 2100).
///
/// Building is an explicit, idempotent step; the result is passed by
/// reference into conversion. After construction the index is never
/// mutated, so sharing it across threads needs no locking.
#[derive(Debug, Clone)]
pub struct CalendarIndex {
    years: Vec<YearRecord>,
    span_days: i64,
}

impl CalendarIndex {
    /// Decode the embedded table into a fresh index.
    pub fn build() -> Self {
        let years: Vec<YearRecord> = ENCODED_YEARS
            .iter()
            .enumerate()
            .map(|(i, &encoded)| decode_year(FIRST_YEAR + i as i32, encoded))
            .collect();
        let span_days = years.iter().map(|y| y.total_days).sum();

        debug!(
            years = years.len(),
            span_days, "decoded lunar calendar table"
        );
        Self { years, span_days }
    }

    /// All decoded records in year order.
    pub fn records(&self) -> &[YearRecord] {
        &self.years
    }

    /// The record for a calendar year, if covered by the table.
    pub fn get(&self, year: i32) -> Option<&YearRecord> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return None;
        }
        self.years.get((year - FIRST_YEAR) as usize)
    }

    /// First year covered by the index.
    pub fn first_year(&self) -> i32 {
        FIRST_YEAR
    }

    /// Last year covered by the index.
    pub fn last_year(&self) -> i32 {
        LAST_YEAR
    }

    /// Total day count across the whole table, i.e. the number of days from
    /// the epoch for which conversion is defined.
    pub fn span_days(&self) -> i64 {
        self.span_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_all_records_in_order() {
        let index = CalendarIndex::build();
        assert_eq!(201, index.records().len());
        assert_eq!(1900, index.records()[0].year);
        assert_eq!(2100, index.records()[200].year);
    }

    #[test]
    fn lookup_by_year() {
        let index = CalendarIndex::build();
        assert_eq!(1900, index.get(1900).unwrap().year);
        assert_eq!(2017, index.get(2017).unwrap().year);
        assert!(index.get(1899).is_none());
        assert!(index.get(2101).is_none());
    }

    #[test]
    fn span_is_the_sum_of_year_totals() {
        let index = CalendarIndex::build();
        let sum: i64 = index.records().iter().map(|y| y.total_days).sum();
        assert_eq!(sum, index.span_days());
        // 201 lunar years of 353..=385 days each.
        assert!(index.span_days() > 201 * 353);
        assert!(index.span_days() < 201 * 385);
    }

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarIndex>();
    }
}
