//! Error types for lunar conversion and dictionary loading.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Error type for Gregorian → lunar conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    /// Returned when the instant falls before the epoch or beyond the last
    /// day covered by the year table.
    #[error("instant {instant} is outside the supported lunar years {first_year}..={last_year}")]
    OutOfSupportedRange {
        /// The rejected instant.
        instant: DateTime<Utc>,
        /// First lunar year covered by the table.
        first_year: i32,
        /// Last lunar year covered by the table.
        last_year: i32,
    },
}

/// Error type for the dictionary list loaders.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Returned when a list file cannot be opened or read.
    #[error("cannot load list file {}: {source}", path.display())]
    Load {
        /// Path of the list file.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn out_of_range_message() {
        let e = ConvertError::OutOfSupportedRange {
            instant: Utc.with_ymd_and_hms(1899, 1, 1, 0, 0, 0).unwrap(),
            first_year: 1900,
            last_year: 2100,
        };
        assert_eq!(
            "instant 1899-01-01 00:00:00 UTC is outside the supported lunar years 1900..=2100",
            e.to_string()
        );
    }

    #[test]
    fn load_message_names_the_path() {
        let e = ListError::Load {
            path: PathBuf::from("data/list/CommonChineseNames.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.to_string().contains("data/list/CommonChineseNames.txt"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ConvertError>();
        assert_impl::<ListError>();
    }
}
