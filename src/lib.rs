//! Gregorian → Chinese lunar calendar conversion.
//!
//! The converter is driven by the canonical 1900–2100 bit-packed year table
//! ([`table::ENCODED_YEARS`]): each entry encodes the twelve month lengths,
//! the leap-month index and the leap-month length of one lunar year. The
//! table is decoded once into a [`CalendarIndex`], which is then shared
//! read-only by any number of concurrent [`convert`] calls.
//!
//! # Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunar_convert::{convert, CalendarIndex};
//!
//! let index = CalendarIndex::build();
//! // Midnight 2000-02-05 in UTC+8: lunar New Year's Day of year 2000.
//! let instant = Utc.with_ymd_and_hms(2000, 2, 4, 16, 0, 0).unwrap();
//! let date = convert(instant, &index).unwrap();
//!
//! assert_eq!((2000, 1, 1), (date.year, date.month, date.day));
//! assert_eq!("龙", date.animal_sign_alias);
//! ```
//!
//! The dictionary lookups in [`list`] (common given names, sensitive words
//! by pinyin) are independent collaborators with no algorithmic content;
//! they load flat files into in-memory maps.

pub mod alias;
pub mod convert;
pub mod decode;
pub mod error;
pub mod index;
pub mod list;
pub mod logging;
pub mod table;

pub use convert::{convert, epoch};
pub use decode::YearRecord;
pub use error::{ConvertError, ListError};
pub use index::CalendarIndex;
pub use list::{CommonNames, SensitiveWords};
pub use lunar_types::LunarDate;
