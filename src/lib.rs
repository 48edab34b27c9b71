//! # sheetdate
//!
//! A library for parsing date strings exported from spreadsheets.
//!
//! Date cells often come out of a spreadsheet as raw text in one of several conventions. This
//! crate recognizes a small, fixed set of them and turns each into a single [`DateTime`] value.
//!
//! ## Examples
//!
//! Parse a string in any supported format:
//!
//! ```
//! use chrono::{Datelike, Timelike};
//! use sheetdate::prelude::*;
//!
//! let dt = parse("01-22-20").unwrap();
//! assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 1, 22));
//!
//! let dt = parse("44015.933692129598").unwrap();
//! assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 7, 3));
//! assert_eq!((dt.hour(), dt.minute(), dt.second()), (22, 24, 30));
//! ```
//!
//! Or find out which format matched:
//!
//! ```
//! use sheetdate::prelude::*;
//!
//! let (format, dt) = detect("2017-02-13 14:05:22").unwrap();
//! assert_eq!(format, Format::DashedDateTime);
//! assert_eq!(dt.to_string(), "2017-02-13 14:14:14");
//! ```
//!
//! Or use just one format:
//!
//! ```
//! use sheetdate::prelude::*;
//!
//! assert!(Format::SlashFullYear.parse("01-22-20").is_err());
//! ```
//!
//! ## Formats
//!
//! Formats are tried in this order, and the first one that accepts the input wins.
//!
//! | Format | Example | Result |
//! |---|---|---|
//! | [`Format::Serial`] | `44015.933692129598` | `2020-07-03 22:24:30` |
//! | [`Format::ShortYearDash`] | `01-22-20` | `2020-01-22 00:00:00` |
//! | [`Format::SlashFullYear`] | `01/22/2020` | `4010-01-22 00:00:00` |
//! | [`Format::DashedDateTime`] | `2017-02-13 14:05:22` | `2017-02-13 14:14:14` |
//!
//! Serial values count days (and fractions of days) since [`EPOCH`], 1899-12-30.
//!
//! Fragments are checked only for width and range. Months must be in `1..=12` and days in
//! `1..=31`, but a day that doesn't exist in its month rolls into the next month.
//!
//! ### Year values
//!
//! Year values go through [`century`]: below `70`, 2000 is added; otherwise 1990 is added. This
//! applies to four-digit `MM/DD/YYYY` years too, which is why `01/22/2020` lands in 4010.
//!
//! ### Time of day
//!
//! In `YYYY-MM-DD HH:MM:SS`, only the `HH` fragment is read, and its value is used for the
//! minute and second as well.
//!
//! ## Logging
//!
//! Each format attempt is reported through [`tracing`] (`debug` for the match, `trace` for
//! rejections). No subscriber is installed by the library.
//!
//! ## Prelude
//!
//! ```
//! use sheetdate::prelude::*;
//! ```
#![warn(missing_docs)]

mod datetime;
mod error;
mod format;
mod part;

pub use crate::datetime::{DateTime, EPOCH};
pub use crate::error::ParseError;
pub use crate::format::{detect, parse, Format};
pub use crate::part::century;

/// A convenience module appropriate for glob imports (`use sheetdate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::century;
    #[doc(no_inline)]
    pub use crate::detect;
    #[doc(no_inline)]
    pub use crate::parse;
    #[doc(no_inline)]
    pub use crate::DateTime;
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::EPOCH;
}
