use crate::{
    datetime::{DateTime, EPOCH},
    error::ParseError,
    part::{calendar_date, century, parse_part},
};
use chrono::{NaiveDate, TimeDelta};
use core::fmt::{self, Display};
use tracing::{debug, trace};

const SECONDS_PER_DAY: f64 = 86400.0;

const MIN_FULL_YEAR: u32 = 1899;
const MAX_FULL_YEAR: u32 = 9999;

/// A textual date convention found in spreadsheet exports.
///
/// Each variant parses independently with [Format::parse]. [crate::parse] tries them in the order
/// of [Format::ALL] and takes the first success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// A floating-point count of days since [EPOCH], e.g. `44015.933692129598`. The fraction is
    /// the time of day, truncated toward zero to whole seconds.
    ///
    /// Any finite number is accepted, including negative ones (before the epoch).
    Serial,

    /// `MM-DD-YY`, e.g. `01-22-20`. The year goes through [century], so `69` is 2069 and `70`
    /// is 2060.
    ShortYearDash,

    /// `MM/DD/YYYY`, e.g. `01/22/2020`, with a year in `1899..=9999`.
    ///
    /// The parsed year also goes through [century]. Since it's always at least 1899, 1990 is
    /// always added: `01/22/2020` is in the year 4010.
    SlashFullYear,

    /// `YYYY-MM-DD HH:MM:SS`, e.g. `2017-02-13 14:05:22`, with a year in `1899..=9999`.
    ///
    /// Only the hour fragment is read. It is checked against the hour range and then reused for
    /// the minute and second, so `14:05:22` is 14:14:14. The minute and second fragments may
    /// contain anything.
    DashedDateTime,
}

impl Format {
    /// All formats, in the order [crate::parse] tries them.
    pub const ALL: [Format; 4] = [
        Format::Serial,
        Format::ShortYearDash,
        Format::SlashFullYear,
        Format::DashedDateTime,
    ];

    /// Returns a short name for this format, used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Serial => "serial",
            Format::ShortYearDash => "mm-dd-yy",
            Format::SlashFullYear => "mm/dd/yyyy",
            Format::DashedDateTime => "yyyy-mm-dd hh:mm:ss",
        }
    }

    /// Parses `input` with only this format.
    ///
    /// Day fragments are checked against `1..=31` but not against the month. A day that doesn't
    /// exist rolls into the next month, so `02-31-20` is 2020-03-02.
    ///
    /// # Errors
    ///
    /// - [ParseError::InvalidNumericLiteral] if a [Format::Serial] input is not a finite number.
    /// - [ParseError::WrongFragmentCount] if splitting on a delimiter gives the wrong number of
    ///   fragments.
    /// - [ParseError::InvalidDatePart] if a fragment has the wrong width, is not all digits, or is
    ///   out of range.
    /// - [ParseError::OutOfRange] if the result can't be represented.
    pub fn parse(&self, input: &str) -> Result<DateTime, ParseError> {
        match self {
            Format::Serial => parse_serial(input),
            Format::ShortYearDash => parse_short_year_dash(input),
            Format::SlashFullYear => parse_slash_full_year(input),
            Format::DashedDateTime => parse_dashed_date_time(input),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits `input` on `delimiter` into exactly `N` fragments.
fn split_exact<const N: usize>(input: &str, delimiter: char) -> Result<[&str; N], ParseError> {
    let fragments: Vec<&str> = input.split(delimiter).collect();
    let found = fragments.len();
    fragments
        .try_into()
        .map_err(|_| ParseError::WrongFragmentCount {
            input: input.to_owned(),
            delimiter,
            expected: N,
            found,
        })
}

fn out_of_range(input: &str) -> ParseError {
    ParseError::OutOfRange {
        input: input.to_owned(),
    }
}

fn at_midnight(input: &str, date: Option<NaiveDate>) -> Result<DateTime, ParseError> {
    date.and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(DateTime::new)
        .ok_or_else(|| out_of_range(input))
}

fn parse_serial(input: &str) -> Result<DateTime, ParseError> {
    let days = input
        .parse::<f64>()
        .ok()
        .filter(|days| days.is_finite())
        .ok_or_else(|| ParseError::InvalidNumericLiteral {
            input: input.to_owned(),
        })?;

    // `as` saturates, and anything near i64's bounds is rejected by try_seconds anyway
    let seconds = (days * SECONDS_PER_DAY).trunc() as i64;

    TimeDelta::try_seconds(seconds)
        .and_then(|delta| EPOCH.checked_add_signed(delta))
        .map(DateTime::new)
        .ok_or_else(|| out_of_range(input))
}

fn parse_short_year_dash(input: &str) -> Result<DateTime, ParseError> {
    let [month, day, year] = split_exact(input, '-')?;
    let month = parse_part(month, 2, 1..=12)?;
    let day = parse_part(day, 2, 1..=31)?;
    let year = parse_part(year, 2, 0..=99)?;

    at_midnight(input, calendar_date(century(year), month, day))
}

fn parse_slash_full_year(input: &str) -> Result<DateTime, ParseError> {
    let [month, day, year] = split_exact(input, '/')?;
    let month = parse_part(month, 2, 1..=12)?;
    let day = parse_part(day, 2, 1..=31)?;
    let year = parse_part(year, 4, MIN_FULL_YEAR..=MAX_FULL_YEAR)?;

    at_midnight(input, calendar_date(century(year), month, day))
}

fn parse_dashed_date_time(input: &str) -> Result<DateTime, ParseError> {
    let [date, time] = split_exact(input, ' ')?;

    let [year, month, day] = split_exact(date, '-')?;
    let year = parse_part(year, 4, MIN_FULL_YEAR..=MAX_FULL_YEAR)?;
    let month = parse_part(month, 2, 1..=12)?;
    let day = parse_part(day, 2, 1..=31)?;

    let [hour_part, _, _] = split_exact(time, ':')?;
    let hour = parse_part(hour_part, 2, 0..=23)?;
    let minute = parse_part(hour_part, 2, 0..=59)?;
    let second = parse_part(hour_part, 2, 0..=59)?;

    let offset = i64::from(hour * 3600 + minute * 60 + second);

    calendar_date(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|midnight| midnight.checked_add_signed(TimeDelta::seconds(offset)))
        .map(DateTime::new)
        .ok_or_else(|| out_of_range(input))
}

/// Parses `input` with the first format in [Format::ALL] that accepts it, and returns that format
/// along with the value.
///
/// ```
/// use sheetdate::{detect, Format};
///
/// let (format, _) = detect("01-22-20").unwrap();
/// assert_eq!(format, Format::ShortYearDash);
/// ```
///
/// # Errors
///
/// Returns [ParseError::NoMatchingFormat] if no format accepts `input`. The reasons each format
/// rejected it are logged at trace level but not returned.
pub fn detect(input: &str) -> Result<(Format, DateTime), ParseError> {
    for format in Format::ALL {
        match format.parse(input) {
            Ok(datetime) => {
                debug!(%format, input, %datetime, "matched");
                return Ok((format, datetime));
            }
            Err(err) => trace!(%format, input, %err, "rejected"),
        }
    }

    Err(ParseError::NoMatchingFormat {
        input: input.to_owned(),
    })
}

/// Parses a spreadsheet date string into a [DateTime].
///
/// The input is not trimmed or otherwise normalized. Formats are tried in the order of
/// [Format::ALL]; see [detect] to also learn which one matched.
///
/// ```
/// use chrono::Datelike;
///
/// let dt = sheetdate::parse("44015.933692129598").unwrap();
/// assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 7, 3));
/// ```
///
/// # Errors
///
/// Returns [ParseError::NoMatchingFormat] if no format accepts `input`.
pub fn parse(input: &str) -> Result<DateTime, ParseError> {
    detect(input).map(|(_, datetime)| datetime)
}
