use crate::error::ParseError;
use chrono::{Days, NaiveDate};
use core::ops::RangeInclusive;

/// Added to a year value below [CENTURY_SPLIT].
pub(crate) const PRE_SPLIT_YEAR_ADD: i32 = 2000;

/// Added to a year value at or above [CENTURY_SPLIT].
pub(crate) const POST_SPLIT_YEAR_ADD: i32 = 1990;

pub(crate) const CENTURY_SPLIT: u32 = 70;

/// Returns the integer value of `part` if it is exactly `width` ASCII digits and falls within
/// `range`. Otherwise, returns [ParseError::InvalidDatePart].
///
/// Signs are not digits, so `+1` and `-1` never pass, whatever the width.
pub(crate) fn parse_part(
    part: &str,
    width: usize,
    range: RangeInclusive<u32>,
) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidDatePart {
        part: part.to_owned(),
    };

    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // all parts are at most 4 digits wide, so this can't overflow
    let value = part
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);

    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Maps a year value onto a full year.
///
/// Values below 70 get 2000 added, everything else gets 1990 added. Note that this is not
/// "nearest century": `69` is 2069 but `70` is 2060, and `99` is 2089. The rule is applied to
/// whatever value it is given, so a four-digit year also gets 1990 added.
///
/// ```
/// assert_eq!(sheetdate::century(0), 2000);
/// assert_eq!(sheetdate::century(69), 2069);
/// assert_eq!(sheetdate::century(70), 2060);
/// assert_eq!(sheetdate::century(99), 2089);
/// ```
pub fn century(year: u32) -> i32 {
    let add = if year < CENTURY_SPLIT {
        PRE_SPLIT_YEAR_ADD
    } else {
        POST_SPLIT_YEAR_ADD
    };
    i32::try_from(year).map_or(i32::MAX, |year| year.saturating_add(add))
}

/// Builds a date without checking that `day` exists in `month`. Days past the end of the month
/// roll over into the next one, so `(2020, 2, 31)` is 2020-03-02.
pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(day.saturating_sub(1) as u64))
}
