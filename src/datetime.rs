use crate::error::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// The reference point of serial day counts: 1899-12-30 at midnight.
pub const EPOCH: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(1899, 12, 30),
    NaiveTime::from_hms_opt(0, 0, 0),
) {
    (Some(date), Some(time)) => date.and_time(time),
    _ => panic!("epoch should be a valid date-time"),
};

/// A date and time of day parsed from a spreadsheet string. It has no offset and should be read as
/// UTC.
///
/// Dereferences to [NaiveDateTime], so the usual [chrono::Datelike] and [chrono::Timelike]
/// accessors are available.
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use sheetdate::DateTime;
///
/// let dt: DateTime = "2017-02-13 14:05:22".parse().unwrap();
/// assert_eq!(dt.year(), 2017);
/// assert_eq!(dt.hour(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    pub(crate) fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Returns this value as a UTC [chrono::DateTime].
    pub fn to_utc(&self) -> chrono::DateTime<Utc> {
        self.0.and_utc()
    }

    /// Returns the inner [NaiveDateTime].
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    /// Parses with [crate::parse].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl Deref for DateTime {
    type Target = NaiveDateTime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime> for chrono::DateTime<Utc> {
    fn from(value: DateTime) -> Self {
        value.to_utc()
    }
}

impl From<DateTime> for NaiveDateTime {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_epoch() {
        assert_eq!(
            (1899, 12, 30, 0, 0, 0),
            (
                EPOCH.year(),
                EPOCH.month(),
                EPOCH.day(),
                EPOCH.hour(),
                EPOCH.minute(),
                EPOCH.second()
            )
        );
    }

    #[test]
    fn test_display() {
        let dt = DateTime::new(EPOCH);
        assert_eq!("1899-12-30 00:00:00", dt.to_string());
    }

    #[test]
    fn test_to_utc() {
        let dt = DateTime::new(EPOCH);
        assert_eq!("1899-12-30T00:00:00+00:00", dt.to_utc().to_rfc3339());
        assert_eq!(dt.to_utc(), chrono::DateTime::<Utc>::from(dt));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Ok(DateTime::new(EPOCH)), "0".parse::<DateTime>());
        assert!(matches!(
            "nope".parse::<DateTime>(),
            Err(ParseError::NoMatchingFormat { .. })
        ));
    }
}
