/// Errors that can occur when parsing a date string.
///
/// Only [ParseError::NoMatchingFormat] is returned by [crate::parse] and [crate::detect]. The other
/// variants come from running a single [crate::Format] with [crate::Format::parse].
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The input is not a finite floating-point number.
    #[error("`{input}` is not a finite numeric literal")]
    InvalidNumericLiteral {
        /// The input string
        input: String,
    },

    /// Splitting the input on a delimiter did not produce the expected number of fragments.
    #[error("Splitting `{input}` on `{delimiter}` should give {expected} fragments, got {found}")]
    WrongFragmentCount {
        /// The string that was split
        input: String,
        /// The delimiter it was split on
        delimiter: char,
        /// Number of fragments the format requires
        expected: usize,
        /// Number of fragments actually found
        found: usize,
    },

    /// A fragment has the wrong width, contains a non-digit, or is out of range.
    #[error("Invalid date part `{part}`")]
    InvalidDatePart {
        /// The offending fragment
        part: String,
    },

    /// The fragments were valid, but the resulting value can't be represented.
    #[error("`{input}` is outside the representable date-time range")]
    OutOfRange {
        /// The input string
        input: String,
    },

    /// No format was able to parse the input.
    #[error("No suitable parsing method for `{input}`")]
    NoMatchingFormat {
        /// The input string
        input: String,
    },
}
