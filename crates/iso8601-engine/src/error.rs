//! Error types for iso8601-engine parsers.
//!
//! There are two disjoint families. [`UnexpectedTokenError`] means the input
//! does not match the grammar at some byte offset; [`RangeError`] means the
//! grammar matched but a field value fell outside its bounds. Both are plain
//! data with structural equality, so the same malformed input always yields
//! an identical error value.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    UnexpectedToken(#[from] UnexpectedTokenError),

    #[error("invalid date: {0}")]
    DateRange(RangeError),

    #[error("invalid time: {0}")]
    TimeRange(RangeError),

    #[error("invalid zone offset: {0}")]
    ZoneRange(RangeError),
}

/// The input did not match the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} in {value:?} after {after:?}, expected {expected}", describe_token(.token))]
pub struct UnexpectedTokenError {
    /// The full input handed to the entry point.
    pub value: String,
    /// The offending token. Empty at end of input; an `N-digit(s)`
    /// placeholder when the problem is the length of a digit run.
    pub token: String,
    /// The part of `value` that was matched before `token`.
    pub after: String,
    /// What the grammar would have accepted instead.
    pub expected: String,
}

/// A syntactically valid field holds a value outside its bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{element} {value}{} out of range [{min}, {max}]", describe_year(.year))]
pub struct RangeError {
    /// Human readable field name, e.g. `"day of month"`.
    pub element: &'static str,
    pub value: i64,
    /// The year the bounds were computed for. Set for date-like fields only.
    pub year: Option<i32>,
    pub min: i64,
    pub max: i64,
}

impl ParseError {
    /// The range error payload, whichever value family it belongs to.
    pub fn range(&self) -> Option<&RangeError> {
        match self {
            ParseError::UnexpectedToken(_) => None,
            ParseError::DateRange(e) | ParseError::TimeRange(e) | ParseError::ZoneRange(e) => {
                Some(e)
            }
        }
    }

    /// The syntax error payload, if this is one.
    pub fn unexpected_token(&self) -> Option<&UnexpectedTokenError> {
        match self {
            ParseError::UnexpectedToken(e) => Some(e),
            _ => None,
        }
    }
}

fn describe_token(token: &str) -> String {
    if token.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected token {token:?}")
    }
}

fn describe_year(year: &Option<i32>) -> String {
    match year {
        Some(y) => format!(" (year {y})"),
        None => String::new(),
    }
}

/// Placeholder token for a digit run of the wrong length.
pub(crate) fn digits_token(n: usize) -> String {
    if n == 1 {
        "1-digit".to_string()
    } else {
        format!("{n}-digits")
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
