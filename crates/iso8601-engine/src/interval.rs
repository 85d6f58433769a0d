//! Time intervals and repeating intervals.
//!
//! Four shapes are accepted, each optionally prefixed by a repeat count
//! (`Rn` or a bare `R` for unbounded repetition):
//!
//! - `<start>/<end>`
//! - `<start>/<duration>`
//! - `<duration>/<end>`
//! - `<duration>`
//!
//! `--` may replace `/`. The first designator found is the only one
//! accepted for the rest of the interval.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

use crate::datetime::date_time;
use crate::duration::{duration, Duration};
use crate::error::{ParseError, Result};
use crate::scan::Cursor;

/// How often an interval recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Repeat {
    /// No `R` prefix.
    #[default]
    Never,
    /// A bare `R`.
    Unbounded,
    /// `Rn`. `R0` means the interval occurs exactly once.
    Count(u64),
}

impl Repeat {
    /// The count with unbounded repetition as `-1`; `None` when the interval
    /// does not repeat or the count does not fit in an `i64`.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Repeat::Never => None,
            Repeat::Unbounded => Some(-1),
            Repeat::Count(n) => i64::try_from(*n).ok(),
        }
    }
}

/// A parsed interval. Which of the fields are set depends on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    pub duration: Option<Duration>,
    pub repeat: Repeat,
}

impl Interval {
    /// The start, given or derived from the end and duration.
    pub fn start_instant(&self) -> Option<DateTime<FixedOffset>> {
        match (self.start, self.end, self.duration) {
            (Some(start), _, _) => Some(start),
            (None, Some(end), Some(d)) => d.checked_sub_from(end),
            _ => None,
        }
    }

    /// The end, given or derived from the start and duration.
    pub fn end_instant(&self) -> Option<DateTime<FixedOffset>> {
        match (self.start, self.end, self.duration) {
            (_, Some(end), _) => Some(end),
            (Some(start), None, Some(d)) => d.checked_add_to(start),
            _ => None,
        }
    }

    /// Whether `t` lies within the interval, both ends included. A
    /// duration-only interval contains nothing.
    pub fn contains<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        match (self.start_instant(), self.end_instant()) {
            (Some(start), Some(end)) => start <= *t && *t <= end,
            _ => false,
        }
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_interval(s)
    }
}

/// Parse a complete interval string.
///
/// # Errors
///
/// Errors from the date-time and duration parsers are reported against
/// the whole input. Two durations, or a lone date-time, are syntax errors.
///
/// # Examples
///
/// ```
/// use iso8601_engine::parse_interval;
///
/// let i = parse_interval("R/P1D/2020-01-02").unwrap();
/// assert_eq!(i.repeat.as_count(), Some(-1));
/// assert_eq!(i.start_instant().unwrap().to_rfc3339(), "2020-01-01T00:00:00+00:00");
/// ```
pub fn parse_interval(input: &str) -> Result<Interval> {
    traced!("interval", input, interval(input))
}

const EXPECT_DESIGNATOR: &str = "the designator / or --";

enum Element {
    Instant(DateTime<FixedOffset>),
    Duration(Duration),
}

fn interval(input: &str) -> Result<Interval> {
    let mut c = Cursor::new(input);
    let mut repeat = Repeat::Never;
    let mut locked = None;
    if c.eat(b'R') {
        repeat = if c.digits() == 0 {
            Repeat::Unbounded
        } else {
            Repeat::Count(c.number("a repeat count")?)
        };
        let designator = designator_at(c.rest()).ok_or_else(|| c.unexpected(EXPECT_DESIGNATOR))?;
        c.advance(designator.len());
        locked = Some(designator);
    }

    let start = c.pos();
    let rest = c.rest();
    let split = match locked {
        Some(designator) => rest.find(designator).map(|i| (i, designator)),
        None => first_designator(rest),
    };

    let Some((offset, designator)) = split else {
        return match element(Cursor::bounded(input, start, input.len()))? {
            Element::Duration(d) => Ok(Interval {
                start: None,
                end: None,
                duration: Some(d),
                repeat,
            }),
            Element::Instant(_) => {
                Err(Cursor::bounded(input, input.len(), input.len()).unexpected(EXPECT_DESIGNATOR))
            }
        };
    };

    let first_end = start + offset;
    let second_start = first_end + designator.len();
    let first = element(Cursor::bounded(input, start, first_end))?;
    let second = Cursor::bounded(input, second_start, input.len());

    match first {
        Element::Duration(d) => {
            if second.peek() == Some(b'P') {
                return Err(second.unexpected("datetime format"));
            }
            let end = instant(second)?;
            Ok(Interval {
                start: None,
                end: Some(end),
                duration: Some(d),
                repeat,
            })
        }
        Element::Instant(start) => match element(second)? {
            Element::Instant(end) => Ok(Interval {
                start: Some(start),
                end: Some(end),
                duration: None,
                repeat,
            }),
            Element::Duration(d) => Ok(Interval {
                start: Some(start),
                end: None,
                duration: Some(d),
                repeat,
            }),
        },
    }
}

/// One side of the interval, which must fill the cursor exactly.
fn element(mut c: Cursor<'_>) -> Result<Element> {
    if c.peek() == Some(b'P') {
        let d = duration(&mut c)?;
        c.expect_end()?;
        Ok(Element::Duration(d))
    } else {
        instant(c).map(Element::Instant)
    }
}

fn instant(mut c: Cursor<'_>) -> Result<DateTime<FixedOffset>> {
    let dt = date_time(&mut c)?;
    c.expect_end()?;
    Ok(dt)
}

fn designator_at(s: &str) -> Option<&'static str> {
    if s.starts_with('/') {
        Some("/")
    } else if s.starts_with("--") {
        Some("--")
    } else {
        None
    }
}

/// The earliest `/` or `--` in `s`, with its offset.
fn first_designator(s: &str) -> Option<(usize, &'static str)> {
    let slash = s.find('/').map(|i| (i, "/"));
    let dashes = s.find("--").map(|i| (i, "--"));
    match (slash, dashes) {
        (Some(a), Some(b)) => Some(if a.0 < b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}
