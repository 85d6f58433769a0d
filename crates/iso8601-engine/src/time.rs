//! Time of day: `hh`, `hhmm`, `hhmmss` and `hh:mm`, `hh:mm:ss`.
//!
//! Whichever field comes last may carry a fraction introduced by `.` or
//! `,`. A fractional hour or minute is spread over the smaller fields, so
//! `10.5` reads as 10:30:00 and `10:30,25` as 10:30:15.

use std::str::FromStr;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{ParseError, RangeError, Result};
use crate::scan::Cursor;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;

/// A wall clock time. `24:00:00` is accepted as the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Self {
        TimeOfDay {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// `24:00:00`, the instant a day ends.
    pub fn is_end_of_day(&self) -> bool {
        self.hour == 24 && self.minute == 0 && self.second == 0 && self.nanosecond == 0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_end_of_day() {
            check("hour", self.hour, 23)?;
        }
        check("minute", self.minute, 59)?;
        check("second", self.second, 59)?;
        check("nanosecond", self.nanosecond, 999_999_999)
    }

    /// The chrono time. `None` for `24:00:00`, which chrono cannot hold, and
    /// for out of range values.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)
    }
}

fn check(element: &'static str, value: u32, max: u32) -> Result<()> {
    if value <= max {
        Ok(())
    } else {
        Err(ParseError::TimeRange(RangeError {
            element,
            value: i64::from(value),
            year: None,
            min: 0,
            max: i64::from(max),
        }))
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

/// Parse a complete time of day string.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedToken`] for malformed or trailing input
/// and [`ParseError::TimeRange`] for out of range fields.
pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    traced!("time", input, {
        let mut c = Cursor::new(input);
        time(&mut c).and_then(|t| c.expect_end().map(|()| t))
    })
}

const EXPECT_BASIC: &str = "2, 4 or 6 digits (hh, hhmm or hhmmss)";

#[derive(Debug, Clone, Copy)]
enum Field {
    Hour,
    Minute,
    Second,
}

/// Parse a time at the cursor, leaving anything after it unconsumed.
pub(crate) fn time(c: &mut Cursor<'_>) -> Result<TimeOfDay> {
    let mut t = TimeOfDay::default();
    let last = if c.peek_at(2) == Some(b':') {
        extended(c, &mut t)?
    } else {
        basic(c, &mut t)?
    };

    if let Some(fraction) = c.fraction()? {
        let fraction = u64::from(fraction);
        let nanos = match last {
            Field::Second => fraction,
            Field::Minute => fraction * 60,
            Field::Hour => {
                let total = fraction * 3600;
                t.minute += (total / NANOS_PER_MINUTE) as u32;
                total % NANOS_PER_MINUTE
            }
        };
        t.second += (nanos / NANOS_PER_SECOND) as u32;
        t.nanosecond = (nanos % NANOS_PER_SECOND) as u32;
    }

    t.validate()?;
    Ok(t)
}

fn basic(c: &mut Cursor<'_>, t: &mut TimeOfDay) -> Result<Field> {
    match c.digits() {
        2 => {
            t.hour = c.take_int(2) as u32;
            Ok(Field::Hour)
        }
        4 => {
            t.hour = c.take_int(2) as u32;
            t.minute = c.take_int(2) as u32;
            Ok(Field::Minute)
        }
        6 => {
            t.hour = c.take_int(2) as u32;
            t.minute = c.take_int(2) as u32;
            t.second = c.take_int(2) as u32;
            Ok(Field::Second)
        }
        n => {
            // Report the error after the longest prefix that would be valid.
            let valid = [6, 4, 2].into_iter().find(|&v| v <= n).unwrap_or(0);
            let mut at = *c;
            at.advance(valid);
            Err(at.unexpected_digits(n - valid, EXPECT_BASIC))
        }
    }
}

fn extended(c: &mut Cursor<'_>, t: &mut TimeOfDay) -> Result<Field> {
    two_digits(c, "2-digits hour")?;
    t.hour = c.take_int(2) as u32;
    c.advance(1);

    two_digits(c, "2-digits minute")?;
    t.minute = c.take_int(2) as u32;
    if !c.eat(b':') {
        return Ok(Field::Minute);
    }

    two_digits(c, "2-digits second")?;
    t.second = c.take_int(2) as u32;
    Ok(Field::Second)
}

fn two_digits(c: &Cursor<'_>, expected: &str) -> Result<()> {
    match c.digits() {
        2 => Ok(()),
        n => Err(c.unexpected_digits(n, expected)),
    }
}
