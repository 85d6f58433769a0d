//! UTC offsets: `Z`, `±hh`, `±hhmm`, `±hhmmss`, `±hh:mm` and `±hh:mm:ss`.
//!
//! Each field may be anything from 00 to 99. Whether the offset is one a
//! real zone could have is left to the caller.

use std::str::FromStr;

use chrono::FixedOffset;
use serde::Serialize;

use crate::error::{ParseError, RangeError, Result};
use crate::scan::Cursor;

/// A signed UTC offset as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ZoneOffset {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub negative: bool,
}

impl ZoneOffset {
    pub const UTC: ZoneOffset = ZoneOffset {
        hours: 0,
        minutes: 0,
        seconds: 0,
        negative: false,
    };

    /// The offset in seconds east of UTC.
    pub fn offset(&self) -> i64 {
        let total =
            i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds);
        if self.negative {
            -total
        } else {
            total
        }
    }

    pub fn validate(&self) -> Result<()> {
        check("hours", self.hours)?;
        check("minutes", self.minutes)?;
        check("seconds", self.seconds)
    }

    /// The chrono offset, or `None` when the magnitude is a day or more.
    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        i32::try_from(self.offset())
            .ok()
            .and_then(FixedOffset::east_opt)
    }
}

fn check(element: &'static str, value: u32) -> Result<()> {
    if value <= 99 {
        Ok(())
    } else {
        Err(ParseError::ZoneRange(RangeError {
            element,
            value: i64::from(value),
            year: None,
            min: 0,
            max: 99,
        }))
    }
}

impl FromStr for ZoneOffset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_zone(s)
    }
}

/// Parse a complete UTC offset string.
///
/// # Examples
///
/// ```
/// use iso8601_engine::parse_zone;
///
/// assert_eq!(parse_zone("-0530").unwrap().offset(), -19800);
/// assert_eq!(parse_zone("Z").unwrap().offset(), 0);
/// ```
pub fn parse_zone(input: &str) -> Result<ZoneOffset> {
    traced!("zone offset", input, {
        let mut c = Cursor::new(input);
        zone(&mut c).and_then(|z| c.expect_end().map(|()| z))
    })
}

const EXPECT_BASIC: &str = "2, 4 or 6 digits (hh, hhmm or hhmmss)";

/// Parse an offset at the cursor, leaving anything after it unconsumed.
pub(crate) fn zone(c: &mut Cursor<'_>) -> Result<ZoneOffset> {
    let negative = match c.peek() {
        Some(b'Z') => {
            c.advance(1);
            return Ok(ZoneOffset::UTC);
        }
        Some(b'+') => false,
        Some(b'-') => true,
        _ => return Err(c.unexpected("Z, + or -")),
    };
    c.advance(1);

    let mut z = ZoneOffset {
        negative,
        ..ZoneOffset::default()
    };
    match c.digits() {
        2 if c.peek_at(2) == Some(b':') => {
            z.hours = c.take_int(2) as u32;
            c.advance(1);
            two_digits(c, "2-digits minutes")?;
            z.minutes = c.take_int(2) as u32;
            if c.eat(b':') {
                two_digits(c, "2-digits seconds")?;
                z.seconds = c.take_int(2) as u32;
            }
        }
        2 => {
            z.hours = c.take_int(2) as u32;
        }
        4 => {
            z.hours = c.take_int(2) as u32;
            z.minutes = c.take_int(2) as u32;
        }
        6 => {
            z.hours = c.take_int(2) as u32;
            z.minutes = c.take_int(2) as u32;
            z.seconds = c.take_int(2) as u32;
        }
        n => return Err(c.unexpected_digits(n, EXPECT_BASIC)),
    }

    z.validate()?;
    Ok(z)
}

fn two_digits(c: &Cursor<'_>, expected: &str) -> Result<()> {
    match c.digits() {
        2 => Ok(()),
        n => Err(c.unexpected_digits(n, expected)),
    }
}
