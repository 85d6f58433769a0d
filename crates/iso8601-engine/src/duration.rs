//! `PnYnMnWnDTnHnMnS` durations.
//!
//! Designators appear at most once each, in the order Y, M, W, D before the
//! `T` and H, M, S after it. Only the last time component may carry a
//! fraction; the fraction is spread over the smaller fields when parsing,
//! so a parsed [`Duration`] never holds a fractional value.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Months, TimeDelta, TimeZone};
use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::scan::Cursor;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;

/// A nominal duration, field by field, with a sign.
///
/// Calendar fields are never normalised against each other: `P13M` keeps
/// thirteen months. The sub-second fields each stay below 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Duration {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
    pub microseconds: u64,
    pub nanoseconds: u64,
    pub negative: bool,
}

impl Duration {
    /// True when every field is zero, whatever the sign.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.sub_second_nanos() == 0
    }

    fn sub_second_nanos(&self) -> u128 {
        u128::from(self.milliseconds) * 1_000_000
            + u128::from(self.microseconds) * 1_000
            + u128::from(self.nanoseconds)
    }

    /// Add the duration to an instant, honouring its sign.
    ///
    /// Years and months go first and clamp to the end of shorter months,
    /// then weeks and days, then the exact hours through nanoseconds.
    /// Returns `None` on overflow.
    pub fn checked_add_to<Tz: TimeZone>(&self, dt: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.shift(dt, self.negative)
    }

    /// Subtract the duration from an instant, honouring its sign.
    pub fn checked_sub_from<Tz: TimeZone>(&self, dt: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.shift(dt, !self.negative)
    }

    fn shift<Tz: TimeZone>(&self, dt: DateTime<Tz>, backwards: bool) -> Option<DateTime<Tz>> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let months = Months::new(u32::try_from(months).ok()?);
        let days = Days::new(self.weeks.checked_mul(7)?.checked_add(self.days)?);
        let exact = self.exact()?;
        if backwards {
            dt.checked_sub_months(months)?
                .checked_sub_days(days)?
                .checked_sub_signed(exact)
        } else {
            dt.checked_add_months(months)?
                .checked_add_days(days)?
                .checked_add_signed(exact)
        }
    }

    /// Hours through nanoseconds as an exact span.
    fn exact(&self) -> Option<TimeDelta> {
        let seconds = self
            .hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        let nanos = i64::try_from(self.sub_second_nanos()).ok()?;
        TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?
            .checked_add(&TimeDelta::nanoseconds(nanos))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (value, symbol) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{symbol}")?;
            }
        }

        let sub = self.sub_second_nanos();
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && sub == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || sub != 0 {
            write!(f, "{}", self.seconds)?;
            if sub != 0 {
                let digits = format!("{sub:09}");
                write!(f, ".{}", digits.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s)
    }
}

// ── designators ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateUnit {
    Year,
    Month,
    Week,
    Day,
}

impl DateUnit {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'Y' => Some(DateUnit::Year),
            b'M' => Some(DateUnit::Month),
            b'W' => Some(DateUnit::Week),
            b'D' => Some(DateUnit::Day),
            _ => None,
        }
    }

    fn field(self, d: &mut Duration) -> &mut u64 {
        match self {
            DateUnit::Year => &mut d.years,
            DateUnit::Month => &mut d.months,
            DateUnit::Week => &mut d.weeks,
            DateUnit::Day => &mut d.days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeUnit {
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'H' => Some(TimeUnit::Hour),
            b'M' => Some(TimeUnit::Minute),
            b'S' => Some(TimeUnit::Second),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            TimeUnit::Hour => 'H',
            TimeUnit::Minute => 'M',
            TimeUnit::Second => 'S',
        }
    }

    fn field(self, d: &mut Duration) -> &mut u64 {
        match self {
            TimeUnit::Hour => &mut d.hours,
            TimeUnit::Minute => &mut d.minutes,
            TimeUnit::Second => &mut d.seconds,
        }
    }
}

/// Which designators of one section have been used, indexed by unit.
struct Seen<const N: usize> {
    used: [bool; N],
    last: Option<usize>,
}

impl<const N: usize> Seen<N> {
    fn new() -> Self {
        Seen {
            used: [false; N],
            last: None,
        }
    }

    /// Record `index`, or describe the rule it breaks.
    fn mark(&mut self, index: usize, symbols: &[char; N]) -> std::result::Result<(), String> {
        if self.used[index] {
            return Err(format!("at most one {}", symbols[index]));
        }
        if let Some(last) = self.last.filter(|&last| index < last) {
            return Err(format!(
                "{} to come before {}",
                symbols[index], symbols[last]
            ));
        }
        self.used[index] = true;
        self.last = Some(index);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}

const DATE_SYMBOLS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_SYMBOLS: [char; 3] = ['H', 'M', 'S'];

// ── parser ──────────────────────────────────────────────────────────────────

/// Parse a complete duration string.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedToken`] naming the broken rule: a
/// designator out of order or repeated, a time designator before `T` or a
/// date designator after it, a fraction anywhere but the last time
/// component, an empty duration, or trailing input.
///
/// # Examples
///
/// ```
/// use iso8601_engine::parse_duration;
///
/// let d = parse_duration("PT0.999999999H").unwrap();
/// assert_eq!((d.minutes, d.seconds), (59, 59));
/// assert_eq!((d.milliseconds, d.microseconds, d.nanoseconds), (999, 996, 400));
/// assert_eq!(d.to_string(), "PT59M59.9999964S");
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    traced!("duration", input, {
        let mut c = Cursor::new(input);
        duration(&mut c).and_then(|d| c.expect_end().map(|()| d))
    })
}

/// Parse a duration at the cursor, up to its logical end.
pub(crate) fn duration(c: &mut Cursor<'_>) -> Result<Duration> {
    let mut d = Duration::default();
    if c.eat(b'-') {
        d.negative = true;
    } else {
        c.eat(b'+');
    }
    if !c.eat(b'P') {
        return Err(c.unexpected("the designator P"));
    }

    let mut date_seen = Seen::<4>::new();
    while !c.is_done() && c.peek() != Some(b'T') {
        let value = c.number("a number or T")?;
        let unit = match c.peek().map(|b| (b, DateUnit::from_byte(b))) {
            Some((_, Some(unit))) => unit,
            Some((b'.' | b',', None)) => {
                return Err(c.unexpected(
                    "a date designator Y, M, W or D (only the last time component may have a fraction)",
                ))
            }
            Some((b, None)) if TimeUnit::from_byte(b).is_some() => {
                return Err(c.unexpected(format!(
                    "a date designator Y, M, W or D ({} is a time designator and must follow T)",
                    b as char
                )))
            }
            _ => return Err(c.unexpected("a date designator Y, M, W or D")),
        };
        date_seen
            .mark(unit as usize, &DATE_SYMBOLS)
            .map_err(|rule| c.unexpected(rule))?;
        c.advance(1);
        *unit.field(&mut d) = value;
    }

    if !c.eat(b'T') {
        if date_seen.is_empty() {
            return Err(c.unexpected("a number or T"));
        }
        return Ok(d);
    }

    let mut time_seen = Seen::<3>::new();
    let mut fraction: Option<(TimeUnit, u32)> = None;
    while !c.is_done() {
        if let Some((unit, _)) = fraction {
            return Err(c.unexpected(format!(
                "end of input after the fractional {}",
                unit.symbol()
            )));
        }
        let value = c.number("a number")?;
        let frac = c.fraction()?;
        let unit = match c.peek() {
            Some(b) => match TimeUnit::from_byte(b) {
                Some(unit) => unit,
                None if DateUnit::from_byte(b).is_some() => {
                    return Err(c.unexpected(format!(
                        "a time designator H, M or S ({} is a date designator and must precede T)",
                        b as char
                    )))
                }
                None => return Err(c.unexpected("a time designator H, M or S")),
            },
            None => return Err(c.unexpected("a time designator H, M or S")),
        };
        time_seen
            .mark(unit as usize, &TIME_SYMBOLS)
            .map_err(|rule| c.unexpected(rule))?;
        c.advance(1);
        *unit.field(&mut d) = value;
        if let Some(f) = frac {
            fraction = Some((unit, f));
        }
    }
    if time_seen.is_empty() {
        return Err(c.unexpected("a number"));
    }

    if let Some((unit, f)) = fraction {
        carry_fraction(&mut d, unit, f);
    }
    Ok(d)
}

/// Spread a fraction of `unit` over the smaller fields.
fn carry_fraction(d: &mut Duration, unit: TimeUnit, fraction: u32) {
    let fraction = u64::from(fraction);
    let nanos = match unit {
        TimeUnit::Second => fraction,
        TimeUnit::Minute => fraction * 60,
        TimeUnit::Hour => {
            let total = fraction * 3600;
            d.minutes += total / NANOS_PER_MINUTE;
            total % NANOS_PER_MINUTE
        }
    };
    d.seconds += nanos / NANOS_PER_SECOND;
    let sub = nanos % NANOS_PER_SECOND;
    d.milliseconds = sub / 1_000_000;
    d.microseconds = sub / 1_000 % 1_000;
    d.nanoseconds = sub % 1_000;
}
