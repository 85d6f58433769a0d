//! Calendar, ordinal, week and quarter dates.
//!
//! [`parse_date`] recognises each notation in basic (`20160102`) and
//! extended (`2016-01-02`) form. The notation is decided by digit-run
//! lengths and separator characters alone, so every accepted string has
//! exactly one reading:
//!
//! | Notation | Basic      | Extended     |
//! |----------|------------|--------------|
//! | Calendar | `YYYYMMDD` | `YYYY-MM-DD` |
//! | Ordinal  | `YYYYDDD`  | `YYYY-DDD`   |
//! | Week     | `YYYYWwwD` | `YYYY-Www-D` |
//! | Quarter  | `YYYYQqDD` | `YYYY-Qq-DD` |
//!
//! A leading `+` is accepted and ignored. Every variant converts to the
//! canonical [`CalendarDate`] and validates against its own bounds.
//! Conversions assume validated fields: out-of-range fields give an
//! unspecified date, never a panic.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{
    days_in_month, days_in_quarter, days_in_year, jan1_weekday, month_day_of, ordinal_of,
    weeks_in_year,
};
use crate::error::{ParseError, RangeError, Result};
use crate::scan::Cursor;

/// A year, month and day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A year and day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrdinalDate {
    pub year: i32,
    pub day: u32,
}

/// An ISO week-numbering year, week and weekday (1 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekDate {
    pub year: i32,
    pub week: u32,
    pub weekday: u32,
}

/// A year, quarter and day of the quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuarterDate {
    pub year: i32,
    pub quarter: u32,
    pub day: u32,
}

/// Any of the four date notations, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateLike {
    Calendar(CalendarDate),
    Ordinal(OrdinalDate),
    Week(WeekDate),
    Quarter(QuarterDate),
}

fn check(element: &'static str, value: u32, year: i32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::DateRange(RangeError {
            element,
            value: i64::from(value),
            year: Some(year),
            min: i64::from(min),
            max: i64::from(max),
        }))
    }
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    pub fn to_calendar_date(&self) -> CalendarDate {
        *self
    }

    pub fn validate(&self) -> Result<()> {
        check("month", self.month, self.year, 1, 12)?;
        check(
            "day of month",
            self.day,
            self.year,
            1,
            days_in_month(self.year, self.month),
        )
    }

    /// ISO weekday, 1 = Monday through 7 = Sunday.
    pub fn weekday(&self) -> u32 {
        let ordinal = i64::from(ordinal_of(self.year, self.month, self.day));
        ((i64::from(jan1_weekday(self.year)) + ordinal - 1).rem_euclid(7) + 1) as u32
    }

    pub fn to_ordinal_date(&self) -> OrdinalDate {
        OrdinalDate {
            year: self.year,
            day: ordinal_of(self.year, self.month, self.day),
        }
    }

    /// The ISO week date. Early January and late December days may belong
    /// to a week of the neighbouring year.
    pub fn to_week_date(&self) -> WeekDate {
        let ordinal = i64::from(ordinal_of(self.year, self.month, self.day));
        let weekday = self.weekday();
        let week = (ordinal - i64::from(weekday) + 10) / 7;
        let (year, week) = if week < 1 {
            let prev = self.year.saturating_sub(1);
            (prev, weeks_in_year(prev))
        } else if week > i64::from(weeks_in_year(self.year)) {
            (self.year.saturating_add(1), 1)
        } else {
            (self.year, week as u32)
        };
        WeekDate {
            year,
            week,
            weekday,
        }
    }

    pub fn to_quarter_date(&self) -> QuarterDate {
        let month = self.month.clamp(1, 12);
        let quarter = (month - 1) / 3 + 1;
        let first_month = (quarter - 1) * 3 + 1;
        let before: u32 = (first_month..month)
            .map(|m| days_in_month(self.year, m))
            .sum();
        QuarterDate {
            year: self.year,
            quarter,
            day: before.saturating_add(self.day),
        }
    }
}

impl OrdinalDate {
    pub fn to_calendar_date(&self) -> CalendarDate {
        let (month, day) = month_day_of(self.year, self.day);
        CalendarDate::new(self.year, month, day)
    }

    pub fn validate(&self) -> Result<()> {
        check("day of year", self.day, self.year, 1, days_in_year(self.year))
    }
}

impl WeekDate {
    pub fn to_calendar_date(&self) -> CalendarDate {
        // Weekday (1-7) of January 4th, which always falls in week 1.
        let jan4 = i64::from((jan1_weekday(self.year) + 3) % 7 + 1);
        let ordinal = i64::from(self.week) * 7 + i64::from(self.weekday) - (jan4 + 3);
        let (year, ordinal) = if ordinal < 1 {
            let prev = self.year.saturating_sub(1);
            (prev, ordinal + i64::from(days_in_year(prev)))
        } else if ordinal > i64::from(days_in_year(self.year)) {
            (
                self.year.saturating_add(1),
                ordinal - i64::from(days_in_year(self.year)),
            )
        } else {
            (self.year, ordinal)
        };
        let ordinal = u32::try_from(ordinal.max(0)).unwrap_or(u32::MAX);
        let (month, day) = month_day_of(year, ordinal);
        CalendarDate::new(year, month, day)
    }

    pub fn validate(&self) -> Result<()> {
        check("week", self.week, self.year, 1, weeks_in_year(self.year))?;
        check("day of week", self.weekday, self.year, 1, 7)
    }
}

impl QuarterDate {
    pub fn to_calendar_date(&self) -> CalendarDate {
        let mut month = (self.quarter.clamp(1, 4) - 1) * 3 + 1;
        let mut day = self.day;
        while month < 12 && day > days_in_month(self.year, month) {
            day -= days_in_month(self.year, month);
            month += 1;
        }
        CalendarDate::new(self.year, month, day)
    }

    pub fn validate(&self) -> Result<()> {
        check("quarter", self.quarter, self.year, 1, 4)?;
        check(
            "day of quarter",
            self.day,
            self.year,
            1,
            days_in_quarter(self.year, self.quarter),
        )
    }
}

impl DateLike {
    /// The year as written. For week dates this is the week-numbering year.
    pub fn year(&self) -> i32 {
        match self {
            DateLike::Calendar(d) => d.year,
            DateLike::Ordinal(d) => d.year,
            DateLike::Week(d) => d.year,
            DateLike::Quarter(d) => d.year,
        }
    }

    pub fn to_calendar_date(&self) -> CalendarDate {
        match self {
            DateLike::Calendar(d) => d.to_calendar_date(),
            DateLike::Ordinal(d) => d.to_calendar_date(),
            DateLike::Week(d) => d.to_calendar_date(),
            DateLike::Quarter(d) => d.to_calendar_date(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            DateLike::Calendar(d) => d.validate(),
            DateLike::Ordinal(d) => d.validate(),
            DateLike::Week(d) => d.validate(),
            DateLike::Quarter(d) => d.validate(),
        }
    }

    /// The chrono date, or `None` when the value is out of range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.validate().ok()?;
        let c = self.to_calendar_date();
        NaiveDate::from_ymd_opt(c.year, c.month, c.day)
    }
}

impl FromStr for DateLike {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_date(s)
    }
}

/// Parse a complete date string.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedToken`] when the text does not match any
/// notation (trailing bytes included), or [`ParseError::DateRange`] when a
/// field is out of range for its year.
///
/// # Examples
///
/// ```
/// use iso8601_engine::{parse_date, CalendarDate};
///
/// let date = parse_date("2016-W01-1").unwrap();
/// assert_eq!(date.to_calendar_date(), CalendarDate::new(2016, 1, 4));
/// ```
pub fn parse_date(input: &str) -> Result<DateLike> {
    traced!("date", input, {
        let mut c = Cursor::new(input);
        date(&mut c).and_then(|d| c.expect_end().map(|()| d))
    })
}

const EXPECT_START: &str = "4-digits year, 7-digits ordinal date or 8-digits calendar date";
const EXPECT_DESIGNATOR: &str = "the designator -, Q, or W";
const EXPECT_EXTENDED: &str = "2-digits month, 3-digits day of year, Q or W";

/// Parse a date at the cursor, leaving anything after it unconsumed.
pub(crate) fn date(c: &mut Cursor<'_>) -> Result<DateLike> {
    c.eat(b'+');
    let parsed = match c.digits() {
        4 => {
            let year = c.take_int(4) as i32;
            after_year(c, year)?
        }
        7 => {
            let year = c.take_int(4) as i32;
            let day = c.take_int(3) as u32;
            DateLike::Ordinal(OrdinalDate { year, day })
        }
        8 => {
            let year = c.take_int(4) as i32;
            let month = c.take_int(2) as u32;
            let day = c.take_int(2) as u32;
            DateLike::Calendar(CalendarDate { year, month, day })
        }
        n => return Err(c.unexpected_digits(n, EXPECT_START)),
    };
    parsed.validate()?;
    Ok(parsed)
}

fn after_year(c: &mut Cursor<'_>, year: i32) -> Result<DateLike> {
    match c.peek() {
        Some(b'Q') => {
            c.advance(1);
            fixed(c, 3, "3-digits quarter and day of quarter")?;
            let quarter = c.take_int(1) as u32;
            let day = c.take_int(2) as u32;
            Ok(DateLike::Quarter(QuarterDate { year, quarter, day }))
        }
        Some(b'W') => {
            c.advance(1);
            fixed(c, 3, "3-digits week and day of week")?;
            let week = c.take_int(2) as u32;
            let weekday = c.take_int(1) as u32;
            Ok(DateLike::Week(WeekDate {
                year,
                week,
                weekday,
            }))
        }
        Some(b'-') => {
            c.advance(1);
            extended(c, year)
        }
        _ => Err(c.unexpected(EXPECT_DESIGNATOR)),
    }
}

fn extended(c: &mut Cursor<'_>, year: i32) -> Result<DateLike> {
    match c.digits() {
        2 => {
            let month = c.take_int(2) as u32;
            separator(c)?;
            fixed(c, 2, "2-digits day of month")?;
            let day = c.take_int(2) as u32;
            Ok(DateLike::Calendar(CalendarDate { year, month, day }))
        }
        3 => {
            let day = c.take_int(3) as u32;
            Ok(DateLike::Ordinal(OrdinalDate { year, day }))
        }
        0 if c.peek() == Some(b'Q') => {
            c.advance(1);
            fixed(c, 1, "1-digit quarter")?;
            let quarter = c.take_int(1) as u32;
            separator(c)?;
            fixed(c, 2, "2-digits day of quarter")?;
            let day = c.take_int(2) as u32;
            Ok(DateLike::Quarter(QuarterDate { year, quarter, day }))
        }
        0 if c.peek() == Some(b'W') => {
            c.advance(1);
            fixed(c, 2, "2-digits week")?;
            let week = c.take_int(2) as u32;
            separator(c)?;
            fixed(c, 1, "1-digit day of week")?;
            let weekday = c.take_int(1) as u32;
            Ok(DateLike::Week(WeekDate {
                year,
                week,
                weekday,
            }))
        }
        n => Err(c.unexpected_digits(n, EXPECT_EXTENDED)),
    }
}

/// Require a digit run of exactly `width` at the cursor.
fn fixed(c: &Cursor<'_>, width: usize, expected: &str) -> Result<()> {
    match c.digits() {
        n if n == width => Ok(()),
        n => Err(c.unexpected_digits(n, expected)),
    }
}

fn separator(c: &mut Cursor<'_>) -> Result<()> {
    if c.eat(b'-') {
        Ok(())
    } else {
        Err(c.unexpected("the separator -"))
    }
}
