//! Date, `T`, time and zone glued into one instant.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::date::{date, DateLike};
use crate::error::{ParseError, RangeError, Result};
use crate::scan::Cursor;
use crate::time::{time, TimeOfDay};
use crate::zone::{zone, ZoneOffset};

/// Largest offset magnitude, in seconds, that can be attached to an instant.
const MAX_OFFSET_SECONDS: i64 = 86_399;

/// Parse a date with optional time and zone into an instant.
///
/// A missing time means midnight, a missing zone means UTC. The returned
/// instant keeps the offset that was written, so
/// `2016-01-02T10:30:00+05:30` displays as written while comparing equal to
/// `2016-01-02T05:00:00Z`. `24:00` is read as midnight of the next day.
///
/// # Errors
///
/// Any error of the date, time or zone parsers, anchored to the full input.
/// An offset of a full day or more is a [`ParseError::ZoneRange`] on
/// `"offset"`.
///
/// # Examples
///
/// ```
/// use iso8601_engine::parse_date_time;
///
/// let dt = parse_date_time("2016-W01-1T12:00+01:00").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2016-01-04T12:00:00+01:00");
/// ```
///
/// The zone grammar accepts offset fields up to 99, but an instant can only
/// carry an offset below one day. `+24:00` parses as a zone and is rejected
/// here:
///
/// ```
/// use iso8601_engine::{parse_date_time, parse_zone, ParseError};
///
/// assert_eq!(parse_zone("+24:00").unwrap().offset(), 86_400);
/// let err = parse_date_time("2016-01-04T12:00+24:00").unwrap_err();
/// assert!(matches!(err, ParseError::ZoneRange(ref e) if e.element == "offset"));
/// ```
pub fn parse_date_time(input: &str) -> Result<DateTime<FixedOffset>> {
    traced!("date-time", input, {
        let mut c = Cursor::new(input);
        date_time(&mut c).and_then(|dt| c.expect_end().map(|()| dt))
    })
}

/// Parse a date-time at the cursor.
pub(crate) fn date_time(c: &mut Cursor<'_>) -> Result<DateTime<FixedOffset>> {
    let d = date(c)?;
    let mut t = TimeOfDay::default();
    let mut z = ZoneOffset::UTC;
    if !c.is_done() {
        if !c.eat(b'T') {
            return Err(c.unexpected("T"));
        }
        t = time(c)?;
        if !c.is_done() {
            z = zone(c)?;
        }
    }
    compose(&d, &t, &z)
}

/// Build the instant for fields that have already been validated.
fn compose(
    d: &DateLike,
    t: &TimeOfDay,
    z: &ZoneOffset,
) -> Result<DateTime<FixedOffset>> {
    let cal = d.to_calendar_date();
    let out_of_range = || {
        ParseError::DateRange(RangeError {
            element: "year",
            value: i64::from(cal.year),
            year: Some(cal.year),
            min: i64::from(NaiveDate::MIN.year()),
            max: i64::from(NaiveDate::MAX.year()),
        })
    };

    let day = NaiveDate::from_ymd_opt(cal.year, cal.month, cal.day).ok_or_else(out_of_range)?;
    let local = if t.is_end_of_day() {
        day.succ_opt().ok_or_else(out_of_range)?.and_time(NaiveTime::MIN)
    } else {
        let wall = t.to_naive_time().ok_or_else(|| {
            ParseError::TimeRange(RangeError {
                element: "hour",
                value: i64::from(t.hour),
                year: None,
                min: 0,
                max: 23,
            })
        })?;
        NaiveDateTime::new(day, wall)
    };

    let offset = z.to_fixed_offset().ok_or_else(|| {
        debug!("offset {} cannot be attached to an instant", z.offset());
        ParseError::ZoneRange(RangeError {
            element: "offset",
            value: z.offset(),
            year: None,
            min: -MAX_OFFSET_SECONDS,
            max: MAX_OFFSET_SECONDS,
        })
    })?;

    offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(out_of_range)
}
