//! # iso8601-engine
//!
//! Strict, hand-written parsing of ISO 8601 text into range-checked values.
//!
//! Every entry point consumes its whole input or fails. Nothing is guessed:
//! a string that does not match the grammar is an
//! [`UnexpectedTokenError`], and a string that matches but names an
//! impossible value (month 13, week 53 of a 52-week year) is a
//! [`RangeError`]. All functions are pure and hold no state between calls.
//!
//! ## Modules
//!
//! - [`date`] — calendar, ordinal, ISO week and quarter dates
//! - [`time`] — time of day, with fractions and `24:00`
//! - [`zone`] — UTC offsets
//! - [`datetime`] — date, time and zone combined into an instant
//! - [`duration`] — `P…` durations with strict designator rules
//! - [`interval`] — start/end, start/duration, duration/end and repeating intervals
//! - [`calendar`] — leap years, month, quarter and ISO week lengths
//! - [`error`] — Error types
//!
//! ## Features
//!
//! - `logging` — emit a `log` trace record whenever an entry point rejects
//!   its input. Off by default.

#[macro_use]
mod logging;

pub mod calendar;
pub mod date;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod interval;
mod scan;
pub mod time;
pub mod zone;

pub use date::{parse_date, CalendarDate, DateLike, OrdinalDate, QuarterDate, WeekDate};
pub use datetime::parse_date_time;
pub use duration::{parse_duration, Duration};
pub use error::{ParseError, RangeError, Result, UnexpectedTokenError};
pub use interval::{parse_interval, Interval, Repeat};
pub use time::{parse_time, TimeOfDay};
pub use zone::{parse_zone, ZoneOffset};
