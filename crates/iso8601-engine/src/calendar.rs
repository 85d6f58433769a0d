//! Proleptic Gregorian calendar arithmetic.
//!
//! Plain functions over `i32` years. Years outside 0..=9999 are accepted so
//! week date conversions can spill into the neighbouring year.

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const DAYS_IN_QUARTER: [u32; 4] = [90, 91, 92, 92];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days in `month` (1-12) of `year`. Returns 0 for a month out of range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

/// Days in `quarter` (1-4) of `year`. Returns 0 for a quarter out of range.
pub fn days_in_quarter(year: i32, quarter: u32) -> u32 {
    match quarter {
        1 if is_leap_year(year) => 91,
        1..=4 => DAYS_IN_QUARTER[quarter as usize - 1],
        _ => 0,
    }
}

/// Number of ISO weeks (52 or 53) in `year`.
pub fn weeks_in_year(year: i32) -> u32 {
    let d = jan1_weekday(year);
    if d == 3 || (d == 2 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

/// Weekday of January 1st, 0 = Monday through 6 = Sunday.
pub(crate) fn jan1_weekday(year: i32) -> u32 {
    // The Gregorian cycle repeats every 400 years; shift non-positive years
    // up so every division below works on non-negative numbers.
    let year = i64::from(year);
    let shifted = if year <= 0 {
        year + 400 * (1 + (-year) / 400)
    } else {
        year
    };
    let y = shifted - 1;
    ((y + y / 4 - y / 100 + y / 400) % 7) as u32
}

/// Day of the year (1-based) of `month`/`day`. Inputs are not validated.
pub(crate) fn ordinal_of(year: i32, month: u32, day: u32) -> u32 {
    (1..month.min(13))
        .map(|m| days_in_month(year, m))
        .sum::<u32>()
        .saturating_add(day)
}

/// Month and day of month for a day of the year (1-based, in range).
pub(crate) fn month_day_of(year: i32, ordinal: u32) -> (u32, u32) {
    let mut remaining = ordinal;
    for month in 1..12 {
        let len = days_in_month(year, month);
        if remaining <= len {
            return (month, remaining);
        }
        remaining -= len;
    }
    (12, remaining)
}
