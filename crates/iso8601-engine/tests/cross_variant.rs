//! Cross-variant date vectors: each row is one day written as a calendar,
//! ordinal, ISO week and quarter date.

use iso8601_engine::{parse_date, CalendarDate, DateLike, OrdinalDate, QuarterDate, WeekDate};

type Row = ((i32, u32, u32), u32, (i32, u32, u32), (u32, u32));

const VECTORS: &[Row] = &[
    ((1, 1, 1), 1, (1, 1, 1), (1, 1)),
    ((400, 1, 1), 1, (399, 52, 6), (1, 1)),
    ((1583, 1, 1), 1, (1582, 52, 6), (1, 1)),
    ((1900, 1, 1), 1, (1900, 1, 1), (1, 1)),
    ((1900, 1, 3), 3, (1900, 1, 3), (1, 3)),
    ((1900, 2, 28), 59, (1900, 9, 3), (1, 59)),
    ((1900, 3, 31), 90, (1900, 13, 6), (1, 90)),
    ((1900, 6, 30), 181, (1900, 26, 6), (2, 91)),
    ((1900, 9, 30), 273, (1900, 39, 7), (3, 92)),
    ((1900, 12, 28), 362, (1900, 52, 5), (4, 89)),
    ((1900, 12, 30), 364, (1900, 52, 7), (4, 91)),
    ((1999, 1, 1), 1, (1998, 53, 5), (1, 1)),
    ((1999, 1, 3), 3, (1998, 53, 7), (1, 3)),
    ((1999, 2, 28), 59, (1999, 8, 7), (1, 59)),
    ((1999, 3, 31), 90, (1999, 13, 3), (1, 90)),
    ((1999, 6, 30), 181, (1999, 26, 3), (2, 91)),
    ((1999, 9, 30), 273, (1999, 39, 4), (3, 92)),
    ((1999, 12, 28), 362, (1999, 52, 2), (4, 89)),
    ((1999, 12, 30), 364, (1999, 52, 4), (4, 91)),
    ((2000, 1, 1), 1, (1999, 52, 6), (1, 1)),
    ((2000, 1, 3), 3, (2000, 1, 1), (1, 3)),
    ((2000, 2, 28), 59, (2000, 9, 1), (1, 59)),
    ((2000, 3, 1), 61, (2000, 9, 3), (1, 61)),
    ((2000, 4, 1), 92, (2000, 13, 6), (2, 1)),
    ((2000, 7, 1), 183, (2000, 26, 6), (3, 1)),
    ((2000, 10, 1), 275, (2000, 39, 7), (4, 1)),
    ((2000, 12, 29), 364, (2000, 52, 5), (4, 90)),
    ((2000, 12, 31), 366, (2000, 52, 7), (4, 92)),
    ((2004, 1, 2), 2, (2004, 1, 5), (1, 2)),
    ((2004, 1, 4), 4, (2004, 1, 7), (1, 4)),
    ((2004, 2, 29), 60, (2004, 9, 7), (1, 60)),
    ((2004, 3, 31), 91, (2004, 14, 3), (1, 91)),
    ((2004, 6, 30), 182, (2004, 27, 3), (2, 91)),
    ((2004, 9, 30), 274, (2004, 40, 4), (3, 92)),
    ((2004, 12, 28), 363, (2004, 53, 2), (4, 89)),
    ((2004, 12, 30), 365, (2004, 53, 4), (4, 91)),
    ((2008, 1, 1), 1, (2008, 1, 2), (1, 1)),
    ((2008, 1, 3), 3, (2008, 1, 4), (1, 3)),
    ((2008, 2, 28), 59, (2008, 9, 4), (1, 59)),
    ((2008, 3, 1), 61, (2008, 9, 6), (1, 61)),
    ((2008, 4, 1), 92, (2008, 14, 2), (2, 1)),
    ((2008, 7, 1), 183, (2008, 27, 2), (3, 1)),
    ((2008, 10, 1), 275, (2008, 40, 3), (4, 1)),
    ((2008, 12, 29), 364, (2009, 1, 1), (4, 90)),
    ((2008, 12, 31), 366, (2009, 1, 3), (4, 92)),
    ((2009, 1, 2), 2, (2009, 1, 5), (1, 2)),
    ((2009, 1, 4), 4, (2009, 1, 7), (1, 4)),
    ((2009, 3, 1), 60, (2009, 9, 7), (1, 60)),
    ((2009, 4, 1), 91, (2009, 14, 3), (2, 1)),
    ((2009, 7, 1), 182, (2009, 27, 3), (3, 1)),
    ((2009, 10, 1), 274, (2009, 40, 4), (4, 1)),
    ((2009, 12, 29), 363, (2009, 53, 2), (4, 90)),
    ((2009, 12, 31), 365, (2009, 53, 4), (4, 92)),
    ((2010, 1, 2), 2, (2009, 53, 6), (1, 2)),
    ((2010, 1, 4), 4, (2010, 1, 1), (1, 4)),
    ((2010, 3, 1), 60, (2010, 9, 1), (1, 60)),
    ((2010, 4, 1), 91, (2010, 13, 4), (2, 1)),
    ((2010, 7, 1), 182, (2010, 26, 4), (3, 1)),
    ((2010, 10, 1), 274, (2010, 39, 5), (4, 1)),
    ((2010, 12, 29), 363, (2010, 52, 3), (4, 90)),
    ((2010, 12, 31), 365, (2010, 52, 5), (4, 92)),
    ((2015, 1, 2), 2, (2015, 1, 5), (1, 2)),
    ((2015, 1, 4), 4, (2015, 1, 7), (1, 4)),
    ((2015, 3, 1), 60, (2015, 9, 7), (1, 60)),
    ((2015, 4, 1), 91, (2015, 14, 3), (2, 1)),
    ((2015, 7, 1), 182, (2015, 27, 3), (3, 1)),
    ((2015, 10, 1), 274, (2015, 40, 4), (4, 1)),
    ((2015, 12, 29), 363, (2015, 53, 2), (4, 90)),
    ((2015, 12, 31), 365, (2015, 53, 4), (4, 92)),
    ((2016, 1, 2), 2, (2015, 53, 6), (1, 2)),
    ((2016, 1, 4), 4, (2016, 1, 1), (1, 4)),
    ((2016, 2, 29), 60, (2016, 9, 1), (1, 60)),
    ((2016, 3, 31), 91, (2016, 13, 4), (1, 91)),
    ((2016, 6, 30), 182, (2016, 26, 4), (2, 91)),
    ((2016, 9, 30), 274, (2016, 39, 5), (3, 92)),
    ((2016, 12, 28), 363, (2016, 52, 3), (4, 89)),
    ((2016, 12, 30), 365, (2016, 52, 5), (4, 91)),
    ((2019, 1, 1), 1, (2019, 1, 2), (1, 1)),
    ((2019, 1, 3), 3, (2019, 1, 4), (1, 3)),
    ((2019, 2, 28), 59, (2019, 9, 4), (1, 59)),
    ((2019, 3, 31), 90, (2019, 13, 7), (1, 90)),
    ((2019, 6, 30), 181, (2019, 26, 7), (2, 91)),
    ((2019, 9, 30), 273, (2019, 40, 1), (3, 92)),
    ((2019, 12, 28), 362, (2019, 52, 6), (4, 89)),
    ((2019, 12, 30), 364, (2020, 1, 1), (4, 91)),
    ((2020, 1, 1), 1, (2020, 1, 3), (1, 1)),
    ((2020, 1, 3), 3, (2020, 1, 5), (1, 3)),
    ((2020, 2, 28), 59, (2020, 9, 5), (1, 59)),
    ((2020, 3, 1), 61, (2020, 9, 7), (1, 61)),
    ((2020, 4, 1), 92, (2020, 14, 3), (2, 1)),
    ((2020, 7, 1), 183, (2020, 27, 3), (3, 1)),
    ((2020, 10, 1), 275, (2020, 40, 4), (4, 1)),
    ((2020, 12, 29), 364, (2020, 53, 2), (4, 90)),
    ((2020, 12, 31), 366, (2020, 53, 4), (4, 92)),
    ((2021, 1, 2), 2, (2020, 53, 6), (1, 2)),
    ((2021, 1, 4), 4, (2021, 1, 1), (1, 4)),
    ((2021, 3, 1), 60, (2021, 9, 1), (1, 60)),
    ((2021, 4, 1), 91, (2021, 13, 4), (2, 1)),
    ((2021, 7, 1), 182, (2021, 26, 4), (3, 1)),
    ((2021, 10, 1), 274, (2021, 39, 5), (4, 1)),
    ((2021, 12, 29), 363, (2021, 52, 3), (4, 90)),
    ((2021, 12, 31), 365, (2021, 52, 5), (4, 92)),
    ((2100, 1, 2), 2, (2099, 53, 6), (1, 2)),
    ((2100, 1, 4), 4, (2100, 1, 1), (1, 4)),
    ((2100, 3, 1), 60, (2100, 9, 1), (1, 60)),
    ((2100, 4, 1), 91, (2100, 13, 4), (2, 1)),
    ((2100, 7, 1), 182, (2100, 26, 4), (3, 1)),
    ((2100, 10, 1), 274, (2100, 39, 5), (4, 1)),
    ((2100, 12, 29), 363, (2100, 52, 3), (4, 90)),
    ((2100, 12, 31), 365, (2100, 52, 5), (4, 92)),
    ((2400, 1, 2), 2, (2399, 52, 7), (1, 2)),
    ((2400, 1, 4), 4, (2400, 1, 2), (1, 4)),
    ((2400, 2, 29), 60, (2400, 9, 2), (1, 60)),
    ((9999, 1, 1), 1, (9998, 53, 5), (1, 1)),
    ((9999, 12, 31), 365, (9999, 52, 5), (4, 92)),
];

fn calendar(row: &Row) -> CalendarDate {
    let ((y, m, d), _, _, _) = *row;
    CalendarDate::new(y, m, d)
}

#[test]
fn test_vector_table_is_large_enough() {
    assert!(VECTORS.len() >= 100);
}

#[test]
fn test_calendar_text() {
    for row in VECTORS {
        let c = calendar(row);
        let extended = format!("{:04}-{:02}-{:02}", c.year, c.month, c.day);
        let basic = format!("{:04}{:02}{:02}", c.year, c.month, c.day);
        assert_eq!(parse_date(&extended).unwrap(), DateLike::Calendar(c));
        assert_eq!(parse_date(&basic).unwrap(), DateLike::Calendar(c));
    }
}

#[test]
fn test_ordinal_text() {
    for row in VECTORS {
        let c = calendar(row);
        let day = row.1;
        let extended = format!("{:04}-{:03}", c.year, day);
        let basic = format!("{:04}{:03}", c.year, day);
        for text in [extended, basic] {
            let parsed = parse_date(&text).unwrap();
            assert_eq!(parsed, DateLike::Ordinal(OrdinalDate { year: c.year, day }));
            assert_eq!(parsed.to_calendar_date(), c, "{text}");
        }
        assert_eq!(c.to_ordinal_date(), OrdinalDate { year: c.year, day });
    }
}

#[test]
fn test_week_text() {
    for row in VECTORS {
        let c = calendar(row);
        let (year, week, weekday) = row.2;
        let expected = WeekDate {
            year,
            week,
            weekday,
        };
        let extended = format!("{year:04}-W{week:02}-{weekday}");
        let basic = format!("{year:04}W{week:02}{weekday}");
        for text in [extended, basic] {
            let parsed = parse_date(&text).unwrap();
            assert_eq!(parsed, DateLike::Week(expected));
            assert_eq!(parsed.to_calendar_date(), c, "{text}");
        }
        assert_eq!(c.to_week_date(), expected, "{c:?}");
        assert_eq!(c.weekday(), weekday);
    }
}

#[test]
fn test_quarter_text() {
    for row in VECTORS {
        let c = calendar(row);
        let (quarter, day) = row.3;
        let expected = QuarterDate {
            year: c.year,
            quarter,
            day,
        };
        let extended = format!("{:04}-Q{quarter}-{day:02}", c.year);
        let basic = format!("{:04}Q{quarter}{day:02}", c.year);
        for text in [extended, basic] {
            let parsed = parse_date(&text).unwrap();
            assert_eq!(parsed, DateLike::Quarter(expected));
            assert_eq!(parsed.to_calendar_date(), c, "{text}");
        }
        assert_eq!(c.to_quarter_date(), expected);
    }
}
