use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for date comparisons.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses an ISO-ish date string. Naive forms are read as UTC and a bare
/// date is midnight UTC.
pub fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// True when `date` falls at or after `now`. Unparseable input is never
/// upcoming.
pub fn is_greater_than_today(date: &str, now: DateTime<Utc>) -> bool {
    match parse_date(date) {
        Some(parsed) => parsed >= now,
        None => false,
    }
}

/// Renders a listing label such as `April 20th, 2023`.
pub fn format_date(date: &str) -> Option<String> {
    let parsed = parse_date(date)?;
    let day = parsed.day();
    let month = MONTH_NAMES[parsed.month0() as usize];

    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };

    Some(format!("{month} {day}{suffix}, {}", parsed.year()))
}
