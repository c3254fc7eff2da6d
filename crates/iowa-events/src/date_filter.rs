use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Month tokens in lookup order. Full names come first, so a text naming
/// several months resolves to the earliest one in this list that yields a date.
const MONTH_TOKENS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Day of month is capped so every month yields a valid date.
const MAX_DAY: u32 = 28;

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20(\d{2})").expect("invalid regex: year"));
static RE_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}").expect("invalid regex: day"));

/// Decides whether a free-text date refers to `today` or later.
///
/// The check is fail-open: missing text, text without a month token, a month
/// without a year, or an unbuildable date all count as upcoming. Only the
/// first number in the text is read as the day, so `"July 30 - August 2, 2026"`
/// is evaluated as July 30.
pub fn is_future_event(date_text: Option<&str>, today: NaiveDate) -> bool {
    let Some(text) = date_text.filter(|t| !t.is_empty()) else {
        return true;
    };
    let lowered = text.to_lowercase();

    for &(token, month) in MONTH_TOKENS {
        if !lowered.contains(token) {
            continue;
        }
        let Some(year) = extract_year(text) else {
            continue;
        };
        let day = extract_day(text).unwrap_or(1).min(MAX_DAY);

        if let Some(event_date) = NaiveDate::from_ymd_opt(year, month, day) {
            return event_date >= today;
        }
    }

    true
}

fn extract_year(text: &str) -> Option<i32> {
    let caps = RE_YEAR.captures(text)?;
    caps[1].parse::<i32>().ok().map(|yy| 2000 + yy)
}

fn extract_day(text: &str) -> Option<u32> {
    RE_DAY.find(text)?.as_str().parse().ok()
}
