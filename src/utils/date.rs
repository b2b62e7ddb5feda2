use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reference date for the views: the `--today` override if given, the local date otherwise.
pub fn resolve_today(over: &Option<String>) -> AppResult<NaiveDate> {
    match over {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(today()),
    }
}

/// `"mars 2024"`.
pub fn month_label(year: i32, month: u32) -> String {
    let name = MONTHS_FR
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {year}")
}

/// `"12 mars 2024"`, used for ledger day headers.
pub fn long_date(d: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{} {}", d.day(), month_label(d.year(), d.month()))
}
