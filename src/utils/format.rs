// Presentation helpers for profile values
use chrono::{Local, TimeZone};
use std::fmt::Display;

const UNKNOWN: &str = "Unknown";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// "12.50" + "rub" -> "12.50 RUB"
pub fn format_amount(amount: &str, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    if code.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", amount, code)
    }
}

pub fn format_date(unix_secs: i64) -> String {
    format_date_in(unix_secs, &Local)
}

pub fn format_date_time(unix_secs: i64) -> String {
    format_date_time_in(unix_secs, &Local)
}

pub fn format_date_in<Tz>(unix_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_timestamp(unix_secs, tz, DATE_FORMAT)
}

pub fn format_date_time_in<Tz>(unix_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_timestamp(unix_secs, tz, DATE_TIME_FORMAT)
}

fn format_timestamp<Tz>(unix_secs: i64, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if unix_secs <= 0 {
        return UNKNOWN.to_string();
    }
    match tz.timestamp_opt(unix_secs, 0).single() {
        Some(dt) => dt.format(pattern).to_string(),
        None => UNKNOWN.to_string(),
    }
}

pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
