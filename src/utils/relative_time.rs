use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use super::date_format::DateFormat;

const MILLIS_PER_SECOND: u64 = 1000;
const DAYS_PER_MONTH: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Month => "ヶ月",
            TimeUnit::Day => "日",
            TimeUnit::Hour => "時間",
            TimeUnit::Minute => "分",
            TimeUnit::Second => "秒",
        }
    }
}

/// Distance between two instants in its largest non-zero unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub magnitude: u64,
    pub unit: TimeUnit,
    pub is_past: bool,
}

/// Compares `target` against `now`, both in epoch milliseconds.
///
/// Months are a flat 30 days.
pub fn diff_millis(now: i64, target: i64) -> RelativeTime {
    let is_past = now > target;
    let delta = now.abs_diff(target);

    let seconds = delta / MILLIS_PER_SECOND;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / DAYS_PER_MONTH;

    let (magnitude, unit) = if months != 0 {
        (months, TimeUnit::Month)
    } else if days != 0 {
        (days, TimeUnit::Day)
    } else if hours != 0 {
        (hours, TimeUnit::Hour)
    } else if minutes != 0 {
        (minutes, TimeUnit::Minute)
    } else {
        (seconds, TimeUnit::Second)
    };

    RelativeTime {
        magnitude,
        unit,
        is_past,
    }
}

pub fn diff(now: NaiveDateTime, target: NaiveDateTime) -> RelativeTime {
    diff_millis(
        now.and_utc().timestamp_millis(),
        target.and_utc().timestamp_millis(),
    )
}

/// Renders e.g. `3日前` or `5分後`.
pub fn format_relative(relative: &RelativeTime) -> String {
    let direction = if relative.is_past { "前" } else { "後" };
    format!("{}{}{}", relative.magnitude, relative.unit.suffix(), direction)
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_relative(self))
    }
}

/// Years are first reduced to their offset from 1900; offsets below 2000
/// get 1900 added back, larger ones are printed as the offset itself.
fn display_year(year: i32) -> i32 {
    let legacy = year - 1900;
    if legacy < 2000 {
        legacy + 1900
    } else {
        legacy
    }
}

pub fn format_absolute<T: Datelike + Timelike>(dt: &T) -> String {
    format!(
        "{}-{:02}-{:02} {:02}:{:02}:{:02}",
        display_year(dt.year()),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

pub fn format_date<T: Datelike>(dt: &T) -> String {
    format!(
        "{}-{:02}-{:02}",
        display_year(dt.year()),
        dt.month(),
        dt.day()
    )
}

pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Absolute time followed by the relative distance from `now`, e.g.
/// `2024-01-02 03:04:05(3日前)` or `14:30(5分前)`.
///
/// Returns an empty string when `input` does not match `format`.
pub fn format_smart(input: &str, now: NaiveDateTime, format: &DateFormat) -> String {
    let Some(written) = format.parse(input) else {
        log::debug!("could not parse {input:?} with date format {format}");
        return String::new();
    };

    let relative = diff(now, written);
    let absolute = match relative.unit {
        TimeUnit::Month | TimeUnit::Day => format_absolute(&written),
        _ => format_time(&written),
    };

    format!("{absolute}({relative})")
}

pub fn format_smart_now(input: &str, format: &DateFormat) -> String {
    format_smart(input, Local::now().naive_local(), format)
}
