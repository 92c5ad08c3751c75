//! Time utilities: minute arithmetic, day names, timestamp formatting.

use chrono::{NaiveDateTime, TimeDelta, Timelike, Weekday};

pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed resampling step.
pub fn one_minute() -> TimeDelta {
    TimeDelta::minutes(1)
}

/// Truncate a timestamp to the start of its minute.
pub fn floor_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

pub fn format_ts(ts: &NaiveDateTime) -> String {
    ts.format(TS_FORMAT).to_string()
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// serde helper: `#[serde(serialize_with = "ts_serde::serialize")]`
pub mod ts_serde {
    use super::TS_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TS_FORMAT))
    }
}
