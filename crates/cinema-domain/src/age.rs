//! Human readable age of a post ("3 d", "2 hr").

use chrono::{DateTime, Datelike, Months, Utc};

/// Age of `posted` at `now`, expressed in its largest non-zero unit.
///
/// Units are `yr`, `mo`, `d`, `hr`, `min` and `sec`. Timestamps in the
/// future and sub-second ages render as `"0 sec"`.
pub fn posted_ago(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if posted >= now {
        return "0 sec".to_owned();
    }
    let months = whole_months_between(posted, now);
    if months >= 12 {
        return format!("{} yr", months / 12);
    }
    if months > 0 {
        return format!("{months} mo");
    }
    let elapsed = now - posted;
    let parts = [
        (elapsed.num_days(), "d"),
        (elapsed.num_hours() % 24, "hr"),
        (elapsed.num_minutes() % 60, "min"),
        (elapsed.num_seconds() % 60, "sec"),
    ];
    parts
        .iter()
        .find(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value} {unit}"))
        .unwrap_or_else(|| "0 sec".to_owned())
}

fn whole_months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    while months > 0 {
        match from.checked_add_months(Months::new(months as u32)) {
            Some(shifted) if shifted <= to => break,
            _ => months -= 1,
        }
    }
    months.max(0) as u32
}
