use chrono::{Local, NaiveDateTime, ParseResult, Timelike};

/// Layout of `entry_date` on disk and in the listing.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `2023-11-01 18:04:09`
pub fn format_entry_date(date: &NaiveDateTime) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}

pub fn parse_entry_date(value: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, ENTRY_DATE_FORMAT)
}

/// Current local time with the sub-second part dropped, matching what the store keeps.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
