use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Canonical timestamp format of a log line: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
}

static RE_LINE: Lazy<Regex> = Lazy::new(|| {
    // date-time, one space, level token (any non-whitespace run), one space, message
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) (\S+) (.+)$").unwrap()
});

/// Split one raw line into `(timestamp_string, level, message)` without
/// interpreting the timestamp yet.
///
/// The line is trimmed first and the pattern is anchored, so any leading
/// text before the date makes the line unmatchable. Returns `None` for
/// lines that do not have the expected shape; that is a skip signal for
/// the caller, not an error.
pub fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    let caps = RE_LINE.captures(line.trim())?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ))
}

/// Strict parse of the canonical timestamp, interpreted as UTC.
///
/// The line regex only checks digit shape, so this is where impossible
/// dates (day 32, month 13) get rejected.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Parse one raw line into a [`LogEvent`], or `None` if the line does not
/// match the expected shape or its timestamp is not a real instant.
pub fn parse_line(line: &str) -> Option<LogEvent> {
    let (ts, level, message) = split_line(line)?;
    let timestamp = parse_timestamp(ts)?;
    Some(LogEvent {
        timestamp,
        level: level.to_string(),
        message: message.to_string(),
    })
}
