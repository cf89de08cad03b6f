use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Last-commit information as supplied by the data source: either an
/// absolute timestamp or a relative label such as `"2 days ago"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastCommit {
    At(DateTime<Utc>),
    Relative(String),
}

impl LastCommit {
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(timestamp) => Self::At(timestamp.with_timezone(&Utc)),
            Err(_) => Self::Relative(raw.trim().to_string()),
        }
    }

    /// Absolute commit time. Relative labels are resolved against `now`, so
    /// the result only repeats across calls when `now` does. Labels that
    /// reach outside the representable date range resolve to `None`.
    pub fn resolve(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::At(timestamp) => Some(*timestamp),
            Self::Relative(label) => {
                parse_relative(label).and_then(|offset| now.checked_sub_signed(offset))
            }
        }
    }

    /// Whole days between the commit and `now`; future timestamps count as 0.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.resolve(now)
            .map(|timestamp| (now - timestamp).num_days().max(0))
    }
}

impl fmt::Display for LastCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(timestamp) => write!(f, "{}", timestamp.format("%Y-%m-%d %H:%M UTC")),
            Self::Relative(label) => f.write_str(label),
        }
    }
}

impl Default for LastCommit {
    fn default() -> Self {
        Self::Relative(String::new())
    }
}

pub fn parse_relative(label: &str) -> Option<Duration> {
    let normalized = label.trim().to_lowercase();
    match normalized.as_str() {
        "just now" | "now" | "today" => return Some(Duration::zero()),
        "yesterday" => return Some(Duration::days(1)),
        _ => {}
    }

    let mut text = normalized.as_str();
    for prefix in ["<", "~", "about", "over", "almost"] {
        text = text.strip_prefix(prefix).unwrap_or(text).trim_start();
    }
    let text = text.strip_suffix("ago").unwrap_or(text).trim_end();

    let mut parts = text.split_whitespace();
    let amount = match parts.next()? {
        "a" | "an" => 1,
        digits => digits.parse::<i64>().ok()?,
    };
    let unit = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let unit = unit.strip_suffix('s').unwrap_or(unit);
    match unit {
        "sec" | "second" => Duration::try_seconds(amount),
        "min" | "minute" => Duration::try_minutes(amount),
        "hr" | "hour" => Duration::try_hours(amount),
        "day" => Duration::try_days(amount),
        "week" => Duration::try_weeks(amount),
        "month" => amount.checked_mul(30).and_then(Duration::try_days),
        "year" => amount.checked_mul(365).and_then(Duration::try_days),
        _ => None,
    }
}
