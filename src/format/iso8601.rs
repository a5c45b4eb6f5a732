//! ISO 8601 formatting with a fixed option set
//!
//! The options select which fields appear and which separators join them;
//! the pattern they assemble is handed to the formatter collaborator.
//! RFC 3339 output and parsing use the collaborator's dedicated paths.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::template;
use crate::timezone::TimeZone;

/// Which ISO 8601 fields and separators to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso8601Options {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    /// Week-based year and week number instead of month and day.
    pub week_of_year: bool,
    pub time: bool,
    pub time_zone: bool,
    pub space_between_date_and_time: bool,
    pub dash_separator_in_date: bool,
    pub colon_separator_in_time: bool,
    pub colon_separator_in_time_zone: bool,
    pub fractional_seconds: bool,
}

impl Iso8601Options {
    /// RFC 3339 layout: full date, "T", full time, colon offset.
    pub fn internet_date_time() -> Self {
        Self {
            year: true,
            month: true,
            day: true,
            week_of_year: false,
            time: true,
            time_zone: true,
            space_between_date_and_time: false,
            dash_separator_in_date: true,
            colon_separator_in_time: true,
            colon_separator_in_time_zone: true,
            fractional_seconds: false,
        }
    }

    /// Date fields only.
    pub fn full_date() -> Self {
        Self {
            time: false,
            time_zone: false,
            ..Self::internet_date_time()
        }
    }

    /// Time and offset fields only.
    pub fn full_time() -> Self {
        Self {
            year: false,
            month: false,
            day: false,
            ..Self::internet_date_time()
        }
    }

    /// Week-based date ("2021-W10-5").
    pub fn week_date() -> Self {
        Self {
            week_of_year: true,
            month: false,
            time: false,
            time_zone: false,
            ..Self::internet_date_time()
        }
    }

    /// The pattern these options assemble.
    pub fn pattern(&self) -> String {
        let date_separator = if self.dash_separator_in_date { "-" } else { "" };
        let mut date_parts: Vec<&str> = Vec::new();
        if self.week_of_year {
            if self.year {
                date_parts.push("%G");
            }
            date_parts.push("W%V");
            if self.day {
                date_parts.push("%u");
            }
        } else {
            if self.year {
                date_parts.push("%Y");
            }
            if self.month {
                date_parts.push("%m");
            }
            if self.day {
                date_parts.push("%d");
            }
        }
        let mut pattern = date_parts.join(date_separator);

        if self.time {
            if !pattern.is_empty() {
                pattern.push(if self.space_between_date_and_time { ' ' } else { 'T' });
            }
            pattern.push_str(if self.colon_separator_in_time {
                "%H:%M:%S"
            } else {
                "%H%M%S"
            });
            if self.fractional_seconds {
                pattern.push_str("%.3f");
            }
        }
        if self.time_zone {
            pattern.push_str(if self.colon_separator_in_time_zone { "%:z" } else { "%z" });
        }
        pattern
    }
}

impl Default for Iso8601Options {
    fn default() -> Self {
        Self::internet_date_time()
    }
}

/// ISO 8601 formatter bound to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso8601Formatter {
    pub options: Iso8601Options,
    pub time_zone: TimeZone,
}

impl Iso8601Formatter {
    /// RFC 3339 formatter in UTC.
    pub fn new() -> Self {
        Self {
            options: Iso8601Options::internet_date_time(),
            time_zone: TimeZone::utc(),
        }
    }

    pub fn with_options(options: Iso8601Options, time_zone: TimeZone) -> Self {
        Self { options, time_zone }
    }

    /// Render an instant.
    #[must_use]
    pub fn format(&self, date: DateTime<Utc>) -> String {
        if self.options == Iso8601Options::internet_date_time() && self.time_zone == TimeZone::utc()
        {
            // RFC 3339 fast path, trailing Z for UTC.
            return date.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        template::format_fixed(
            date,
            &self.options.pattern(),
            self.time_zone,
            chrono::Locale::POSIX,
        )
    }

    /// Parse text laid out with these options. `None` on mismatch.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Some(parsed) = template::parse_fixed(text, &self.options.pattern(), self.time_zone, None)
        {
            return Some(parsed);
        }
        if self.options.time_zone {
            // Covers the trailing-Z spelling the pattern path may reject.
            if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                return Some(parsed.with_timezone(&Utc));
            }
        }
        None
    }
}

impl Default for Iso8601Formatter {
    fn default() -> Self {
        Self::new()
    }
}
