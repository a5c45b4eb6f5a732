//! Relative day phrasing
//!
//! Human-readable phrasing for dates near a reference day, the way task
//! lists display due dates ("yesterday", "next Friday", "in 12 days").
//! Today is always an explicit parameter so the phrasing stays pure.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Phrase for dates within a day of the reference. `None` outside that
/// window.
pub fn relative_day_phrase(date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    match (date - today).num_days() {
        -1 => Some("yesterday"),
        0 => Some("today"),
        1 => Some("tomorrow"),
        _ => None,
    }
}

/// Human-readable phrasing for a date relative to the reference day.
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    if let Some(phrase) = relative_day_phrase(date, today) {
        return phrase.to_string();
    }

    let days_diff = (date - today).num_days();
    match days_diff {
        diff if diff > 1 && diff <= 7 => {
            // Within the next week - show day name
            format!("next {}", weekday_name(date.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            // Within the past week - show day name
            format!("last {}", weekday_name(date.weekday()))
        }
        diff if diff > 7 && diff <= 30 => {
            // Within the next month - show "in X days"
            format!("in {diff} days")
        }
        diff if (-30..-7).contains(&diff) => {
            // Within the past month - show "X days ago"
            format!("{} days ago", -diff)
        }
        _ => {
            // For dates further out, show the actual date, with the year
            // only when it differs
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// "{date} at {HH:MM}" phrasing for a timestamped moment.
pub fn format_human_datetime(datetime: NaiveDateTime, today: NaiveDate) -> String {
    format!(
        "{} at {}",
        format_human_date(datetime.date(), today),
        datetime.format("%H:%M")
    )
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
