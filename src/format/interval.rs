//! Interval formatting
//!
//! Renders both endpoints of a span with one shared configuration and
//! joins them into a range phrase.

use chrono::{DateTime, Utc};

use crate::calendar::Calendar;
use crate::interval::DateInterval;

use super::style::{DateStyle, TimeStyle};
use super::DateFormatter;

/// Renders date intervals as text.
///
/// Both endpoints are formatted with the same settings and joined with
/// an en dash. Endpoints that render identically at the configured
/// resolution appear once, so a short interval under a date-only style
/// reads as a single date.
#[derive(Debug, Clone, Default)]
pub struct IntervalFormatter {
    pub date_style: DateStyle,
    pub time_style: TimeStyle,
    /// Template whose fields pick a locale layout for both endpoints,
    /// overriding the styles.
    pub template: Option<String>,
    pub calendar: Calendar,
}

impl IntervalFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter using style presets for both endpoints.
    pub fn styled(date_style: DateStyle, time_style: TimeStyle) -> Self {
        Self {
            date_style,
            time_style,
            ..Self::default()
        }
    }

    /// Formatter mapping a template's fields onto the locale's layout.
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Replace the calendar, keeping the rest of the configuration.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Render an interval's endpoints.
    #[must_use]
    pub fn string_from_interval(&self, interval: DateInterval) -> String {
        self.string_between(interval.start, interval.end)
    }

    /// Render the span from one instant to another.
    #[must_use]
    pub fn string_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        let formatter = self.endpoint_formatter();
        let from = formatter.format(start);
        let to = formatter.format(end);
        if from == to {
            return from;
        }
        format!("{from} – {to}")
    }

    fn endpoint_formatter(&self) -> DateFormatter {
        DateFormatter {
            date_style: self.date_style,
            time_style: self.time_style,
            localized_template: self.template.clone(),
            calendar: self.calendar,
            ..DateFormatter::default()
        }
    }
}
