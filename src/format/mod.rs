//! Date and duration formatting
//!
//! This module turns instants into text and back. [`DateFormatter`] covers
//! the three pattern sources, checked in order:
//! - a fixed strftime template, used verbatim
//! - a localized template, mapped onto the locale's own layout
//! - style presets for the date and time halves
//!
//! [`Iso8601Formatter`] assembles ISO 8601 output from option flags,
//! [`IntervalFormatter`] joins a span's endpoints into a range phrase, and
//! [`DurationFormatter`] renders second counts as unit phrases. Formatting
//! never fails: invalid templates are logged and echoed back, while
//! parsing reports failure as `None`.

pub mod duration;
pub mod interval;
pub mod iso8601;
pub mod relative;
pub mod style;
pub mod template;

use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::Calendar;

pub use duration::{DurationFormatter, DurationUnit, UnitsStyle, ZeroFormattingBehavior};
pub use interval::IntervalFormatter;
pub use iso8601::{Iso8601Formatter, Iso8601Options};
pub use relative::{format_human_date, format_human_datetime, relative_day_phrase};
pub use style::{DateStyle, FormatContext, TimeStyle};
pub use template::{validate_template, TemplateError};

/// Renders instants as text and parses text back into instants.
///
/// The calendar supplies the time zone and locale the output is written
/// in. A fixed template takes precedence over a localized template, which
/// takes precedence over the style presets.
#[derive(Debug, Clone, Default)]
pub struct DateFormatter {
    pub date_style: DateStyle,
    pub time_style: TimeStyle,
    pub calendar: Calendar,
    /// Template whose fields pick a locale layout. The locale keeps its
    /// own field order.
    pub localized_template: Option<String>,
    /// Exact strftime template, used as given.
    pub fixed_template: Option<String>,
    /// Replace today, yesterday, and tomorrow with phrases in styled
    /// output.
    pub uses_relative_phrases: bool,
    /// Let parsing fall back through the common layouts when the active
    /// pattern rejects the text.
    pub lenient: bool,
    pub context: FormatContext,
    /// Date completing time-only parses, the Unix epoch when unset.
    pub default_date: Option<DateTime<Utc>>,
}

impl DateFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter using style presets.
    pub fn styled(date_style: DateStyle, time_style: TimeStyle) -> Self {
        Self {
            date_style,
            time_style,
            ..Self::default()
        }
    }

    /// Formatter mapping a template's fields onto the locale's layout.
    pub fn with_localized_template(template: impl Into<String>) -> Self {
        Self {
            localized_template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Formatter using an exact strftime template.
    pub fn with_fixed_template(template: impl Into<String>) -> Self {
        Self {
            fixed_template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Replace the calendar, keeping the rest of the configuration.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// The pattern currently in effect, empty when nothing is configured.
    #[must_use]
    pub fn active_pattern(&self) -> String {
        if let Some(template) = &self.fixed_template {
            return template.clone();
        }
        if let Some(template) = &self.localized_template {
            return template::localized_layout(template).to_string();
        }
        let date = style::date_pattern(self.date_style);
        let time = style::time_pattern(self.time_style);
        match (date.is_empty(), time.is_empty()) {
            (false, false) => format!("{date}, {time}"),
            (false, true) => date.to_string(),
            (true, false) => time.to_string(),
            (true, true) => String::new(),
        }
    }

    /// Render an instant. Both styles set to `None` with no template
    /// yields the empty string.
    #[must_use]
    pub fn format(&self, date: DateTime<Utc>) -> String {
        let time_zone = self.calendar.time_zone;
        let locale = self.calendar.locale;

        if let Some(template) = &self.fixed_template {
            let text = template::format_fixed(date, template, time_zone, locale);
            return style::apply_context(text, self.context);
        }
        if let Some(template) = &self.localized_template {
            let layout = template::localized_layout(template);
            if layout.is_empty() {
                return String::new();
            }
            let text = template::format_fixed(date, layout, time_zone, locale);
            return style::apply_context(text, self.context);
        }

        let date_part = self.styled_date_part(date);
        let time_pattern = style::time_pattern(self.time_style);
        let time_part = if time_pattern.is_empty() {
            None
        } else {
            Some(template::format_fixed(date, time_pattern, time_zone, locale))
        };

        let text = match (date_part, time_part) {
            (Some(StyledDate::Phrase(phrase)), Some(time)) => format!("{phrase} at {time}"),
            (Some(StyledDate::Formatted(day)), Some(time)) => format!("{day}, {time}"),
            (Some(StyledDate::Phrase(phrase)), None) => phrase.to_string(),
            (Some(StyledDate::Formatted(day)), None) => day,
            (None, Some(time)) => time,
            (None, None) => String::new(),
        };
        style::apply_context(text, self.context)
    }

    /// Parse text against the active pattern, trying the common layouts
    /// as well when lenient. `None` when nothing matches.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let time_zone = self.calendar.time_zone;
        let pattern = self.active_pattern();
        let parsed = template::parse_fixed(text, &pattern, time_zone, self.default_date);
        if self.lenient {
            return parsed.or_else(|| template::parse_lenient(text, time_zone));
        }
        parsed
    }

    /// Localized month names, January first.
    #[must_use]
    pub fn month_symbols(&self) -> Vec<String> {
        self.month_names("%B")
    }

    /// Abbreviated month names, January first.
    #[must_use]
    pub fn short_month_symbols(&self) -> Vec<String> {
        self.month_names("%b")
    }

    /// Localized weekday names, Sunday first.
    #[must_use]
    pub fn weekday_symbols(&self) -> Vec<String> {
        self.weekday_names("%A")
    }

    /// Abbreviated weekday names, Sunday first.
    #[must_use]
    pub fn short_weekday_symbols(&self) -> Vec<String> {
        self.weekday_names("%a")
    }

    fn month_names(&self, pattern: &str) -> Vec<String> {
        let locale = self.calendar.locale;
        (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(2021, month, 1))
            .map(|date| date.format_localized(pattern, locale).to_string())
            .collect()
    }

    fn weekday_names(&self, pattern: &str) -> Vec<String> {
        let locale = self.calendar.locale;
        // 2021-08-01 fell on a Sunday
        (1..=7)
            .filter_map(|day| NaiveDate::from_ymd_opt(2021, 8, day))
            .map(|date| date.format_localized(pattern, locale).to_string())
            .collect()
    }

    fn styled_date_part(&self, date: DateTime<Utc>) -> Option<StyledDate> {
        let pattern = style::date_pattern(self.date_style);
        if pattern.is_empty() {
            return None;
        }
        let time_zone = self.calendar.time_zone;
        if self.uses_relative_phrases {
            let today = time_zone.civil(crate::datetime::now()).date();
            let target = time_zone.civil(date).date();
            if let Some(phrase) = relative::relative_day_phrase(target, today) {
                return Some(StyledDate::Phrase(phrase));
            }
        }
        Some(StyledDate::Formatted(template::format_fixed(
            date,
            pattern,
            time_zone,
            self.calendar.locale,
        )))
    }
}

enum StyledDate {
    Phrase(&'static str),
    Formatted(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEMPLATE_DATETIME;

    #[test]
    fn test_fixed_template_wins_over_styles() {
        let formatter = DateFormatter {
            fixed_template: Some(TEMPLATE_DATETIME.to_string()),
            ..DateFormatter::styled(DateStyle::Full, TimeStyle::Full)
        };
        assert_eq!(formatter.active_pattern(), TEMPLATE_DATETIME);
    }

    #[test]
    fn test_styled_pattern_joins_both_halves() {
        let formatter = DateFormatter::styled(DateStyle::Long, TimeStyle::Medium);
        assert_eq!(formatter.active_pattern(), "%-d %B %Y, %X");
    }

    #[test]
    fn test_suppressed_styles_leave_no_pattern() {
        let formatter = DateFormatter::styled(DateStyle::None, TimeStyle::None);
        assert_eq!(formatter.active_pattern(), "");
        assert_eq!(formatter.format(crate::datetime::unix_epoch()), "");
    }
}
