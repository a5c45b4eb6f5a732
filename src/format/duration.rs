//! Duration formatting
//!
//! Renders second counts as unit phrases ("1 hour, 10 minutes") or
//! positional time ("1:10:00"). Month and year use the documented average
//! lengths rather than calendar math, and unit names are English.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::components::DateComponents;
use crate::constants::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_SECOND,
    SECONDS_PER_WEEK, SECONDS_PER_YEAR,
};

/// Units the formatter may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl DurationUnit {
    /// All units, largest first.
    pub const DESCENDING: [DurationUnit; 7] = [
        DurationUnit::Year,
        DurationUnit::Month,
        DurationUnit::Week,
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    fn seconds(self) -> f64 {
        match self {
            Self::Year => SECONDS_PER_YEAR,
            Self::Month => SECONDS_PER_MONTH,
            Self::Week => SECONDS_PER_WEEK,
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => SECONDS_PER_SECOND,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Year => "yr",
            Self::Month => "mo",
            Self::Week => "wk",
            Self::Day => "day",
            Self::Hour => "hr",
            Self::Minute => "min",
            Self::Second => "sec",
        }
    }

    fn short_plural(self) -> &'static str {
        match self {
            Self::Year => "yrs",
            Self::Month => "mos",
            Self::Week => "wks",
            Self::Day => "days",
            Self::Hour => "hr",
            Self::Minute => "min",
            Self::Second => "sec",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "mo",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }
}

/// How units are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsStyle {
    /// "1:10:00"
    Positional,
    /// "1h 10m"
    Abbreviated,
    /// "1hr 10min"
    Brief,
    /// "1 hr, 10 min"
    Short,
    /// "1 hour, 10 minutes"
    Full,
}

impl Default for UnitsStyle {
    fn default() -> Self {
        Self::Positional
    }
}

/// What happens to zero-valued units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroFormattingBehavior {
    /// Drop every zero unit. Positional output instead drops leading
    /// zeros and pads the remaining slots.
    Default,
    DropLeading,
    DropMiddle,
    DropTrailing,
    DropAll,
    /// Keep every unit and zero-pad positional output.
    Pad,
}

impl Default for ZeroFormattingBehavior {
    fn default() -> Self {
        Self::Default
    }
}

/// Formats second counts as unit phrases.
#[derive(Debug, Clone)]
pub struct DurationFormatter {
    /// Units the output may use.
    pub allowed_units: Vec<DurationUnit>,
    pub units_style: UnitsStyle,
    pub zero_formatting_behavior: ZeroFormattingBehavior,
    /// Cap on rendered units, 0 meaning no cap.
    pub maximum_unit_count: usize,
    /// Fold the largest allowed unit into the next one down, so an hour
    /// and a half reads "90 minutes".
    pub collapses_largest_unit: bool,
    /// Prefix "About " to mark the value approximate.
    pub includes_approximation_phrase: bool,
    /// Suffix " remaining" for countdown phrasing.
    pub includes_time_remaining_phrase: bool,
}

impl Default for DurationFormatter {
    fn default() -> Self {
        Self {
            allowed_units: vec![DurationUnit::Hour, DurationUnit::Minute, DurationUnit::Second],
            units_style: UnitsStyle::Positional,
            zero_formatting_behavior: ZeroFormattingBehavior::Default,
            maximum_unit_count: 0,
            collapses_largest_unit: false,
            includes_approximation_phrase: false,
            includes_time_remaining_phrase: false,
        }
    }
}

impl DurationFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter with the given units style and the default settings.
    pub fn styled(units_style: UnitsStyle) -> Self {
        Self {
            units_style,
            ..Self::default()
        }
    }

    /// Render a second count.
    #[must_use]
    pub fn string_from_seconds(&self, seconds: f64) -> String {
        let negative = seconds < 0.0;
        let breakdown = self.breakdown(seconds.abs());
        let rendered = match self.units_style {
            UnitsStyle::Positional => self.render_positional(&breakdown),
            _ => self.render_units(&breakdown),
        };
        let mut out = String::new();
        if self.includes_approximation_phrase {
            out.push_str("About ");
        }
        if negative {
            out.push('-');
        }
        out.push_str(&rendered);
        if self.includes_time_remaining_phrase {
            out.push_str(" remaining");
        }
        out
    }

    /// Render the span between two instants.
    #[must_use]
    pub fn string_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        self.string_from_seconds(crate::datetime::duration_to_seconds(
            end.signed_duration_since(start),
        ))
    }

    /// Render the unit fields a component record already carries, without
    /// normalizing them.
    #[must_use]
    pub fn string_from_components(&self, components: &DateComponents) -> String {
        let pairs = [
            (DurationUnit::Year, components.year.map(i64::from)),
            (DurationUnit::Month, components.month.map(i64::from)),
            (DurationUnit::Day, components.day.map(i64::from)),
            (DurationUnit::Hour, components.hour.map(i64::from)),
            (DurationUnit::Minute, components.minute.map(i64::from)),
            (DurationUnit::Second, components.second.map(i64::from)),
        ];
        let breakdown: Vec<(DurationUnit, i64)> = pairs
            .into_iter()
            .filter_map(|(unit, value)| value.map(|v| (unit, v)))
            .collect();
        match self.units_style {
            UnitsStyle::Positional => self.render_positional(&breakdown),
            _ => self.render_units(&breakdown),
        }
    }

    /// Split seconds over the allowed units, largest first. The smallest
    /// unit rounds, the rest floor.
    fn breakdown(&self, seconds: f64) -> Vec<(DurationUnit, i64)> {
        let mut units: Vec<DurationUnit> = DurationUnit::DESCENDING
            .into_iter()
            .filter(|unit| self.allowed_units.contains(unit))
            .collect();
        if units.is_empty() {
            units.push(DurationUnit::Second);
        }
        if self.collapses_largest_unit && units.len() > 1 {
            units.remove(0);
        }
        let last = units.len() - 1;
        let mut remaining = seconds;
        let mut out = Vec::with_capacity(units.len());
        for (index, unit) in units.iter().enumerate() {
            let value = if index == last {
                (remaining / unit.seconds()).round() as i64
            } else {
                (remaining / unit.seconds()).floor() as i64
            };
            remaining -= value as f64 * unit.seconds();
            out.push((*unit, value));
        }
        out
    }

    /// "H:MM:SS" output. Units above hours fold into the hour count since
    /// the positional layout has no slot for them.
    fn render_positional(&self, breakdown: &[(DurationUnit, i64)]) -> String {
        let mut hours: i64 = 0;
        let mut minutes: i64 = 0;
        let mut seconds: i64 = 0;
        let mut has_minutes = false;
        let mut has_seconds = false;
        for (unit, value) in breakdown {
            match unit {
                DurationUnit::Minute => {
                    minutes += value;
                    has_minutes = true;
                }
                DurationUnit::Second => {
                    seconds += value;
                    has_seconds = true;
                }
                _ => hours += value * (unit.seconds() / SECONDS_PER_HOUR).round() as i64,
            }
        }

        let pad = matches!(self.zero_formatting_behavior, ZeroFormattingBehavior::Pad);
        let mut parts: Vec<String> = Vec::new();
        if hours != 0 || pad || !(has_minutes || has_seconds) {
            parts.push(if pad { format!("{hours:02}") } else { hours.to_string() });
        }
        if has_minutes || has_seconds {
            if parts.is_empty() {
                parts.push(minutes.to_string());
            } else {
                parts.push(format!("{minutes:02}"));
            }
        }
        if has_seconds {
            if parts.is_empty() {
                parts.push(seconds.to_string());
            } else {
                parts.push(format!("{seconds:02}"));
            }
        }
        parts.join(":")
    }

    /// Worded output with the configured zero handling and unit cap.
    fn render_units(&self, breakdown: &[(DurationUnit, i64)]) -> String {
        use ZeroFormattingBehavior as Zero;

        let mut entries: Vec<(DurationUnit, i64)> = breakdown.to_vec();
        let behavior = self.zero_formatting_behavior;
        if !entries.is_empty() && !matches!(behavior, Zero::Pad) {
            let first_nonzero = entries.iter().position(|(_, value)| *value != 0);
            let last_nonzero = entries.iter().rposition(|(_, value)| *value != 0);
            match (first_nonzero, last_nonzero) {
                (Some(first), Some(last)) => {
                    entries = entries
                        .iter()
                        .enumerate()
                        .filter(|(index, (_, value))| {
                            *value != 0
                                || match behavior {
                                    Zero::Default | Zero::DropAll => false,
                                    Zero::DropLeading => *index > first,
                                    Zero::DropMiddle => *index < first || *index > last,
                                    Zero::DropTrailing => *index < last,
                                    Zero::Pad => true,
                                }
                        })
                        .map(|(_, entry)| *entry)
                        .collect();
                }
                _ => {
                    // All zero: keep only the smallest unit.
                    entries = entries.last().map(|entry| vec![*entry]).unwrap_or_default();
                }
            }
        }

        if self.maximum_unit_count > 0 && entries.len() > self.maximum_unit_count {
            entries.truncate(self.maximum_unit_count);
        }

        let rendered: Vec<String> = entries
            .iter()
            .map(|(unit, value)| match self.units_style {
                UnitsStyle::Full => {
                    if *value == 1 {
                        format!("{value} {}", unit.name())
                    } else {
                        format!("{value} {}s", unit.name())
                    }
                }
                UnitsStyle::Short => {
                    if *value == 1 {
                        format!("{value} {}", unit.short_name())
                    } else {
                        format!("{value} {}", unit.short_plural())
                    }
                }
                UnitsStyle::Brief => format!("{value}{}", unit.short_name()),
                UnitsStyle::Positional | UnitsStyle::Abbreviated => {
                    format!("{value}{}", unit.abbreviation())
                }
            })
            .collect();

        let separator = match self.units_style {
            UnitsStyle::Full | UnitsStyle::Short => ", ",
            _ => " ",
        };
        rendered.join(separator)
    }
}
