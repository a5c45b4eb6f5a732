//! Calendar configuration, component extraction and reconstruction
//!
//! The calendar decides how an instant maps to civil fields and back. All
//! of the actual date math lives in the collaborator: extraction reads the
//! collaborator's field accessors, reconstruction goes through its checked
//! constructors and local-time resolution, and their verdicts are
//! propagated verbatim.

use chrono::{DateTime, Datelike, Locale, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::components::{ComponentField, DateComponents};
use crate::constants::{ERA_BCE, ERA_CE};
use crate::locale;
use crate::timezone::TimeZone;

/// Supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarIdentifier {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Gregorian dates with ISO 8601 week conventions.
    Iso8601,
}

impl CalendarIdentifier {
    /// Look up a calendar system by name. `None` when unknown.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "gregorian" => Some(Self::Gregorian),
            "iso8601" => Some(Self::Iso8601),
            _ => None,
        }
    }
}

/// Calendar interpretation rules: the system plus the zone, locale, and
/// week configuration applied when mapping between instants and fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    pub identifier: CalendarIdentifier,
    pub time_zone: TimeZone,
    pub locale: Locale,
    /// First day of a week, used by positional week fields.
    pub first_weekday: Weekday,
    /// Days a week must have in the new year to count as week one.
    pub minimum_days_in_first_week: u8,
}

impl Calendar {
    /// Gregorian calendar in the given zone and locale.
    pub fn gregorian(time_zone: TimeZone, locale: Locale) -> Self {
        Self {
            identifier: CalendarIdentifier::Gregorian,
            time_zone,
            locale,
            first_weekday: Weekday::Sun,
            minimum_days_in_first_week: 1,
        }
    }

    /// ISO 8601 calendar (Monday weeks, four-day rule) in the given zone.
    pub fn iso8601(time_zone: TimeZone) -> Self {
        Self {
            identifier: CalendarIdentifier::Iso8601,
            time_zone,
            locale: Locale::POSIX,
            first_weekday: Weekday::Mon,
            minimum_days_in_first_week: 4,
        }
    }

    /// The process calendar: Gregorian with the environment's zone and
    /// locale resolved once.
    pub fn current() -> Self {
        Self::gregorian(TimeZone::current(), locale::current())
    }

    /// This calendar with a different zone.
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// This calendar with a different locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Extract the requested fields from an instant. Unrequested fields
    /// stay unset.
    pub fn components(&self, fields: &[ComponentField], date: DateTime<Utc>) -> DateComponents {
        let civil = self.time_zone.civil(date);
        let day = civil.date();
        let mut record = DateComponents::new();
        for field in fields {
            match field {
                ComponentField::Era => {
                    record.era = Some(if day.year_ce().0 { ERA_CE } else { ERA_BCE });
                }
                ComponentField::Year => record.year = Some(day.year_ce().1 as i32),
                ComponentField::YearForWeekOfYear => {
                    record.year_for_week_of_year = Some(day.iso_week().year());
                }
                ComponentField::Quarter => record.quarter = Some((day.month() - 1) / 3 + 1),
                ComponentField::Month => record.month = Some(day.month()),
                ComponentField::WeekOfYear => record.week_of_year = Some(day.iso_week().week()),
                ComponentField::WeekOfMonth => record.week_of_month = Some(self.week_of_month(day)),
                ComponentField::Weekday => record.weekday = Some(day.weekday()),
                ComponentField::WeekdayOrdinal => {
                    record.weekday_ordinal = Some((day.day() - 1) / 7 + 1);
                }
                ComponentField::Day => record.day = Some(day.day()),
                ComponentField::DayOfYear => record.day_of_year = Some(day.ordinal()),
                ComponentField::Hour => record.hour = Some(civil.hour()),
                ComponentField::Minute => record.minute = Some(civil.minute()),
                ComponentField::Second => record.second = Some(civil.second()),
                ComponentField::Nanosecond => record.nanosecond = Some(civil.nanosecond()),
                ComponentField::TimeZone => record.time_zone = Some(self.time_zone),
                ComponentField::Calendar => record.calendar = Some(*self),
            }
        }
        record
    }

    /// Resolve a component record to an instant. The record's own calendar
    /// and zone win over this one's when set. `None` when the fields do
    /// not name a representable date, the era is unknown, or the wall
    /// clock time does not exist in the zone.
    pub fn date_from_components(&self, components: &DateComponents) -> Option<DateTime<Utc>> {
        let calendar = components.calendar.unwrap_or(*self);
        let time_zone = components.time_zone.unwrap_or(calendar.time_zone);

        if !matches!(components.era, None | Some(ERA_BCE) | Some(ERA_CE)) {
            return None;
        }
        let date = Self::resolve_date(components)?;
        let naive = date.and_hms_nano_opt(
            components.hour.unwrap_or(0),
            components.minute.unwrap_or(0),
            components.second.unwrap_or(0),
            components.nanosecond.unwrap_or(0),
        )?;
        time_zone.resolve_local(naive)
    }

    /// True when the record names a representable date, checked by
    /// resolving it and re-extracting the date fields.
    pub fn is_valid_date(&self, components: &DateComponents) -> bool {
        let calendar = components.calendar.unwrap_or(*self);
        let calendar = Calendar {
            time_zone: components.time_zone.unwrap_or(calendar.time_zone),
            ..calendar
        };
        let Some(date) = calendar.date_from_components(components) else {
            return false;
        };
        let round = calendar.components(
            &[ComponentField::Year, ComponentField::Month, ComponentField::Day],
            date,
        );
        fn agrees<T: PartialEq>(provided: &Option<T>, resolved: &Option<T>) -> bool {
            provided.is_none() || provided == resolved
        }
        agrees(&components.year, &round.year)
            && agrees(&components.month, &round.month)
            && agrees(&components.day, &round.day)
    }

    /// Leap-year query, delegated to the date collaborator.
    pub fn is_leap_year(&self, year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|date| date.leap_year())
    }

    /// Positional week number within the month, counted from
    /// `first_weekday`.
    fn week_of_month(&self, date: NaiveDate) -> u32 {
        let first = date.with_day(1).unwrap_or(date);
        let lead = (7 + first.weekday().num_days_from_monday() as i32
            - self.first_weekday.num_days_from_monday() as i32)
            % 7;
        (lead as u32 + date.day() - 1) / 7 + 1
    }

    /// Civil date named by the record's date fields. Month and day win
    /// over day-of-year, which wins over week fields; missing pieces
    /// default to the first of the unit. Redundant fields are not
    /// cross-checked.
    fn resolve_date(components: &DateComponents) -> Option<NaiveDate> {
        if components.month.is_some() || components.day.is_some() {
            return NaiveDate::from_ymd_opt(
                Self::astronomical_year(components),
                components.month.unwrap_or(1),
                components.day.unwrap_or(1),
            );
        }
        if let Some(ordinal) = components.day_of_year {
            return NaiveDate::from_yo_opt(Self::astronomical_year(components), ordinal);
        }
        if components.week_of_year.is_some() || components.year_for_week_of_year.is_some() {
            let week_year = match components.year_for_week_of_year {
                Some(year) => year,
                None => Self::astronomical_year(components),
            };
            return NaiveDate::from_isoywd_opt(
                week_year,
                components.week_of_year.unwrap_or(1),
                components.weekday.unwrap_or(Weekday::Mon),
            );
        }
        NaiveDate::from_ymd_opt(Self::astronomical_year(components), 1, 1)
    }

    /// Astronomical year for the record's era-relative year field. Era
    /// validity is checked by the caller.
    fn astronomical_year(components: &DateComponents) -> i32 {
        let year = components.year.unwrap_or(1);
        if components.era == Some(ERA_BCE) {
            1 - year
        } else {
            year
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::gregorian(TimeZone::utc(), Locale::POSIX)
    }
}
