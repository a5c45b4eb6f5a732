//! Sparse calendar component records
//!
//! A component record carries only the fields a caller asked for or set;
//! everything else stays `None`. The calendar and zone used to interpret
//! the record travel with it when set, or come from the caller otherwise.

use chrono::Weekday;

use crate::calendar::Calendar;
use crate::timezone::TimeZone;

/// A calendrical field that can be extracted from an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentField {
    Era,
    Year,
    YearForWeekOfYear,
    Quarter,
    Month,
    WeekOfYear,
    WeekOfMonth,
    Weekday,
    WeekdayOrdinal,
    Day,
    DayOfYear,
    Hour,
    Minute,
    Second,
    Nanosecond,
    TimeZone,
    Calendar,
}

impl ComponentField {
    /// Every extractable field.
    pub const ALL: [ComponentField; 17] = [
        ComponentField::Era,
        ComponentField::Year,
        ComponentField::YearForWeekOfYear,
        ComponentField::Quarter,
        ComponentField::Month,
        ComponentField::WeekOfYear,
        ComponentField::WeekOfMonth,
        ComponentField::Weekday,
        ComponentField::WeekdayOrdinal,
        ComponentField::Day,
        ComponentField::DayOfYear,
        ComponentField::Hour,
        ComponentField::Minute,
        ComponentField::Second,
        ComponentField::Nanosecond,
        ComponentField::TimeZone,
        ComponentField::Calendar,
    ];

    /// The default extraction set: year through second.
    pub const DEFAULT: [ComponentField; 6] = [
        ComponentField::Year,
        ComponentField::Month,
        ComponentField::Day,
        ComponentField::Hour,
        ComponentField::Minute,
        ComponentField::Second,
    ];
}

/// A sparse record of calendar fields. Absent fields are unset, not zero.
///
/// Year is era-relative (positive in both eras, with [`era`](Self::era)
/// distinguishing them); weekdays are held as typed values rather than
/// numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateComponents {
    pub era: Option<i32>,
    pub year: Option<i32>,
    pub year_for_week_of_year: Option<i32>,
    pub quarter: Option<u32>,
    pub month: Option<u32>,
    pub week_of_year: Option<u32>,
    pub week_of_month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub weekday_ordinal: Option<u32>,
    pub day: Option<u32>,
    pub day_of_year: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub nanosecond: Option<u32>,
    /// Zone the record is interpreted in, when it carries its own.
    pub time_zone: Option<TimeZone>,
    /// Calendar the record is interpreted against, when it carries its own.
    pub calendar: Option<Calendar>,
}

impl DateComponents {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A date-only record.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// A date-and-time record.
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..Self::ymd(year, month, day)
        }
    }

    /// Numeric view of a field. Weekdays count from Monday = 1; the
    /// timezone and calendar fields have no numeric value.
    pub fn value_for(&self, field: ComponentField) -> Option<i64> {
        match field {
            ComponentField::Era => self.era.map(i64::from),
            ComponentField::Year => self.year.map(i64::from),
            ComponentField::YearForWeekOfYear => self.year_for_week_of_year.map(i64::from),
            ComponentField::Quarter => self.quarter.map(i64::from),
            ComponentField::Month => self.month.map(i64::from),
            ComponentField::WeekOfYear => self.week_of_year.map(i64::from),
            ComponentField::WeekOfMonth => self.week_of_month.map(i64::from),
            ComponentField::Weekday => self.weekday.map(|w| i64::from(w.number_from_monday())),
            ComponentField::WeekdayOrdinal => self.weekday_ordinal.map(i64::from),
            ComponentField::Day => self.day.map(i64::from),
            ComponentField::DayOfYear => self.day_of_year.map(i64::from),
            ComponentField::Hour => self.hour.map(i64::from),
            ComponentField::Minute => self.minute.map(i64::from),
            ComponentField::Second => self.second.map(i64::from),
            ComponentField::Nanosecond => self.nanosecond.map(i64::from),
            ComponentField::TimeZone | ComponentField::Calendar => None,
        }
    }

    /// Set a field from a numeric value. `None` clears the field, as does
    /// a value outside the field's numeric range. Numeric sets of the
    /// timezone and calendar fields are ignored.
    pub fn set_value(&mut self, field: ComponentField, value: Option<i64>) {
        match field {
            ComponentField::Era => self.era = value.and_then(|v| i32::try_from(v).ok()),
            ComponentField::Year => self.year = value.and_then(|v| i32::try_from(v).ok()),
            ComponentField::YearForWeekOfYear => {
                self.year_for_week_of_year = value.and_then(|v| i32::try_from(v).ok());
            }
            ComponentField::Quarter => self.quarter = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Month => self.month = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::WeekOfYear => self.week_of_year = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::WeekOfMonth => self.week_of_month = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Weekday => self.weekday = value.and_then(weekday_from_number),
            ComponentField::WeekdayOrdinal => {
                self.weekday_ordinal = value.and_then(|v| u32::try_from(v).ok());
            }
            ComponentField::Day => self.day = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::DayOfYear => self.day_of_year = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Hour => self.hour = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Minute => self.minute = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Second => self.second = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::Nanosecond => self.nanosecond = value.and_then(|v| u32::try_from(v).ok()),
            ComponentField::TimeZone | ComponentField::Calendar => {
                log::debug!("ignoring numeric set for non-numeric field {field:?}");
            }
        }
    }
}

/// Weekday for a Monday-based index 1..=7.
fn weekday_from_number(number: i64) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
