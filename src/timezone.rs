//! Timezone selection over the IANA database
//!
//! A timezone is either a named zone backed by the bundled IANA database,
//! with full daylight-saving rules, or a fixed UTC offset with no
//! transitions. All offset and transition data comes from the zone
//! collaborator; this module only routes lookups and conversions.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone as _, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::constants::ABBREVIATION_TO_IDENTIFIER;

/// A timezone: a named IANA zone or a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZone {
    /// IANA zone with daylight-saving rules.
    Named(Tz),
    /// Constant offset, no transitions.
    Fixed(FixedOffset),
}

impl TimeZone {
    /// UTC.
    pub fn utc() -> Self {
        TimeZone::Named(Tz::UTC)
    }

    /// Resolve the process timezone once: the `TZ` environment variable
    /// when it names a known zone, otherwise the system clock's current
    /// offset.
    pub fn current() -> Self {
        if let Ok(name) = std::env::var("TZ") {
            let name = name.strip_prefix(':').unwrap_or(&name);
            if let Some(zone) = Self::from_identifier(name) {
                return zone;
            }
        }
        TimeZone::Fixed(*Local::now().offset())
    }

    /// Look up a zone by IANA identifier. `None` when unknown.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        identifier.parse::<Tz>().ok().map(TimeZone::Named)
    }

    /// Look up a zone by abbreviation ("CET", "PST"). `None` when the
    /// abbreviation is not in the table.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        ABBREVIATION_TO_IDENTIFIER
            .get(abbreviation)
            .and_then(|identifier| Self::from_identifier(identifier))
    }

    /// Fixed-offset zone from a UTC offset in seconds. `None` when the
    /// offset is out of the representable range.
    pub fn from_seconds_from_gmt(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(TimeZone::Fixed)
    }

    /// The zone's identifier: the IANA name, or "GMT±HH:MM" for fixed
    /// offsets.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            TimeZone::Named(tz) => tz.name().to_string(),
            TimeZone::Fixed(offset) => format!("GMT{offset}"),
        }
    }

    /// UTC offset in seconds in effect at the given instant.
    pub fn seconds_from_gmt(&self, at: DateTime<Utc>) -> i32 {
        self.offset_at(at).local_minus_utc()
    }

    /// Abbreviation in effect at the given instant ("CET"), when the zone
    /// data carries one. Fixed offsets have no abbreviation.
    pub fn abbreviation(&self, at: DateTime<Utc>) -> Option<String> {
        match self {
            TimeZone::Named(tz) => Some(at.with_timezone(tz).format("%Z").to_string()),
            TimeZone::Fixed(_) => None,
        }
    }

    /// Every identifier in the bundled zone database.
    pub fn known_identifiers() -> Vec<&'static str> {
        TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }

    /// The fixed offset in effect at an instant.
    pub(crate) fn offset_at(&self, at: DateTime<Utc>) -> FixedOffset {
        match self {
            TimeZone::Named(tz) => at.with_timezone(tz).offset().fix(),
            TimeZone::Fixed(offset) => *offset,
        }
    }

    /// Wall-clock representation of an instant in this zone.
    pub(crate) fn civil(&self, at: DateTime<Utc>) -> NaiveDateTime {
        at.with_timezone(&self.offset_at(at)).naive_local()
    }

    /// Resolve a wall-clock time in this zone to an instant. Ambiguous
    /// times (daylight-saving fold) take the earlier instant; nonexistent
    /// times (spring-forward gap) resolve to `None`.
    pub(crate) fn resolve_local(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZone::Named(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeZone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
