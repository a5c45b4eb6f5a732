//! Constant tables used throughout the crate
//!
//! This module centralizes the pure data the crate ships: second counts for
//! common time units, format templates, locale identifiers, and the timezone
//! abbreviation map.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Zero offset, addressing the current instant.
pub const SECONDS_NOW: f64 = 0.0;

// Seconds per unit. Month and larger are calendrical averages, not exact
// calendar math.
pub const SECONDS_PER_NANOSECOND: f64 = 1e-9;
pub const SECONDS_PER_MILLISECOND: f64 = 0.001;
pub const SECONDS_PER_SECOND: f64 = 1.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_WEEK: f64 = 604_800.0;
pub const SECONDS_PER_MONTH: f64 = 2_629_743.83;
pub const SECONDS_PER_YEAR: f64 = 31_556_926.0;
pub const SECONDS_PER_DECADE: f64 = 315_569_260.0;
pub const SECONDS_PER_CENTURY: f64 = 3_155_692_600.0;
pub const SECONDS_PER_MILLENNIUM: f64 = 31_556_926_000.0;

/// Seconds between 1970-01-01T00:00:00Z and 2001-01-01T00:00:00Z.
pub const UNIX_TO_REFERENCE_EPOCH_SECONDS: f64 = 978_307_200.0;

// Era numbers as reported by component extraction.
pub const ERA_BCE: i32 = 0;
pub const ERA_CE: i32 = 1;

// Format templates, in the strftime syntax the formatter consumes.
pub const TEMPLATE_ISO8601: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const TEMPLATE_ISO8601_SPACED_ZONE: &str = "%Y-%m-%dT%H:%M:%S %:z";
pub const TEMPLATE_RFC822: &str = "%a, %d %b %Y %H:%M:%S %Z";
pub const TEMPLATE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
pub const TEMPLATE_DATE: &str = "%Y-%m-%d";
pub const TEMPLATE_TIME: &str = "%H:%M:%S";
pub const TEMPLATE_MONTH_DAY: &str = "%B %-d";
pub const TEMPLATE_SHORT_DATE: &str = "%d/%m/%Y";
pub const TEMPLATE_FULL: &str = "%A %-d %B %Y %H:%M:%S %Z";

// Layouts tried in order by lenient parsing, most specific first.
pub const LENIENT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
];
pub const LENIENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

// Locale identifiers carried by the identifier table.
pub const LOCALE_POSIX: &str = "en_US_POSIX";
pub const LOCALE_ENGLISH_US: &str = "en_US";
pub const LOCALE_ENGLISH_UK: &str = "en_GB";
pub const LOCALE_ENGLISH_SWEDEN: &str = "en_SE";
pub const LOCALE_SWEDISH: &str = "sv_SE";
pub const LOCALE_NORWEGIAN: &str = "nb_NO";
pub const LOCALE_DANISH: &str = "da_DK";
pub const LOCALE_ICELANDIC: &str = "is_IS";
pub const LOCALE_FAROESE: &str = "fo_FO";
pub const LOCALE_FINNISH: &str = "fi_FI";
pub const LOCALE_GERMAN: &str = "de_DE";
pub const LOCALE_DUTCH_GERMANY: &str = "nl_DE";
pub const LOCALE_FRENCH: &str = "fr_FR";
pub const LOCALE_SPANISH: &str = "es_ES";
pub const LOCALE_JAPANESE: &str = "ja_JP";

// Timezone abbreviations and the IANA zones they stand for.
pub const TZ_ABBREVIATIONS: &[(&str, &str)] = &[
    ("GMT", "Etc/GMT"),
    ("UTC", "Etc/UTC"),
    ("BST", "Europe/London"),
    ("CET", "Europe/Paris"),
    ("CEST", "Europe/Paris"),
    ("EET", "Europe/Athens"),
    ("EEST", "Europe/Athens"),
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("HKT", "Asia/Hong_Kong"),
    ("JST", "Asia/Tokyo"),
    ("ICT", "Asia/Bangkok"),
];

/// Abbreviation lookup, built once on first use.
pub static ABBREVIATION_TO_IDENTIFIER: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TZ_ABBREVIATIONS.iter().copied().collect());
