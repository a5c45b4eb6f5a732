//! Template validation, classification, and fixed-pattern work
//!
//! Patterns are checked with the formatter collaborator's own item
//! scanner before use, because rendering an unrecognized item would
//! otherwise abort mid-write. Classification (which field families a
//! pattern mentions) drives localized-template mode and decides how
//! parses are completed.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use crate::constants::{LENIENT_DATETIME_FORMATS, LENIENT_DATE_FORMATS};
use crate::timezone::TimeZone;

/// A template the formatter cannot process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unrecognized pattern item in template '{template}'")]
    UnrecognizedItem { template: String },
}

/// Check a pattern against the formatter's item scanner.
pub fn validate_template(template: &str) -> Result<(), TemplateError> {
    let broken = StrftimeItems::new(template).any(|item| matches!(item, Item::Error));
    if broken {
        return Err(TemplateError::UnrecognizedItem {
            template: template.to_string(),
        });
    }
    Ok(())
}

// Specifier letters by field family. %c and %s span both date and time.
const DATE_SPECIFIERS: &[char] = &[
    'Y', 'y', 'G', 'g', 'C', 'm', 'b', 'B', 'h', 'd', 'e', 'a', 'A', 'w', 'u', 'U', 'W', 'V',
    'j', 'D', 'x', 'F', 'v', 'c', 's',
];
const TIME_SPECIFIERS: &[char] = &[
    'H', 'k', 'I', 'l', 'P', 'p', 'M', 'S', 'f', 'R', 'T', 'X', 'r', 'c', 's',
];
const ZONE_SPECIFIERS: &[char] = &['Z', 'z'];

pub(super) fn has_date_fields(template: &str) -> bool {
    has_specifier(template, DATE_SPECIFIERS)
}

pub(super) fn has_time_fields(template: &str) -> bool {
    has_specifier(template, TIME_SPECIFIERS)
}

pub(super) fn has_zone_fields(template: &str) -> bool {
    has_specifier(template, ZONE_SPECIFIERS)
}

/// Scan for a specifier letter, skipping flags, widths, and literal
/// percents.
fn has_specifier(template: &str, set: &[char]) -> bool {
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        for follow in chars.by_ref() {
            if follow == '%' {
                break;
            }
            if follow.is_ascii_alphabetic() {
                if set.contains(&follow) {
                    return true;
                }
                break;
            }
        }
    }
    false
}

/// The locale-standard layout covering the field families a template asks
/// for. Ordering stays with the locale, so the output may carry more
/// fields than the template named.
pub(super) fn localized_layout(template: &str) -> &'static str {
    match (has_date_fields(template), has_time_fields(template)) {
        (true, true) => "%c",
        (true, false) => "%x",
        (false, true) => "%X",
        (false, false) => "",
    }
}

/// Format an instant with an exact pattern. Invalid patterns log and come
/// back verbatim, keeping formatting total.
pub(super) fn format_fixed(
    date: DateTime<Utc>,
    template: &str,
    time_zone: TimeZone,
    locale: Locale,
) -> String {
    if validate_template(template).is_err() {
        log::warn!("invalid format template '{template}'");
        return template.to_string();
    }
    match time_zone {
        TimeZone::Named(tz) => date.with_timezone(&tz).format_localized(template, locale).to_string(),
        TimeZone::Fixed(offset) => date
            .with_timezone(&offset)
            .format_localized(template, locale)
            .to_string(),
    }
}

/// Parse text against an exact pattern. Patterns carrying a zone parse
/// their own offset; otherwise the supplied zone resolves the wall time.
/// Time-only patterns are completed against `default_date`, the Unix
/// epoch date when unset.
pub(super) fn parse_fixed(
    text: &str,
    template: &str,
    time_zone: TimeZone,
    default_date: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    if template.is_empty() || validate_template(template).is_err() {
        return None;
    }
    if has_zone_fields(template) {
        // Numeric offsets resolve here. Zone names ("%Z") are skipped by
        // the parser and leave no offset, so those fall through below.
        if let Ok(parsed) = DateTime::parse_from_str(text, template) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    if has_date_fields(template) && has_time_fields(template) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, template) {
            return time_zone.resolve_local(naive);
        }
    } else if has_date_fields(template) {
        if let Ok(date) = NaiveDate::parse_from_str(text, template) {
            return time_zone.resolve_local(date.and_hms_opt(0, 0, 0)?);
        }
    } else if has_time_fields(template) {
        if let Ok(time) = NaiveTime::parse_from_str(text, template) {
            let base = default_date.unwrap_or(crate::datetime::unix_epoch());
            let date = time_zone.civil(base).date();
            return time_zone.resolve_local(date.and_time(time));
        }
    }
    None
}

/// Try the common layout tables, then the standard internet formats.
pub(super) fn parse_lenient(text: &str, time_zone: TimeZone) -> Option<DateTime<Utc>> {
    for format in LENIENT_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return time_zone.resolve_local(naive);
        }
    }
    for format in LENIENT_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return time_zone.resolve_local(date.and_hms_opt(0, 0, 0)?);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_flags_unknown_items() {
        assert!(validate_template("%Y-%m-%d").is_ok());
        assert!(validate_template("%H:%M:%S%.3f").is_ok());
        assert!(validate_template("%Q").is_err());
    }

    #[test]
    fn test_classification_sees_field_families() {
        assert!(has_date_fields("%Y-%m-%d"));
        assert!(!has_time_fields("%Y-%m-%d"));
        assert!(has_time_fields("%H:%M"));
        assert!(!has_date_fields("%H:%M"));
        assert!(has_zone_fields("%Y-%m-%dT%H:%M:%S%:z"));
        assert!(!has_zone_fields("%Y-%m-%d"));
    }

    #[test]
    fn test_classification_skips_literal_percents_and_flags() {
        assert!(!has_date_fields("100%% done"));
        assert!(has_date_fields("%-d"));
        assert!(has_time_fields("%.3f"));
    }

    #[test]
    fn test_localized_layout_covers_each_family() {
        assert_eq!(localized_layout("%Y %m"), "%x");
        assert_eq!(localized_layout("%H:%M"), "%X");
        assert_eq!(localized_layout("%Y-%m-%d %H:%M"), "%c");
        assert_eq!(localized_layout(""), "");
    }
}
