//! Locale lookup and identifier normalization
//!
//! Locale data lives in the formatter collaborator's bundled registry.
//! Lookup normalizes the identifier spelling first, so BCP 47 hyphens,
//! encoding suffixes, and the POSIX variant suffix all resolve to the
//! registry's names.

use chrono::Locale;

/// Look up a locale by identifier ("sv_SE", "en-GB", "en_US_POSIX").
///
/// Hyphens become underscores, an encoding suffix (".UTF-8") is dropped,
/// and trailing subtags are stripped one at a time until the registry
/// recognizes the name. `None` when nothing resolves.
pub fn from_identifier(identifier: &str) -> Option<Locale> {
    let mut name = identifier.replace('-', "_");
    if let Some(dot) = name.find('.') {
        name.truncate(dot);
    }
    loop {
        if let Ok(locale) = Locale::try_from(name.as_str()) {
            return Some(locale);
        }
        match name.rfind('_') {
            Some(position) => name.truncate(position),
            None => return None,
        }
    }
}

/// Look up a locale, falling back to POSIX when unknown.
pub fn from_identifier_or_default(identifier: &str) -> Locale {
    from_identifier(identifier).unwrap_or(Locale::POSIX)
}

/// Resolve the process locale once, from `LC_ALL`, `LC_TIME`, then
/// `LANG`, falling back to POSIX.
pub fn current() -> Locale {
    for variable in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(value) = std::env::var(variable) {
            if value.is_empty() {
                continue;
            }
            if let Some(locale) = from_identifier(&value) {
                return locale;
            }
        }
    }
    Locale::POSIX
}

/// The identifier of a locale value ("sv_SE").
pub fn identifier(locale: Locale) -> String {
    format!("{locale:?}")
}
