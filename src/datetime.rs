//! Stateless date construction and measurement helpers
//!
//! The convenience face of the crate: build instants from second offsets
//! against common anchors, measure spans back in seconds, bridge
//! floating-point seconds with the collaborator's duration type, and
//! reach the component, interval, and formatting layers through one flat
//! set of functions. Reading the clock is the only source of
//! nondeterminism here.

use chrono::{DateTime, Duration, Utc};

use crate::calendar::Calendar;
use crate::components::{ComponentField, DateComponents};
use crate::constants::UNIX_TO_REFERENCE_EPOCH_SECONDS;
use crate::format::{DateFormatter, Iso8601Formatter};
use crate::interval::DateInterval;

/// The current instant.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The earliest representable instant.
pub fn distant_past() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// The latest representable instant.
pub fn distant_future() -> DateTime<Utc> {
    DateTime::<Utc>::MAX_UTC
}

/// 1970-01-01T00:00:00Z.
pub fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// 2001-01-01T00:00:00Z, the reference epoch.
pub fn reference_epoch() -> DateTime<Utc> {
    date_since(unix_epoch(), UNIX_TO_REFERENCE_EPOCH_SECONDS)
}

/// Instant a number of seconds from now.
pub fn date_since_now(seconds: f64) -> DateTime<Utc> {
    date_since(now(), seconds)
}

/// Instant a number of seconds after the Unix epoch.
pub fn date_since_unix_epoch(seconds: f64) -> DateTime<Utc> {
    date_since(unix_epoch(), seconds)
}

/// Instant a number of seconds after the reference epoch.
pub fn date_since_reference_epoch(seconds: f64) -> DateTime<Utc> {
    date_since(reference_epoch(), seconds)
}

/// Instant a number of seconds from an arbitrary instant, saturating at
/// the representable bounds.
pub fn date_since(base: DateTime<Utc>, seconds: f64) -> DateTime<Utc> {
    let offset = seconds_to_duration(seconds);
    base.checked_add_signed(offset).unwrap_or(if seconds < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Seconds from `base` to `date`, negative when `date` is earlier.
pub fn seconds_since(date: DateTime<Utc>, base: DateTime<Utc>) -> f64 {
    duration_to_seconds(date.signed_duration_since(base))
}

/// Seconds from now to `date`.
pub fn seconds_since_now(date: DateTime<Utc>) -> f64 {
    seconds_since(date, now())
}

/// Seconds from the Unix epoch to `date`.
pub fn seconds_since_unix_epoch(date: DateTime<Utc>) -> f64 {
    seconds_since(date, unix_epoch())
}

/// Seconds from the reference epoch to `date`.
pub fn seconds_since_reference_epoch(date: DateTime<Utc>) -> f64 {
    seconds_since(date, reference_epoch())
}

/// Collaborator duration for a second count, split into whole seconds and
/// nanoseconds, saturating at the representable bounds.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() {
        return if seconds < 0.0 { Duration::MIN } else { Duration::MAX };
    }
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round() as i64;
    let Some(base) = Duration::try_seconds(whole as i64) else {
        return if seconds < 0.0 { Duration::MIN } else { Duration::MAX };
    };
    base.checked_add(&Duration::nanoseconds(nanos)).unwrap_or(base)
}

/// Second count of a collaborator duration.
pub fn duration_to_seconds(duration: Duration) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) * 1e-9
}

/// Extract the requested fields from an instant. See
/// [`Calendar::components`].
pub fn components(
    fields: &[ComponentField],
    calendar: &Calendar,
    date: DateTime<Utc>,
) -> DateComponents {
    calendar.components(fields, date)
}

/// Extract year through second, the default field set.
pub fn default_components(calendar: &Calendar, date: DateTime<Utc>) -> DateComponents {
    calendar.components(&ComponentField::DEFAULT, date)
}

/// Resolve a component record to an instant, using the record's own
/// calendar when it carries one and `calendar` otherwise. `None` when the
/// record is unresolvable.
pub fn date_from_components(
    components: &DateComponents,
    calendar: &Calendar,
) -> Option<DateTime<Utc>> {
    calendar.date_from_components(components)
}

/// Interval between two instants.
pub fn interval(start: DateTime<Utc>, end: DateTime<Utc>) -> DateInterval {
    DateInterval::new(start, end)
}

/// Interval from a start instant and a duration in seconds.
pub fn interval_with_duration(start: DateTime<Utc>, seconds: f64) -> DateInterval {
    DateInterval::with_duration(start, seconds)
}

/// Render an instant with a formatter.
pub fn string_from_date(date: DateTime<Utc>, formatter: &DateFormatter) -> String {
    formatter.format(date)
}

/// Parse text with a formatter. `None` when the text does not match.
pub fn date_from_string(text: &str, formatter: &DateFormatter) -> Option<DateTime<Utc>> {
    formatter.parse(text)
}

/// Render an instant as ISO 8601.
pub fn iso8601_string(date: DateTime<Utc>, formatter: &Iso8601Formatter) -> String {
    formatter.format(date)
}

/// Parse ISO 8601 text. `None` when the text does not match the options.
pub fn date_from_iso8601(text: &str, formatter: &Iso8601Formatter) -> Option<DateTime<Utc>> {
    formatter.parse(text)
}
