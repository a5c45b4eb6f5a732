//! udatetime - Date, time, calendar, and locale conveniences
//!
//! This library wraps the chrono family behind one small, explicit
//! surface: build instants from second offsets against common anchors,
//! pull sparse component records out of them, resolve records back to
//! instants, and format both directions with styles, templates, ISO 8601
//! options, or duration phrases. Calendar arithmetic, the time zone
//! database, and locale data all stay in the collaborator crates; nothing
//! here reimplements them.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`datetime`] - Instant construction and second-based measurement
//! * [`components`] - Sparse calendar component records
//! * [`calendar`] - Component extraction and date reconstruction
//! * [`interval`] - Spans between two instants
//! * [`format`] - Date, interval, ISO 8601, and duration formatting
//! * [`timezone`] - Time zone lookup and offset queries
//! * [`locale`] - Locale lookup and identifier normalization
//! * [`config`] - Application configuration management

/// Component extraction, date reconstruction, and calendar queries
pub mod calendar;

/// Sparse component records and the component field set
pub mod components;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Instant construction and measurement helpers
pub mod datetime;

/// Date, interval, ISO 8601, and duration formatting
pub mod format;

/// Spans between two instants
pub mod interval;

/// Locale lookup and identifier normalization
pub mod locale;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Time zone lookup and offset queries
pub mod timezone;

// Re-export the main types for convenient access
pub use calendar::{Calendar, CalendarIdentifier};
pub use components::{ComponentField, DateComponents};
pub use format::{
    DateFormatter, DateStyle, DurationFormatter, DurationUnit, FormatContext, IntervalFormatter,
    Iso8601Formatter, Iso8601Options, TemplateError, TimeStyle, UnitsStyle, ZeroFormattingBehavior,
};
pub use interval::DateInterval;
pub use timezone::TimeZone;
