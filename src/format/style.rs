//! Style presets and capitalization contexts

use serde::{Deserialize, Serialize};

/// Date verbosity presets. Short defers to the locale's own date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStyle {
    /// No date portion.
    None,
    Short,
    Medium,
    Long,
    Full,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::Full
    }
}

/// Time verbosity presets. Medium defers to the locale's own time layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStyle {
    /// No time portion.
    None,
    Short,
    Medium,
    Long,
    Full,
}

impl Default for TimeStyle {
    fn default() -> Self {
        Self::Full
    }
}

/// Where formatted text will appear, controlling capitalization of the
/// leading word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatContext {
    Unknown,
    /// Capitalization decided by the phrase itself.
    Dynamic,
    Standalone,
    ListItem,
    BeginningOfSentence,
    MiddleOfSentence,
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::Dynamic
    }
}

/// Layout for a date style, in the formatter's pattern syntax.
pub(super) fn date_pattern(style: DateStyle) -> &'static str {
    match style {
        DateStyle::None => "",
        DateStyle::Short => "%x",
        DateStyle::Medium => "%-d %b %Y",
        DateStyle::Long => "%-d %B %Y",
        DateStyle::Full => "%A %-d %B %Y",
    }
}

/// Layout for a time style.
pub(super) fn time_pattern(style: TimeStyle) -> &'static str {
    match style {
        TimeStyle::None => "",
        TimeStyle::Short => "%R",
        TimeStyle::Medium => "%X",
        TimeStyle::Long => "%X %Z",
        TimeStyle::Full => "%X %Z %:z",
    }
}

/// Apply a capitalization context to rendered text.
pub(super) fn apply_context(text: String, context: FormatContext) -> String {
    match context {
        FormatContext::Standalone
        | FormatContext::ListItem
        | FormatContext::BeginningOfSentence => capitalize_first(text),
        FormatContext::Unknown | FormatContext::Dynamic | FormatContext::MiddleOfSentence => text,
    }
}

fn capitalize_first(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}
