use chrono::{TimeZone as _, Utc};
use udatetime::constants::TEMPLATE_ISO8601;
use udatetime::datetime;
use udatetime::{Iso8601Formatter, Iso8601Options, TimeZone};

#[test]
fn test_patterns_assemble_from_the_options() {
    assert_eq!(Iso8601Options::internet_date_time().pattern(), TEMPLATE_ISO8601);
    assert_eq!(Iso8601Options::full_date().pattern(), "%Y-%m-%d");
    assert_eq!(Iso8601Options::full_time().pattern(), "%H:%M:%S%:z");
    assert_eq!(Iso8601Options::week_date().pattern(), "%G-W%V-%u");

    // Basic format drops every separator
    let basic = Iso8601Options {
        dash_separator_in_date: false,
        colon_separator_in_time: false,
        colon_separator_in_time_zone: false,
        ..Iso8601Options::internet_date_time()
    };
    assert_eq!(basic.pattern(), "%Y%m%dT%H%M%S%z");
}

#[test]
fn test_internet_date_time_in_utc() {
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap();
    let formatter = Iso8601Formatter::new();
    assert_eq!(formatter.format(instant), "2021-03-12T20:00:03Z");
}

#[test]
fn test_offset_zones_shift_the_wall_clock() {
    let paris = TimeZone::from_identifier("Europe/Paris").unwrap();
    let formatter = Iso8601Formatter::with_options(Iso8601Options::internet_date_time(), paris);
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap();
    assert_eq!(formatter.format(instant), "2021-03-12T21:00:03+01:00");
}

#[test]
fn test_week_dates() {
    // New Year's Day 2021 still sits in week 53 of 2020
    let formatter = Iso8601Formatter::with_options(Iso8601Options::week_date(), TimeZone::utc());
    let instant = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(formatter.format(instant), "2020-W53-5");
}

#[test]
fn test_fractional_seconds_option() {
    let options = Iso8601Options {
        fractional_seconds: true,
        ..Iso8601Options::internet_date_time()
    };
    let formatter = Iso8601Formatter::with_options(options, TimeZone::utc());
    let instant = datetime::date_since_unix_epoch(0.25);
    assert_eq!(formatter.format(instant), "1970-01-01T00:00:00.250+00:00");
}

#[test]
fn test_space_between_date_and_time() {
    let options = Iso8601Options {
        space_between_date_and_time: true,
        time_zone: false,
        ..Iso8601Options::internet_date_time()
    };
    let formatter = Iso8601Formatter::with_options(options, TimeZone::utc());
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap();
    assert_eq!(formatter.format(instant), "2021-03-12 20:00:03");
}

#[test]
fn test_parse_accepts_both_offset_spellings() {
    let formatter = Iso8601Formatter::new();
    let expected = Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap();

    assert_eq!(formatter.parse("2021-03-12T20:00:03Z"), Some(expected));
    assert_eq!(formatter.parse("2021-03-12T21:00:03+01:00"), Some(expected));
}

#[test]
fn test_round_trip_through_each_preset() {
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap();

    let internet = Iso8601Formatter::new();
    assert_eq!(internet.parse(&internet.format(instant)), Some(instant));

    let date_only = Iso8601Formatter::with_options(Iso8601Options::full_date(), TimeZone::utc());
    assert_eq!(
        date_only.parse(&date_only.format(instant)),
        Some(Utc.with_ymd_and_hms(2021, 3, 12, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_mismatched_text_parses_to_none() {
    let date_only = Iso8601Formatter::with_options(Iso8601Options::full_date(), TimeZone::utc());
    assert_eq!(date_only.parse("20:00:03"), None);
    assert_eq!(date_only.parse(""), None);

    let formatter = Iso8601Formatter::new();
    assert_eq!(formatter.parse("March 12th, 2021"), None);
}
