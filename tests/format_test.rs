use chrono::{Locale, NaiveDate, TimeZone as _, Utc};
use udatetime::constants::{SECONDS_PER_DAY, TEMPLATE_ISO8601, TEMPLATE_RFC822};
use udatetime::datetime;
use udatetime::format::{format_human_date, format_human_datetime, relative_day_phrase};
use udatetime::{
    Calendar, DateComponents, DateFormatter, DateStyle, FormatContext, TimeStyle, TimeZone,
};

#[test]
fn test_fixed_template_round_trips_a_zoned_evening() {
    let stockholm = TimeZone::from_identifier("Europe/Stockholm").unwrap();
    let calendar = Calendar::gregorian(stockholm, Locale::sv_SE);

    // 21:00:03 on the wall clock in Stockholm is 20:00:03 UTC
    let components = DateComponents::ymd_hms(2021, 3, 12, 21, 0, 3);
    let instant = datetime::date_from_components(&components, &calendar).unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2021, 3, 12, 20, 0, 3).unwrap());

    let formatter = DateFormatter::with_fixed_template(TEMPLATE_ISO8601).with_calendar(calendar);
    let rendered = datetime::string_from_date(instant, &formatter);
    assert_eq!(rendered, "2021-03-12T21:00:03+01:00");
    assert_eq!(datetime::date_from_string(&rendered, &formatter), Some(instant));
}

#[test]
fn test_styled_output_joins_date_and_time() {
    let formatter = DateFormatter::styled(DateStyle::Long, TimeStyle::Medium);
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();
    assert_eq!(formatter.format(instant), "12 March 2021, 21:00:03");

    let date_only = DateFormatter::styled(DateStyle::Medium, TimeStyle::None);
    assert_eq!(date_only.format(instant), "12 Mar 2021");

    let time_only = DateFormatter::styled(DateStyle::None, TimeStyle::Short);
    assert_eq!(time_only.format(instant), "21:00");
}

#[test]
fn test_styled_output_parses_back() {
    let formatter = DateFormatter::styled(DateStyle::Medium, TimeStyle::Medium);
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();
    let rendered = formatter.format(instant);
    assert_eq!(rendered, "12 Mar 2021, 21:00:03");
    assert_eq!(formatter.parse(&rendered), Some(instant));
}

#[test]
fn test_short_date_style_follows_the_locale() {
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();

    let us = DateFormatter::styled(DateStyle::Short, TimeStyle::None)
        .with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::en_US));
    assert_eq!(us.format(instant), "03/12/2021");

    let uk = DateFormatter::styled(DateStyle::Short, TimeStyle::None)
        .with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::en_GB));
    assert_eq!(uk.format(instant), "12/03/21");
}

#[test]
fn test_long_date_style_speaks_the_locale() {
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();

    let german = DateFormatter::styled(DateStyle::Long, TimeStyle::None)
        .with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::de_DE));
    assert_eq!(german.format(instant), "12 März 2021");

    let french = DateFormatter::styled(DateStyle::Long, TimeStyle::None)
        .with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::fr_FR));
    assert_eq!(french.format(instant), "12 mars 2021");
}

#[test]
fn test_localized_template_maps_to_locale_layouts() {
    let instant = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();

    // Time fields alone select the locale's time layout
    let time = DateFormatter::with_localized_template("%H %M");
    assert_eq!(time.active_pattern(), "%X");
    assert_eq!(time.format(instant), "21:00:03");

    // Date fields alone select the locale's date layout
    let date = DateFormatter::with_localized_template("%Y %m %d");
    assert_eq!(date.active_pattern(), "%x");
    assert_eq!(date.format(instant), "03/12/21");

    // Both families select the combined layout
    let both = DateFormatter::with_localized_template("%Y %H");
    assert_eq!(both.active_pattern(), "%c");
    assert_eq!(both.format(instant), "Fri Mar 12 21:00:03 2021");
}

#[test]
fn test_zone_names_render_for_named_zones() {
    let paris = TimeZone::from_identifier("Europe/Paris").unwrap();
    let formatter = DateFormatter::with_fixed_template(TEMPLATE_RFC822)
        .with_calendar(Calendar::gregorian(paris, Locale::POSIX));

    let winter = Utc.with_ymd_and_hms(2021, 1, 15, 11, 0, 0).unwrap(); // Friday
    assert_eq!(formatter.format(winter), "Fri, 15 Jan 2021 12:00:00 CET");
}

#[test]
fn test_broken_templates_format_verbatim_and_never_parse() {
    let formatter = DateFormatter::with_fixed_template("%Q");
    assert_eq!(formatter.format(datetime::unix_epoch()), "%Q");
    assert_eq!(formatter.parse("whatever"), None);
}

#[test]
fn test_relative_phrases_replace_the_date_half() {
    let formatter = DateFormatter {
        uses_relative_phrases: true,
        ..DateFormatter::styled(DateStyle::Medium, TimeStyle::Short)
    };

    let now = datetime::now();
    let rendered = formatter.format(now);
    assert!(rendered.starts_with("today at "), "got '{rendered}'");

    let rendered = formatter.format(datetime::date_since(now, -SECONDS_PER_DAY));
    assert!(rendered.starts_with("yesterday at "), "got '{rendered}'");

    let rendered = formatter.format(datetime::date_since(now, SECONDS_PER_DAY));
    assert!(rendered.starts_with("tomorrow at "), "got '{rendered}'");
}

#[test]
fn test_context_capitalizes_the_leading_word() {
    let formatter = DateFormatter {
        uses_relative_phrases: true,
        context: FormatContext::Standalone,
        ..DateFormatter::styled(DateStyle::Medium, TimeStyle::None)
    };
    assert_eq!(formatter.format(datetime::now()), "Today");

    let lowercase = DateFormatter {
        uses_relative_phrases: true,
        context: FormatContext::MiddleOfSentence,
        ..DateFormatter::styled(DateStyle::Medium, TimeStyle::None)
    };
    assert_eq!(lowercase.format(datetime::now()), "today");
}

#[test]
fn test_lenient_parse_falls_back_to_common_layouts() {
    let formatter = DateFormatter {
        lenient: true,
        ..DateFormatter::styled(DateStyle::Full, TimeStyle::Full)
    };
    let expected = Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap();

    assert_eq!(formatter.parse("2021-03-12 21:00:03"), Some(expected));
    assert_eq!(formatter.parse("2021-03-12T21:00:03+00:00"), Some(expected));
    assert_eq!(
        formatter.parse("2021-03-12"),
        Some(Utc.with_ymd_and_hms(2021, 3, 12, 0, 0, 0).unwrap())
    );
    assert_eq!(formatter.parse("not a date at all"), None);
    assert_eq!(formatter.parse(""), None);
}

#[test]
fn test_strict_parse_sticks_to_the_active_pattern() {
    let formatter = DateFormatter::styled(DateStyle::Full, TimeStyle::Full);
    assert_eq!(formatter.parse("2021-03-12"), None);
    assert_eq!(formatter.parse("2021-03-12T21:00:03+00:00"), None);
}

#[test]
fn test_time_only_parses_complete_from_the_default_date() {
    let mut formatter = DateFormatter::with_fixed_template("%H:%M:%S");
    formatter.default_date = Some(Utc.with_ymd_and_hms(2021, 3, 12, 12, 0, 0).unwrap());
    assert_eq!(
        formatter.parse("21:00:03"),
        Some(Utc.with_ymd_and_hms(2021, 3, 12, 21, 0, 3).unwrap())
    );

    // Without a default date the epoch date hosts the time
    let bare = DateFormatter::with_fixed_template("%H:%M:%S");
    assert_eq!(
        bare.parse("21:00:03"),
        Some(Utc.with_ymd_and_hms(1970, 1, 1, 21, 0, 3).unwrap())
    );
}

#[test]
fn test_relative_day_phrases() {
    let today = NaiveDate::from_ymd_opt(2023, 12, 22).unwrap(); // Friday

    assert_eq!(relative_day_phrase(today, today), Some("today"));
    assert_eq!(relative_day_phrase(today.succ_opt().unwrap(), today), Some("tomorrow"));
    assert_eq!(relative_day_phrase(today.pred_opt().unwrap(), today), Some("yesterday"));
    assert_eq!(relative_day_phrase(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(), today), None);
}

#[test]
fn test_human_dates_step_through_the_ladder() {
    let today = NaiveDate::from_ymd_opt(2023, 12, 22).unwrap(); // Friday

    let monday = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_human_date(monday, today), "next Monday");

    let next_friday = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
    assert_eq!(format_human_date(next_friday, today), "next Friday");

    let last_monday = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
    assert_eq!(format_human_date(last_monday, today), "last Monday");

    let in_twelve = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    assert_eq!(format_human_date(in_twelve, today), "in 12 days");

    let ten_ago = NaiveDate::from_ymd_opt(2023, 12, 12).unwrap();
    assert_eq!(format_human_date(ten_ago, today), "10 days ago");

    // Far dates show the date, with the year only when it differs
    let same_year = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    assert_eq!(format_human_date(same_year, today), "Jun 15");

    let other_year = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_human_date(other_year, today), "Mar 05, 2024");
}

#[test]
fn test_human_datetime_appends_the_clock() {
    let today = NaiveDate::from_ymd_opt(2023, 12, 22).unwrap();
    let moment = NaiveDate::from_ymd_opt(2023, 12, 23)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    assert_eq!(format_human_datetime(moment, today), "tomorrow at 14:30");
}

#[test]
fn test_symbol_lists_follow_the_locale() {
    let english =
        DateFormatter::new().with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::en_US));
    let months = english.month_symbols();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "January");
    assert_eq!(english.short_month_symbols()[2], "Mar");

    let weekdays = english.weekday_symbols();
    assert_eq!(weekdays.len(), 7);
    assert_eq!(weekdays[0], "Sunday"); // Sunday leads
    assert_eq!(english.short_weekday_symbols()[6], "Sat");

    let german =
        DateFormatter::new().with_calendar(Calendar::gregorian(TimeZone::utc(), Locale::de_DE));
    assert_eq!(german.month_symbols()[2], "März");
    assert_eq!(german.weekday_symbols()[0], "Sonntag");
}
