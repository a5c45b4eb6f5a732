use chrono::{Locale, TimeZone as _, Utc};
use udatetime::datetime;
use udatetime::{Calendar, DateComponents, TimeZone};

#[test]
fn test_utc_zone() {
    let utc = TimeZone::utc();
    assert_eq!(utc.identifier(), "UTC");
    assert_eq!(utc.seconds_from_gmt(datetime::unix_epoch()), 0);
    assert_eq!(TimeZone::default(), utc);
}

#[test]
fn test_identifier_lookup() {
    assert!(TimeZone::from_identifier("Europe/Stockholm").is_some());
    assert!(TimeZone::from_identifier("America/New_York").is_some());
    assert_eq!(TimeZone::from_identifier("Mars/Olympus"), None);
}

#[test]
fn test_offsets_follow_daylight_saving() {
    let paris = TimeZone::from_identifier("Europe/Paris").unwrap();
    let winter = Utc.with_ymd_and_hms(2021, 1, 15, 12, 0, 0).unwrap();
    let summer = Utc.with_ymd_and_hms(2021, 7, 15, 12, 0, 0).unwrap();

    assert_eq!(paris.seconds_from_gmt(winter), 3_600);
    assert_eq!(paris.seconds_from_gmt(summer), 7_200);
    assert_eq!(paris.abbreviation(winter), Some("CET".to_string()));
    assert_eq!(paris.abbreviation(summer), Some("CEST".to_string()));
}

#[test]
fn test_fixed_offset_zones() {
    let bombay = TimeZone::from_seconds_from_gmt(19_800).unwrap();
    assert_eq!(bombay.identifier(), "GMT+05:30");
    assert_eq!(bombay.seconds_from_gmt(datetime::now()), 19_800);
    // Fixed offsets carry no abbreviation data
    assert_eq!(bombay.abbreviation(datetime::now()), None);

    // Offsets beyond a day are not representable
    assert_eq!(TimeZone::from_seconds_from_gmt(100_000), None);
}

#[test]
fn test_abbreviation_lookup() {
    assert_eq!(
        TimeZone::from_abbreviation("CET"),
        TimeZone::from_identifier("Europe/Paris")
    );
    assert_eq!(
        TimeZone::from_abbreviation("PST"),
        TimeZone::from_identifier("America/Los_Angeles")
    );
    assert_eq!(TimeZone::from_abbreviation("XYZ"), None);
}

#[test]
fn test_known_identifiers_cover_the_database() {
    let identifiers = TimeZone::known_identifiers();
    assert!(identifiers.contains(&"UTC"));
    assert!(identifiers.contains(&"Europe/Stockholm"));
    assert!(identifiers.len() > 400);
}

#[test]
fn test_spring_forward_gap_resolves_to_none() {
    let new_york = TimeZone::from_identifier("America/New_York").unwrap();
    let calendar = Calendar::gregorian(new_york, Locale::en_US);

    // 02:30 never happened on the night clocks jumped forward
    let gap = DateComponents::ymd_hms(2021, 3, 14, 2, 30, 0);
    assert_eq!(datetime::date_from_components(&gap, &calendar), None);

    // An hour later the wall clock exists again
    let after = DateComponents::ymd_hms(2021, 3, 14, 3, 30, 0);
    assert!(datetime::date_from_components(&after, &calendar).is_some());
}

#[test]
fn test_fall_back_fold_takes_the_earlier_instant() {
    let new_york = TimeZone::from_identifier("America/New_York").unwrap();
    let calendar = Calendar::gregorian(new_york, Locale::en_US);

    // 01:30 happened twice; the daylight-time reading comes first
    let fold = DateComponents::ymd_hms(2021, 11, 7, 1, 30, 0);
    assert_eq!(
        datetime::date_from_components(&fold, &calendar),
        Some(Utc.with_ymd_and_hms(2021, 11, 7, 5, 30, 0).unwrap())
    );
}

#[test]
fn test_display_shows_the_identifier() {
    let stockholm = TimeZone::from_identifier("Europe/Stockholm").unwrap();
    assert_eq!(stockholm.to_string(), "Europe/Stockholm");
}
