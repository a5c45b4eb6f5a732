use udatetime::constants::{
    SECONDS_PER_CENTURY, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH,
    SECONDS_PER_WEEK, SECONDS_PER_YEAR, UNIX_TO_REFERENCE_EPOCH_SECONDS,
};
use udatetime::datetime;
use udatetime::{DurationFormatter, DurationUnit, UnitsStyle};

/// Demo measuring spans in seconds and dividing them into units
fn main() {
    // Seconds-since queries against the common anchors
    println!("Seconds since 1 minute ago: {}", datetime::seconds_since_now(datetime::date_since_now(-SECONDS_PER_MINUTE)).abs());
    println!("Seconds since 1970:         {}", datetime::seconds_since_unix_epoch(datetime::now()));
    println!("Seconds since 2001:         {}", datetime::seconds_since_reference_epoch(datetime::now()));
    println!("Seconds between 1970 and 2001: {UNIX_TO_REFERENCE_EPOCH_SECONDS}");

    // The span between the epochs divided by each unit length
    let span = UNIX_TO_REFERENCE_EPOCH_SECONDS;
    println!("\nHours between 1970 and 2001:     {}", span / SECONDS_PER_HOUR);
    println!("Days between 1970 and 2001:      {}", span / SECONDS_PER_DAY);
    println!("Weeks between 1970 and 2001:     {}", span / SECONDS_PER_WEEK);
    println!("Months between 1970 and 2001:    {}", span / SECONDS_PER_MONTH);
    println!("Years between 1970 and 2001:     {}", span / SECONDS_PER_YEAR);
    println!("Centuries between 1970 and 2001: {}", span / SECONDS_PER_CENTURY);

    // The duration formatter words the same span
    let formatter = DurationFormatter {
        allowed_units: vec![DurationUnit::Year, DurationUnit::Month, DurationUnit::Day],
        units_style: UnitsStyle::Full,
        ..DurationFormatter::default()
    };
    println!("\nWorded: {}", formatter.string_from_seconds(span));

    // Positional style reads like a clock
    let clock = DurationFormatter::new();
    println!("90 minutes on a clock: {}", clock.string_from_seconds(5_400.0));
}
