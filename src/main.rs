use anyhow::Result;

use udatetime::config::Config;
use udatetime::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use udatetime::{
    datetime, logger, Calendar, DateFormatter, DurationFormatter, DurationUnit, Iso8601Formatter,
    Iso8601Options, UnitsStyle,
};

fn main() -> Result<()> {
    let config = Config::load()?;
    if config.logging.enabled {
        logger::init(config.resolve_log_level())?;
    }

    let calendar = Calendar::gregorian(config.resolve_time_zone(), config.resolve_locale());
    let now = datetime::now();

    // Anchors and second offsets
    println!("now:                {now}");
    println!("unix epoch:         {}", datetime::unix_epoch());
    println!("reference epoch:    {}", datetime::reference_epoch());
    println!("tomorrow this time: {}", datetime::date_since_now(SECONDS_PER_DAY));

    // Component extraction and reconstruction
    let components = datetime::default_components(&calendar, now);
    println!("components:         {components:?}");
    println!("reconstructed:      {:?}", datetime::date_from_components(&components, &calendar));

    // Intervals
    let next_hour = datetime::interval_with_duration(now, SECONDS_PER_HOUR);
    println!("next hour spans:    {} seconds", next_hour.duration());
    println!("contains now:       {}", next_hour.contains(now));

    // Time zone queries
    let zone = calendar.time_zone;
    println!("zone:               {zone}");
    println!("offset from GMT:    {} seconds", zone.seconds_from_gmt(now));
    if let Some(abbreviation) = zone.abbreviation(now) {
        println!("abbreviation:       {abbreviation}");
    }

    // Styled, fixed-template, and ISO 8601 output
    let styled = DateFormatter::styled(config.formatting.date_style, config.formatting.time_style)
        .with_calendar(calendar);
    println!("styled:             {}", styled.format(now));

    let fixed = DateFormatter::with_fixed_template(&config.formatting.template).with_calendar(calendar);
    let rendered = fixed.format(now);
    println!("fixed:              {rendered}");
    println!("parsed back:        {:?}", fixed.parse(&rendered));

    println!("iso 8601:           {}", Iso8601Formatter::new().format(now));
    let week_date = Iso8601Formatter::with_options(Iso8601Options::week_date(), zone);
    println!("iso week date:      {}", week_date.format(now));

    // Duration phrases
    let durations = DurationFormatter {
        allowed_units: vec![DurationUnit::Hour, DurationUnit::Minute],
        units_style: UnitsStyle::Full,
        ..DurationFormatter::default()
    };
    println!("90 minutes reads:   {}", durations.string_from_seconds(5400.0));

    Ok(())
}
