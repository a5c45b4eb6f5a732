use chrono::Locale;
use udatetime::constants::{TEMPLATE_ISO8601, TEMPLATE_RFC822};
use udatetime::datetime;
use udatetime::{Calendar, DateFormatter, DateStyle, FormatContext, TimeStyle, TimeZone};

/// Demo walking the formatting strategies across a few locales
fn main() {
    let now = datetime::now();
    let stockholm = TimeZone::from_identifier("Europe/Stockholm").unwrap_or_default();

    // Style presets render differently per locale
    let preset_examples = vec![
        ("sv_SE", Locale::sv_SE),
        ("en_US", Locale::en_US),
        ("fr_FR", Locale::fr_FR),
    ];

    println!("Style presets (full date, full time):");
    for (name, locale) in &preset_examples {
        let formatter = DateFormatter::styled(DateStyle::Full, TimeStyle::Full)
            .with_calendar(Calendar::gregorian(stockholm, *locale));
        println!("  {:<6}: {}", name, formatter.format(now));
    }

    // A localized template keeps the locale's own field order
    println!("\nLocalized template (\"%Y %m %d\"):");
    for (name, locale) in &preset_examples {
        let formatter = DateFormatter::with_localized_template("%Y %m %d")
            .with_calendar(Calendar::gregorian(stockholm, *locale));
        println!("  {:<6}: {}", name, formatter.format(now));
    }

    // Fixed templates keep their exact layout, locale only names symbols
    println!("\nFixed templates:");
    let iso = DateFormatter::with_fixed_template(TEMPLATE_ISO8601)
        .with_calendar(Calendar::gregorian(stockholm, Locale::sv_SE));
    println!("  iso 8601: {}", iso.format(now));
    let rfc = DateFormatter::with_fixed_template(TEMPLATE_RFC822)
        .with_calendar(Calendar::gregorian(stockholm, Locale::en_US));
    println!("  rfc 822:  {}", rfc.format(now));

    // Relative phrasing swaps nearby dates for words
    println!("\nRelative phrasing:");
    let relative = DateFormatter {
        uses_relative_phrases: true,
        context: FormatContext::Standalone,
        ..DateFormatter::styled(DateStyle::Medium, TimeStyle::Short)
    };
    println!("  now:      {}", relative.format(now));
    println!("  tomorrow: {}", relative.format(datetime::date_since_now(86_400.0)));

    // Parsing comes back through the same configuration
    let rendered = iso.format(now);
    println!("\nParsed back: {:?}", iso.parse(&rendered));
}
