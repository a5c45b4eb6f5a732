use log::LevelFilter;

/// Install the stdout logger at the given level.
///
/// Call once at startup. A second call fails because the logging facade
/// accepts a single global logger.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f");
            out.finish(format_args!("[{}] [{}] {}", timestamp, record.level(), message));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
