use crate::config::structs::configuration::Configuration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

pub fn log_level(level: &str) -> log::LevelFilter {
    match level {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(log_level(&config.log_level))
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::log_level;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level("off"), log::LevelFilter::Off);
        assert_eq!(log_level("debug"), log::LevelFilter::Debug);
        assert_eq!(log_level("error"), log::LevelFilter::Error);
        assert_eq!(log_level("info"), log::LevelFilter::Info);
        assert_eq!(log_level("unknown"), log::LevelFilter::Info);
    }
}
