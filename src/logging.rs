use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

pub fn parse_level(level: &str) -> Result<log::LevelFilter, ConfigurationError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigurationError::ValidationError(format!("unknown log level encountered: '{level}'"))),
    }
}

/// Installs the global logger: colored levels on stdout, plus plain lines in
/// `log_file` when one is configured.
pub fn setup_logging(config: &Configuration) -> Result<(), fern::InitError>
{
    let level = parse_level(config.log_level.as_str())
        .map_err(|e| fern::InitError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let console = fern::Dispatch::new()
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
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(console);

    if let Some(path) = &config.log_file {
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    record.level(),
                    record.target(),
                    message,
                    width = 5
                ))
            })
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    info!("logging initialized.");
    Ok(())
}
