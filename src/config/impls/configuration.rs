use std::fs::File;
use std::io::{ErrorKind, Write};
use std::net::IpAddr;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::negotiator_config::NegotiatorConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::structs::Cli;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];
const DOMAIN_NAME_REGEX: &str = r"^(?:[A-Za-z0-9](?:[A-Za-z0-9_-]{0,61}[A-Za-z0-9])?\.)*[A-Za-z0-9](?:[A-Za-z0-9_-]{0,61}[A-Za-z0-9])?$";
const PORT_REGEX: &str = r"^[0-9]{1,5}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: None,
            log_console_interval: 60,
            tracker: TrackerConfig::default(),
            negotiator: NegotiatorConfig::default(),
            peer: PeerConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// With `create` set, a missing or corrupt file is replaced by the defaults.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                let missing = matches!(&error, ConfigurationError::IOError(e) if e.kind() == ErrorKind::NotFound);
                if !create {
                    if missing {
                        eprintln!("No config file found at {path}, using defaults.");
                        return Ok(Configuration::init());
                    }
                    eprintln!("[ERROR] Config file {path} could not be read: {error}");
                    eprintln!("You can either fix {path}, or start this app using '--create-config' to write the defaults.");
                    return Err(error);
                }

                eprintln!("Creating config file {path}..");
                let config = Configuration::init();
                match Configuration::save_from_config(path, &config) {
                    Ok(_) => Ok(config),
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Applies command line overrides on top of the file values.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(tracker) = &args.tracker {
            self.tracker.address = tracker.clone();
        }
        if let Some(port) = args.port {
            self.peer.port = port;
        }
        if args.debug {
            self.log_level = String::from("debug");
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        let (host, port) = Self::split_tracker_address(&self.tracker.address)?;
        if host.parse::<IpAddr>().is_err() {
            Self::validate_value("[tracker] host", host, DOMAIN_NAME_REGEX)?;
        }
        Self::validate_value("[tracker] port", port, PORT_REGEX)?;
        match port.parse::<u16>() {
            Ok(port) if port > 0 => {}
            _ => {
                return Err(ConfigurationError::ValidationError(format!("[tracker] port '{port}' is outside 1-65535")));
            }
        }

        let check_intervals = [
            ("[tracker] announce_timeout", self.tracker.announce_timeout),
            ("[tracker] announce_retry_interval", self.tracker.announce_retry_interval),
            ("[tracker] keepalive_interval", self.tracker.keepalive_interval),
            ("[negotiator] retry_interval", self.negotiator.retry_interval),
            ("[negotiator] resolve_timeout", self.negotiator.resolve_timeout),
        ];
        for (name, value) in check_intervals {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than zero")));
            }
        }

        if self.negotiator.max_attempts == Some(0) {
            return Err(ConfigurationError::ValidationError(String::from("[negotiator] max_attempts must be greater than zero")));
        }

        if self.peer.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("[peer] bind_address '{}' is not an IP address", self.peer.bind_address)));
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{name}: bad pattern: {e}")))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    /// Splits `host:port`, accepting `[v6]:port`.
    pub fn split_tracker_address(address: &str) -> Result<(&str, &str), ConfigurationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[tracker] address is empty")));
        }

        let split = match address.strip_prefix('[') {
            Some(rest) => rest.split_once("]:"),
            None => address.rsplit_once(':').filter(|(host, _)| !host.contains(':')),
        };
        match split {
            Some((host, port)) if !host.is_empty() => Ok((host, port)),
            _ => Err(ConfigurationError::ValidationError(format!("[tracker] address '{address}' is not host:port"))),
        }
    }
}
