use std::fs::File;
use std::io::Write;
use std::path::Path;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

const ANNOUNCE_PATH_REGEX: &str = r"^/[A-Za-z0-9_\-./]*$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 60,
                default_numwant: 50,
                max_numwant: 200,
                peers_timeout: 600,
                peers_cleanup_interval: 300,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                traces_sample_rate: 1.0,
            },
            http_server: vec!(HttpTrackersConfig::default()),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(config) => { config }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::init().save_from_config(path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path.display());
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path.display());
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|error| CustomError::new(&error.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level \"{}\"", self.log_level)));
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.max_numwant == 0 {
            return Err(ConfigurationError::ValidationError(String::from("max_numwant must be above 0")));
        }
        if tracker_config.peers_timeout == 0 || tracker_config.peers_cleanup_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("peers_timeout and peers_cleanup_interval must be above 0")));
        }

        for http_server in &self.http_server {
            Self::validate_value("[HTTP] announce_path", &http_server.announce_path, ANNOUNCE_PATH_REGEX)?;
            if http_server.bind_address.parse::<std::net::SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("Invalid bind_address \"{}\"", http_server.bind_address)));
            }
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
