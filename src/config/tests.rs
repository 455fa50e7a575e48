#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.tracker_config.request_interval, 60);
            assert_eq!(config.tracker_config.default_numwant, 50);
            assert_eq!(config.tracker_config.peers_timeout, 600);
            assert_eq!(config.tracker_config.peers_cleanup_interval, 300);
            assert_eq!(config.http_server.len(), 1);
            assert_eq!(config.http_server[0].announce_path, "/announce");
            assert!(!config.sentry_config.enabled);
        }

        #[test]
        fn test_configuration_defaults_validate() {
            assert!(Configuration::init().validate().is_ok());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.tracker_config, config.tracker_config);
            assert_eq!(loaded.http_server, config.http_server);
        }

        #[test]
        fn test_configuration_rejects_bad_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("chatty");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_configuration_rejects_zero_max_numwant() {
            let mut config = Configuration::init();
            config.tracker_config.max_numwant = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_configuration_rejects_bad_announce_path() {
            let mut config = Configuration::init();
            config.http_server[0].announce_path = String::from("announce");
            assert!(config.validate().is_err());
            config.http_server[0].announce_path = String::from("/announce?x");
            assert!(config.validate().is_err());
            config.http_server[0].announce_path = String::from("/tracker/announce.php");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("localhost");
            assert!(config.validate().is_err());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("max_numwant must be above 0"));
            assert_eq!(format!("{}", error), "[VALIDATE CONFIG] max_numwant must be above 0");
        }

        #[test]
        fn test_io_error_conversion() {
            let error: ConfigurationError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
            assert!(matches!(error, ConfigurationError::IOError(_)));
        }
    }
}
