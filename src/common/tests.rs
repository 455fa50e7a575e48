#[cfg(test)]
mod common_tests {
    mod parse_query_tests {
        use crate::common::common::{parse_query, MAX_QUERY_ITEMS};

        #[test]
        fn test_parse_query_none() {
            let result = parse_query(None).unwrap();
            assert!(result.is_empty());
        }

        #[test]
        fn test_parse_query_plain_values() {
            let result = parse_query(Some(String::from("port=6881&left=0&event=started"))).unwrap();
            assert_eq!(result.get("port"), Some(&vec![b"6881".to_vec()]));
            assert_eq!(result.get("left"), Some(&vec![b"0".to_vec()]));
            assert_eq!(result.get("event"), Some(&vec![b"started".to_vec()]));
        }

        #[test]
        fn test_parse_query_binary_values() {
            let result = parse_query(Some(String::from("info_hash=%00%FF%12abc"))).unwrap();
            assert_eq!(result.get("info_hash"), Some(&vec![vec![0x00, 0xff, 0x12, b'a', b'b', b'c']]));
        }

        #[test]
        fn test_parse_query_lowercases_keys() {
            let result = parse_query(Some(String::from("Info_Hash=x"))).unwrap();
            assert!(result.contains_key("info_hash"));
        }

        #[test]
        fn test_parse_query_flag_without_value() {
            let result = parse_query(Some(String::from("compact&no_peer_id"))).unwrap();
            assert_eq!(result.get("compact"), Some(&Vec::new()));
            assert_eq!(result.get("no_peer_id"), Some(&Vec::new()));
        }

        #[test]
        fn test_parse_query_keeps_equals_in_value() {
            let result = parse_query(Some(String::from("ip=a=b"))).unwrap();
            assert_eq!(result.get("ip"), Some(&vec![b"a=b".to_vec()]));
        }

        #[test]
        fn test_parse_query_repeated_keys() {
            let result = parse_query(Some(String::from("port=1&port=2&&=skipped"))).unwrap();
            assert_eq!(result.get("port"), Some(&vec![b"1".to_vec(), b"2".to_vec()]));
            assert_eq!(result.len(), 1);
        }

        #[test]
        fn test_parse_query_item_limit() {
            let at_limit = vec!["a=1"; MAX_QUERY_ITEMS].join("&");
            assert_eq!(parse_query(Some(at_limit.clone())).unwrap().get("a").map(Vec::len), Some(MAX_QUERY_ITEMS));

            let with_empty_items = format!("{at_limit}&&&");
            assert!(parse_query(Some(with_empty_items)).is_ok());

            let over_limit = format!("{at_limit}&b");
            let error = parse_query(Some(over_limit)).unwrap_err();
            assert_eq!(error.to_string(), "Too many query parameters.");
        }
    }

    mod log_level_tests {
        use crate::common::common::parse_log_level;

        #[test]
        fn test_parse_log_level_known() {
            assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
            assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
            assert_eq!(parse_log_level("trace"), Some(log::LevelFilter::Trace));
        }

        #[test]
        fn test_parse_log_level_unknown() {
            assert_eq!(parse_log_level("verbose"), None);
            assert_eq!(parse_log_level("INFO"), None);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let error = CustomError::new("could not create config.toml file");
            assert_eq!(format!("{}", error), "could not create config.toml file");
        }
    }
}
