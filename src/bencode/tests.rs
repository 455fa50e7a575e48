#[cfg(test)]
mod bencode_tests {
    mod integer_tests {
        use crate::ben_int;
        use crate::bencode::bencode::encode;
        use crate::bencode::enums::bencode_value::BencodeValue;

        #[test]
        fn test_encode_positive_integers() {
            assert_eq!(encode(&BencodeValue::Integer(42)), b"i42e".to_vec());
            assert_eq!(encode(&BencodeValue::Integer(1234567)), b"i1234567e".to_vec());
        }

        #[test]
        fn test_encode_negative_integers() {
            assert_eq!(encode(&BencodeValue::Integer(-42)), b"i-42e".to_vec());
            assert_eq!(encode(&BencodeValue::Integer(-7654321)), b"i-7654321e".to_vec());
        }

        #[test]
        fn test_encode_zero() {
            assert_eq!(encode(&BencodeValue::Integer(0)), b"i0e".to_vec());
        }

        #[test]
        fn test_encode_integer_bounds() {
            assert_eq!(encode(&BencodeValue::Integer(i64::MIN)), b"i-9223372036854775808e".to_vec());
            assert_eq!(encode(&BencodeValue::Integer(i64::MAX)), b"i9223372036854775807e".to_vec());
        }

        #[test]
        fn test_ben_int_saturates_large_unsigned() {
            assert_eq!(ben_int!(u64::MAX), BencodeValue::Integer(i64::MAX));
            assert_eq!(ben_int!(i64::MAX as u64 + 1), BencodeValue::Integer(i64::MAX));
            assert_eq!(ben_int!(i64::MAX as u64), BencodeValue::Integer(i64::MAX));
            assert_eq!(ben_int!(600u64), BencodeValue::Integer(600));
            assert_eq!(ben_int!(6881u32), BencodeValue::Integer(6881));
            assert_eq!(ben_int!(-7i64), BencodeValue::Integer(-7));
            assert_eq!(encode(&ben_int!(u64::MAX)), b"i9223372036854775807e".to_vec());
        }
    }

    mod bytes_tests {
        use crate::bencode::bencode::encode;
        use crate::bencode::enums::bencode_value::BencodeValue;

        #[test]
        fn test_encode_strings() {
            assert_eq!(encode(&BencodeValue::from("hei")), b"3:hei".to_vec());
            assert_eq!(encode(&BencodeValue::from("aB cD eF gH")), b"11:aB cD eF gH".to_vec());
        }

        #[test]
        fn test_encode_empty_string() {
            assert_eq!(encode(&BencodeValue::from("")), b"0:".to_vec());
        }

        #[test]
        fn test_length_counts_bytes_not_characters() {
            let text = "Mitt navn har \u{e6} og \u{f8} og \u{e5} i seg!";
            assert_eq!(text.chars().count(), 32);
            let encoded = encode(&BencodeValue::from(text));
            let mut expected = b"35:".to_vec();
            expected.extend_from_slice(text.as_bytes());
            assert_eq!(encoded, expected);
        }

        #[test]
        fn test_encode_raw_binary() {
            let encoded = encode(&BencodeValue::bytes([0u8, 255, 10, 58]));
            assert_eq!(encoded, vec![b'4', b':', 0, 255, 10, 58]);
        }
    }

    mod list_tests {
        use crate::{ben_bytes, ben_int, ben_list, ben_map};

        #[test]
        fn test_encode_list_preserves_order() {
            let list = ben_list!(ben_int!(1), ben_int!(2), ben_bytes!("hei"));
            assert_eq!(list.encode(), b"li1ei2e3:heie".to_vec());
        }

        #[test]
        fn test_encode_empty_list() {
            assert_eq!(ben_list!().encode(), b"le".to_vec());
        }

        #[test]
        fn test_encode_nested_list() {
            let list = ben_list!(
                ben_map! { "1" => ben_int!(2), "3" => ben_bytes!("4") },
                ben_int!(5),
                ben_map! { "6" => ben_int!(7) }
            );
            assert_eq!(list.encode(), b"ld1:1i2e1:31:4ei5ed1:6i7eee".to_vec());
        }

        #[test]
        fn test_list_mut_pushes() {
            let mut list = ben_list!();
            list.list_mut().unwrap().push(ben_int!(9));
            assert_eq!(list.encode(), b"li9ee".to_vec());
            assert!(ben_int!(1).clone().list_mut().is_none());
        }
    }

    mod dict_tests {
        use crate::{ben_bytes, ben_int, ben_list, ben_map};

        #[test]
        fn test_encode_dict_sorts_keys() {
            let first = ben_map! { "b" => ben_int!(1), "a" => ben_int!(2) };
            let second = ben_map! { "a" => ben_int!(2), "b" => ben_int!(1) };
            assert_eq!(first.encode(), second.encode());
            assert_eq!(first.encode(), b"d1:ai2e1:bi1ee".to_vec());
        }

        #[test]
        fn test_encode_dict_nested() {
            let dict = ben_map! {
                "liste" => ben_list!(ben_int!(1), ben_int!(2), ben_bytes!("hei")),
                "tall" => ben_int!(5),
                "streng" => ben_bytes!("japan"),
                "dikt" => ben_map! { "test" => ben_bytes!("tast") }
            };
            assert_eq!(
                dict.encode(),
                b"d4:diktd4:test4:taste5:listeli1ei2e3:heie6:streng5:japan4:talli5ee".to_vec()
            );
        }

        #[test]
        fn test_encode_dict_with_space_in_key() {
            let dict = ben_map! { "failure" => ben_bytes!("Missing port."), "failure code" => ben_int!(103) };
            assert_eq!(dict.encode(), b"d7:failure13:Missing port.12:failure codei103ee".to_vec());
        }

        #[test]
        fn test_encode_dict_raw_byte_order() {
            let dict = ben_map! { vec![0xffu8] => ben_int!(1), vec![0x00u8] => ben_int!(2), "Z" => ben_int!(3) };
            assert_eq!(dict.encode(), vec![
                b'd',
                b'1', b':', 0x00, b'i', b'2', b'e',
                b'1', b':', b'Z', b'i', b'3', b'e',
                b'1', b':', 0xff, b'i', b'1', b'e',
                b'e'
            ]);
        }

        #[test]
        fn test_encode_empty_dict() {
            assert_eq!(ben_map!().encode(), b"de".to_vec());
        }

        #[test]
        fn test_announce_shaped_response() {
            let dict = ben_map! {
                "interval" => ben_int!(60),
                "seeders" => ben_int!(0),
                "leechers" => ben_int!(1),
                "peers" => ben_bytes!([80u8, 213, 93, 99, 225, 224])
            };
            let mut expected = b"d8:intervali60e8:leechersi1e5:peers6:".to_vec();
            expected.extend_from_slice(&[80u8, 213, 93, 99, 225, 224]);
            expected.extend_from_slice(b"7:seedersi0ee");
            assert_eq!(dict.encode(), expected);
        }
    }

    mod json_tests {
        use serde_json::json;
        use crate::bencode::bencode::encode_json;
        use crate::bencode::enums::bencode_error::BencodeError;

        #[test]
        fn test_encode_json_object() {
            let value = json!({"test": "tast", "tall": 5});
            assert_eq!(encode_json(&value).unwrap(), b"d4:talli5e4:test4:taste".to_vec());
        }

        #[test]
        fn test_encode_json_array() {
            let value = json!([1, 2, "hei"]);
            assert_eq!(encode_json(&value).unwrap(), b"li1ei2e3:heie".to_vec());
        }

        #[test]
        fn test_encode_json_rejects_unsupported_types() {
            assert_eq!(encode_json(&json!(null)), Err(BencodeError::UnsupportedType("null")));
            assert_eq!(encode_json(&json!(true)), Err(BencodeError::UnsupportedType("boolean")));
            assert_eq!(encode_json(&json!(1.5)), Err(BencodeError::UnsupportedType("float")));
            assert_eq!(encode_json(&json!(u64::MAX)), Err(BencodeError::UnsupportedType("integer above i64::MAX")));
        }

        #[test]
        fn test_encode_json_rejects_nested_unsupported_types() {
            let value = json!({"peers": [{"ip": null}]});
            assert!(matches!(encode_json(&value), Err(BencodeError::UnsupportedType("null"))));
        }

        #[test]
        fn test_error_display() {
            let error = BencodeError::UnsupportedType("float");
            assert_eq!(format!("{}", error), "unsupported type for bencode: float");
        }
    }
}
