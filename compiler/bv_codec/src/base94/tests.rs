#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use num_bigint::BigUint;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn test_decode_known_integer() {
    assert_eq!(decode_integer(b"/6").unwrap(), BigUint::from(1337u32));
    assert_eq!(decode_integer(b"!").unwrap(), BigUint::from(0u32));
    assert_eq!(decode_integer(b"\"").unwrap(), BigUint::from(1u32));
    assert_eq!(decode_integer(b"").unwrap(), BigUint::from(0u32));
}

#[test]
fn test_encode_known_integer() {
    assert_eq!(encode_integer(&BigUint::from(1337u32)), "/6");
    assert_eq!(encode_integer(&BigUint::from(0u32)), "!");
    assert_eq!(encode_integer(&BigUint::from(93u32)), "~");
    assert_eq!(encode_integer(&BigUint::from(94u32)), "\"!");
}

#[test]
fn test_decode_integer_beyond_u64() {
    // 94^12 > 2^64
    let n = decode_integer(b"\"!!!!!!!!!!!!").unwrap();
    assert_eq!(n, BigUint::from(94u32).pow(12));
}

#[test]
fn test_decode_integer_rejects_out_of_range_byte() {
    let err = decode_integer(b"/ 6").unwrap_err();
    assert_eq!(
        err,
        CodecError::MalformedLiteral {
            literal: "/ 6".to_string(),
            offset: 1,
            byte: b' ',
        }
    );
}

#[test]
fn test_decode_known_string() {
    assert_eq!(decode_string(b"B%,,/}Q/2,$_").unwrap(), "Hello World!");
    assert_eq!(decode_string(b"").unwrap(), "");
}

#[test]
fn test_decode_string_rejects_non_ascii() {
    assert!(matches!(
        decode_string("ab\u{7f}".as_bytes()),
        Err(CodecError::MalformedLiteral { offset: 2, .. })
    ));
}

#[test]
fn test_encode_string_rejects_unmapped_char() {
    assert_eq!(
        encode_string("a{b"),
        Err(CodecError::UnencodableChar { ch: '{', offset: 1 })
    );
}

#[test]
fn test_alphabet_conversions() {
    let test = decode_integer(b"4%34").unwrap();
    assert_eq!(int_to_alphabet_string(&test), "test");
    assert_eq!(
        alphabet_string_to_int("test").unwrap(),
        BigUint::from(15_818_151u32)
    );
}

#[test]
fn test_alphabet_conversion_of_zero() {
    assert_eq!(int_to_alphabet_string(&BigUint::from(0u32)), "a");
    assert_eq!(alphabet_string_to_int("a").unwrap(), BigUint::from(0u32));
    assert_eq!(alphabet_string_to_int("").unwrap(), BigUint::from(0u32));
}

fn alphabet_text() -> impl Strategy<Value = String> {
    prop::collection::vec(0..94usize, 0..64)
        .prop_map(|indices| indices.into_iter().map(|i| char::from(ALPHABET[i])).collect())
}

proptest! {
    #[test]
    fn prop_string_round_trip(text in alphabet_text()) {
        let payload = encode_string(&text).unwrap();
        prop_assert_eq!(decode_string(payload.as_bytes()).unwrap(), text);
    }

    #[test]
    fn prop_payload_round_trip(payload in "[!-~]{0,48}") {
        let text = decode_string(payload.as_bytes()).unwrap();
        prop_assert_eq!(encode_string(&text).unwrap(), payload);
    }

    #[test]
    fn prop_integer_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let n = BigUint::from_bytes_be(&bytes);
        prop_assert_eq!(decode_integer(encode_integer(&n).as_bytes()).unwrap(), n);
    }

    #[test]
    fn prop_alphabet_integer_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let n = BigUint::from_bytes_be(&bytes);
        prop_assert_eq!(alphabet_string_to_int(&int_to_alphabet_string(&n)).unwrap(), n);
    }
}
