//! Base-94 integers and alphabet strings.
//!
//! Two related but distinct encodings share the radix:
//!
//! - **Wire payloads** (`I`, `S`, `L`, `v` tokens): each byte is a digit
//!   `byte - 33`. Integers read the digits as a numeral; strings look each
//!   digit up in [`ALPHABET`].
//! - **Runtime conversions** (`U$` / `U#`): an integer's base-94 digits are
//!   mapped through the alphabet directly, so `int_to_alphabet_string(0)` is
//!   `"a"`, not `"!"`.

use num_bigint::BigUint;

use crate::alphabet::{alphabet_char, alphabet_index, BYTE_OFFSET, RADIX};
use crate::{CodecError, CodecResult, ALPHABET};

/// Map a payload byte to its digit value.
#[inline]
fn digit(byte: u8) -> Option<u8> {
    match byte {
        b'!'..=b'~' => Some(byte - BYTE_OFFSET),
        _ => None,
    }
}

fn digits_of(payload: &[u8]) -> CodecResult<Vec<u8>> {
    payload
        .iter()
        .enumerate()
        .map(|(offset, &byte)| {
            digit(byte).ok_or_else(|| CodecError::MalformedLiteral {
                literal: String::from_utf8_lossy(payload).into_owned(),
                offset,
                byte,
            })
        })
        .collect()
}

/// Base-94 digits of `n`, most significant first. Zero is a single `0` digit.
fn radix_digits(n: &BigUint) -> Vec<u8> {
    if n.bits() == 0 {
        return vec![0];
    }
    n.to_radix_be(RADIX)
}

/// Decode a wire payload as a base-94 numeral. An empty payload is zero.
pub fn decode_integer(payload: &[u8]) -> CodecResult<BigUint> {
    let digits = digits_of(payload)?;
    if digits.is_empty() {
        return Ok(BigUint::default());
    }
    // Every digit is < 94 after validation, so this always succeeds.
    Ok(BigUint::from_radix_be(&digits, RADIX).unwrap_or_default())
}

/// Encode `n` as a wire payload (the inverse of [`decode_integer`]).
pub fn encode_integer(n: &BigUint) -> String {
    radix_digits(n)
        .into_iter()
        .map(|d| char::from(d + BYTE_OFFSET))
        .collect()
}

/// Decode a wire payload as an alphabet string.
pub fn decode_string(payload: &[u8]) -> CodecResult<String> {
    Ok(digits_of(payload)?
        .into_iter()
        .map(|d| char::from(ALPHABET[usize::from(d)]))
        .collect())
}

/// Encode text as a wire payload (the inverse of [`decode_string`]).
pub fn encode_string(text: &str) -> CodecResult<String> {
    text.chars()
        .enumerate()
        .map(|(offset, ch)| {
            alphabet_index(ch)
                .map(|i| char::from(i + BYTE_OFFSET))
                .ok_or(CodecError::UnencodableChar { ch, offset })
        })
        .collect()
}

/// `U$`: spell `n` in base 94 using alphabet characters as digits.
pub fn int_to_alphabet_string(n: &BigUint) -> String {
    radix_digits(n)
        .into_iter()
        .filter_map(alphabet_char)
        .collect()
}

/// `U#`: read `text` as a base-94 numeral whose digits are alphabet characters.
pub fn alphabet_string_to_int(text: &str) -> CodecResult<BigUint> {
    let digits = text
        .chars()
        .enumerate()
        .map(|(offset, ch)| alphabet_index(ch).ok_or(CodecError::UnencodableChar { ch, offset }))
        .collect::<CodecResult<Vec<u8>>>()?;
    if digits.is_empty() {
        return Ok(BigUint::default());
    }
    Ok(BigUint::from_radix_be(&digits, RADIX).unwrap_or_default())
}

#[cfg(test)]
mod tests;
