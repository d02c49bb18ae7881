//! Wire codec for the bound-variable token language.
//!
//! A message is one line of whitespace-separated tokens. The first byte of a
//! token is its tag; the remaining bytes are a payload drawn from the 94
//! printable ASCII bytes `!` (33) through `~` (126):
//!
//! | Tag | Atom | Payload |
//! |-----|------|---------|
//! | `T` / `F` | boolean | none |
//! | `I` | integer | base-94 digits, most significant first |
//! | `S` | string | one byte per character, mapped through [`ALPHABET`] |
//! | `U` / `B` | operator placeholder | the operator symbol |
//! | `?` | conditional placeholder | none |
//! | `L` | lambda placeholder | base-94 variable id |
//! | `v` | variable | base-94 variable id |
//!
//! There is no escaping: a space inside a string travels as the alphabet
//! byte for space (`}`), never as raw whitespace.

mod alphabet;
mod base94;
mod error;
mod token;

pub use alphabet::{alphabet_char, alphabet_index, ALPHABET, RADIX};
pub use base94::{
    alphabet_string_to_int, decode_integer, decode_string, encode_integer, encode_string,
    int_to_alphabet_string,
};
pub use error::{CodecError, CodecResult};
pub use token::{
    decode_token, encode_atom, encode_atoms, encode_string_as_message, tokenize, STRING_TAG,
};
