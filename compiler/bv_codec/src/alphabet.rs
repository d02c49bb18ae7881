//! The fixed 94-symbol string alphabet.

/// Radix of every numeral in the encoding.
pub const RADIX: u32 = 94;

/// Offset between a wire byte and its digit / alphabet index.
pub(crate) const BYTE_OFFSET: u8 = 33;

/// Alphabet index `i` is written on the wire as byte `i + 33`.
pub const ALPHABET: &[u8; 94] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`|~ \n";

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// ASCII byte -> alphabet index, `NOT_IN_ALPHABET` for unmapped bytes.
static INVERSE: [u8; 128] = build_inverse();

const fn build_inverse() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// The character at alphabet index `index`, if `index < 94`.
#[inline]
pub fn alphabet_char(index: u8) -> Option<char> {
    ALPHABET.get(usize::from(index)).map(|&b| char::from(b))
}

/// The alphabet index of `ch`, if it is one of the 94 symbols.
#[inline]
pub fn alphabet_index(ch: char) -> Option<u8> {
    let byte = u8::try_from(ch).ok()?;
    match INVERSE.get(usize::from(byte)) {
        Some(&NOT_IN_ALPHABET) | None => None,
        Some(&index) => Some(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_no_duplicates() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(alphabet_index(char::from(b)), Some(i as u8));
        }
    }

    #[test]
    fn test_known_positions() {
        assert_eq!(alphabet_char(0), Some('a'));
        assert_eq!(alphabet_char(26), Some('A'));
        assert_eq!(alphabet_char(52), Some('0'));
        assert_eq!(alphabet_char(92), Some(' '));
        assert_eq!(alphabet_char(93), Some('\n'));
        assert_eq!(alphabet_char(94), None);
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(alphabet_index('{'), None);
        assert_eq!(alphabet_index('}'), None);
        assert_eq!(alphabet_index('\t'), None);
        assert_eq!(alphabet_index('λ'), None);
    }
}
