use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

const BASE: u32 = 62;
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;

/// Lookup table for base62 decoding. Unlike Crockford base32 there is no
/// case-folding: 'A' and 'a' are distinct digits.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 62 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Maps a single digit value to its base62 character.
///
/// `0..=9` map to `'0'..='9'`, `10..=35` to `'A'..='Z'`, and `36..=61` to
/// `'a'..='z'`.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] for values outside `0..=61`.
pub fn digit_to_char(digit: u8) -> Result<char> {
    ALPHABET
        .get(usize::from(digit))
        .map(|&b| char::from(b))
        .ok_or(Error::InvalidDigit { digit })
}

/// Maps a base62 character (given as its ASCII byte) back to its digit value.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for any byte outside `0-9`, `A-Z`,
/// `a-z`.
pub fn char_to_digit(byte: u8) -> Result<u8> {
    let val = LOOKUP[usize::from(byte)];
    if val == NO_VALUE {
        return Err(Error::InvalidCharacter { byte });
    }
    Ok(val)
}

/// Encodes a non-negative integer as a base62 string, most significant digit
/// first.
///
/// Zero encodes as `"0"`; every other value is emitted without leading
/// zeros, so the output length grows with the magnitude of `n`.
///
/// # Example
///
/// ```
/// use divecode::encode_integer;
/// use num_bigint::BigUint;
///
/// assert_eq!(encode_integer(&BigUint::ZERO), "0");
/// assert_eq!(encode_integer(&BigUint::from(61_u32)), "z");
/// assert_eq!(encode_integer(&BigUint::from(62_u32)), "10");
/// ```
pub fn encode_integer(n: &BigUint) -> String {
    if n.is_zero() {
        return "0".to_string();
    }
    n.to_radix_be(BASE)
        .into_iter()
        .map(|digit| char::from(ALPHABET[usize::from(digit)]))
        .collect()
}

/// Decodes a base62 string into a non-negative integer.
///
/// Digits are treated most-significant-first. The empty string decodes to
/// zero by convention; rejecting empty *tokens* is the dive-code layer's
/// responsibility, not this codec's.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] if any character falls outside the
/// base62 alphabet.
pub fn decode_integer(s: &str) -> Result<BigUint> {
    let mut acc = BigUint::ZERO;
    for byte in s.bytes() {
        let digit = char_to_digit(byte)?;
        acc = acc * BASE + u32::from(digit);
    }
    Ok(acc)
}
