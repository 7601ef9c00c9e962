use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Packs a text string into a single unbounded-width integer, one byte per
/// character, big-endian: the first character lands in the most significant
/// byte.
///
/// The empty string packs to zero.
///
/// # Errors
///
/// Returns [`Error::CharacterOutOfRange`] if any character's code point
/// exceeds 255 and therefore cannot occupy a single byte.
pub fn text_to_integer(text: &str) -> Result<BigUint> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte =
            u8::try_from(u32::from(ch)).map_err(|_| Error::CharacterOutOfRange { ch })?;
        bytes.push(byte);
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Unpacks an integer produced by [`text_to_integer`] back into text, most
/// significant byte first, each byte interpreted as a code point.
///
/// Zero unpacks to the empty string. Leading zero bytes are not recoverable:
/// an input whose first character is NUL packs to the same integer as the
/// input without it. That lossiness is part of the scheme and is deliberately
/// left as-is.
pub fn integer_to_text(n: &BigUint) -> String {
    if n.is_zero() {
        return String::new();
    }
    n.to_bytes_be().into_iter().map(char::from).collect()
}
