/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `divecode` can produce.
///
/// Every failure indicates a malformed or forged token, or an identifier the
/// byte-packing scheme cannot represent. None of them are retryable: callers
/// are expected to reject the offending input and move on.
#[derive(Clone, PartialEq, Eq, thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A token character falls outside the base62 alphabet `0-9 A-Z a-z`.
    #[error("invalid base62 character: {byte:#04x}")]
    InvalidCharacter { byte: u8 },

    /// A digit value has no base62 representation (valid range is 0..=61).
    #[error("digit {digit} is out of range for base62")]
    InvalidDigit { digit: u8 },

    /// An identifier character does not fit in a single byte (code point >
    /// 255), so it cannot participate in byte packing.
    #[error("character {ch:?} does not fit in one byte")]
    CharacterOutOfRange { ch: char },

    /// The decoded salt is zero, or the obfuscation multiplier derived from it
    /// reduces to zero. Either way the token cannot have been produced by a
    /// well-formed encode under this secret.
    #[error("token carries an unusable salt")]
    InvalidSalt,

    /// Decode was handed an empty string.
    #[error("token is empty")]
    EmptyToken,
}
