use crate::bytes::text_to_integer;
use crate::error::Result;
use core::fmt;
use num_bigint::BigUint;

/// The shared secret keying the obfuscation step.
///
/// The secret is byte-packed into an integer once at construction, using the
/// same rule as identifiers, and is only ever used as a modulus operand. It is
/// never part of an emitted token. This is obfuscation, not cryptography: the
/// secret is not a key in any formal sense and the scheme offers no integrity
/// or confidentiality guarantees.
///
/// Both halves of a conversation must be constructed from the same secret
/// string, otherwise decoded tokens come out as nonsense (silently: there is
/// no checksum to catch the mismatch).
///
/// # Example
///
/// ```
/// use divecode::SharedSecret;
///
/// let secret = SharedSecret::new("This is very secret.").unwrap();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret {
    int: BigUint,
}

impl SharedSecret {
    /// Builds a secret from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharacterOutOfRange`] if the secret contains a
    /// character whose code point exceeds 255.
    ///
    /// [`Error::CharacterOutOfRange`]: crate::Error::CharacterOutOfRange
    pub fn new(secret: &str) -> Result<Self> {
        Ok(Self {
            int: text_to_integer(secret)?,
        })
    }

    /// The packed integer form, used as the left operand of `secret mod salt`.
    pub(crate) fn as_int(&self) -> &BigUint {
        &self.int
    }
}

impl fmt::Debug for SharedSecret {
    // Redacted: secrets do not belong in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn packs_like_an_identifier() {
        let secret = SharedSecret::new("AB").unwrap();
        assert_eq!(secret.as_int(), &BigUint::from(0x4142_u32));
    }

    #[test]
    fn wide_character_is_rejected() {
        assert_eq!(
            SharedSecret::new("\u{2603}").unwrap_err(),
            Error::CharacterOutOfRange { ch: '\u{2603}' }
        );
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = SharedSecret::new("hunter2").unwrap();
        assert_eq!(format!("{secret:?}"), "SharedSecret(..)");
    }
}
