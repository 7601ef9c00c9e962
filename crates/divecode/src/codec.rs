use core::fmt;
use core::num::NonZeroU16;

#[cfg(feature = "tracing")]
use tracing::instrument;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::base62::{decode_integer, encode_integer};
use crate::bytes::{integer_to_text, text_to_integer};
use crate::error::{Error, Result};
use crate::rand::RandSource;
use crate::secret::SharedSecret;
use crate::thread_random::ThreadRandom;
use crate::time::{SystemClock, TimeSource};

/// Bit layout of the packed payload, least significant field first. The
/// identifier occupies the remaining, unbounded-width high bits.
const SALT_BITS: usize = 16;
const INCREMENT_BITS: usize = 8;
const TIMESTAMP_BITS: usize = 32;
const IDENTIFIER_SHIFT: usize = TIMESTAMP_BITS + INCREMENT_BITS;

/// A dive code: an opaque printable token over the base62 alphabet
/// `0-9 A-Z a-z`.
///
/// The alphabet makes the token safe for direct inclusion in a URL path
/// segment without percent-encoding. Length is not fixed; it grows with the
/// magnitude of the packed payload, chiefly the identifier length.
///
/// A token is a value: produced by one [`DiveCodec::encode`] call, consumed by
/// at most one [`DiveCodec::decode`] call, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DiveCode(String);

impl DiveCode {
    /// Wraps an inbound string (e.g. a URL path segment) as a dive code.
    ///
    /// No validation happens here; malformed input surfaces as an error from
    /// [`DiveCodec::decode`].
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DiveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DiveCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DiveCode> for String {
    fn from(code: DiveCode) -> Self {
        code.0
    }
}

/// The fields recovered from a decoded dive code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiveInfo {
    /// The identifier the token was encoded with, byte-for-byte.
    pub identifier: String,
    /// Unix seconds at encode time.
    pub timestamp: u32,
    /// The 8-bit sequence counter the token was encoded with.
    pub increment: u8,
}

/// Encoder/decoder for dive codes.
///
/// Packs `(identifier, timestamp, increment)` into one unbounded-precision
/// integer, multiplies it by `secret mod salt` so that repeated encodings of
/// the same logical input differ character-for-character, appends the salt,
/// and emits the whole thing in base62. Decoding runs the exact inverse.
///
/// The clock and RNG are injected collaborators, defaulting to
/// [`SystemClock`] and [`ThreadRandom`]. With both pinned in tests, encode is
/// fully deterministic.
///
/// There is no integrity check: a token forged, corrupted, or produced under
/// a different secret either fails with a decode error or comes out as
/// nonsense. Detecting that is the caller's problem (typically a lookup miss
/// in whatever store maps tokens to destinations).
///
/// # Example
///
/// ```
/// use divecode::{DiveCodec, SharedSecret};
///
/// let secret = SharedSecret::new("This is very secret.")?;
/// let codec = DiveCodec::new(secret);
///
/// let code = codec.encode("Name", 7)?;
/// let info = codec.decode(code.as_str())?;
///
/// assert_eq!(info.identifier, "Name");
/// assert_eq!(info.increment, 7);
/// # Ok::<(), divecode::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct DiveCodec<T = SystemClock, R = ThreadRandom> {
    secret: SharedSecret,
    time: T,
    rng: R,
}

impl DiveCodec {
    /// Creates a codec with the default wall clock and thread-local RNG.
    #[must_use]
    pub fn new(secret: SharedSecret) -> Self {
        Self::with_sources(secret, SystemClock, ThreadRandom)
    }
}

impl<T, R> DiveCodec<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a codec with explicit time and random sources.
    ///
    /// # Example
    ///
    /// ```
    /// use core::num::NonZeroU16;
    /// use divecode::{DiveCodec, RandSource, SharedSecret, TimeSource};
    ///
    /// struct FixedTime;
    /// impl TimeSource for FixedTime {
    ///     fn unix_secs(&self) -> u64 {
    ///         1_700_000_000
    ///     }
    /// }
    ///
    /// struct FixedRand;
    /// impl RandSource for FixedRand {
    ///     fn salt(&self) -> NonZeroU16 {
    ///         NonZeroU16::new(0x1234).unwrap()
    ///     }
    /// }
    ///
    /// let secret = SharedSecret::new("This is very secret.").unwrap();
    /// let codec = DiveCodec::with_sources(secret, FixedTime, FixedRand);
    ///
    /// // Deterministic: identical inputs now yield identical tokens.
    /// assert_eq!(codec.encode("A", 5).unwrap(), codec.encode("A", 5).unwrap());
    /// ```
    pub const fn with_sources(secret: SharedSecret, time: T, rng: R) -> Self {
        Self { secret, time, rng }
    }

    /// Encodes `(identifier, increment)` plus the current clock reading into
    /// a dive code.
    ///
    /// The identifier occupies the unbounded high bits of the payload, so any
    /// length works. The timestamp field is 32 bits wide and the increment 8;
    /// `increment` being a `u8` makes its range a non-issue at this boundary.
    ///
    /// Two calls with identical arguments produce different tokens, because
    /// the salt (and usually the timestamp) differ. Both decode to the same
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharacterOutOfRange`] if `identifier` contains a
    /// character whose code point exceeds 255.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn encode(&self, identifier: &str, increment: u8) -> Result<DiveCode> {
        let timestamp = self.time.unix_secs();
        let salt = self.rng.salt();

        let mut payload = text_to_integer(identifier)? << IDENTIFIER_SHIFT;
        payload |= BigUint::from(timestamp) << INCREMENT_BITS;
        payload |= BigUint::from(increment);

        payload *= self.multiplier(salt);
        payload = (payload << SALT_BITS) | BigUint::from(salt.get());

        Ok(DiveCode(encode_integer(&payload)))
    }

    /// Decodes a dive code back into its packed fields.
    ///
    /// Deterministic given the token and the secret. A token that was not
    /// produced under the same secret decodes to nonsense without error
    /// unless its salt happens to be unusable.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyToken`] for an empty input string.
    /// - [`Error::InvalidCharacter`] if the token contains a character
    ///   outside the base62 alphabet.
    /// - [`Error::InvalidSalt`] if the embedded salt is zero, or if the
    ///   secret reduces to zero modulo the salt (the obfuscation multiplier
    ///   would be zero, so no payload can be recovered).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn decode(&self, token: &str) -> Result<DiveInfo> {
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }
        let mut payload = decode_integer(token)?;

        let salt = low_u64(&payload) as u16;
        payload >>= SALT_BITS;
        let salt = NonZeroU16::new(salt).ok_or(Error::InvalidSalt)?;

        let multiplier = self.multiplier(salt);
        if multiplier.is_zero() {
            return Err(Error::InvalidSalt);
        }
        // Integer division, mirroring the encode-side multiplication. Any
        // remainder is discarded; for a well-formed token there is none.
        payload /= &multiplier;

        let increment = low_u64(&payload) as u8;
        payload >>= INCREMENT_BITS;

        let timestamp = low_u64(&payload) as u32;
        payload >>= TIMESTAMP_BITS;

        Ok(DiveInfo {
            identifier: integer_to_text(&payload),
            timestamp,
            increment,
        })
    }

    /// The obfuscation multiplier for a given salt: `secret mod salt`.
    fn multiplier(&self, salt: NonZeroU16) -> BigUint {
        self.secret.as_int() % BigUint::from(salt.get())
    }
}

/// The least significant 64 bits of `n`, or 0 when `n` is zero. Callers mask
/// further down to the field width they are extracting.
fn low_u64(n: &BigUint) -> u64 {
    n.iter_u64_digits().next().unwrap_or(0)
}
