use core::num::NonZeroU16;

/// A trait for random sources that produce per-encode salts.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// one in tests, making encode deterministic under test.
///
/// The salt range is `[1, 0xFFFF]`; zero is excluded because the decoder
/// reduces the shared secret modulo the salt, and a zero modulus is
/// meaningless. The `NonZeroU16` return type makes that invariant
/// unrepresentable rather than merely checked.
///
/// # Example
///
/// ```
/// use core::num::NonZeroU16;
/// use divecode::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn salt(&self) -> NonZeroU16 {
///         NonZeroU16::new(1234).unwrap()
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.salt().get(), 1234);
/// ```
pub trait RandSource {
    /// Returns a fresh salt in `[1, 0xFFFF]`.
    fn salt(&self) -> NonZeroU16;
}
