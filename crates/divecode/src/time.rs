use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return a wall-clock timestamp in Unix
/// seconds.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests, so encoding becomes a pure function of its inputs.
///
/// Encoded timestamps occupy a 32-bit field; a source that returns values
/// beyond that range will bleed into the identifier bits on decode, exactly
/// as the packing scheme dictates. No overflow check is performed.
///
/// # Example
///
/// ```
/// use divecode::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_secs(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.unix_secs(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch.
    fn unix_secs(&self) -> u64;
}

/// A [`TimeSource`] backed by [`std::time::SystemTime`].
///
/// This is the default clock for production use. It is a zero-sized type and
/// may be freely shared across threads.
#[derive(Default, Clone, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_secs()
    }
}
