#![doc = include_str!("../README.md")]

mod base62;
mod bytes;
mod codec;
mod error;
mod rand;
mod secret;
mod thread_random;
mod time;

pub use crate::base62::*;
pub use crate::bytes::*;
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::rand::*;
pub use crate::secret::*;
pub use crate::thread_random::*;
pub use crate::time::*;
