#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod error;
pub mod kind;
pub mod pretty;

pub use block::{blocks_needed, padded_byte_len, BLOCK_SIZE};
pub use error::{Error, Result};
pub use kind::{classify, ValueKind};
pub use pretty::{pretty_string, pretty_string_into};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
