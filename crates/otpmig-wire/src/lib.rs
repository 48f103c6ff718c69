#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::WireError;
pub use reader::{FieldReader, FieldValue, RawField, WireType};
pub use writer::{encode_len_field, encode_varint_field};

/// Highest field number a single key byte can carry (`key >> 3`, key ≤ 0x7F
/// without a continuation bit).
pub const MAX_FIELD_NUMBER: u8 = 15;

/// Highest value a one-byte varint or a one-byte length prefix can carry.
pub const MAX_ONE_BYTE_VALUE: u64 = 127;
