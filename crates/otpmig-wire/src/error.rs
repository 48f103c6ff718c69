/// Errors raised by the writer half of the wire format.
///
/// Only *writing* can fail: the restricted encoding fits field numbers in
/// a single key byte and values/lengths in a single payload byte, so any
/// input outside those ranges simply cannot be represented. The reader
/// never errors — malformed input ends the field sequence instead (see
/// [`FieldReader`](crate::FieldReader)).
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Field number does not fit in the 4 bits available above the
    /// wire-type tag (`key = number << 3 | wire_type`, key ≤ 0x7F).
    #[error("field number {field_number} exceeds the single-key-byte limit of 15")]
    FieldNumberOutOfRange { field_number: u8 },

    /// Varint value does not fit in one byte.
    #[error("value {value} for field {field_number} exceeds the one-byte varint limit of 127")]
    ValueOutOfRange { field_number: u8, value: u64 },

    /// Length-delimited payload does not fit behind a one-byte length prefix.
    #[error("payload of {len} bytes for field {field_number} exceeds the one-byte length limit of 127")]
    LengthOutOfRange { field_number: u8, len: usize },
}
