use crate::error::WireError;
use crate::{MAX_FIELD_NUMBER, MAX_ONE_BYTE_VALUE};

// Writer counterpart of the reader: emits the same single-byte-key,
// single-byte-length subset. Enforcing the limits here means the
// workspace can never produce a payload it cannot read back.

fn key_byte(field_number: u8, wire_type: u8) -> Result<u8, WireError> {
    if field_number > MAX_FIELD_NUMBER {
        return Err(WireError::FieldNumberOutOfRange { field_number });
    }
    Ok(field_number << 3 | wire_type)
}

/// Append a varint field (wire type 0).
///
/// Wire layout:
/// ```text
///   key (1 byte) │ value (1 byte)
/// ```
///
/// # Errors
///
/// [`WireError::FieldNumberOutOfRange`] above 15,
/// [`WireError::ValueOutOfRange`] above 127.
pub fn encode_varint_field(buf: &mut Vec<u8>, field_number: u8, value: u64) -> Result<(), WireError> {
    let key = key_byte(field_number, 0)?;
    if value > MAX_ONE_BYTE_VALUE {
        return Err(WireError::ValueOutOfRange {
            field_number,
            value,
        });
    }
    buf.push(key);
    buf.push(value as u8);
    Ok(())
}

/// Append a length-delimited field (wire type 2).
///
/// Wire layout:
/// ```text
///   key (1 byte) │ length (1 byte) │ payload [length bytes]
/// ```
///
/// # Errors
///
/// [`WireError::FieldNumberOutOfRange`] above 15,
/// [`WireError::LengthOutOfRange`] for payloads longer than 127 bytes.
pub fn encode_len_field(buf: &mut Vec<u8>, field_number: u8, payload: &[u8]) -> Result<(), WireError> {
    let key = key_byte(field_number, 2)?;
    if payload.len() as u64 > MAX_ONE_BYTE_VALUE {
        return Err(WireError::LengthOutOfRange {
            field_number,
            len: payload.len(),
        });
    }
    buf.push(key);
    buf.push(payload.len() as u8);
    buf.extend_from_slice(payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{FieldReader, FieldValue};

    #[test]
    fn varint_field_layout() {
        let mut buf = Vec::new();
        encode_varint_field(&mut buf, 2, 42).unwrap();
        assert_eq!(buf, vec![0x10, 42]);
    }

    #[test]
    fn len_field_layout() {
        let mut buf = Vec::new();
        encode_len_field(&mut buf, 1, b"abc").unwrap();
        assert_eq!(buf, vec![0x0A, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn empty_payload_layout() {
        let mut buf = Vec::new();
        encode_len_field(&mut buf, 3, b"").unwrap();
        assert_eq!(buf, vec![0x1A, 0]);
    }

    #[test]
    fn roundtrip_through_reader() {
        let mut buf = Vec::new();
        encode_varint_field(&mut buf, 4, 1).unwrap();
        encode_len_field(&mut buf, 1, &[0x48, 0x65, 0x6C, 0x6C, 0x6F]).unwrap();
        encode_varint_field(&mut buf, 7, 127).unwrap();

        let mut reader = FieldReader::new(&buf);

        let f = reader.next_field().unwrap();
        assert_eq!(f.field_number, 4);
        assert_eq!(f.value, FieldValue::Varint(1));

        let f = reader.next_field().unwrap();
        assert_eq!(f.field_number, 1);
        assert_eq!(f.value, FieldValue::LengthDelimited(b"Hello".as_ref()));

        let f = reader.next_field().unwrap();
        assert_eq!(f.field_number, 7);
        assert_eq!(f.value, FieldValue::Varint(127));

        assert!(reader.next_field().is_none());
        assert!(!reader.truncated());
    }

    #[test]
    fn reject_field_number_above_15() {
        let mut buf = Vec::new();
        let err = encode_varint_field(&mut buf, 16, 0).unwrap_err();
        assert!(matches!(
            err,
            WireError::FieldNumberOutOfRange { field_number: 16 }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn reject_value_above_127() {
        let mut buf = Vec::new();
        let err = encode_varint_field(&mut buf, 2, 128).unwrap_err();
        assert!(matches!(err, WireError::ValueOutOfRange { value: 128, .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn reject_payload_above_127_bytes() {
        let mut buf = Vec::new();
        let payload = vec![0u8; 128];
        let err = encode_len_field(&mut buf, 1, &payload).unwrap_err();
        assert!(matches!(err, WireError::LengthOutOfRange { len: 128, .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn boundary_values_accepted() {
        let mut buf = Vec::new();
        encode_varint_field(&mut buf, 15, 127).unwrap();
        let payload = vec![0xAB; 127];
        encode_len_field(&mut buf, 15, &payload).unwrap();
        assert_eq!(buf.len(), 2 + 2 + 127);
    }
}
