#![no_main]

use libfuzzer_sys::fuzz_target;
use otpmig_wire::{FieldReader, FieldValue};

// Fuzz target: wire-level field walker.
//
// Drives `FieldReader` over arbitrary bytes and checks its structural
// guarantees. Catches bugs in:
// - Cursor advancement (no infinite loops, no overshoot)
// - Slice bounds on length-delimited payloads
// - Truncation state transitions
fuzz_target!(|data: &[u8]| {
    let mut reader = FieldReader::new(data);
    let mut last_offset = 0;

    while let Some(field) = reader.next_field() {
        // The cursor must make progress on every yielded field.
        assert!(reader.offset() > last_offset);
        assert!(reader.offset() <= data.len());
        last_offset = reader.offset();

        assert!(field.field_number <= 31);
        if let FieldValue::LengthDelimited(bytes) = field.value {
            assert!(bytes.len() <= 127);
        }
    }
});
