/// Cursor-based reader for the restricted protobuf-subset wire format
/// used by authenticator migration payloads.
///
/// Every field starts with a single key byte:
///
/// ```text
/// ┌───────────────┬───────────────┐
/// │ bits 7..3     │ bits 2..0     │
/// │ field number  │ wire type     │
/// └───────────────┴───────────────┘
/// ```
///
/// Two wire types exist in this format:
///
/// ```text
/// ┌──────┬──────────────────┬──────────────────────────────────┐
/// │ Wire │ Name             │ Payload                          │
/// ├──────┼──────────────────┼──────────────────────────────────┤
/// │ 0    │ Varint           │ one value byte                   │
/// │ 2    │ LengthDelimited  │ one length byte + that many bytes│
/// └──────┴──────────────────┴──────────────────────────────────┘
/// ```
///
/// This is intentionally NOT general protobuf: keys, lengths, and varint
/// values are each a single byte, because the migration message shapes
/// never need more. Multi-byte LEB128 continuation is out of scope and
/// must not be added — it would change how edge-case inputs decode.
///
/// Structural problems (an unknown wire type, or a buffer that ends while
/// payload bytes are still owed) terminate the sequence instead of
/// failing: the payload comes from a third-party export and a partial
/// read is more useful than a hard error. [`FieldReader::truncated`]
/// reports whether that happened.

/// Wire type tag, the low 3 bits of a key byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    LengthDelimited = 2,
}

impl WireType {
    /// Extract the wire type from a key byte. Returns `None` for tags
    /// this format does not use (1, 3, 4, 5, ...).
    pub fn from_key(key: u8) -> Option<Self> {
        match key & 0b111 {
            0 => Some(Self::Varint),
            2 => Some(Self::LengthDelimited),
            _ => None,
        }
    }
}

/// One decoded field: its number and payload.
///
/// Borrows length-delimited payloads straight out of the input buffer;
/// nothing is retained past the decode pass that consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawField<'a> {
    pub field_number: u8,
    pub value: FieldValue<'a>,
}

/// A field's payload, tagged by wire type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Wire type 0 — a single value byte.
    Varint(u8),
    /// Wire type 2 — a length-prefixed byte slice.
    LengthDelimited(&'a [u8]),
}

/// Walks a byte buffer yielding [`RawField`]s until the buffer is
/// exhausted or a structural problem ends the sequence early.
pub struct FieldReader<'a> {
    buf: &'a [u8],
    cursor: usize,
    truncated: bool,
}

impl<'a> FieldReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            cursor: 0,
            truncated: false,
        }
    }

    /// Byte offset of the next unread key, for diagnostics.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// Whether the sequence ended early (unknown wire type, or the
    /// buffer ran out mid-field). Meaningful once `next_field` has
    /// returned `None`.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Read the next field.
    ///
    /// Returns `None` at end of input. A `None` with
    /// [`truncated`](Self::truncated) set means the remaining bytes were
    /// abandoned rather than cleanly consumed.
    pub fn next_field(&mut self) -> Option<RawField<'a>> {
        let key = *self.buf.get(self.cursor)?;
        self.cursor += 1;

        let field_number = key >> 3;
        let Some(wire_type) = WireType::from_key(key) else {
            // Unsupported wire type: nothing after the key can be
            // interpreted, so stop here.
            self.truncated = true;
            self.cursor = self.buf.len();
            return None;
        };

        match wire_type {
            WireType::Varint => {
                let Some(&value) = self.buf.get(self.cursor) else {
                    self.truncated = true;
                    return None;
                };
                self.cursor += 1;
                Some(RawField {
                    field_number,
                    value: FieldValue::Varint(value),
                })
            }
            WireType::LengthDelimited => {
                let Some(&len) = self.buf.get(self.cursor) else {
                    self.truncated = true;
                    return None;
                };
                self.cursor += 1;

                let end = self.cursor + len as usize;
                let Some(payload) = self.buf.get(self.cursor..end) else {
                    self.truncated = true;
                    self.cursor = self.buf.len();
                    return None;
                };
                self.cursor = end;
                Some(RawField {
                    field_number,
                    value: FieldValue::LengthDelimited(payload),
                })
            }
        }
    }
}
