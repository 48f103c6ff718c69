/// Implementation of `otpmig inspect`.
///
/// Extracts the raw payload from a migration URI and walks its wire
/// fields without interpreting them through the account schema — the
/// view you want when a payload decodes to fewer accounts than
/// expected.
///
/// # Output format
///
/// ```text
/// Payload: 42 bytes
/// 0000  field 1  len-delimited  29 bytes  (account sub-message)
///       0000  field 1  len-delimited  5 bytes   48656c6c6f
///       0007  field 2  len-delimited  5 bytes   "alice"
///       000e  field 4  varint        1
/// 001f  field 2  varint        1
/// ---
/// clean end of payload
/// ```
///
/// Nested walks are attempted for every top-level field 1; other
/// length-delimited payloads are shown as hex. `--show-hex` adds a
/// 16-bytes-per-line dump of the whole payload first.
use anyhow::{Context, Result};
use otpmig_decoder::extract_data;
use otpmig_wire::{FieldReader, FieldValue};

use crate::{InspectArgs, read_uri};

/// Run the `otpmig inspect` command.
///
/// # Errors
///
/// Returns an error if the URI cannot be read or fails extraction.
pub fn run(args: &InspectArgs) -> Result<()> {
    let uri = read_uri(args.uri.as_deref(), args.file.as_ref())?;
    let payload = extract_data(&uri).context("failed to extract migration data")?;

    println!("Payload: {} bytes", payload.len());

    if args.show_hex {
        hex_dump(&payload);
    }

    let truncated = walk_fields(&payload, 0);
    println!("---");
    if truncated {
        println!("payload cut short before the end of the buffer");
    } else {
        println!("clean end of payload");
    }

    Ok(())
}

/// Walk one message level, printing a line per field. Returns whether
/// the walk ended early. `depth` 0 is the top-level payload message;
/// field 1 payloads at depth 0 are walked again as account
/// sub-messages.
fn walk_fields(buf: &[u8], depth: usize) -> bool {
    let indent = "      ".repeat(depth);
    let mut reader = FieldReader::new(buf);
    let mut offset = 0;

    while let Some(field) = reader.next_field() {
        match field.value {
            FieldValue::Varint(v) => {
                println!(
                    "{indent}{offset:04x}  field {}  varint        {v}",
                    field.field_number
                );
            }
            FieldValue::LengthDelimited(bytes) => {
                let note = if depth == 0 && field.field_number == 1 {
                    "  (account sub-message)"
                } else {
                    ""
                };
                println!(
                    "{indent}{offset:04x}  field {}  len-delimited  {} bytes{note}",
                    field.field_number,
                    bytes.len()
                );
                if depth == 0 && field.field_number == 1 {
                    walk_fields(bytes, depth + 1);
                } else if !bytes.is_empty() {
                    println!("{indent}      {}", preview(bytes));
                }
            }
        }
        offset = reader.offset();
    }

    reader.truncated()
}

/// Printable preview of a payload: quoted text when it is clean ASCII,
/// hex otherwise.
fn preview(bytes: &[u8]) -> String {
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("{:?}", String::from_utf8_lossy(bytes))
    } else {
        hex::encode(bytes)
    }
}

/// 16-bytes-per-line dump with an ASCII gutter.
fn hex_dump(bytes: &[u8]) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("  {offset:04x}  {hex:<48}  {ascii}");
    }
}
