use otpmig_types::{Algorithm, MigrationPayload, OtpAccount, OtpType};
use otpmig_wire::{FieldReader, FieldValue};

use crate::error::ExtractError;
use crate::uri;

/// Decode a raw migration payload buffer into a [`MigrationPayload`].
///
/// This never fails. The payload originates in a third-party export and
/// cannot be schema-validated up front, so every structural problem
/// degrades instead of erroring: unreadable tails are dropped (and the
/// payload's `truncated` flag set), unknown fields are skipped, and
/// absent fields keep their defaults. The worst possible outcome is a
/// payload with zero accounts — a valid result, distinct from the
/// extraction failures in [`ExtractError`].
///
/// Field schema at the top level:
///
/// ```text
/// ┌─────────┬───────────┬───────────────┐
/// │ field # │ wire type │ meaning       │
/// ├─────────┼───────────┼───────────────┤
/// │ 1       │ 2         │ one account   │
/// │ 2       │ 0         │ version       │
/// │ 3       │ 0         │ batch_size    │
/// │ 4       │ 0         │ batch_index   │
/// │ 5       │ 0         │ batch_id      │
/// └─────────┴───────────┴───────────────┘
/// ```
#[must_use]
pub fn decode_payload(buf: &[u8]) -> MigrationPayload {
    let mut payload = MigrationPayload::default();
    let mut reader = FieldReader::new(buf);

    while let Some(field) = reader.next_field() {
        match (field.field_number, field.value) {
            (1, FieldValue::LengthDelimited(body)) => {
                let (account, truncated) = decode_account(body);
                payload.truncated |= truncated;
                payload.accounts.push(account);
            }
            (2, FieldValue::Varint(v)) => payload.version = u32::from(v),
            (3, FieldValue::Varint(v)) => payload.batch_size = u32::from(v),
            (4, FieldValue::Varint(v)) => payload.batch_index = u32::from(v),
            (5, FieldValue::Varint(v)) => payload.batch_id = u32::from(v),
            // Unknown field number or unexpected wire type: the reader
            // already consumed the bytes, nothing to do.
            _ => {}
        }
    }
    payload.truncated |= reader.truncated();

    payload
}

/// Decode one `otp_parameters` sub-message.
///
/// Returns the account and whether its buffer ended early. A sub-message
/// that stops mid-field keeps every field read up to that point and
/// defaults for the rest — it never poisons the surrounding payload.
///
/// ```text
/// ┌─────────┬───────────┬─────────────────────────────┐
/// │ field # │ wire type │ meaning                     │
/// ├─────────┼───────────┼─────────────────────────────┤
/// │ 1       │ 2         │ secret (raw bytes)          │
/// │ 2       │ 2         │ name (UTF-8)                │
/// │ 3       │ 2         │ issuer (UTF-8)              │
/// │ 4       │ 0         │ algorithm (1/2/3)           │
/// │ 5       │ 0         │ digits                      │
/// │ 6       │ 0         │ type (1=HOTP, 2=TOTP)       │
/// │ 7       │ 0         │ counter                     │
/// └─────────┴───────────┴─────────────────────────────┘
/// ```
fn decode_account(body: &[u8]) -> (OtpAccount, bool) {
    let mut account = OtpAccount::default();
    let mut reader = FieldReader::new(body);

    while let Some(field) = reader.next_field() {
        match (field.field_number, field.value) {
            (1, FieldValue::LengthDelimited(bytes)) => account.secret = bytes.to_vec(),
            (2, FieldValue::LengthDelimited(bytes)) => {
                account.name = String::from_utf8_lossy(bytes).into_owned();
            }
            (3, FieldValue::LengthDelimited(bytes)) => {
                account.issuer = String::from_utf8_lossy(bytes).into_owned();
            }
            (4, FieldValue::Varint(v)) => account.algorithm = Algorithm::from_wire(v),
            (5, FieldValue::Varint(v)) => account.digits = u32::from(v),
            (6, FieldValue::Varint(v)) => account.otp_type = OtpType::from_wire(v),
            (7, FieldValue::Varint(v)) => account.counter = u64::from(v),
            _ => {}
        }
    }

    (account, reader.truncated())
}

/// The full input-side pipeline: extract the payload bytes from a
/// migration URI, then decode them.
///
/// # Errors
///
/// Only the extraction stage can fail; see [`extract_data`](uri::extract_data).
pub fn decode_migration_uri(input: &str) -> Result<MigrationPayload, ExtractError> {
    let data = uri::extract_data(input)?;
    Ok(decode_payload(&data))
}
