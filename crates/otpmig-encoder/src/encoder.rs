use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use otpmig_types::{MigrationPayload, OtpAccount, escape};
use otpmig_wire::{encode_len_field, encode_varint_field};

use crate::error::EncodeError;

/// Builder for migration payloads — the inverse of
/// `otpmig_decoder::decode_payload`.
///
/// Accounts are serialised in insertion order, each as a length-delimited
/// field 1 sub-message, followed by the batch metadata varints. Every
/// account field is written, including ones holding their default value,
/// so encoding is a pure function of the builder state: decoding a
/// payload produced here and re-encoding the result is byte-identical.
///
/// ```text
/// ┌─────────────────────────────────────────────────┐
/// │ field 1 (len-delimited)  account 0 sub-message  │
/// │ field 1 (len-delimited)  account 1 sub-message  │
/// │ ...                                             │
/// │ field 2 (varint)         version                │
/// │ field 3 (varint)         batch_size             │
/// │ field 4 (varint)         batch_index            │
/// │ field 5 (varint)         batch_id               │
/// └─────────────────────────────────────────────────┘
/// ```
///
/// # Usage
///
/// ```rust
/// use otpmig_encoder::MigrationEncoder;
/// use otpmig_types::OtpAccount;
///
/// let uri = MigrationEncoder::new()
///     .add_account(OtpAccount {
///         secret: b"Hello".to_vec(),
///         name: "alice".into(),
///         issuer: "Example".into(),
///         ..OtpAccount::default()
///     })
///     .encode_uri()
///     .unwrap();
/// assert!(uri.starts_with("otpauth-migration://offline?data="));
/// ```
pub struct MigrationEncoder {
    accounts: Vec<OtpAccount>,
    version: u32,
    batch_size: u32,
    batch_index: u32,
    batch_id: u32,
}

impl MigrationEncoder {
    /// Create an encoder with default batch metadata (version 1,
    /// batch_size 1, batch_index 0, batch_id 0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            version: 1,
            batch_size: 1,
            batch_index: 0,
            batch_id: 0,
        }
    }

    /// Append an account. Order is preserved on the wire.
    pub fn add_account(&mut self, account: OtpAccount) -> &mut Self {
        self.accounts.push(account);
        self
    }

    pub fn version(&mut self, version: u32) -> &mut Self {
        self.version = version;
        self
    }

    pub fn batch_size(&mut self, batch_size: u32) -> &mut Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_index(&mut self, batch_index: u32) -> &mut Self {
        self.batch_index = batch_index;
        self
    }

    pub fn batch_id(&mut self, batch_id: u32) -> &mut Self {
        self.batch_id = batch_id;
        self
    }

    /// Populate the builder from a decoded payload, for re-encoding.
    pub fn from_payload(payload: &MigrationPayload) -> Self {
        let mut encoder = Self::new();
        encoder.version = payload.version;
        encoder.batch_size = payload.batch_size;
        encoder.batch_index = payload.batch_index;
        encoder.batch_id = payload.batch_id;
        encoder.accounts = payload.accounts.clone();
        encoder
    }

    /// Serialise the accumulated accounts and metadata into a raw
    /// payload buffer.
    ///
    /// # Errors
    ///
    /// [`EncodeError`] when an account or one of its fields does not fit
    /// the single-byte-length wire subset.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::new();

        for (index, account) in self.accounts.iter().enumerate() {
            let body = encode_account(account)?;
            encode_len_field(&mut buf, 1, &body).map_err(|_| EncodeError::AccountTooLarge {
                index,
                len: body.len(),
            })?;
        }

        encode_varint_field(&mut buf, 2, u64::from(self.version))?;
        encode_varint_field(&mut buf, 3, u64::from(self.batch_size))?;
        encode_varint_field(&mut buf, 4, u64::from(self.batch_index))?;
        encode_varint_field(&mut buf, 5, u64::from(self.batch_id))?;

        Ok(buf)
    }

    /// Serialise to a complete migration URI:
    /// `otpauth-migration://offline?data=` + percent-encoded standard
    /// base64 of the raw payload.
    ///
    /// # Errors
    ///
    /// Same as [`encode`](Self::encode).
    pub fn encode_uri(&self) -> Result<String, EncodeError> {
        let payload = self.encode()?;
        let blob = STANDARD.encode(payload);
        Ok(format!(
            "otpauth-migration://offline?data={}",
            escape::component(&blob)
        ))
    }
}

impl Default for MigrationEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one account sub-message, all seven fields in field order.
fn encode_account(account: &OtpAccount) -> Result<Vec<u8>, EncodeError> {
    let mut body = Vec::new();
    encode_len_field(&mut body, 1, &account.secret)?;
    encode_len_field(&mut body, 2, account.name.as_bytes())?;
    encode_len_field(&mut body, 3, account.issuer.as_bytes())?;
    encode_varint_field(&mut body, 4, u64::from(account.algorithm.to_wire()))?;
    encode_varint_field(&mut body, 5, u64::from(account.digits))?;
    encode_varint_field(&mut body, 6, u64::from(account.otp_type.to_wire()))?;
    encode_varint_field(&mut body, 7, account.counter)?;
    Ok(body)
}
