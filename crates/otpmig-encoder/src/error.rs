use otpmig_wire::WireError;

/// Errors that can occur while building a migration payload.
///
/// The wire format fits every length and value in a single byte, so the
/// encoder fails exactly when an input cannot be represented in that
/// subset. There is no "empty payload" error: a batch with zero accounts
/// is a valid export.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// An account's sub-message grew past the one-byte length prefix.
    ///
    /// The whole encoded account (secret + name + issuer + the four
    /// varint fields) has to fit in 127 bytes. Long issuer or name
    /// strings are the usual cause.
    #[error("account #{index} encodes to {len} bytes, above the 127-byte sub-message limit")]
    AccountTooLarge { index: usize, len: usize },

    /// A single field overflowed the restricted wire format — a secret
    /// or string above 127 bytes, or a numeric field above 127.
    #[error(transparent)]
    Wire(#[from] WireError),
}
