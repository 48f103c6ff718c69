use crate::enums::{Algorithm, OtpType};

/// One exported OTP account, as carried in a migration payload's
/// `otp_parameters` sub-message.
///
/// Immutable once decoded; owned by the
/// [`MigrationPayload`](crate::MigrationPayload) that contains it.
/// `Default` mirrors the payload's field defaults, which apply whenever
/// a field is absent from (or unreadable in) the sub-message:
///
/// ```text
/// ┌───────────┬─────────────────────┐
/// │ secret    │ empty byte sequence │
/// │ name      │ ""                  │
/// │ issuer    │ ""                  │
/// │ algorithm │ SHA1                │
/// │ digits    │ 6                   │
/// │ otp_type  │ TOTP                │
/// │ counter   │ 0                   │
/// └───────────┴─────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpAccount {
    /// Raw secret bytes, kept verbatim — base32 encoding happens at
    /// presentation time. Any length is valid, including zero.
    pub secret: Vec<u8>,
    pub name: String,
    pub issuer: String,
    pub algorithm: Algorithm,
    pub digits: u32,
    pub otp_type: OtpType,
    pub counter: u64,
}

impl Default for OtpAccount {
    fn default() -> Self {
        Self {
            secret: Vec::new(),
            name: String::new(),
            issuer: String::new(),
            algorithm: Algorithm::Sha1,
            digits: 6,
            otp_type: OtpType::Totp,
            counter: 0,
        }
    }
}
