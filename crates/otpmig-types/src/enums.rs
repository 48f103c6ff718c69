use serde::{Deserialize, Serialize};

/// HMAC hash algorithm carried in an account's `algorithm` field.
///
/// Wire values follow the migration payload's enum numbering. Decoding
/// is total: any unrecognised byte falls back to [`Algorithm::Sha1`],
/// which is also the value an absent field defaults to, so presentation
/// and decoding agree on what an unknown algorithm means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Decode a wire byte; unknown values fall back to SHA1.
    #[must_use]
    pub fn from_wire(value: u8) -> Self {
        match value {
            2 => Self::Sha256,
            3 => Self::Sha512,
            _ => Self::Sha1,
        }
    }

    /// Encode this variant as its wire byte.
    #[must_use]
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Sha1 => 1,
            Self::Sha256 => 2,
            Self::Sha512 => 3,
        }
    }

    /// Display name, as used in `otpauth://` URIs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

/// Counter-based (HOTP) vs time-based (TOTP) one-time passwords.
///
/// Wire value 1 means HOTP; everything else — including the nominal
/// TOTP value 2 and any future additions — decodes as TOTP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OtpType {
    Hotp,
    #[default]
    Totp,
}

impl OtpType {
    /// Decode a wire byte; anything but 1 is TOTP.
    #[must_use]
    pub fn from_wire(value: u8) -> Self {
        if value == 1 { Self::Hotp } else { Self::Totp }
    }

    /// Encode this variant as its wire byte.
    #[must_use]
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Hotp => 1,
            Self::Totp => 2,
        }
    }

    /// Display name, as used in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hotp => "HOTP",
            Self::Totp => "TOTP",
        }
    }
}
