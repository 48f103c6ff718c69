use base32::Alphabet;
use otpmig_types::{OtpAccount, escape};
use serde::Serialize;

/// Placeholder shown when an account has no name.
pub const UNNAMED_ACCOUNT: &str = "unnamed account";

/// Placeholder shown when an account has no issuer.
pub const UNKNOWN_PROVIDER: &str = "unknown provider";

/// Display/interchange view of one decoded account.
///
/// A pure function of its [`OtpAccount`] — no identity of its own, no
/// failure path. Field names serialize to the external report keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresentedAccount {
    pub name: String,
    pub issuer: String,
    /// RFC 4648 base32 of the secret bytes, `=`-padded to a multiple of
    /// eight characters. Empty for an empty secret.
    pub secret: String,
    #[serde(rename = "otpauthUri")]
    pub otpauth_uri: String,
    /// The account's real algorithm name (SHA1/SHA256/SHA512) — unlike
    /// the URI below, this reflects the decoded field.
    pub algorithm: &'static str,
    pub digits: u32,
    #[serde(rename = "type")]
    pub otp_type: &'static str,
}

/// Build the presentation view of an account.
///
/// Empty name/issuer are replaced with the [`UNNAMED_ACCOUNT`] /
/// [`UNKNOWN_PROVIDER`] placeholders, which then also appear in the
/// synthesized URI label.
///
/// The generated URI always says `totp`, `algorithm=SHA1`, and
/// `period=30` no matter what the account's fields hold — that is the
/// observed output contract of this export pipeline, kept verbatim.
/// Consumers that need the real algorithm or type must read the
/// structured fields instead of the URI.
#[must_use]
pub fn present(account: &OtpAccount) -> PresentedAccount {
    let secret = base32::encode(Alphabet::Rfc4648 { padding: true }, &account.secret);

    let name = if account.name.is_empty() {
        UNNAMED_ACCOUNT.to_string()
    } else {
        account.name.clone()
    };
    let issuer = if account.issuer.is_empty() {
        UNKNOWN_PROVIDER.to_string()
    } else {
        account.issuer.clone()
    };

    let otpauth_uri = format!(
        "otpauth://totp/{label_issuer}:{label_name}?secret={secret}&issuer={query_issuer}&algorithm=SHA1&digits={digits}&period=30",
        label_issuer = escape::component(&issuer),
        label_name = escape::component(&name),
        query_issuer = escape::component(&issuer),
        digits = account.digits,
    );

    PresentedAccount {
        name,
        issuer,
        secret,
        otpauth_uri,
        algorithm: account.algorithm.name(),
        digits: account.digits,
        otp_type: account.otp_type.name(),
    }
}
