/// Implementation of `otpmig encode`.
///
/// Parses a JSON manifest of accounts and serialises them into a
/// migration URI via `MigrationEncoder`. Secrets are given as base32
/// text (the form users copy out of authenticator apps) and decoded to
/// raw bytes before encoding.
///
/// # Manifest format
///
/// ```json
/// {
///   "version": 1,
///   "batchSize": 1,
///   "batchIndex": 0,
///   "batchId": 0,
///   "accounts": [
///     {
///       "name": "alice",
///       "issuer": "Example",
///       "secret": "JBSWY3DP",
///       "algorithm": "SHA1",
///       "digits": 6,
///       "type": "TOTP",
///       "counter": 0
///     }
///   ]
/// }
/// ```
///
/// Everything but `secret` is optional; omitted fields take the payload
/// defaults (empty name/issuer, SHA1, 6 digits, TOTP, counter 0).
use std::fs;

use anyhow::{Context, Result, anyhow};
use base32::Alphabet;
use otpmig_encoder::MigrationEncoder;
use otpmig_types::{Algorithm, OtpAccount, OtpType};

use crate::EncodeArgs;

// ── Manifest serde types ──────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    batch_size: Option<u32>,
    #[serde(default)]
    batch_index: Option<u32>,
    #[serde(default)]
    batch_id: Option<u32>,
    accounts: Vec<ManifestAccount>,
}

/// One account entry in the manifest. `secret` is base32 text; the
/// remaining fields default like absent payload fields do.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestAccount {
    secret: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    issuer: String,
    #[serde(default)]
    algorithm: Algorithm,
    #[serde(default = "default_digits")]
    digits: u32,
    #[serde(default, rename = "type")]
    otp_type: OtpType,
    #[serde(default)]
    counter: u64,
}

fn default_digits() -> u32 {
    6
}

/// Run the `otpmig encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, a secret
/// is not valid base32, or an account does not fit the wire format.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("cannot read {}", args.manifest.display()))?;
    let manifest: Manifest = serde_json::from_str(&text)
        .with_context(|| format!("invalid manifest {}", args.manifest.display()))?;

    let mut encoder = MigrationEncoder::new();
    if let Some(v) = manifest.version {
        encoder.version(v);
    }
    if let Some(v) = manifest.batch_size {
        encoder.batch_size(v);
    }
    if let Some(v) = manifest.batch_index {
        encoder.batch_index(v);
    }
    if let Some(v) = manifest.batch_id {
        encoder.batch_id(v);
    }

    for (index, entry) in manifest.accounts.iter().enumerate() {
        encoder.add_account(manifest_account(entry, index)?);
    }

    let uri = encoder
        .encode_uri()
        .context("manifest does not fit the migration wire format")?;

    if let Some(path) = &args.output {
        fs::write(path, uri.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        println!("{uri}");
    }

    Ok(())
}

/// Convert a manifest entry to an [`OtpAccount`], decoding the base32
/// secret (case-insensitive, padding optional).
fn manifest_account(entry: &ManifestAccount, index: usize) -> Result<OtpAccount> {
    let normalised = entry.secret.trim().replace(' ', "").to_uppercase();
    let secret = base32::decode(Alphabet::Rfc4648 { padding: false }, normalised.trim_end_matches('='))
        .ok_or_else(|| anyhow!("account #{index}: secret is not valid base32"))?;

    Ok(OtpAccount {
        secret,
        name: entry.name.clone(),
        issuer: entry.issuer.clone(),
        algorithm: entry.algorithm,
        digits: entry.digits,
        otp_type: entry.otp_type,
        counter: entry.counter,
    })
}
