//! Roundtrip integration tests for the encode → decode → re-encode pipeline.
//!
//! Each test encodes a batch with [`MigrationEncoder`], decodes it with
//! [`decode_payload`], then re-encodes via
//! [`MigrationEncoder::from_payload`] and asserts the output is
//! byte-identical to the original.
//!
//! The byte-identical invariant holds because the encoder is
//! deterministic: it writes every account field in tag order (1 through
//! 7) and every batch field (2 through 5) unconditionally, so a decoded
//! payload carries everything needed to reproduce the original bytes.

use otpmig_decoder::{decode_migration_uri, decode_payload};
use otpmig_encoder::MigrationEncoder;
use otpmig_types::{Algorithm, OtpAccount, OtpType};

/// A small deterministic account for batch tests. Secrets and labels are
/// derived from `i` so ordering mix-ups show up as field mismatches, not
/// just count mismatches.
fn sample_account(i: u8) -> OtpAccount {
    OtpAccount {
        secret: vec![i, i.wrapping_add(1), i.wrapping_add(2), i.wrapping_add(3), i.wrapping_add(4)],
        name: format!("user{i}"),
        issuer: format!("Provider{i}"),
        algorithm: if i % 2 == 0 { Algorithm::Sha1 } else { Algorithm::Sha256 },
        digits: if i % 3 == 0 { 6 } else { 8 },
        otp_type: if i % 2 == 0 { OtpType::Totp } else { OtpType::Hotp },
        counter: u64::from(i),
    }
}

#[test]
fn roundtrip_empty_batch() {
    let original = MigrationEncoder::new().encode().unwrap();

    let decoded = decode_payload(&original);
    assert!(decoded.accounts.is_empty());
    assert!(!decoded.truncated);

    let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
    assert_eq!(re_encoded, original);
}

#[test]
fn roundtrip_single_account() {
    let original = MigrationEncoder::new()
        .add_account(OtpAccount {
            secret: b"Hello".to_vec(),
            name: "alice".to_string(),
            issuer: "Example".to_string(),
            ..OtpAccount::default()
        })
        .encode()
        .unwrap();

    let decoded = decode_payload(&original);
    assert_eq!(decoded.accounts.len(), 1);
    assert_eq!(decoded.accounts[0].name, "alice");

    let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
    assert_eq!(re_encoded, original);
}

#[test]
fn roundtrip_batch_sizes_up_to_twenty() {
    for n in 0..=20u8 {
        let mut encoder = MigrationEncoder::new();
        for i in 0..n {
            encoder.add_account(sample_account(i));
        }
        let original = encoder.encode().unwrap();

        let decoded = decode_payload(&original);
        assert_eq!(decoded.accounts.len(), usize::from(n), "batch of {n}");
        assert!(!decoded.truncated, "batch of {n}");

        let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
        assert_eq!(re_encoded, original, "batch of {n}");
    }
}

#[test]
fn roundtrip_preserves_account_order() {
    let mut encoder = MigrationEncoder::new();
    for i in 0..5u8 {
        encoder.add_account(sample_account(i));
    }
    let original = encoder.encode().unwrap();

    let decoded = decode_payload(&original);
    for (i, account) in decoded.accounts.iter().enumerate() {
        assert_eq!(account.name, format!("user{i}"));
        assert_eq!(account.issuer, format!("Provider{i}"));
        assert_eq!(account.counter, i as u64);
    }
}

#[test]
fn roundtrip_non_default_batch_metadata() {
    let original = MigrationEncoder::new()
        .add_account(sample_account(3))
        .version(2)
        .batch_size(4)
        .batch_index(2)
        .batch_id(9)
        .encode()
        .unwrap();

    let decoded = decode_payload(&original);
    assert_eq!(decoded.version, 2);
    assert_eq!(decoded.batch_size, 4);
    assert_eq!(decoded.batch_index, 2);
    assert_eq!(decoded.batch_id, 9);

    let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
    assert_eq!(re_encoded, original);
}

#[test]
fn roundtrip_hotp_account() {
    let original = MigrationEncoder::new()
        .add_account(OtpAccount {
            secret: vec![0xDE, 0xAD, 0xBE, 0xEF],
            name: "counter-based".to_string(),
            issuer: "Legacy".to_string(),
            algorithm: Algorithm::Sha512,
            digits: 8,
            otp_type: OtpType::Hotp,
            counter: 42,
        })
        .encode()
        .unwrap();

    let decoded = decode_payload(&original);
    let account = &decoded.accounts[0];
    assert_eq!(account.otp_type, OtpType::Hotp);
    assert_eq!(account.algorithm, Algorithm::Sha512);
    assert_eq!(account.counter, 42);

    let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
    assert_eq!(re_encoded, original);
}

#[test]
fn roundtrip_empty_name_and_issuer() {
    let original = MigrationEncoder::new()
        .add_account(OtpAccount {
            secret: vec![1, 2, 3],
            ..OtpAccount::default()
        })
        .encode()
        .unwrap();

    let decoded = decode_payload(&original);
    assert_eq!(decoded.accounts[0].name, "");
    assert_eq!(decoded.accounts[0].issuer, "");

    let re_encoded = MigrationEncoder::from_payload(&decoded).encode().unwrap();
    assert_eq!(re_encoded, original);
}

// ── Full URI pipeline ────────────────────────────────────────────────────────

#[test]
fn roundtrip_through_migration_uri() {
    let mut encoder = MigrationEncoder::new();
    for i in 0..3u8 {
        encoder.add_account(sample_account(i));
    }
    let uri = encoder.encode_uri().unwrap();
    assert!(uri.starts_with("otpauth-migration://offline?data="));

    let decoded = decode_migration_uri(&uri).unwrap();
    assert_eq!(decoded.accounts.len(), 3);

    let re_uri = MigrationEncoder::from_payload(&decoded).encode_uri().unwrap();
    assert_eq!(re_uri, uri);
}

#[test]
fn uri_data_parameter_survives_plus_and_slash_bytes() {
    // Secrets chosen so the base64 form contains '+' and '/', which must
    // be percent-escaped in the URI and recovered on decode.
    let original = MigrationEncoder::new()
        .add_account(OtpAccount {
            secret: vec![0xFB, 0xEF, 0xBE, 0xFF, 0xFE],
            name: "binary".to_string(),
            issuer: "Escapes".to_string(),
            ..OtpAccount::default()
        })
        .encode_uri()
        .unwrap();

    let decoded = decode_migration_uri(&original).unwrap();
    assert_eq!(decoded.accounts.len(), 1);
    assert_eq!(decoded.accounts[0].secret, vec![0xFB, 0xEF, 0xBE, 0xFF, 0xFE]);
}
