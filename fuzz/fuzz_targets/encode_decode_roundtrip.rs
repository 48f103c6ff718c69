#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use otpmig_decoder::decode_payload;
use otpmig_encoder::MigrationEncoder;
use otpmig_types::{Algorithm, OtpAccount, OtpType};

#[derive(Debug, Arbitrary)]
struct FuzzAccount {
    secret: Vec<u8>,
    name: String,
    issuer: String,
    algorithm_id: u8,
    digits: u8,
    type_id: u8,
    counter: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    accounts: Vec<FuzzAccount>,
    version: u8,
    batch_size: u8,
    batch_index: u8,
    batch_id: u8,
}

fn algorithm_from_id(id: u8) -> Algorithm {
    match id % 3 {
        0 => Algorithm::Sha1,
        1 => Algorithm::Sha256,
        _ => Algorithm::Sha512,
    }
}

fn otp_type_from_id(id: u8) -> OtpType {
    if id % 2 == 0 { OtpType::Totp } else { OtpType::Hotp }
}

// Fuzz target: MigrationEncoder -> decode_payload roundtrip.
//
// Generates structured batches via the encoder, decodes them, and
// re-encodes the decoded payload. Whenever the encoder accepts the
// input, decode must reproduce it exactly and re-encoding must be
// byte-identical.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let account_count = input.accounts.len().min(32);

    let mut encoder = MigrationEncoder::new();
    encoder
        .version(u32::from(input.version))
        .batch_size(u32::from(input.batch_size))
        .batch_index(u32::from(input.batch_index))
        .batch_id(u32::from(input.batch_id));

    for account in &input.accounts[..account_count] {
        encoder.add_account(OtpAccount {
            secret: account.secret.clone(),
            name: account.name.clone(),
            issuer: account.issuer.clone(),
            algorithm: algorithm_from_id(account.algorithm_id),
            digits: u32::from(account.digits),
            otp_type: otp_type_from_id(account.type_id),
            counter: u64::from(account.counter),
        });
    }

    // Oversized fields are a legitimate rejection, not a roundtrip case.
    let Ok(payload) = encoder.encode() else {
        return;
    };

    let decoded = decode_payload(&payload);
    assert!(!decoded.truncated, "encoder output flagged as truncated");
    assert_eq!(decoded.accounts.len(), account_count);
    assert_eq!(decoded.version, u32::from(input.version));

    let re_encoded = MigrationEncoder::from_payload(&decoded)
        .encode()
        .expect("re-encode of decoded payload");
    assert_eq!(re_encoded, payload);
});
