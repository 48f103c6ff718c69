//! Sample migration URI generator for manual CLI testing.
//!
//! Prints a valid `otpauth-migration://` URI for a small two-account
//! batch to stdout. Paste it into `otpmig decode` / `otpmig inspect`
//! when exercising the binary by hand.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixture -p otpmig-tests
//! ```

use otpmig_encoder::MigrationEncoder;
use otpmig_types::{Algorithm, OtpAccount, OtpType};

fn main() {
    let mut encoder = MigrationEncoder::new();
    encoder
        .add_account(OtpAccount {
            secret: b"Hello".to_vec(),
            name: "alice".to_string(),
            issuer: "Example".to_string(),
            ..OtpAccount::default()
        })
        .add_account(OtpAccount {
            secret: b"\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09".to_vec(),
            name: "bob@example.org".to_string(),
            issuer: "Acme".to_string(),
            algorithm: Algorithm::Sha256,
            digits: 8,
            otp_type: OtpType::Hotp,
            counter: 7,
        })
        .batch_size(1);

    match encoder.encode_uri() {
        Ok(uri) => println!("{uri}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
