/// Implementation of `otpmig validate`.
///
/// Runs the extraction and decode stages and reports a checkmark per
/// layer. Exit code is 0 for any URI that extracts, 1 otherwise — the
/// binary decode stage cannot fail, so its findings (truncation, zero
/// accounts) are reported as `⚠` lines without failing the command.
///
/// # Success output
///
/// ```text
/// ✓ Scheme: otpauth-migration://offline?data= prefix present
/// ✓ Encoding: data parameter decoded (42 payload bytes)
/// ✓ Payload: 2 accounts, version 1
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: malformed data encoding: Invalid byte 33, offset 4.
/// ```
use anyhow::{Result, anyhow};
use otpmig_decoder::{ExtractError, decode_payload, extract_data};

use crate::{ValidateArgs, read_uri};

/// Run the `otpmig validate` command.
///
/// # Errors
///
/// Returns an error if the URI cannot be read or fails extraction.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let uri = read_uri(args.uri.as_deref(), args.file.as_ref())?;

    match extract_data(&uri) {
        Ok(data) => {
            println!("✓ Scheme: otpauth-migration://offline?data= prefix present");
            println!("✓ Encoding: data parameter decoded ({} payload bytes)", data.len());

            let payload = decode_payload(&data);
            println!(
                "✓ Payload: {} account{}, version {}",
                payload.accounts.len(),
                if payload.accounts.len() == 1 { "" } else { "s" },
                payload.version
            );

            if payload.truncated {
                println!("⚠ Payload was cut short; accounts after the damage were dropped");
            }
            if payload.accounts.is_empty() {
                println!("⚠ No accounts found — valid input, but nothing to import");
            }

            Ok(())
        }

        Err(e) => {
            let diagnostic = extract_error_diagnostic(&e);
            println!("✗ Error: {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts an `ExtractError` into a diagnostic with a hint about what
/// the user should fix.
fn extract_error_diagnostic(e: &ExtractError) -> String {
    match e {
        ExtractError::InvalidScheme => {
            "not a migration URI — export from the authenticator app's \
             \"Transfer accounts\" screen and paste the full otpauth-migration:// link"
                .to_string()
        }
        ExtractError::MissingData => {
            "the URI has no data parameter value — the export link was cut off".to_string()
        }
        ExtractError::MalformedEncoding(_) => e.to_string(),
    }
}
