/// Implementation of `otpmig decode`.
///
/// Resolves the migration URI, runs the extract → decode pipeline, and
/// prints the account report as JSON:
///
/// ```text
/// {
///   "accountsCount": 2,
///   "accounts": [ { "name": ..., "secret": ..., "otpauthUri": ... }, ... ],
///   "metadata": { "version": 1, "batchSize": 1, "batchIndex": 0, "batchId": 0 }
/// }
/// ```
///
/// Two best-effort conditions surface as stderr warnings with exit code
/// 0: a payload that decoded to zero accounts, and a payload whose tail
/// could not be read (`truncated`). Only extraction failures (wrong
/// scheme, missing or malformed data parameter) are errors.
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use otpmig_decoder::decode_migration_uri;
use otpmig_present::MigrationReport;

use crate::{DecodeArgs, read_uri};

/// Run the `otpmig decode` command.
///
/// # Errors
///
/// Returns an error if the URI cannot be read or fails extraction, or if
/// the output file cannot be written.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let uri = read_uri(args.uri.as_deref(), args.file.as_ref())?;

    let payload = decode_migration_uri(&uri).context("failed to decode migration URI")?;

    if payload.truncated {
        eprintln!("warning: payload was cut short; the report may be incomplete");
    }
    if payload.accounts.is_empty() {
        eprintln!("note: the payload decoded but contains no accounts");
    }

    let report = MigrationReport::from_payload(&payload);
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    if let Some(path) = &args.output {
        fs::write(path, json.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(json.as_bytes())
            .context("cannot write to stdout")?;
        handle.write_all(b"\n").context("cannot write to stdout")?;
    }

    Ok(())
}
