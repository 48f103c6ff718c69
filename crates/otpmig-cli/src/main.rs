/// `otpmig` command-line tool — decode, re-encode, inspect, and validate
/// Google Authenticator migration URIs.
///
/// # Command overview
///
/// ```text
/// otpmig <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a migration URI into a JSON account report
///   encode     Build a migration URI from a JSON account manifest
///   inspect    Print the raw wire fields of a migration payload
///   validate   Check a migration URI for structural problems
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Error (bad input URI, I/O failure, etc.)       |
///
/// Error details go to stderr; stdout carries only the command's output
/// so it can be piped cleanly. Informational conditions — a payload
/// with zero accounts, or one that was cut short — are warnings on
/// stderr, never errors.
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Authenticator migration URI toolbox.
#[derive(Parser)]
#[command(name = "otpmig", version, about = "Google Authenticator migration codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a migration URI into a JSON account report.
    Decode(DecodeArgs),
    /// Build a migration URI from a JSON account manifest.
    Encode(EncodeArgs),
    /// Print the raw wire fields of a migration payload.
    Inspect(InspectArgs),
    /// Check a migration URI for structural problems.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `otpmig decode`.
///
/// The migration URI comes either inline or from a text file (`--file`),
/// which is the practical route for long URIs captured from a QR scan.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The migration URI (otpauth-migration://offline?data=...).
    pub uri: Option<String>,

    /// Read the URI from this file instead.
    #[arg(long, conflicts_with = "uri")]
    pub file: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON (single line) instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `otpmig encode`.
///
/// The manifest is a JSON document listing accounts with base32 secrets:
///
/// ```json
/// {
///   "version": 1,
///   "accounts": [
///     { "name": "alice", "issuer": "Example", "secret": "JBSWY3DP",
///       "algorithm": "SHA1", "digits": 6, "type": "TOTP" }
///   ]
/// }
/// ```
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest describing the accounts to encode.
    pub manifest: PathBuf,

    /// Write the migration URI to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `otpmig inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// The migration URI (otpauth-migration://offline?data=...).
    pub uri: Option<String>,

    /// Read the URI from this file instead.
    #[arg(long, conflicts_with = "uri")]
    pub file: Option<PathBuf>,

    /// Also print a hex dump of the raw payload (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `otpmig validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// The migration URI (otpauth-migration://offline?data=...).
    pub uri: Option<String>,

    /// Read the URI from this file instead.
    #[arg(long, conflicts_with = "uri")]
    pub file: Option<PathBuf>,
}

// ── Shared input handling ─────────────────────────────────────────────────────

/// Resolve the URI from either the positional argument or `--file`.
fn read_uri(uri: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    match (uri, file) {
        (Some(u), _) => Ok(u.to_string()),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            Ok(text.trim().to_string())
        }
        (None, None) => anyhow::bail!("provide a migration URI or --file <PATH>"),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
