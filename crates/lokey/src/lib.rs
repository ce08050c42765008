//! # lokey
//!
//! **CLI Binary**
//!
//! This is the entry point for the `lokey` command-line application.
//! It orchestrates the other crates to perform the requested check.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Dispatch to discovery, flattening, and reconciliation
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod error_hints;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use lokey_discover as discover;
use lokey_flatten::{FlatKeySet, flatten};

/// Exit code when validation findings fail the gate.
const EXIT_FAIL: i32 = 1;

/// `lokey` — validate that every locale's translation file mirrors the base
/// locale's key structure.
///
/// Exits 0 when all locales match; exits 1 on missing/extra keys or any
/// fatal discovery/parse error.
#[derive(Parser, Debug)]
#[command(name = "lokey", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing one `<locale>.json` document per locale.
    #[arg(long, value_name = "PATH", default_value = "locales")]
    pub locales_dir: PathBuf,

    /// Base locale whose key structure all others are validated against.
    #[arg(long, value_name = "LOCALE", default_value = "en")]
    pub base: String,

    /// Summary only: suppress per-key missing/extra listings.
    #[arg(long)]
    pub quiet: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Styled human-readable report.
    Text,
    /// The full receipt as pretty JSON.
    Json,
}

/// Entry point used by the `lokey` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let loaded = discover::load(&cli.locales_dir, &cli.base)?;

    let base_keys = flatten(&loaded.base);
    let locales: Vec<(String, FlatKeySet)> = loaded
        .others
        .iter()
        .map(|(id, doc)| (id.clone(), flatten(doc)))
        .collect();

    let report = lokey_reconcile::reconcile(&loaded.base_locale, &base_keys, &locales);

    match cli.format {
        ReportFormat::Text => print!("{}", lokey_format::render_text(&report, cli.quiet)),
        ReportFormat::Json => println!("{}", lokey_format::render_json(&report)?),
    }

    // Findings are report data, not errors; they fail the gate via the
    // exit code after the report has printed.
    if !report.passed {
        std::process::exit(EXIT_FAIL);
    }

    Ok(())
}

/// Format a fatal error (with remediation hints) for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
