//! # lokey-discover
//!
//! **Tier 2 (Filesystem)**
//!
//! Enumerates locale resource files (`<locale>.json`) in a directory and
//! parses them into documents. All failure modes here are fatal: a run with
//! an unreadable directory, no resource files, a missing base locale, or a
//! malformed document aborts instead of reporting partial results. A broken
//! translation file should block the build, not be silently skipped.
//!
//! ## What belongs here
//! * Directory enumeration and locale id derivation
//! * Document parsing
//! * The fatal error taxonomy (`DiscoverError`)
//!
//! ## What does NOT belong here
//! * Key flattening (use lokey-flatten)
//! * Diff or coverage logic (use lokey-reconcile)

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Fatal conditions while locating or loading locale resources.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("failed to read locales directory {dir}")]
    DirUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no translation files found in {0}")]
    NoLocaleFiles(PathBuf),

    #[error("base locale '{base}' not found in {dir}")]
    BaseLocaleNotFound { base: String, dir: PathBuf },

    #[error("failed to read {path}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One discovered locale resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Locale id: the file name with the `.json` extension stripped.
    pub locale: String,
    pub path: PathBuf,
}

/// All locale documents for a run, parsed and split around the base.
#[derive(Debug, Clone)]
pub struct LoadedLocales {
    pub base_locale: String,
    pub base: Value,
    /// Non-base documents, ascending by locale id.
    pub others: Vec<(String, Value)>,
}

/// List the `<locale>.json` files in `dir`, ascending by locale id.
///
/// Non-`.json` entries and subdirectories are ignored. An empty result is
/// fatal: a locales directory with nothing to check is a misconfiguration.
pub fn discover(dir: &Path) -> Result<Vec<LocaleFile>, DiscoverError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoverError::DirUnreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoverError::DirUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        files.push(LocaleFile {
            locale: stem.to_string(),
            path,
        });
    }

    if files.is_empty() {
        return Err(DiscoverError::NoLocaleFiles(dir.to_path_buf()));
    }

    files.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(files)
}

/// Discover and parse every locale document, splitting out the base.
///
/// The base locale must be present before any file is parsed; a parse error
/// in any single file aborts the whole run.
pub fn load(dir: &Path, base: &str) -> Result<LoadedLocales, DiscoverError> {
    let files = discover(dir)?;

    if !files.iter().any(|f| f.locale == base) {
        return Err(DiscoverError::BaseLocaleNotFound {
            base: base.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    let mut base_doc = Value::Null;
    let mut others = Vec::with_capacity(files.len().saturating_sub(1));
    for file in &files {
        let doc = parse_file(&file.path)?;
        if file.locale == base {
            base_doc = doc;
        } else {
            others.push((file.locale.clone(), doc));
        }
    }

    Ok(LoadedLocales {
        base_locale: base.to_string(),
        base: base_doc,
        others,
    })
}

fn parse_file(path: &Path) -> Result<Value, DiscoverError> {
    let text = fs::read_to_string(path).map_err(|source| DiscoverError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DiscoverError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
