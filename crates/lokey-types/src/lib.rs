//! # lokey-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `lokey`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (reports, summaries)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Key flattening or diff logic

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// The current schema version for the JSON receipt.
pub const SCHEMA_VERSION: u32 = 1;

/// Validation outcome for a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleStatus {
    /// Key structure is identical to the base locale.
    Ok,
    /// At least one missing or extra key.
    Errors,
}

impl std::fmt::Display for LocaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocaleStatus::Ok => write!(f, "OK"),
            LocaleStatus::Errors => write!(f, "ERRORS"),
        }
    }
}

/// Per-locale comparison result against the base locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleReport {
    pub locale: String,
    /// Count of this locale's own flattened key set (not the base's).
    pub total_keys: usize,
    /// Keys present in base, absent here. Sorted ascending.
    pub missing_keys: Vec<String>,
    /// Keys present here, absent in base. Sorted ascending.
    pub extra_keys: Vec<String>,
    /// Percentage of base keys covered, rounded to 2 decimal places.
    pub coverage: f64,
    pub status: LocaleStatus,
}

/// Counts across all compared locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    pub total: usize,
    pub valid: usize,
    pub with_errors: usize,
}

/// Receipt for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub schema_version: u32,
    pub base_locale: String,
    /// Size of the base locale's flattened key set.
    pub base_keys: usize,
    /// One entry per non-base locale, ascending by locale id.
    pub locales: Vec<LocaleReport>,
    pub summary: ReconcileSummary,
    /// True iff every locale's status is `Ok`.
    pub passed: bool,
}
