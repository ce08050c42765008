//! # lokey-reconcile
//!
//! **Tier 3 (Reconciliation)**
//!
//! Compares each locale's flattened key set against the base locale and
//! produces the run receipt: missing/extra keys, coverage, per-locale status,
//! and the overall pass/fail verdict. Pure; validation findings are report
//! data here, never errors.

#![forbid(unsafe_code)]

use lokey_flatten::FlatKeySet;
use lokey_types::{
    LocaleReport, LocaleStatus, ReconcileReport, ReconcileSummary, SCHEMA_VERSION,
};

/// Round a floating point value to `decimals` decimal places.
fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Compare one locale's key set against the base set.
///
/// `missing_keys` = base − locale, `extra_keys` = locale − base; both come
/// out ascending because the sets are ordered. An empty base set reports
/// coverage 100.0 by convention (an empty baseline has nothing to miss),
/// though extra keys still mark the locale as having errors.
#[must_use]
pub fn reconcile_locale(locale: &str, base: &FlatKeySet, keys: &FlatKeySet) -> LocaleReport {
    let missing_keys: Vec<String> = base.difference(keys).cloned().collect();
    let extra_keys: Vec<String> = keys.difference(base).cloned().collect();

    let coverage = if base.is_empty() {
        100.0
    } else {
        round_f64(keys.len() as f64 / base.len() as f64 * 100.0, 2)
    };

    let status = if missing_keys.is_empty() && extra_keys.is_empty() {
        LocaleStatus::Ok
    } else {
        LocaleStatus::Errors
    };

    LocaleReport {
        locale: locale.to_string(),
        total_keys: keys.len(),
        missing_keys,
        extra_keys,
        coverage,
        status,
    }
}

/// Produce the full receipt for one run.
///
/// `locales` is expected in ascending locale-id order (discovery sorts), so
/// repeated runs over unchanged input render byte-identical reports.
#[must_use]
pub fn reconcile(
    base_locale: &str,
    base: &FlatKeySet,
    locales: &[(String, FlatKeySet)],
) -> ReconcileReport {
    let reports: Vec<LocaleReport> = locales
        .iter()
        .map(|(id, keys)| reconcile_locale(id, base, keys))
        .collect();

    let valid = reports
        .iter()
        .filter(|r| r.status == LocaleStatus::Ok)
        .count();
    let summary = ReconcileSummary {
        total: reports.len(),
        valid,
        with_errors: reports.len() - valid,
    };
    let passed = summary.with_errors == 0;

    ReconcileReport {
        schema_version: SCHEMA_VERSION,
        base_locale: base_locale.to_string(),
        base_keys: base.len(),
        locales: reports,
        summary,
        passed,
    }
}
