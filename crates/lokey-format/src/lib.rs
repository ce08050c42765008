//! # lokey-format
//!
//! **Tier 3 (Formatting)**
//!
//! Renders a reconciliation receipt for humans (styled text) or machines
//! (the receipt as JSON). Rendering is pure string building; callers decide
//! where the output goes.
//!
//! ## What belongs here
//! * Text report layout
//! * JSON serialization of the receipt
//!
//! ## What does NOT belong here
//! * Diff or coverage logic (use lokey-reconcile)
//! * Exit-code policy (CLI concern)

use std::fmt::Write as _;

use console::style;

use lokey_types::{LocaleReport, LocaleStatus, ReconcileReport};

/// How many missing/extra keys to list per locale before eliding.
const LISTING_LIMIT: usize = 5;

/// Width of the horizontal rules around the locale table.
const RULE_WIDTH: usize = 72;

/// Render the receipt as a styled text report.
///
/// With `quiet` set, per-key missing/extra listings are suppressed; the
/// table rows, summary, and verdict still print.
#[must_use]
pub fn render_text(report: &ReconcileReport, quiet: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("Translation Validation Report").cyan());
    let _ = writeln!(out);
    // The base locale is a discovered file too.
    let _ = writeln!(out, "Found {} translation files", report.locales.len() + 1);
    let _ = writeln!(
        out,
        "Base locale ({}): {} keys",
        report.base_locale, report.base_keys
    );
    let _ = writeln!(out);

    let rule = "-".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{}",
        style(format!(
            "{:<12} {:>6} {:>9}  {}",
            "Locale", "Keys", "Coverage", "Status"
        ))
        .cyan()
    );
    let _ = writeln!(out, "{rule}");

    for locale in &report.locales {
        render_locale(&mut out, locale, quiet);
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", style("Summary:").cyan());
    let _ = writeln!(out, "  Total locales: {}", report.summary.total);
    let _ = writeln!(out, "  Valid: {}", report.summary.valid);
    let _ = writeln!(out, "  With errors: {}", report.summary.with_errors);
    let _ = writeln!(out);

    if report.passed {
        let _ = writeln!(
            out,
            "{}",
            style("All translations are valid: every locale matches the base key structure.")
                .green()
        );
    } else {
        let _ = writeln!(
            out,
            "{}",
            style(format!(
                "Translation validation FAILED: {} locale(s) with missing or extra keys.",
                report.summary.with_errors
            ))
            .red()
        );
    }

    out
}

fn render_locale(out: &mut String, locale: &LocaleReport, quiet: bool) {
    let status = match locale.status {
        LocaleStatus::Ok => style("OK").green(),
        LocaleStatus::Errors => style("ERRORS").red(),
    };
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>8.2}%  {}",
        locale.locale, locale.total_keys, locale.coverage, status
    );

    if quiet {
        return;
    }

    if !locale.missing_keys.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            style(format!("  Missing {} key(s):", locale.missing_keys.len())).yellow()
        );
        render_listing(out, &locale.missing_keys, '-');
    }

    if !locale.extra_keys.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            style(format!(
                "  Extra {} key(s) (not in base):",
                locale.extra_keys.len()
            ))
            .yellow()
        );
        render_listing(out, &locale.extra_keys, '+');
    }
}

fn render_listing(out: &mut String, keys: &[String], marker: char) {
    for key in keys.iter().take(LISTING_LIMIT) {
        let _ = writeln!(out, "{}", style(format!("    {marker} {key}")).yellow());
    }
    if keys.len() > LISTING_LIMIT {
        let _ = writeln!(
            out,
            "{}",
            style(format!("    ... and {} more", keys.len() - LISTING_LIMIT)).yellow()
        );
    }
}

/// Serialize the whole receipt as pretty JSON.
pub fn render_json(report: &ReconcileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokey_types::{ReconcileSummary, SCHEMA_VERSION};

    fn sample() -> ReconcileReport {
        ReconcileReport {
            schema_version: SCHEMA_VERSION,
            base_locale: "en".into(),
            base_keys: 4,
            locales: vec![
                LocaleReport {
                    locale: "fr".into(),
                    total_keys: 4,
                    missing_keys: vec![],
                    extra_keys: vec![],
                    coverage: 100.0,
                    status: LocaleStatus::Ok,
                },
                LocaleReport {
                    locale: "hi".into(),
                    total_keys: 3,
                    missing_keys: vec!["nav.about".into()],
                    extra_keys: vec![],
                    coverage: 75.0,
                    status: LocaleStatus::Errors,
                },
            ],
            summary: ReconcileSummary {
                total: 2,
                valid: 1,
                with_errors: 1,
            },
            passed: false,
        }
    }

    fn plain(report: &ReconcileReport, quiet: bool) -> String {
        console::set_colors_enabled(false);
        render_text(report, quiet)
    }

    #[test]
    fn text_report_has_header_rows_and_verdict() {
        let text = plain(&sample(), false);
        assert!(text.contains("Found 3 translation files"));
        assert!(text.contains("Base locale (en): 4 keys"));
        assert!(text.contains("fr                4   100.00%  OK"));
        assert!(text.contains("hi                3    75.00%  ERRORS"));
        assert!(text.contains("  Missing 1 key(s):"));
        assert!(text.contains("    - nav.about"));
        assert!(text.contains("  Total locales: 2"));
        assert!(text.contains("Translation validation FAILED: 1 locale(s)"));
    }

    #[test]
    fn passing_report_prints_valid_verdict() {
        let mut report = sample();
        report.locales.truncate(1);
        report.summary = ReconcileSummary {
            total: 1,
            valid: 1,
            with_errors: 0,
        };
        report.passed = true;

        let text = plain(&report, false);
        assert!(text.contains("All translations are valid"));
        assert!(!text.contains("FAILED"));
    }

    #[test]
    fn listings_elide_past_the_limit() {
        let mut report = sample();
        report.locales[1].missing_keys =
            (0..8).map(|i| format!("section.key{i}")).collect();

        let text = plain(&report, false);
        assert!(text.contains("  Missing 8 key(s):"));
        assert!(text.contains("    - section.key4"));
        assert!(!text.contains("section.key5"));
        assert!(text.contains("    ... and 3 more"));
    }

    #[test]
    fn extra_keys_use_plus_marker() {
        let mut report = sample();
        report.locales[1].extra_keys = vec!["stray.key".into()];

        let text = plain(&report, false);
        assert!(text.contains("  Extra 1 key(s) (not in base):"));
        assert!(text.contains("    + stray.key"));
    }

    #[test]
    fn quiet_suppresses_listings_but_keeps_rows() {
        let text = plain(&sample(), true);
        assert!(text.contains("hi                3    75.00%  ERRORS"));
        assert!(!text.contains("nav.about"));
        assert!(text.contains("Summary:"));
    }

    #[test]
    fn json_receipt_round_trips() {
        let report = sample();
        let json = render_json(&report).unwrap();
        let back: ReconcileReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = sample();
        assert_eq!(plain(&report, false), plain(&report, false));
    }
}
