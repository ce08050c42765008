use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to read locales directory") {
        push_hint(&mut out, "Verify the directory exists and is readable.");
        push_hint(
            &mut out,
            "Point at the right place with `--locales-dir <path>`.",
        );
    }

    if haystack.contains("no translation files found") {
        push_hint(
            &mut out,
            "Locale files must be named `<locale>.json` (e.g. en.json).",
        );
        push_hint(
            &mut out,
            "Check that `--locales-dir` points at the directory holding them.",
        );
    }

    if haystack.contains("base locale") && haystack.contains("not found") {
        push_hint(
            &mut out,
            "Add the base locale file, or pick another base with `--base <locale>`.",
        );
    }

    if haystack.contains("failed to parse") {
        push_hint(
            &mut out,
            "The named file is not valid JSON; fix it before re-running.",
        );
        push_hint(
            &mut out,
            "A broken translation file fails the whole run on purpose.",
        );
    }

    out
}

fn push_hint(hints: &mut Vec<String>, hint: &str) {
    let hint = hint.to_string();
    if !hints.contains(&hint) {
        hints.push(hint);
    }
}
