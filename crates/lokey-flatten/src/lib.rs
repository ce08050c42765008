//! # lokey-flatten
//!
//! **Tier 1 (Pure Utilities)**
//!
//! Converts a parsed locale resource document into its flattened key set:
//! one dot-joined path per leaf value. Pure and deterministic; no I/O.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// A flattened key set: dot-joined root-to-leaf paths, ascending order.
pub type FlatKeySet = BTreeSet<String>;

/// Flatten a locale document into its set of fully-qualified keys.
///
/// Objects are namespaces and are descended into; everything else (string,
/// number, bool, null, array) is a leaf. Arrays are opaque leaves regardless
/// of element type. An empty object contributes zero keys: neither a key for
/// the section itself nor any descendants, so coverage math counts "no keys
/// under an empty section". A non-object root has no addressable keys and
/// flattens to the empty set.
#[must_use]
pub fn flatten(doc: &Value) -> FlatKeySet {
    let mut keys = FlatKeySet::new();
    if let Value::Object(map) = doc {
        collect(map, "", &mut keys);
    }
    keys
}

fn collect(map: &Map<String, Value>, prefix: &str, out: &mut FlatKeySet) {
    for (key, value) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(child) => collect(child, &full, out),
            _ => {
                out.insert(full);
            }
        }
    }
}
