//! Nested identity → version → comment registry and the merge rules.
//!
//! The registry is rebuilt from scratch every run: the current scan is
//! overlaid on whatever the previous `_apidoc.js` contained. Prior state is
//! never mutated in place, only superseded.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::details::{Identity, parse_details};
use super::extract::normalize_comment;

/// Non-greedy span over a `/** ... */` block in raw text.
static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());

/// Identity → version string → normalized comment text.
///
/// At most one text per (identity, version) pair; a later insert with the
/// same pair replaces the earlier one. Both maps are ordered so iteration
/// is deterministic.
pub type ApiRegistry = BTreeMap<Identity, BTreeMap<String, String>>;

/// Counters produced by [`merge`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeCounters {
    /// (identity, version) pairs present in both registries with different text.
    pub updates: usize,
    /// (identity, version) pairs present only in the current scan.
    pub additions: usize,
}

/// Index normalized comments into a registry.
///
/// Blocks without an `@apiVersion` tag are dropped: they have no slot in
/// the version history.
pub fn index_comments<I>(comments: I) -> ApiRegistry
where
    I: IntoIterator<Item = String>,
{
    let mut registry = ApiRegistry::new();
    for comment in comments {
        let details = parse_details(&comment);
        if let Some(version) = details.version {
            registry
                .entry(details.identity)
                .or_default()
                .insert(version, comment);
        }
    }
    registry
}

/// Re-parse a previously written `_apidoc.js` into a registry.
///
/// A missing file is an empty registry, not an error. Blocks that fail to
/// yield a version are silently dropped, same as during a scan.
pub fn load_existing(path: &Path) -> Result<ApiRegistry> {
    if !path.exists() {
        return Ok(ApiRegistry::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(index_comments(
        BLOCK_REGEX
            .find_iter(&content)
            .map(|m| normalize_comment(m.as_str())),
    ))
}

/// Overlay the current scan on the existing registry.
///
/// Counters compare current against existing before the overlay, so a
/// rescan of an unchanged tree is a no-op for both counters and content.
pub fn merge(current: &ApiRegistry, existing: &ApiRegistry) -> (ApiRegistry, MergeCounters) {
    let mut merged = existing.clone();
    let mut counters = MergeCounters::default();

    for (identity, versions) in current {
        for (version, comment) in versions {
            match existing.get(identity).and_then(|v| v.get(version)) {
                Some(previous) if previous != comment => counters.updates += 1,
                Some(_) => {}
                None => counters.additions += 1,
            }
            merged
                .entry(identity.clone())
                .or_default()
                .insert(version.clone(), comment.clone());
        }
    }

    (merged, counters)
}
