//! Numeric tuple ordering for dot-separated version strings.
//!
//! Versions compare segment by segment as integers, so "2.10" sorts above
//! "2.9" where a plain string comparison would get it wrong.

use anyhow::{Context, Result};

/// Parse a version string into its numeric segments.
///
/// Any empty or non-integer segment is an error: the `@apiVersion` tag
/// pattern admits tokens like "1..2" that cannot be ordered. Callers sort
/// or take maxima before writing, so a malformed version aborts the run
/// with nothing written.
pub fn version_key(version: &str) -> Result<Vec<u64>> {
    version
        .split('.')
        .map(|segment| {
            segment
                .parse::<u64>()
                .with_context(|| format!("Malformed version string: \"{}\"", version))
        })
        .collect()
}

/// The maximum version by numeric tuple order, or None for an empty input.
pub fn max_version<'a, I>(versions: I) -> Result<Option<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(Vec<u64>, &str)> = None;
    for version in versions {
        let key = version_key(version)?;
        if best.as_ref().is_none_or(|(best_key, _)| key > *best_key) {
            best = Some((key, version));
        }
    }
    Ok(best.map(|(_, version)| version.to_string()))
}
