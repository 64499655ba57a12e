//! Serialization of the merged registry and the apidoc.json version sync.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use serde_json::Value;

use super::registry::ApiRegistry;
use super::version::{max_version, version_key};

pub const METADATA_FILE_NAME: &str = "apidoc.json";

/// Flatten the registry into write order: identity ascending, then version
/// descending by numeric tuple.
///
/// Sort keys are computed up front, so a malformed version string fails
/// here, before the aggregate file is opened for writing.
pub fn sorted_comments(registry: &ApiRegistry) -> Result<Vec<&str>> {
    let mut ordered = Vec::new();
    for versions in registry.values() {
        let mut keyed: Vec<(Vec<u64>, &str)> = Vec::with_capacity(versions.len());
        for (version, comment) in versions {
            keyed.push((version_key(version)?, comment.as_str()));
        }
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        ordered.extend(keyed.into_iter().map(|(_, comment)| comment));
    }
    Ok(ordered)
}

/// Fully overwrite the aggregate file: a generated header line with a
/// timestamp, then each block followed by a blank line.
pub fn write_aggregate(path: &Path, comments: &[&str]) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut content = format!("// API Documentation - Generated on {}\n\n", timestamp);
    for comment in comments {
        content.push_str(comment);
        content.push_str("\n\n");
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Sync the metadata `version` field to the newest version in the registry.
///
/// A missing metadata file skips the update. The file is rewritten only
/// when the stored version differs; all other fields keep their values and
/// order. Returns true when the file was rewritten.
pub fn update_metadata(apidoc_dir: &Path, registry: &ApiRegistry) -> Result<bool> {
    let path = apidoc_dir.join(METADATA_FILE_NAME);
    if !path.exists() {
        return Ok(false);
    }

    let versions = registry
        .values()
        .flat_map(|versions| versions.keys().map(String::as_str));
    let Some(latest) = max_version(versions)? else {
        return Ok(false);
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let Value::Object(mut data) = value else {
        bail!("Root of {} must be a JSON object", path.display());
    };

    if data.get("version").and_then(Value::as_str) == Some(latest.as_str()) {
        return Ok(false);
    }

    data.insert("version".to_string(), Value::String(latest));
    let mut rendered = serde_json::to_string_pretty(&Value::Object(data))
        .context("Failed to serialize metadata")?;
    rendered.push('\n');
    fs::write(&path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(true)
}
