//! The sync command: scan → parse → merge → write.

use std::path::PathBuf;
use std::{env, fs};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, SyncOutcome, SyncSummary};
use crate::cli::args::SyncCommand;
use crate::config::load_config;
use crate::core::{extract, registry, scanner, writer};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd)?.config;

    let source_root = args
        .common
        .source_root
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let apidoc_dir = args
        .common
        .apidoc_dir
        .unwrap_or_else(|| PathBuf::from(&config.apidoc_dir));
    let output = args.output.unwrap_or_else(|| config.output.clone());
    let recursive = args.recursive || config.recursive;
    let verbose = args.common.verbose;

    if !source_root.exists() {
        bail!("Source directory {} not found", source_root.display());
    }

    fs::create_dir_all(&apidoc_dir)
        .with_context(|| format!("Failed to create directory {}", apidoc_dir.display()))?;
    let output_path = apidoc_dir.join(&output);

    let files = scanner::scan_files(
        &source_root,
        &config.extensions,
        &config.ignores,
        recursive,
        verbose,
    );

    let mut comments: Vec<String> = Vec::new();
    for file in &files {
        if verbose {
            println!("Processing {}", file.display());
        }
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        comments.extend(extract::api_comments(&content));
    }

    let summary = |outcome| {
        CommandResult {
            summary: CommandSummary::Sync(SyncSummary {
                outcome,
                output_path: output_path.clone(),
                source_files_scanned: files.len(),
            }),
        }
    };

    if comments.is_empty() {
        return Ok(summary(SyncOutcome::NoComments));
    }

    let current = registry::index_comments(comments);
    let existing = registry::load_existing(&output_path)?;
    let (merged, counters) = registry::merge(&current, &existing);

    // Sort keys are computed before the aggregate is opened; a malformed
    // version aborts here with the previous file intact.
    let ordered = writer::sorted_comments(&merged)?;
    writer::write_aggregate(&output_path, &ordered)?;
    let metadata_updated = writer::update_metadata(&apidoc_dir, &merged)?;

    Ok(summary(SyncOutcome::Written {
        updates: counters.updates,
        additions: counters.additions,
        metadata_updated,
    }))
}
