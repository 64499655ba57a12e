//! Source file discovery.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Collect source files under `source_root` whose extension is in the
/// allow-list, skipping paths matched by the ignore patterns.
///
/// Non-recursive mode only looks at direct children of the root. The
/// result is sorted so scan order (and thus last-write-wins collisions)
/// is deterministic.
pub fn scan_files(
    source_root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    recursive: bool,
    verbose: bool,
) -> Vec<PathBuf> {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut walker = WalkDir::new(source_root);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if patterns.iter().any(|p| p.matches(&path.to_string_lossy())) {
            continue;
        }

        if path.is_file() && has_allowed_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
