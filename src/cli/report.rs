//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow docsync to be used as a library.
//! Every printer has a writer-parameterized variant for testing.

use std::io::{self, Write};

use colored::Colorize;

use crate::commands::{CommandResult, CommandSummary, InitSummary, SyncOutcome, SyncSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::writer::METADATA_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the result of a command to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the result of a command to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    match &summary.outcome {
        SyncOutcome::NoComments => {
            let _ = writeln!(writer, "No API comments found.");
        }
        SyncOutcome::Written {
            updates,
            additions,
            metadata_updated,
        } => {
            let _ = writeln!(
                writer,
                "{} {}:",
                "Updated".green().bold(),
                summary.output_path.display()
            );
            let _ = writeln!(
                writer,
                "  - {} API endpoint(s) updated (same version with different content)",
                updates
            );
            let _ = writeln!(writer, "  - {} new API version(s) added", additions);
            if *metadata_updated {
                let _ = writeln!(writer, "  - Updated version in {}", METADATA_FILE_NAME);
            }
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
