use std::path::PathBuf;

/// Result of running a docsync command.
pub struct CommandResult {
    pub summary: CommandSummary,
}

pub enum CommandSummary {
    Sync(SyncSummary),
    Init(InitSummary),
}

pub struct InitSummary {
    pub created: bool,
}

pub struct SyncSummary {
    pub outcome: SyncOutcome,
    /// Path of the aggregate file, written or not depending on outcome.
    pub output_path: PathBuf,
    /// Number of source files that were scanned.
    pub source_files_scanned: usize,
}

pub enum SyncOutcome {
    /// No qualifying comment blocks anywhere; nothing was written.
    NoComments,
    /// The aggregate file was rewritten.
    Written {
        /// (identity, version) pairs rescanned with different content.
        updates: usize,
        /// (identity, version) pairs seen for the first time.
        additions: usize,
        /// True when apidoc.json was rewritten with a newer version.
        metadata_updated: bool,
    },
}
