pub(crate) mod sync;

mod run_result;

pub use run_result::{CommandResult, CommandSummary, InitSummary, SyncOutcome, SyncSummary};
