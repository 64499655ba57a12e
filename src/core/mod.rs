//! Core extraction and merge pipeline.
//!
//! The pipeline is a single linear pass: `extract` pulls apiDocJS comment
//! blocks out of source text, `details` derives their identity and version,
//! `registry` merges the current scan over the previously written history,
//! and `writer` serializes the result.

pub mod details;
pub mod extract;
pub mod registry;
pub mod scanner;
pub mod version;
pub mod writer;

pub use details::{ApiDetails, Identity};
pub use extract::api_comments;
pub use registry::{ApiRegistry, MergeCounters};
