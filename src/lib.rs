//! Docsync - apiDocJS comment history synchronizer
//!
//! Docsync is a CLI tool and library that scans source files for apiDocJS
//! documentation comments, merges them with the previously generated
//! `_apidoc.js` version history, and keeps the `version` field of
//! `apidoc.json` in sync with the newest documented API version.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `commands`: Command implementations (the sync pipeline, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, parsing, merge, and write primitives

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
