//! # CLI Behavior
//!
//! This is **one possible UI client** for memopad, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Input Rules
//!
//! - `memopad` with no arguments lists memos.
//! - Titles must not be blank (`create`, `edit`); the store itself would accept them.
//! - `search ""` lists everything, the same as `list`.
//! - `clear` refuses to run without `--yes`.
//!
//! ## Data Location
//!
//! `MEMOPAD_HOME` overrides the data directory; otherwise the platform data
//! dir from `directories` is used. `config.json` lives at the root of it, and
//! the memos under a subdirectory named after the configured namespace.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (lists, full memos, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
