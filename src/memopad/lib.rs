//! # Memopad Architecture
//!
//! Memopad is a small **local memo store** with a command-line client on top.
//! The library owns all state handling; the binary only parses arguments and
//! prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Validates user input (blank titles)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - UI rules: title validation, blank search = list all      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MemoStore: ids, encoding, search, ordering               │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<_>`, never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-command logic
//! - [`store`]: The memo repository and its key-value backends
//! - [`model`]: The [`model::Memo`] record
//! - [`clock`]: Injected time source
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
