//! # Itemz
//!
//! Itemz keeps a small ordered list of records (name + description) in a local
//! JSON file. The library owns the records; the `itemz` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prompts, renders, picks exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Validated input in, `CmdResult` out, no terminal I/O     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ItemStore over a StorageBackend (file or memory)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts and
//! never calls `std::process::exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: The record store and its backends
//! - [`model`]: `Item`, `NewItem`, `ItemPatch`, `Container`
//! - [`config`]: Per-store configuration (`config.json`)
//! - [`init`]: Builds the API for a process run
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
