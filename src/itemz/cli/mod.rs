//! # CLI Layer
//!
//! One possible UI client for itemz. This is the only place that knows about
//! the terminal: argument parsing, interactive prompts, colors and the banner.
//!
//! - `setup`: clap definitions and version string
//! - `commands`: `run()` and the per-command handlers
//! - `prompt`: sequential form filling over a `Prompter`
//! - `render`: banner, messages and item output

mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;
