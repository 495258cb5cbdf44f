//! # Command Layer
//!
//! Each command lives in its own submodule and implements a plain Rust function
//! over an [`ItemStore`](crate::store::ItemStore).
//!
//! Commands never print, prompt or exit. They return a [`CmdResult`] carrying
//! the items to show and levelled messages; the UI decides how to render them.
//! A missing id is reported as a message, not as an error.

use crate::model::Item;

pub mod create;
pub mod delete;
pub mod find;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<Item>,
    pub messages: Vec<CmdMessage>,
    /// The id a find/update/delete looked for and did not find.
    pub missing_id: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn not_found(id: &str) -> Self {
        Self {
            missing_id: Some(id.to_string()),
            ..Self::default()
        }
        .with_message(CmdMessage::error(format!("Item with ID {} not found", id)))
    }

    pub fn is_not_found(&self) -> bool {
        self.missing_id.is_some()
    }
}
