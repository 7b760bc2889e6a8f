use crate::config::MemopadConfig;
use crate::error::{MemoError, Result};
use crate::model::Memo;

pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod seed;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

/// What every command hands back to the UI. Nothing here is pre-formatted
/// for a terminal except the message strings.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Memos created, changed or removed by the command
    pub affected_memos: Vec<Memo>,
    /// Memos to display
    pub listed_memos: Vec<Memo>,
    pub count: Option<usize>,
    pub config: Option<MemopadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_memos(mut self, memos: Vec<Memo>) -> Self {
        self.affected_memos = memos;
        self
    }

    pub fn with_listed_memos(mut self, memos: Vec<Memo>) -> Self {
        self.listed_memos = memos;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_config(mut self, config: MemopadConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Titles are required at the UI boundary; the store itself accepts anything.
pub(crate) fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(MemoError::Api("Title cannot be empty".into()));
    }
    Ok(())
}
