use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MemoId = i64;

/// Number of content characters shown by [`Memo::preview`].
pub const PREVIEW_LEN: usize = 50;

/// Appended to a preview when the content was cut.
pub const PREVIEW_MARKER: &str = "...";

/// A single stored note.
///
/// Memos are plain values: the store assigns `id` and the timestamps, and
/// every change produces a new value through [`Memo::with_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn new(
        id: MemoId,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::with_timestamps(id, title, content, now, now)
    }

    pub fn with_timestamps(
        id: MemoId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
            // updated_at never predates creation
            updated_at: updated_at.max(created_at),
        }
    }

    /// Returns an updated copy. `None` keeps the current field.
    ///
    /// `updated_at` becomes `now`, but never moves backwards if the clock does.
    pub fn with_update(
        &self,
        title: Option<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: self.id,
            title: title.unwrap_or_else(|| self.title.clone()),
            content: content.unwrap_or_else(|| self.content.clone()),
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
        }
    }

    /// First [`PREVIEW_LEN`] characters of the content, plus [`PREVIEW_MARKER`]
    /// when anything was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
        if chars.next().is_some() {
            format!("{}{}", head, PREVIEW_MARKER)
        } else {
            head
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
