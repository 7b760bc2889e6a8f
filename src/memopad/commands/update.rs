use crate::clock::Clock;
use crate::commands::{require_title, CmdMessage, CmdResult};
use crate::error::{MemoError, Result};
use crate::model::MemoId;
use crate::store::{MemoStore, StorageBackend};

/// Edits a memo. Fields left as `None` keep their stored value.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut MemoStore<B, C>,
    id: MemoId,
    title: Option<String>,
    content: Option<String>,
) -> Result<CmdResult> {
    let current = store.get_by_id(id)?.ok_or(MemoError::MemoNotFound(id))?;

    let title = title.unwrap_or(current.title);
    let content = content.unwrap_or(current.content);
    require_title(&title)?;

    if !store.update(id, title, content)? {
        return Err(MemoError::MemoNotFound(id));
    }

    let updated = store.get_by_id(id)?.ok_or(MemoError::MemoNotFound(id))?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Memo updated ({}): {}",
        updated.id, updated.title
    )));
    Ok(result.with_affected_memos(vec![updated]))
}
