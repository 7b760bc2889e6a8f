use crate::clock::Clock;
use crate::commands::{require_title, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{MemoStore, StorageBackend};

pub fn run<B: StorageBackend, C: Clock>(
    store: &mut MemoStore<B, C>,
    title: String,
    content: String,
) -> Result<CmdResult> {
    require_title(&title)?;

    let memo = store.add(title, content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Memo created ({}): {}",
        memo.id, memo.title
    )));
    Ok(result.with_affected_memos(vec![memo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemoError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_NAMESPACE;

    #[test]
    fn creates_memo() {
        let backend = MemBackend::new();
        let mut store = MemoStore::open(&backend, DEFAULT_NAMESPACE).unwrap();

        let result = run(&mut store, "Groceries".into(), "eggs".into()).unwrap();
        assert_eq!(result.affected_memos.len(), 1);
        assert_eq!(result.affected_memos[0].id, 1);
        assert_eq!(store.count().unwrap(), 1);
        assert!(result.messages[0].content.contains("Groceries"));
    }

    #[test]
    fn rejects_blank_title() {
        let backend = MemBackend::new();
        let mut store = MemoStore::open(&backend, DEFAULT_NAMESPACE).unwrap();

        let err = run(&mut store, "   ".into(), "body".into()).unwrap_err();
        assert!(matches!(err, MemoError::Api(_)));
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.next_id(), 1);
    }
}
