use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MemoId;
use crate::store::{MemoStore, StorageBackend};

pub fn run<B: StorageBackend, C: Clock>(
    store: &mut MemoStore<B, C>,
    ids: &[MemoId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(memo) = store.get_by_id(id)? else {
            result.add_message(CmdMessage::warning(format!("No memo with id {}", id)));
            continue;
        };
        if store.delete(id)? {
            result.add_message(CmdMessage::success(format!(
                "Memo deleted ({}): {}",
                id, memo.title
            )));
            result.affected_memos.push(memo);
        }
    }

    Ok(result)
}
