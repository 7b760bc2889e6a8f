use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::{MemoError, Result};
use crate::model::MemoId;
use crate::store::{MemoStore, StorageBackend};

pub fn run<B: StorageBackend, C: Clock>(
    store: &MemoStore<B, C>,
    ids: &[MemoId],
) -> Result<CmdResult> {
    let all = store.get_all()?;
    let memos = ids
        .iter()
        .map(|id| {
            all.iter()
                .find(|m| m.id == *id)
                .cloned()
                .ok_or(MemoError::MemoNotFound(*id))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_memos(memos))
}
