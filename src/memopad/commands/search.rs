use crate::clock::Clock;
use crate::commands::{list, CmdMessage, CmdResult};
use crate::config::ListOrder;
use crate::error::Result;
use crate::store::{MemoStore, StorageBackend};

/// Keyword search. A blank keyword means "no filter" and lists everything.
///
/// Matches come back most recently updated first.
pub fn run<B: StorageBackend, C: Clock>(
    store: &MemoStore<B, C>,
    keyword: &str,
    order: ListOrder,
) -> Result<CmdResult> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return list::run(store, order);
    }

    let mut matches = store.search(keyword)?;
    matches.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No memos match '{}'", keyword)));
    }
    Ok(result.with_listed_memos(matches))
}
