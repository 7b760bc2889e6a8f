use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{MemoStore, StorageBackend};

/// Deletes every memo and resets ids. Does nothing unless `confirmed`.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut MemoStore<B, C>,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let count = store.count()?;

    if !confirmed {
        result.add_message(CmdMessage::warning(format!(
            "This would delete {} memo(s). Re-run with --yes to confirm.",
            count
        )));
        return Ok(result);
    }

    store.delete_all()?;
    result.add_message(CmdMessage::success(format!("Deleted {} memo(s)", count)));
    Ok(result.with_count(0))
}
