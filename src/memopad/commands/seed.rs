use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{MemoStore, StorageBackend};

const SAMPLES: &[(&str, &str)] = &[
    ("Shopping list", "Milk\nBread\nEggs\nBananas\nYogurt"),
    (
        "Meeting notes",
        "Agenda for tomorrow:\n1. Project status\n2. Budget review\n3. Next week's schedule",
    ),
    (
        "Study notes",
        "Rust basics\n- Ownership\n- Iterators\n- Traits\n- Error handling",
    ),
    (
        "TODO",
        "Today:\n✓ Check email\n✓ Write report\n□ Prepare for meeting",
    ),
    (
        "Ideas",
        "New app ideas:\n- Task manager\n- Budget tracker\n- Reading log",
    ),
];

/// Fills an empty store with a handful of sample memos. A store that already
/// holds memos is left alone.
pub fn run<B: StorageBackend, C: Clock>(store: &mut MemoStore<B, C>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.count()? > 0 {
        result.add_message(CmdMessage::info("Store is not empty, nothing seeded"));
        return Ok(result);
    }

    for (title, content) in SAMPLES {
        let memo = store.add(*title, *content)?;
        result.affected_memos.push(memo);
    }
    result.add_message(CmdMessage::success(format!(
        "Added {} sample memos",
        result.affected_memos.len()
    )));
    Ok(result)
}
