use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::config::ListOrder;
use crate::error::Result;
use crate::store::{MemoStore, StorageBackend};

pub fn run<B: StorageBackend, C: Clock>(
    store: &MemoStore<B, C>,
    order: ListOrder,
) -> Result<CmdResult> {
    let memos = match order {
        ListOrder::Updated => store.sorted_by_updated_desc()?,
        ListOrder::Stored => store.get_all()?,
    };
    Ok(CmdResult::default().with_listed_memos(memos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_NAMESPACE;
    use chrono::{Duration, TimeZone, Utc};
    use std::rc::Rc;

    #[test]
    fn orders_by_updated_or_stored() {
        let backend = MemBackend::new();
        let clock = Rc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let mut store =
            MemoStore::with_clock(&backend, DEFAULT_NAMESPACE, Rc::clone(&clock)).unwrap();
        store.add("older", "").unwrap();
        clock.advance(Duration::hours(1));
        store.add("newer", "").unwrap();

        let updated = run(&store, ListOrder::Updated).unwrap();
        assert_eq!(updated.listed_memos[0].title, "newer");

        let stored = run(&store, ListOrder::Stored).unwrap();
        assert_eq!(stored.listed_memos[0].title, "older");
    }
}
