//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every memopad operation, whatever the UI.
//!
//! It dispatches to `commands::*`, passes configuration along (list order,
//! config directory) and returns structured [`CmdResult`]s. It does no
//! printing and holds no business logic of its own.
//!
//! `MemoApi` is generic over the backend and the clock, so the same facade
//! runs on [`FsBackend`](crate::store::fs_backend::FsBackend) in the binary and
//! on [`MemBackend`](crate::store::mem_backend::MemBackend) in tests.

use crate::clock::{Clock, SystemClock};
use crate::commands;
use crate::config::ListOrder;
use crate::error::Result;
use crate::model::MemoId;
use crate::store::{MemoStore, StorageBackend};
use std::path::{Path, PathBuf};

pub struct MemoApi<B: StorageBackend, C: Clock = SystemClock> {
    store: MemoStore<B, C>,
    config_dir: PathBuf,
    list_order: ListOrder,
}

impl<B: StorageBackend, C: Clock> MemoApi<B, C> {
    pub fn new(store: MemoStore<B, C>, config_dir: PathBuf, list_order: ListOrder) -> Self {
        Self {
            store,
            config_dir,
            list_order,
        }
    }

    pub fn create_memo(&mut self, title: String, content: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    /// Lists memos in the configured order, or `order` when given.
    pub fn list_memos(&self, order: Option<ListOrder>) -> Result<CmdResult> {
        commands::list::run(&self.store, order.unwrap_or(self.list_order))
    }

    pub fn view_memos(&self, ids: &[MemoId]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn update_memo(
        &mut self,
        id: MemoId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, title, content)
    }

    pub fn delete_memos(&mut self, ids: &[MemoId]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn search_memos(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, keyword, self.list_order)
    }

    pub fn count_memos(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_count(self.store.count()?))
    }

    pub fn clear_memos(&mut self, confirmed: bool) -> Result<CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }

    pub fn seed_memos(&mut self) -> Result<CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &MemoStore<B, C> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_NAMESPACE;

    fn api<'a>(backend: &'a MemBackend, dir: &Path) -> MemoApi<&'a MemBackend> {
        let store = MemoStore::open(backend, DEFAULT_NAMESPACE).unwrap();
        MemoApi::new(store, dir.to_path_buf(), ListOrder::Stored)
    }

    #[test]
    fn dispatches_crud() {
        let backend = MemBackend::new();
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&backend, dir.path());

        api.create_memo("First".into(), "one".into()).unwrap();
        api.create_memo("Second".into(), "two".into()).unwrap();

        let listed = api.list_memos(None).unwrap();
        assert_eq!(listed.listed_memos[0].title, "First");

        api.update_memo(1, None, Some("uno".into())).unwrap();
        let viewed = api.view_memos(&[1]).unwrap();
        assert_eq!(viewed.listed_memos[0].content, "uno");

        api.delete_memos(&[2]).unwrap();
        assert_eq!(api.count_memos().unwrap().count, Some(1));
    }

    #[test]
    fn search_and_clear() {
        let backend = MemBackend::new();
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&backend, dir.path());
        api.seed_memos().unwrap();

        let found = api.search_memos("yogurt").unwrap();
        assert_eq!(found.listed_memos.len(), 1);

        api.clear_memos(true).unwrap();
        assert_eq!(api.store().count().unwrap(), 0);
    }
}
