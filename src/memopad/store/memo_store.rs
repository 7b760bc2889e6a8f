use super::backend::StorageBackend;
use crate::clock::{Clock, SystemClock};
use crate::error::{MemoError, Result};
use crate::model::{Memo, MemoId};
use tracing::{debug, warn};

/// Namespace used when the caller does not pick one.
pub const DEFAULT_NAMESPACE: &str = "memo_prefs";

const KEY_MEMOS: &str = "memos";
const KEY_NEXT_ID: &str = "next_id";
const FIRST_ID: MemoId = 1;

/// The memo repository.
///
/// Owns the whole collection inside one backend namespace, plus the id
/// counter. The counter is loaded once when the store is opened and written
/// back on every allocation.
pub struct MemoStore<B: StorageBackend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    namespace: String,
    next_id: MemoId,
}

impl<B: StorageBackend> MemoStore<B, SystemClock> {
    pub fn open(backend: B, namespace: impl Into<String>) -> Result<Self> {
        Self::with_clock(backend, namespace, SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> MemoStore<B, C> {
    /// Opens the store, reading the persisted counter (1 when absent).
    ///
    /// Fails with `CorruptData` if the counter is present but unreadable.
    pub fn with_clock(backend: B, namespace: impl Into<String>, clock: C) -> Result<Self> {
        let namespace = namespace.into();
        let next_id = load_next_id(&backend, &namespace)?;
        debug!(namespace = %namespace, next_id, "opened memo store");
        Ok(Self {
            backend,
            clock,
            namespace,
            next_id,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The id the next `add` will hand out.
    pub fn next_id(&self) -> MemoId {
        self.next_id
    }

    /// Every memo, in the order they were added.
    pub fn get_all(&self) -> Result<Vec<Memo>> {
        let Some(raw) = self.backend.get(&self.namespace, KEY_MEMOS)? else {
            return Ok(Vec::new());
        };
        let memos: Vec<Memo> = serde_json::from_str(&raw).map_err(|e| {
            warn!(namespace = %self.namespace, error = %e, "stored memos failed to decode");
            MemoError::corrupt(KEY_MEMOS, e)
        })?;
        if let Some(bad) = memos.iter().find(|m| m.updated_at < m.created_at) {
            warn!(namespace = %self.namespace, id = bad.id, "stored memo updated before it was created");
            return Err(MemoError::corrupt(
                KEY_MEMOS,
                format!("memo {} updated before it was created", bad.id),
            ));
        }
        Ok(memos)
    }

    pub fn get_by_id(&self, id: MemoId) -> Result<Option<Memo>> {
        Ok(self.get_all()?.into_iter().find(|m| m.id == id))
    }

    /// Creates a memo with a fresh id.
    ///
    /// The advanced counter is persisted before the collection, so a failure
    /// between the two writes skips an id instead of reissuing it.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<Memo> {
        let mut memos = self.get_all()?;

        let id = self.next_id;
        let next = id
            .checked_add(1)
            .ok_or_else(|| MemoError::corrupt(KEY_NEXT_ID, "id counter exhausted"))?;
        save_next_id(&self.backend, &self.namespace, next)?;
        self.next_id = next;

        let memo = Memo::new(id, title, content, self.clock.now());
        memos.push(memo.clone());
        self.save_memos(&memos)?;

        debug!(id, total = memos.len(), "added memo");
        Ok(memo)
    }

    /// Replaces title and content of an existing memo.
    ///
    /// Returns `false` when no memo has this id. The counter is never touched.
    pub fn update(
        &mut self,
        id: MemoId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<bool> {
        let mut memos = self.get_all()?;
        let Some(slot) = memos.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };

        *slot = slot.with_update(Some(title.into()), Some(content.into()), self.clock.now());
        self.save_memos(&memos)?;

        debug!(id, "updated memo");
        Ok(true)
    }

    /// Removes a memo permanently. Returns `false` (and writes nothing) when absent.
    pub fn delete(&mut self, id: MemoId) -> Result<bool> {
        let mut memos = self.get_all()?;
        let before = memos.len();
        memos.retain(|m| m.id != id);
        if memos.len() == before {
            return Ok(false);
        }

        self.save_memos(&memos)?;
        debug!(id, remaining = memos.len(), "deleted memo");
        Ok(true)
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// An empty keyword matches every memo.
    pub fn search(&self, keyword: &str) -> Result<Vec<Memo>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&needle)
                    || m.content.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Most recently updated first. Equal timestamps keep insertion order.
    pub fn sorted_by_updated_desc(&self) -> Result<Vec<Memo>> {
        let mut memos = self.get_all()?;
        memos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(memos)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.get_all()?.len())
    }

    /// Wipes the namespace and returns the store to its initial state:
    /// the next `add` gets id 1 again.
    pub fn delete_all(&mut self) -> Result<()> {
        self.backend.clear_namespace(&self.namespace)?;
        self.next_id = FIRST_ID;
        debug!(namespace = %self.namespace, "cleared all memos");
        Ok(())
    }

    fn save_memos(&self, memos: &[Memo]) -> Result<()> {
        let json = serde_json::to_string(memos)?;
        self.backend.set(&self.namespace, KEY_MEMOS, &json)
    }
}

fn load_next_id<B: StorageBackend>(backend: &B, namespace: &str) -> Result<MemoId> {
    let Some(raw) = backend.get(namespace, KEY_NEXT_ID)? else {
        return Ok(FIRST_ID);
    };
    let id: MemoId = serde_json::from_str(raw.trim()).map_err(|e| {
        warn!(namespace, error = %e, "stored id counter failed to decode");
        MemoError::corrupt(KEY_NEXT_ID, e)
    })?;
    if id < FIRST_ID {
        return Err(MemoError::corrupt(
            KEY_NEXT_ID,
            format!("counter must be at least {}, found {}", FIRST_ID, id),
        ));
    }
    Ok(id)
}

fn save_next_id<B: StorageBackend>(backend: &B, namespace: &str, next_id: MemoId) -> Result<()> {
    backend.set(namespace, KEY_NEXT_ID, &next_id.to_string())
}
