//! # Storage Layer
//!
//! Memos live in a plain key-value backend. The [`StorageBackend`] trait only
//! knows namespaces, keys and string values; [`MemoStore`] owns everything
//! memo-shaped on top of it (ID allocation, encoding, search and ordering).
//!
//! ## Whole-Collection Model
//!
//! A store uses exactly two keys in its namespace:
//!
//! ```text
//! <namespace>/
//! ├── memos      # JSON array of every memo, in insertion order
//! └── next_id    # JSON integer, the next id to hand out
//! ```
//!
//! Every read decodes the full `memos` value. Every mutation decodes it,
//! changes it in memory and writes the whole array back. There is no cache and
//! no secondary index, which keeps the model trivially correct for the small
//! collections it targets.
//!
//! ## ID Counter
//!
//! The counter is persisted on its own and is never derived from the
//! collection, so deleting the highest memo does not free its id. The two
//! keys are written independently: `add` writes the counter first, so a crash
//! between the writes can skip an id but never hand one out twice.
//!
//! ## Single Writer
//!
//! Mutations take `&mut self`. Two store instances pointed at the same
//! namespace (two processes, say) are not coordinated; the last full write
//! wins.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one directory per namespace, one file per key.
//! - [`mem_backend::MemBackend`]: in-memory, for tests.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memo_store;

pub use backend::StorageBackend;
pub use memo_store::{MemoStore, DEFAULT_NAMESPACE};
