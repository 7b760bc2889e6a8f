use crate::error::{MemoError, Result};

/// Abstract interface for raw key-value I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `MemoStore` handles the "what" (encoding, ids, queries).
///
/// The only guarantee callers rely on is read-after-write within one process.
pub trait StorageBackend {
    /// Read a value. Returns `Ok(None)` when the key was never written.
    /// Returns `Err` only when the backend itself fails.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, namespace: &str, key: &str, value: &str) -> Result<()>;

    /// Remove every key in the namespace. Clearing an empty namespace is not an error.
    fn clear_namespace(&self, namespace: &str) -> Result<()>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        (**self).get(namespace, key)
    }

    fn set(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        (**self).set(namespace, key, value)
    }

    fn clear_namespace(&self, namespace: &str) -> Result<()> {
        (**self).clear_namespace(namespace)
    }
}

/// Checks a namespace or key name. Backends may map names onto paths, so a
/// name must be a single non-empty component: no separators, no `.` or `..`.
pub fn validate_storage_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(MemoError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_storage_name("memos").is_ok());
        assert!(validate_storage_name("memo_prefs").is_ok());
        assert!(validate_storage_name(".hidden").is_ok());
    }

    #[test]
    fn rejects_path_like_names() {
        for name in ["", ".", "..", "a/b", "a\\b", "../up"] {
            assert!(
                matches!(validate_storage_name(name), Err(MemoError::InvalidName(_))),
                "accepted {:?}",
                name
            );
        }
    }
}
