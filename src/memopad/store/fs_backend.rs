use super::backend::{validate_storage_name, StorageBackend};
use crate::error::{MemoError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Filesystem backend: one directory per namespace, one `<key>.json` file per key.
///
/// Every filesystem failure is reported as `BackendUnavailable`, with the
/// `io::Error` kept as its source.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn namespace_dir(&self, namespace: &str) -> Result<PathBuf> {
        validate_storage_name(namespace)?;
        Ok(self.root.join(namespace))
    }

    fn key_path(&self, namespace: &str, key: &str) -> Result<PathBuf> {
        validate_storage_name(key)?;
        Ok(self.namespace_dir(namespace)?.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path).map_err(|e| {
                MemoError::backend_io(format!("creating {}", path.display()), e)
            })?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let path = self.key_path(namespace, key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MemoError::backend_io(
                format!("reading {}", path.display()),
                e,
            )),
        }
    }

    fn set(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let dir = self.namespace_dir(namespace)?;
        let path = self.key_path(namespace, key)?;
        self.ensure_dir(&dir)?;

        // Write to a sibling tmp file, then rename over the target
        let tmp_file = dir.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let written = fs::write(&tmp_file, value).and_then(|_| fs::rename(&tmp_file, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(MemoError::backend_io(
                format!("writing {}", path.display()),
                e,
            ));
        }

        debug!(namespace, key, bytes = value.len(), "wrote value");
        Ok(())
    }

    fn clear_namespace(&self, namespace: &str) -> Result<()> {
        let dir = self.namespace_dir(namespace)?;
        match fs::remove_dir_all(&dir) {
            Ok(()) => {
                debug!(namespace, "cleared namespace");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MemoError::backend_io(
                format!("clearing {}", dir.display()),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_names_are_not_backend_failures() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        assert!(matches!(
            backend.set("..", "memos", "[]"),
            Err(MemoError::InvalidName(_))
        ));
        assert!(matches!(
            backend.get("ns", "a/b"),
            Err(MemoError::InvalidName(_))
        ));
    }

    #[test]
    fn failed_write_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());

        // a directory squatting on the target path makes the rename fail
        fs::create_dir_all(dir.path().join("ns").join("memos.json").join("inner")).unwrap();

        let err = backend.set("ns", "memos", "[]").unwrap_err();
        assert!(matches!(err, MemoError::BackendUnavailable { .. }));

        for entry in fs::read_dir(dir.path().join("ns")).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }
}
