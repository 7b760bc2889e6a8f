use memopad::error::MemoError;
use memopad::store::fs_backend::FsBackend;
use memopad::store::{MemoStore, StorageBackend, DEFAULT_NAMESPACE};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get("ns", "memos").unwrap(), None);

    backend.set("ns", "memos", "[]").unwrap();
    assert_eq!(backend.get("ns", "memos").unwrap(), Some("[]".to_string()));

    backend.set("ns", "memos", "[1]").unwrap();
    assert_eq!(backend.get("ns", "memos").unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_fs_backend_layout_and_no_tmp_leftovers() {
    let (dir, backend) = setup();
    backend.set("ns", "next_id", "4").unwrap();

    let expected = dir.path().join("ns").join("next_id.json");
    assert_eq!(fs::read_to_string(&expected).unwrap(), "4");

    for entry in fs::read_dir(dir.path().join("ns")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_clear_namespace() {
    let (dir, backend) = setup();
    backend.set("a", "k", "1").unwrap();
    backend.set("b", "k", "2").unwrap();

    backend.clear_namespace("a").unwrap();
    assert_eq!(backend.get("a", "k").unwrap(), None);
    assert_eq!(backend.get("b", "k").unwrap(), Some("2".to_string()));
    assert!(!dir.path().join("a").exists());

    // clearing again is fine
    backend.clear_namespace("a").unwrap();
}

#[test]
fn test_fs_backend_rejects_traversal() {
    let (_dir, backend) = setup();
    let err = backend.set("../escape", "k", "v").unwrap_err();
    assert!(matches!(err, MemoError::InvalidName(_)));
    assert!(matches!(
        backend.get("ns", "a/b"),
        Err(MemoError::InvalidName(_))
    ));
}

#[test]
fn test_fs_backend_io_failure_is_backend_unavailable() {
    let (dir, backend) = setup();
    // a plain file where the namespace directory should be
    fs::write(dir.path().join(DEFAULT_NAMESPACE), "not a directory").unwrap();

    let err = backend.get(DEFAULT_NAMESPACE, "memos").unwrap_err();
    assert!(matches!(err, MemoError::BackendUnavailable { .. }));

    let err = backend.set(DEFAULT_NAMESPACE, "memos", "[]").unwrap_err();
    assert!(matches!(err, MemoError::BackendUnavailable { .. }));

    let err = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE)
        .err()
        .unwrap();
    assert!(matches!(err, MemoError::BackendUnavailable { .. }));
}

#[test]
fn test_store_survives_reopen_on_disk() {
    let (dir, _) = setup();

    let first_ids = {
        let mut store = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE).unwrap();
        let a = store.add("Shopping", "milk bread").unwrap();
        let b = store.add("Meeting", "budget review").unwrap();
        store.delete(b.id).unwrap();
        vec![a.id, b.id]
    };

    let mut store = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE).unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Shopping");
    assert_eq!(all[0].content, "milk bread");

    let next = store.add("Later", "").unwrap();
    assert!(first_ids.iter().all(|id| next.id > *id));
}

#[test]
fn test_store_reports_corrupt_file() {
    let (dir, backend) = setup();
    backend.set(DEFAULT_NAMESPACE, "memos", "not json at all").unwrap();

    let store = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE).unwrap();
    assert!(matches!(
        store.get_all().unwrap_err(),
        MemoError::CorruptData { .. }
    ));
}

#[test]
fn test_store_delete_all_on_disk() {
    let (dir, _) = setup();
    let mut store = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE).unwrap();
    store.add("a", "").unwrap();
    store.add("b", "").unwrap();

    store.delete_all().unwrap();
    assert!(!dir.path().join(DEFAULT_NAMESPACE).exists());

    let mut reopened = MemoStore::open(FsBackend::new(dir.path()), DEFAULT_NAMESPACE).unwrap();
    assert_eq!(reopened.count().unwrap(), 0);
    assert_eq!(reopened.add("c", "").unwrap().id, 1);
}
