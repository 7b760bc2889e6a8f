use super::backend::StorageBackend;
use crate::error::{MemoError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since memopad is single-threaded.
/// This keeps every `StorageBackend` method on `&self`, the same as the
/// filesystem backend.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<(String, String), String>>,
    simulate_write_error: RefCell<bool>,
    fail_key: RefCell<Option<String>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make writes to one key fail while every other key keeps working.
    pub fn set_fail_writes_to(&self, key: Option<&str>) {
        *self.fail_key.borrow_mut() = key.map(str::to_string);
    }

    /// Test helper to plant a raw value, bypassing encoding.
    pub fn raw_set(&self, namespace: &str, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert((namespace.to_string(), key.to_string()), value.to_string());
    }

    /// Number of keys currently held in a namespace.
    pub fn key_count(&self, namespace: &str) -> usize {
        self.values
            .borrow()
            .keys()
            .filter(|(ns, _)| ns == namespace)
            .count()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(MemoError::backend("Simulated write error"));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let values = self.values.borrow();
        Ok(values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn set(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        if self.fail_key.borrow().as_deref() == Some(key) {
            return Err(MemoError::backend(format!("Simulated write error on '{}'", key)));
        }
        self.raw_set(namespace, key, value);
        Ok(())
    }

    fn clear_namespace(&self, namespace: &str) -> Result<()> {
        self.check_writable()?;
        self.values
            .borrow_mut()
            .retain(|(ns, _), _| ns != namespace);
        Ok(())
    }
}
