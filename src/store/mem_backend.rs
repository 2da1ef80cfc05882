use std::cell::RefCell;
use std::collections::HashMap;

use super::backend::{StorageBackend, StorageKey};
use crate::error::{Result, ResumePadError};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the whole crate is
/// single-threaded. Tracks a write count per entry so tests can assert
/// debounce coalescing (N rapid mutations, one write).
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<StorageKey, String>>,
    write_counts: RefCell<HashMap<StorageKey, usize>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// How many times [`StorageBackend::write`] succeeded for this entry.
    pub fn write_count(&self, key: StorageKey) -> usize {
        self.write_counts.borrow().get(&key).copied().unwrap_or(0)
    }

    /// Seed an entry directly, bypassing write counting. For arranging
    /// pre-existing stored state in tests.
    pub fn preload(&self, key: StorageKey, value: &str) {
        self.entries.borrow_mut().insert(key, value.to_string());
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.entries.borrow().contains_key(&key)
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(&key).cloned())
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ResumePadError::Store("Simulated write error".to_string()));
        }
        self.entries.borrow_mut().insert(key, value.to_string());
        *self.write_counts.borrow_mut().entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        self.entries.borrow_mut().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_counting() {
        let backend = MemBackend::new();
        assert_eq!(backend.write_count(StorageKey::Document), 0);

        backend.write(StorageKey::Document, "a").unwrap();
        backend.write(StorageKey::Document, "b").unwrap();

        assert_eq!(
            backend.read(StorageKey::Document).unwrap(),
            Some("b".to_string())
        );
        assert_eq!(backend.write_count(StorageKey::Document), 2);
    }

    #[test]
    fn test_simulated_write_error_leaves_entry_untouched() {
        let backend = MemBackend::new();
        backend.write(StorageKey::Settings, "keep").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.write(StorageKey::Settings, "lost").is_err());

        assert_eq!(
            backend.read(StorageKey::Settings).unwrap(),
            Some("keep".to_string())
        );
        assert_eq!(backend.write_count(StorageKey::Settings), 1);
    }

    #[test]
    fn test_preload_does_not_count_as_write() {
        let backend = MemBackend::new();
        backend.preload(StorageKey::ProfileImage, "data:image/png;base64,AA");
        assert_eq!(backend.write_count(StorageKey::ProfileImage), 0);
        assert!(backend.contains(StorageKey::ProfileImage));
    }
}
