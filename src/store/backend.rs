use crate::error::Result;

/// The three logical storage entries. A closed set: the adapter never
/// invents keys, and backends may map each key however suits the medium
/// (a file per key, a localStorage key per key, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Document,
    ProfileImage,
    Settings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::Document,
        StorageKey::ProfileImage,
        StorageKey::Settings,
    ];
}

/// Abstract interface for raw entry I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::persist::PersistenceAdapter`] handles the "what" (schema,
/// back-fill, recovery). Implementations take `&self`; single-threaded
/// interior mutability is fine.
pub trait StorageBackend {
    /// Read an entry. Returns `Ok(None)` when the entry does not exist;
    /// `Err` only on actual I/O failure.
    fn read(&self, key: StorageKey) -> Result<Option<String>>;

    /// Write an entry. Must be atomic per entry: a failed write must not
    /// leave a corrupted value behind, and must never touch other entries.
    fn write(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Remove an entry. No-op when the entry does not exist.
    fn remove(&self, key: StorageKey) -> Result<()>;
}
