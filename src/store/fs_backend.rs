use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use uuid::Uuid;

use super::backend::{StorageBackend, StorageKey};
use crate::error::{Result, ResumePadError};

/// Filesystem storage backend: one file per entry under a root directory.
///
/// Writes are atomic (write to a temp file, then rename) so a crash or a
/// full disk mid-write never corrupts an already-written entry.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Backend rooted at the OS-appropriate per-user data directory.
    pub fn at_default_root() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "resumepad").ok_or_else(|| {
            ResumePadError::Store("Could not determine a data directory for this user".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: StorageKey) -> PathBuf {
        let name = match key {
            StorageKey::Document => "resume.json",
            StorageKey::ProfileImage => "profile-image.txt",
            StorageKey::Settings => "settings.json",
        };
        self.root.join(name)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ResumePadError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ResumePadError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<()> {
        self.ensure_root()?;
        let target = self.entry_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".entry-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(ResumePadError::Io)?;
        fs::rename(&tmp, target).map_err(ResumePadError::Io)?;

        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ResumePadError::Io)?;
        }
        Ok(())
    }
}
