//! Durable client-side persistence for the session cart.
//!
//! The cart engine treats storage as a best-effort cache, not a source of
//! truth: the serialized cart is written after every mutation and read once
//! at startup, with any failure falling back to an empty cart.

use crate::config;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Key-value store holding the serialized cart document under a fixed key.
///
/// Implementations bind to their location (directory + key) at construction,
/// so the trait itself is a single-document read/write surface.
pub trait CartStorage: Send {
    /// Read the stored document, or `None` if nothing has been written yet.
    fn read(&mut self) -> Result<Option<String>>;

    /// Replace the stored document.
    fn write(&mut self, document: &str) -> Result<()>;

    /// Remove the stored document, if any.
    fn clear(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// File-backed storage: one JSON document per key under a managed directory.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create file storage under `dir` (the platform data directory when
    /// `None`), creating the directory if needed.
    pub fn new(dir: Option<PathBuf>, key: &str) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_storage_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(format!("{key}.json")),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn read(&mut self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Writes to a temp file and renames on success, so an interrupted write
    /// never leaves a corrupt partial document behind.
    fn write(&mut self, document: &str) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let result = (|| -> Result<()> {
            fs::write(&tmp, document)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }

        result
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory storage for tests and sessions that opt out of durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored document, e.g. to simulate a previous session.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn read(&mut self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> Result<()> {
        self.document = Some(document.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.document = None;
        Ok(())
    }
}
