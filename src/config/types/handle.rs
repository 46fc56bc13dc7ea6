//! Shared config handle with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic document replacement.
//! Collaborators keep a `ConfigHandle` and call [`ConfigHandle::load`] per
//! request; a reload swaps in a brand-new document or leaves the old one.

use crate::config::{ConfigDocument, ConfigError};
use arc_swap::ArcSwap;
use rustc_hash::FxHasher;
use std::fs;
use std::hash::Hasher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct ConfigHandle {
    current: ArcSwap<ConfigDocument>,
    /// File the document was loaded from, if any.
    source: Option<PathBuf>,
    /// Hash of the source content backing `current`.
    hash: AtomicU64,
}

impl ConfigHandle {
    /// Wrap an already loaded document (no reload source).
    pub fn new(document: ConfigDocument) -> Self {
        Self {
            current: ArcSwap::from_pointee(document),
            source: None,
            hash: AtomicU64::new(0),
        }
    }

    /// Load `path` and keep it as the reload source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = read(path)?;
        let document = ConfigDocument::from_content(&content, path)?;
        Ok(Self {
            current: ArcSwap::from_pointee(document),
            source: Some(path.to_path_buf()),
            hash: AtomicU64::new(compute_hash(&content)),
        })
    }

    #[inline]
    pub fn load(&self) -> Arc<ConfigDocument> {
        self.current.load_full()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replace the current document.
    pub fn replace(&self, document: ConfigDocument) {
        self.current.store(Arc::new(document));
    }

    /// Reload from the source file if its content changed.
    ///
    /// Returns `Ok(true)` if the document was replaced, `Ok(false)` if the
    /// content is unchanged or there is no source. On error the previous
    /// document stays in place.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let Some(path) = &self.source else {
            return Ok(false);
        };

        let content = read(path)?;
        let new_hash = compute_hash(&content);
        if new_hash == self.hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let document = ConfigDocument::from_content(&content, path)?;
        self.current.store(Arc::new(document));
        self.hash.store(new_hash, Ordering::Relaxed);
        crate::debug!("reload"; "reloaded {}", path.display());

        Ok(true)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
}

#[inline]
fn compute_hash(content: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(content.as_bytes());
    hasher.finish()
}
