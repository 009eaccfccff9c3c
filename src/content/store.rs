//! Content store - the single persisted slot for the site document
//!
//! One fixed file holds the whole serialized `SiteContent`. Loading never
//! fails: a missing or unparseable slot silently degrades to the hard-coded
//! default document, indistinguishable from "no data yet". Saving replaces
//! the slot entirely; there is no field-level update and no version field.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::default_content;
use super::model::SiteContent;

/// Slot location relative to the studio base directory
pub const CONTENT_FILE: &str = ".fstudio/content.json";

/// Storage backend for the content document
///
/// An explicit store object is threaded to every consumer (editor, server,
/// commands) so tests can substitute an in-memory double.
pub trait ContentStore: Send + Sync {
    /// Read the persisted document, falling back to the default on any
    /// missing or invalid payload. Never an error.
    fn load(&self) -> SiteContent;

    /// Serialize the full document into the slot, replacing any prior value.
    fn save(&self, content: &SiteContent) -> Result<()>;
}

impl<T: ContentStore + ?Sized> ContentStore for &T {
    fn load(&self) -> SiteContent {
        (**self).load()
    }

    fn save(&self, content: &SiteContent) -> Result<()> {
        (**self).save(content)
    }
}

impl<T: ContentStore + ?Sized> ContentStore for std::sync::Arc<T> {
    fn load(&self) -> SiteContent {
        (**self).load()
    }

    fn save(&self, content: &SiteContent) -> Result<()> {
        (**self).save(content)
    }
}

/// File-backed store, one JSON file under the studio directory
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store addressing the fixed slot under `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            path: base_dir.as_ref().join(CONTENT_FILE),
        }
    }

    /// Path of the persisted slot
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentStore for FileStore {
    fn load(&self) -> SiteContent {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("Persisted content unparseable, using defaults: {}", e);
                    default_content()
                }
            },
            Err(_) => default_content(),
        }
    }

    fn save(&self, content: &SiteContent) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(content)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store used by unit tests
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot with a raw payload (valid or not)
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl ContentStore for MemoryStore {
    fn load(&self) -> SiteContent {
        let slot = self.slot.lock().unwrap();
        slot.as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_else(default_content)
    }

    fn save(&self, content: &SiteContent) -> Result<()> {
        let raw = serde_json::to_string_pretty(content)?;
        *self.slot.lock().unwrap() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_without_slot_returns_default() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load(), default_content());
    }

    #[test]
    fn load_with_invalid_payload_returns_default() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), default_content());
    }

    #[test]
    fn load_with_unknown_category_returns_default() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let mut doc = serde_json::to_value(default_content()).unwrap();
        doc["portfolioImages"][0]["category"] = "landscape".into();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), serde_json::to_string(&doc).unwrap()).unwrap();

        assert_eq!(store.load(), default_content());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let mut doc = default_content();
        doc.hero.title = "Новый заголовок".to_string();
        doc.services.remove(0);
        store.save(&doc).unwrap();

        assert_eq!(store.load(), doc);
    }

    #[test]
    fn save_replaces_prior_slot_entirely() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let mut first = default_content();
        first.hero.badge = "first".to_string();
        store.save(&first).unwrap();

        let mut second = default_content();
        second.services.clear();
        store.save(&second).unwrap();

        let loaded = store.load();
        assert!(loaded.services.is_empty());
        assert_eq!(loaded.hero.badge, default_content().hero.badge);
    }

    #[test]
    fn memory_store_follows_same_contract() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), default_content());

        let mut doc = default_content();
        doc.contacts.phone = "+7 (000) 000-00-00".to_string();
        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);

        let broken = MemoryStore::with_raw("][");
        assert_eq!(broken.load(), default_content());
    }
}
