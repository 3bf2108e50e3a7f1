//! # Persistence
//!
//! Key-value string storage surviving session restarts.
//!
//! Holds exactly two small documents: the wallet balance (decimal string)
//! and the snack hunt discovery record (JSON blob). Both are schema
//! validated on read, so a corrupt or missing value degrades to the
//! default with a warning instead of failing the session.

use std::{cell::RefCell, collections::HashMap, fs, path::PathBuf, rc::Rc};

use tracing::warn;

pub const WALLET_KEY: &str = "snacky_coins";
pub const HUNT_KEY: &str = "snack_hunt";

/// Shared handle to the session's storage collaborator.
pub type StoreHandle = Rc<dyn KvStore>;

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// File-backed store. The whole map is rewritten on every set, which is
/// fine for a two-key document.
pub struct FileStore {
    path: PathBuf,
    cache: RefCell<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let cache = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding corrupt store file {}: {e}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            cache: RefCell::new(cache),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cache = self.cache.borrow_mut();
        cache.insert(key.to_string(), value.to_string());

        let raw = serde_json::to_string(&*cache).expect("string map always serializes");
        if let Err(e) = fs::write(&self.path, raw) {
            warn!("Failed to persist {}: {e}", self.path.display());
        }
    }
}

/// In-memory store for tests and storage-less sessions.
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn handle() -> StoreHandle {
        Rc::new(Self::default())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
