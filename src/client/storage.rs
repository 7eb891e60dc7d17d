use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// The only component allowed to persist the auth token. The store calls
/// it from exactly one place.
pub trait TokenStorage: Send + Sync {
    fn save(&self, token: &str);
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

#[derive(Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn save(&self, token: &str) {
        if let Err(e) = fs::write(&self.path, token) {
            warn!("Failed to persist token: {}", e);
        }
    }

    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to clear token: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryTokenStorage::default();
        assert_eq!(storage.load(), None);
        storage.save("token");
        assert_eq!(storage.load().as_deref(), Some("token"));
        storage.clear();
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join(format!("devhub-token-{}", Uuid::now_v7()));
        let storage = FileTokenStorage::new(&path);
        assert_eq!(storage.load(), None);
        storage.save("token");
        assert_eq!(storage.load().as_deref(), Some("token"));
        storage.clear();
        assert_eq!(storage.load(), None);
        // clearing twice must not blow up
        storage.clear();
    }
}
