use std::path::Path;
use std::sync::Arc;
use fd_core::{Error, Result, SeenStore};

pub mod backends;

pub use backends::{FileSeenStore, MemorySeenStore};

/// Build a seen-link store from a CLI-style backend name.
pub fn create_store(backend: &str, path: &Path) -> Result<Arc<dyn SeenStore>> {
    match backend {
        "memory" => Ok(Arc::new(MemorySeenStore::new())),
        "file" => Ok(Arc::new(FileSeenStore::open(path)?)),
        other => Err(Error::Storage(format!("Unknown store backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::{FileSeenStore, MemorySeenStore};
    pub use super::create_store;
    pub use fd_core::SeenStore;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_store() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_store("memory", Path::new("unused")).is_ok());
        assert!(create_store("file", &dir.path().join("seen.json")).is_ok());
        assert!(create_store("redis", Path::new("unused")).is_err());
    }
}
