use std::collections::HashSet;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::sync::RwLock;
use fd_core::{Error, Result, SeenStore};

/// Flat-file store: a sorted JSON array of delivered links. The whole file
/// is rewritten on every insert, through a temp file and rename, so a crash
/// mid-write cannot truncate the set.
pub struct FileSeenStore {
    path: PathBuf,
    links: RwLock<HashSet<String>>,
}

impl FileSeenStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let links = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<Vec<String>>(&raw)?
                .into_iter()
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Seen-link file {} not found, starting empty", path.display());
                HashSet::new()
            }
            Err(e) => return Err(Error::Io(e)),
        };
        Ok(Self {
            path,
            links: RwLock::new(links),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, links: &HashSet<String>) -> Result<()> {
        let mut sorted: Vec<&String> = links.iter().collect();
        sorted.sort();
        let raw = serde_json::to_string_pretty(&sorted)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl SeenStore for FileSeenStore {
    async fn contains(&self, link: &str) -> Result<bool> {
        Ok(self.links.read().await.contains(link))
    }

    async fn insert(&self, links: &[String]) -> Result<()> {
        let mut set = self.links.write().await;
        for link in links {
            set.insert(link.clone());
        }
        self.persist(&set)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.links.read().await.len())
    }
}
