use async_trait::async_trait;
use cw_core::{Error, Result, SeenStore};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Newline-delimited list of notified URLs. Only ever appended to.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeenStore for FileStore {
    async fn load(&self) -> Result<HashSet<String>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(HashSet::new());
            }
            Err(e) => {
                return Err(Error::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn append(&self, urls: &[String]) -> Result<()> {
        if urls.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::Storage(format!("Failed to create store directory {}: {}", parent.display(), e))
            })?;
        }

        let mut buf = String::new();
        for url in urls {
            buf.push_str(url);
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to open {}: {}", self.path.display(), e)))?;
        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;

        debug!("Appended {} URL(s) to {}", urls.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("notified_urls.txt"));
        let seen = store.load().await.unwrap();
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_existing_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notified_urls.txt");
        std::fs::write(&path, "https://collabo-cafe.com/old/\n").unwrap();

        let store = FileStore::new(&path);
        store
            .append(&["/a".to_string(), "/b".to_string()])
            .await
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "https://collabo-cafe.com/old/\n/a\n/b\n");

        let seen = store.load().await.unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.contains("https://collabo-cafe.com/old/"));
        assert!(seen.contains("/a"));
        assert!(seen.contains("/b"));
    }

    #[tokio::test]
    async fn test_load_trims_and_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        std::fs::write(&path, "/a\r\n\n  /b  \n\n").unwrap();

        let seen = FileStore::new(&path).load().await.unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("/a"));
        assert!(seen.contains("/b"));
    }

    #[tokio::test]
    async fn test_append_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("seen.txt");
        let store = FileStore::new(&path);
        store.append(&["/a".to_string()]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "/a\n");
    }

    #[tokio::test]
    async fn test_empty_append_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        FileStore::new(&path).append(&[]).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        FileStore::new(&path).append(&["/a".to_string()]).await.unwrap();

        let reopened = FileStore::new(&path);
        assert!(reopened.load().await.unwrap().contains("/a"));
        assert_eq!(reopened.path(), path.as_path());
    }
}
