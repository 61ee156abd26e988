use async_trait::async_trait;
use cw_core::{Result, SeenStore};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Keeps insertion order so callers can inspect what was appended.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().map(Into::into).collect())),
        }
    }

    /// Every appended line, in order, duplicates included.
    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl SeenStore for MemoryStore {
    async fn load(&self) -> Result<HashSet<String>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().cloned().collect())
    }

    async fn append(&self, urls: &[String]) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.extend(urls.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::with_entries(["/old"]);
        store.append(&["/a".to_string(), "/b".to_string()]).await.unwrap();

        let seen = store.load().await.unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.contains("/old"));
        assert!(seen.contains("/a"));
        assert_eq!(store.entries().await, vec!["/old", "/a", "/b"]);
    }

    #[tokio::test]
    async fn test_empty_append_is_noop() {
        let store = MemoryStore::new();
        store.append(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
