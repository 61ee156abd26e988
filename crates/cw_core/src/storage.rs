use async_trait::async_trait;
use std::collections::HashSet;
use crate::Result;

#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Every identifier recorded so far. A store with no backing record yet is empty.
    async fn load(&self) -> Result<HashSet<String>>;

    /// Record identifiers that were just notified, keeping all earlier entries.
    async fn append(&self, urls: &[String]) -> Result<()>;
}
