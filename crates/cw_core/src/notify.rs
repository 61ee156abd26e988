use async_trait::async_trait;
use crate::types::ArticleRecord;
use crate::Result;

#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    /// Deliver one aggregated message for `articles`. An empty slice sends nothing.
    async fn notify(&self, articles: &[ArticleRecord]) -> Result<()>;
}
