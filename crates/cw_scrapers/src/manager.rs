use std::sync::Arc;
use cw_core::{Error, Notifier, Result, RunOutcome, RunStage, SeenStore};
use tracing::{error, info, warn};
use crate::extractors::ArticleExtractor;
use crate::fetch::PageFetcher;
use crate::filter::select_new_matches;

/// Runs one check of the watched page: load seen URLs, fetch, extract, filter,
/// notify, then record what was notified.
pub struct WatchManager {
    store: Arc<dyn SeenStore>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Box<dyn ArticleExtractor>,
    notifier: Arc<dyn Notifier>,
    target_url: String,
    keywords: Vec<String>,
}

impl WatchManager {
    pub fn new(
        store: Arc<dyn SeenStore>,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Box<dyn ArticleExtractor>,
        notifier: Arc<dyn Notifier>,
        target_url: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            store,
            fetcher,
            extractor,
            notifier,
            target_url: target_url.into(),
            keywords,
        }
    }

    /// Run the pipeline once. Failures are logged and folded into the outcome;
    /// this never returns an error.
    pub async fn run_once(&self) -> RunOutcome {
        let mut stage = RunStage::CredentialsChecked;
        let outcome = match self.run_stages(&mut stage).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_expected() => {
                error!("❌ Run stopped after {}: {}", stage, e);
                RunOutcome::Aborted { stage, reason: e.to_string() }
            }
            Err(e) => {
                error!("💥 Unexpected error after {}: {:?}", stage, e);
                RunOutcome::Aborted { stage, reason: e.to_string() }
            }
        };
        info!("🏁 Run finished ({}): {}", RunStage::Done, outcome);
        outcome
    }

    async fn run_stages(&self, stage: &mut RunStage) -> Result<RunOutcome> {
        let seen = self.store.load().await?;
        info!("💾 Loaded {} notified URL(s)", seen.len());

        info!("🦗 Fetching {}", self.target_url);
        let html = self.fetcher.fetch(&self.target_url).await?;
        *stage = RunStage::Fetched;

        let articles = match self.extractor.extract(&html) {
            Ok(articles) => articles,
            Err(Error::Structure(detail)) => {
                warn!(
                    "⚠️ No articles found on {} ({}); the site layout may have changed",
                    self.target_url, detail
                );
                return Ok(RunOutcome::NoBlocksFound);
            }
            Err(e) => return Err(e),
        };
        *stage = RunStage::Extracted;
        info!("📰 Extracted {} article(s) with {}", articles.len(), self.extractor.name());

        let batch = select_new_matches(&articles, &seen, &self.keywords);
        *stage = RunStage::Filtered;
        if batch.is_empty() {
            info!("⏭️ No new articles matched the keywords");
            return Ok(RunOutcome::NoNewMatches);
        }
        for article in &batch {
            info!("🆕 {} - {}", article.title, article.url);
        }

        if let Err(e) = self.notifier.notify(&batch).await {
            error!("❌ {} notification failed: {}", self.notifier.name(), e);
            return Ok(RunOutcome::DeliveryFailed { reason: e.to_string() });
        }
        *stage = RunStage::Notified;

        let urls: Vec<String> = batch.iter().map(|a| a.url.clone()).collect();
        self.store.append(&urls).await?;
        *stage = RunStage::Persisted;
        info!("💾 Recorded {} new URL(s)", urls.len());

        Ok(RunOutcome::Notified { count: batch.len() })
    }
}
