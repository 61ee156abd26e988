use cw_core::{ArticleRecord, Error, Result};
use scraper::Html;
use super::utils::{element_text, host_matches, parse_selector};
use super::ArticleExtractor;

/// Listing markup of collabo-cafe.com: `<article class="post-list">` cards with a
/// link and an `h1.entry-title` heading.
#[derive(Debug, Clone, Default)]
pub struct CollaboCafeExtractor;

impl CollaboCafeExtractor {
    pub fn new() -> Self {
        Self
    }

    const DOMAIN: &'static str = "collabo-cafe.com";
    const BLOCK_SELECTOR: &'static str = "article.post-list";
    const LINK_SELECTOR: &'static str = "a";
    const TITLE_SELECTOR: &'static str = "h1.entry-title";
    const NO_TITLE: &'static str = "No Title";
}

impl ArticleExtractor for CollaboCafeExtractor {
    fn name(&self) -> &str {
        "collabo-cafe"
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, Self::DOMAIN)
    }

    fn extract(&self, html: &str) -> Result<Vec<ArticleRecord>> {
        let block_selector = parse_selector(Self::BLOCK_SELECTOR)?;
        let link_selector = parse_selector(Self::LINK_SELECTOR)?;
        let title_selector = parse_selector(Self::TITLE_SELECTOR)?;

        let document = Html::parse_document(html);
        let blocks: Vec<_> = document.select(&block_selector).collect();
        if blocks.is_empty() {
            return Err(Error::Structure(format!(
                "no `{}` blocks on the page",
                Self::BLOCK_SELECTOR
            )));
        }

        let mut articles = Vec::with_capacity(blocks.len());
        for block in blocks {
            // Only the first anchor counts; a block whose first anchor has no target is skipped.
            let Some(url) = block
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .map(str::trim)
                .filter(|href| !href.is_empty())
            else {
                continue;
            };

            let title = block
                .select(&title_selector)
                .next()
                .map(|heading| element_text(&heading))
                .unwrap_or_else(|| Self::NO_TITLE.to_string());

            articles.push(ArticleRecord::new(title, url));
        }

        Ok(articles)
    }
}
