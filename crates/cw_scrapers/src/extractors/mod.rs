use cw_core::{ArticleRecord, Error, Result};

pub mod collabo_cafe;

pub use collabo_cafe::CollaboCafeExtractor;

/// Turns one page's markup into article records. One implementation per markup shape.
pub trait ArticleExtractor: Send + Sync {
    /// Returns the name of the site this extractor understands
    fn name(&self) -> &str;

    /// Returns true if this extractor understands pages served from `url`
    fn can_handle(&self, url: &str) -> bool;

    /// Extracts every usable article block. Returns `Error::Structure` when the
    /// page holds no article blocks at all.
    fn extract(&self, html: &str) -> Result<Vec<ArticleRecord>>;
}

pub type ExtractorFactory = fn() -> Box<dyn ArticleExtractor>;

fn collabo_cafe() -> Box<dyn ArticleExtractor> {
    Box::new(CollaboCafeExtractor::new())
}

pub fn get_extractor_factories() -> Vec<ExtractorFactory> {
    vec![collabo_cafe as ExtractorFactory]
}

/// Picks the extractor for the page at `url`.
pub fn extractor_for_url(url: &str) -> Result<Box<dyn ArticleExtractor>> {
    get_extractor_factories()
        .into_iter()
        .map(|factory| factory())
        .find(|extractor| extractor.can_handle(url))
        .ok_or_else(|| Error::Scraping(format!("No extractor found for URL: {}", url)))
}

/// Common utilities for extractors
pub(crate) mod utils {
    use cw_core::{Error, Result};
    use scraper::{ElementRef, Selector};
    use url::Url;

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector '{}': {:?}", selector, e)))
    }

    pub fn element_text(element: &ElementRef) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    pub fn host_matches(url: &str, domain: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .map_or(false, |host| host == domain || host.ends_with(&format!(".{}", domain)))
    }
}
