pub mod extractors;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod manager;

pub use extractors::{extractor_for_url, ArticleExtractor};
pub use fetch::{HttpFetcher, PageFetcher};
pub use filter::select_new_matches;
pub use logging::init_logging;
pub use manager::WatchManager;

pub mod prelude {
    pub use super::extractors::ArticleExtractor;
    pub use super::fetch::PageFetcher;
    pub use super::manager::WatchManager;
    pub use cw_core::{ArticleRecord, Error, Result, RunOutcome};
}
