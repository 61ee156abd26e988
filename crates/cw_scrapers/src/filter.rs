use cw_core::ArticleRecord;
use std::collections::HashSet;

/// Keep articles that were never notified and whose title contains at least one
/// keyword (literal, case-sensitive substring). Input order is preserved and a URL
/// repeated on the same page is kept once.
pub fn select_new_matches<K: AsRef<str>>(
    articles: &[ArticleRecord],
    seen: &HashSet<String>,
    keywords: &[K],
) -> Vec<ArticleRecord> {
    let mut taken: HashSet<&str> = HashSet::new();
    let mut selected = Vec::new();
    for article in articles {
        if seen.contains(&article.url) || taken.contains(article.url.as_str()) {
            continue;
        }
        if keywords
            .iter()
            .any(|keyword| article.title.contains(keyword.as_ref()))
        {
            taken.insert(&article.url);
            selected.push(article.clone());
        }
    }
    selected
}
