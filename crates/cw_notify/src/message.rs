use cw_core::ArticleRecord;

/// Render the batch as a single push message: a count header, then one
/// `■ title` / url block per article, blocks separated by blank lines.
pub fn format_message(articles: &[ArticleRecord]) -> String {
    let mut text = format!("新しいコラボ情報が{}件見つかりました！\n\n", articles.len());
    for article in articles {
        text.push_str(&format!("■ {}\n{}\n\n", article.title, article.url));
    }
    text.trim_end().to_string()
}
