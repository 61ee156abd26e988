use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use cw_core::{Config, Result};
use cw_scrapers::{extractor_for_url, init_logging, HttpFetcher, WatchManager};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check collabo-cafe.com for new keyword matches and push them to LINE", long_about = None)]
pub struct Cli {
    /// Page to watch. Must be on collabo-cafe.com (or a subdomain), the only site with an extractor.
    #[arg(long)]
    url: Option<String>,
    /// File holding already-notified URLs, one per line
    #[arg(long)]
    store: Option<PathBuf>,
    /// Keyword to match in article titles; repeat to give several. Replaces the built-in list.
    #[arg(long = "keyword")]
    keywords: Vec<String>,
    /// Push-message endpoint
    #[arg(long)]
    endpoint: Option<String>,
}

/// Layer command-line overrides on top of the environment-derived config.
fn apply_overrides(cli: Cli, mut config: Config) -> Result<Config> {
    if let Some(url) = cli.url {
        config = config.with_target_url(&url)?;
    }
    if let Some(endpoint) = cli.endpoint {
        config = config.with_push_endpoint(&endpoint)?;
    }
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }
    if !cli.keywords.is_empty() {
        config = config.with_keywords(cli.keywords)?;
    }
    Ok(config)
}

fn build_manager(config: &Config) -> Result<WatchManager> {
    let extractor = extractor_for_url(&config.target_url)?;
    Ok(WatchManager::new(
        cw_storage::create_store(&config.store_path),
        Arc::new(HttpFetcher::new()),
        extractor,
        cw_notify::create_notifier(config),
        config.target_url.clone(),
        config.keywords.clone(),
    ))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    info!("{}", "=".repeat(50));
    info!("☕ Starting collabo cafe check");

    let config = Config::from_env().context("missing credentials")?;
    let config = apply_overrides(cli, config).context("invalid command-line options")?;
    info!("🔑 Credentials loaded, watching {} for {} keyword(s)", config.target_url, config.keywords.len());

    let manager = build_manager(&config).context("failed to set up the watch")?;
    manager.run_once().await;

    info!("✨ Check complete");
    info!("{}", "=".repeat(50));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cw_core::config::{DEFAULT_KEYWORDS, RECIPIENT_VAR, TOKEN_VAR};
    use cw_core::Error;

    fn config() -> Config {
        Config::from_lookup(|key| match key {
            TOKEN_VAR => Some("token".to_string()),
            RECIPIENT_VAR => Some("U123".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let cli = Cli::try_parse_from(["collabo-watch"]).unwrap();
        let config = apply_overrides(cli, config()).unwrap();
        assert_eq!(config.target_url, "https://collabo-cafe.com/");
        assert_eq!(config.keywords.len(), DEFAULT_KEYWORDS.len());
        assert!(build_manager(&config).is_ok());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "collabo-watch",
            "--store",
            "/var/lib/collabo/seen.txt",
            "--keyword",
            "ちいかわ",
            "--keyword",
            "カービィ",
            "--endpoint",
            "http://localhost:8080/push",
        ])
        .unwrap();
        let config = apply_overrides(cli, config()).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/var/lib/collabo/seen.txt"));
        assert_eq!(config.keywords, vec!["ちいかわ".to_string(), "カービィ".to_string()]);
        assert_eq!(config.push_endpoint, "http://localhost:8080/push");
    }

    #[test]
    fn test_unsupported_site_fails_setup() {
        let cli = Cli::try_parse_from(["collabo-watch", "--url", "https://example.com/"]).unwrap();
        let config = apply_overrides(cli, config()).unwrap();
        assert!(matches!(build_manager(&config), Err(Error::Scraping(_))));
    }

    #[test]
    fn test_url_help_names_supported_site() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Must be on collabo-cafe.com"));
    }

    #[test]
    fn test_missing_recipient_fails_before_any_request() {
        let result = Config::from_lookup(|key| (key == TOKEN_VAR).then(|| "token".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
