use std::fmt;
use std::path::PathBuf;
use url::Url;
use crate::{Error, Result};

pub const DEFAULT_TARGET_URL: &str = "https://collabo-cafe.com/";
pub const DEFAULT_PUSH_ENDPOINT: &str = "https://api.line.me/v2/bot/message/push";
pub const DEFAULT_STORE_PATH: &str = "notified_urls.txt";
pub const DEFAULT_KEYWORDS: &[&str] = &["原神", "ゼンゼロ", "ゼンレスゾーンゼロ", "ちいかわ", "カービィ"];

pub const TOKEN_VAR: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const RECIPIENT_VAR: &str = "LINE_USER_ID";

/// Everything a watch run needs, built once at start-up.
#[derive(Clone)]
pub struct Config {
    pub target_url: String,
    pub keywords: Vec<String>,
    pub store_path: PathBuf,
    pub push_endpoint: String,
    pub access_token: String,
    pub recipient: String,
}

impl Config {
    /// Load credentials from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        let access_token = require(TOKEN_VAR)?;
        let recipient = require(RECIPIENT_VAR)?;

        Ok(Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            push_endpoint: DEFAULT_PUSH_ENDPOINT.to_string(),
            access_token,
            recipient,
        })
    }

    pub fn with_target_url(mut self, url: &str) -> Result<Self> {
        self.target_url = validate_url(url)?;
        Ok(self)
    }

    pub fn with_push_endpoint(mut self, url: &str) -> Result<Self> {
        self.push_endpoint = validate_url(url)?;
        Ok(self)
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Replace the keyword list. Blank keywords are dropped; at least one must remain.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(Error::Config("at least one non-empty keyword is required".to_string()));
        }
        self.keywords = keywords;
        Ok(self)
    }
}

fn validate_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(Error::InvalidUrl(format!("unsupported scheme '{}' in {}", other, url))),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("target_url", &self.target_url)
            .field("keywords", &self.keywords)
            .field("store_path", &self.store_path)
            .field("push_endpoint", &self.push_endpoint)
            .field("access_token", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}
