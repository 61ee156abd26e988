use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate article found on the watched page. `url` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Stages a single watch run passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Init,
    CredentialsChecked,
    Fetched,
    Extracted,
    Filtered,
    Notified,
    Persisted,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Init => "init",
            RunStage::CredentialsChecked => "credentials-checked",
            RunStage::Fetched => "fetched",
            RunStage::Extracted => "extracted",
            RunStage::Filtered => "filtered",
            RunStage::Notified => "notified",
            RunStage::Persisted => "persisted",
            RunStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// How a run ended. Every variant is a normal completion for the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page had no article blocks at all; the markup has probably changed.
    NoBlocksFound,
    /// Blocks were found but none were new keyword matches.
    NoNewMatches,
    /// `count` articles were pushed and recorded.
    Notified { count: usize },
    /// The push failed; nothing was recorded so the next run retries.
    DeliveryFailed { reason: String },
    /// The run stopped after reaching `stage`.
    Aborted { stage: RunStage, reason: String },
}

impl RunOutcome {
    pub fn notified_count(&self) -> usize {
        match self {
            RunOutcome::Notified { count } => *count,
            _ => 0,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::NoBlocksFound => write!(f, "no article blocks found"),
            RunOutcome::NoNewMatches => write!(f, "no new matching articles"),
            RunOutcome::Notified { count } => write!(f, "notified {} article(s)", count),
            RunOutcome::DeliveryFailed { reason } => write!(f, "delivery failed: {}", reason),
            RunOutcome::Aborted { stage, reason } => {
                write!(f, "aborted after {}: {}", stage, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let outcome = RunOutcome::Aborted {
            stage: RunStage::CredentialsChecked,
            reason: "Network error: HTTP 500".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "aborted after credentials-checked: Network error: HTTP 500"
        );
        assert_eq!(RunOutcome::Notified { count: 2 }.notified_count(), 2);
        assert_eq!(RunOutcome::NoBlocksFound.notified_count(), 0);
    }
}
