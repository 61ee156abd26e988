use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or malformed. Fatal at start-up.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The target page could not be fetched.
    #[error("Network error: {0}")]
    Network(String),

    /// The push-messaging provider rejected or never received the message.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// The page no longer contains the expected article blocks.
    #[error("Structure error: {0}")]
    Structure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Errors the orchestrator expects and reports without a cause chain.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::Delivery(_) | Error::Structure(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_kinds() {
        assert!(Error::Network("500".into()).is_expected());
        assert!(Error::Delivery("401".into()).is_expected());
        assert!(Error::Structure("no blocks".into()).is_expected());
        assert!(!Error::Storage("disk full".into()).is_expected());
        assert!(!Error::Config("missing".into()).is_expected());
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn test_display() {
        let err = Error::Config("LINE_USER_ID must be set".into());
        assert_eq!(err.to_string(), "Configuration error: LINE_USER_ID must be set");
    }
}
