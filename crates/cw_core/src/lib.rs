pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use notify::Notifier;
pub use storage::SeenStore;
pub use types::{ArticleRecord, RunOutcome, RunStage};
