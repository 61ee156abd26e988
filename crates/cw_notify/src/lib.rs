use std::sync::Arc;
use cw_core::{Config, Notifier};

pub mod line;
pub mod message;

pub use line::LinePushNotifier;
pub use message::format_message;

/// The notifier a configured run delivers through.
pub fn create_notifier(config: &Config) -> Arc<dyn Notifier> {
    Arc::new(LinePushNotifier::from_config(config))
}

pub mod prelude {
    pub use super::{create_notifier, format_message, LinePushNotifier};
    pub use cw_core::{ArticleRecord, Notifier, Result, Error};
}
