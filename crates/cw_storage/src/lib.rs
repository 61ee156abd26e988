use std::path::Path;
use std::sync::Arc;
use cw_core::SeenStore;

pub mod backends;

pub use backends::*;

/// The store used by scheduled runs: an append-only file at `path`.
pub fn create_store(path: &Path) -> Arc<dyn SeenStore> {
    Arc::new(FileStore::new(path))
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
    pub use cw_core::SeenStore;
}
