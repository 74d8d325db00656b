use super::static_files::StaticAssets;
use crate::db::pool::DbPool;
use std::sync::Arc;

/// Shared, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub assets: Arc<StaticAssets>,
}

impl AppState {
    pub fn new(pool: DbPool, assets: StaticAssets) -> Self {
        Self {
            pool,
            assets: Arc::new(assets),
        }
    }
}
