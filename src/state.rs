use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;

/// Shared per-request context: the one database handle opened at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
