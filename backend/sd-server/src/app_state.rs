use sd_config::ValidationConfig;
use sd_core::TextLimits;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub text_limits: TextLimits,
}

impl AppState {
    pub fn new(pool: SqlitePool, text_limits: TextLimits) -> Self {
        Self { pool, text_limits }
    }

    pub fn from_config(pool: SqlitePool, validation: &ValidationConfig) -> Self {
        Self::new(
            pool,
            TextLimits::new(
                validation.max_short_text_length,
                validation.max_summary_length,
            ),
        )
    }
}
