//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a liveness check
//! before the pool is handed out.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;
use crate::error::{Result, StoreError};

/// Maximum open connections for the pool.
const MAX_CONNECTIONS: u32 = 25;

/// Connections are recycled after this long regardless of use, to avoid
/// stale-connection issues behind mid-tier load balancers.
const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// Idle connections beyond the working set are released after this long.
const IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Create a PostgreSQL connection pool from config and verify it with a
/// `SELECT 1` ping.
///
/// No explicit acquire timeout is configured; the driver's default
/// applies, so callers on an exhausted pool wait up to that long for a
/// connection before the checkout fails.
///
/// # Errors
///
/// Returns [`StoreError::Connect`] if the pool cannot be opened or the
/// ping fails (unreachable host, bad credentials, bad database name).
/// No retry is attempted.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(MAX_LIFETIME)
        .idle_timeout(IDLE_TIMEOUT)
        .connect(&config.connection_url())
        .await
        .map_err(StoreError::Connect)?;

    ping(&pool).await?;
    Ok(pool)
}

async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(StoreError::Connect)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_a_connect_error() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            // Reserved port; nothing listens here.
            port: "1".into(),
            user: "csv".into(),
            password: "secret".into(),
            database: "csvstore".into(),
            ssl_mode: "disable".into(),
        };

        let err = create_pool(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));
    }
}
