// Database connection pooling

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::FixtureResult;

/// Opens a Sea-ORM connection pool for the configured database.
///
/// Both utilities run their queries sequentially, so the pool stays small.
pub async fn connect(config: &DatabaseConfig) -> FixtureResult<DatabaseConnection> {
    let max_connections = 5;
    let min_connections = 1;
    let connect_timeout = 10;
    let idle_timeout = 300;
    let debug_mode = false;

    info!("Connecting to database: {}", config.redacted_url());

    let conn_opts = ConnectOptions::new(config.url()?)
        .max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(connect_timeout))
        .idle_timeout(Duration::from_secs(idle_timeout))
        .sqlx_logging(debug_mode)
        .to_owned();

    match Database::connect(conn_opts).await {
        Ok(conn) => {
            info!("Database connection established");
            Ok(conn)
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(e.into())
        }
    }
}
