use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use testcontainers::runners::AsyncRunner as _;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use tx_history::config::{
    DatabaseConfig, DATABASE_VAR, HOST_VAR, PASSWORD_VAR, PORT_VAR, USER_VAR,
};
use tx_history::{db, schema};

/// Starts a throwaway Postgres and connects to it.
///
/// The container lives as long as the returned handle.
pub async fn setup_test_db() -> (ContainerAsync<Postgres>, DatabaseConnection) {
    let postgres = match Postgres::default()
        .with_password("postgres")
        .with_user("postgres")
        .with_db_name("postgres")
        .with_tag("16-alpine")
        .start()
        .await
    {
        Ok(postgres) => postgres,
        Err(err) => panic!("Failed to start Postgres: {}", err),
    };

    let host = postgres.get_host().await.unwrap().to_string();
    let port = postgres.get_host_port_ipv4(5432).await.unwrap();
    let vars = HashMap::from([
        (HOST_VAR, host),
        (PORT_VAR, port.to_string()),
        (USER_VAR, "postgres".to_string()),
        (PASSWORD_VAR, "postgres".to_string()),
        (DATABASE_VAR, "postgres".to_string()),
    ]);
    let config = DatabaseConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(err) => panic!("Failed to connect to Postgres: {}", err),
    };

    (postgres, db)
}

/// Creates the fixture schema outside of a seeding run
#[allow(dead_code)]
pub async fn reset_schema(db: &DatabaseConnection) {
    let txn = db.begin().await.unwrap();
    schema::reset_schema(&txn).await.unwrap();
    txn.commit().await.unwrap();
}
