use rand::thread_rng;
use tracing::{error, info};

use tx_history::catalog::Catalog;
use tx_history::config::DatabaseConfig;
use tx_history::generator::TransactionGenerator;
use tx_history::seed::{self, SeedPlan};
use tx_history::{db, logging, FixtureResult};

#[tokio::main]
async fn main() -> FixtureResult<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logger();

    if let Err(e) = run().await {
        error!("Seeding failed, nothing was committed: {}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> FixtureResult<()> {
    let config = DatabaseConfig::from_env()?;
    let connection = db::connect(&config).await?;
    info!("connected");

    let catalog = Catalog::builtin();
    let plan = SeedPlan::standard(&catalog);
    let mut generator = TransactionGenerator::new(thread_rng());

    let summary = seed::run(&connection, &catalog, &plan, &mut generator).await?;
    info!(
        "Seeded {} new users, {} new assets, {} transactions",
        summary.users_inserted, summary.assets_inserted, summary.transactions_inserted
    );

    connection.close().await?;
    Ok(())
}
