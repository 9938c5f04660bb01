use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use uuid::Uuid;

use tx_history::catalog::Catalog;
use tx_history::config::DatabaseConfig;
use tx_history::report::{self, TransactionHistory};
use tx_history::{db, logging, FixtureError, FixtureResult};

/// Export a user's transaction history as CSV
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// User to report on (defaults to the first seeded user)
    user_id: Option<Uuid>,

    /// Write the CSV to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> FixtureResult<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logger();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Report failed: {}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> FixtureResult<()> {
    let config = DatabaseConfig::from_env()?;
    let pool = db::connect(&config).await?;

    let greeting = report::ping(&pool).await?;
    info!("Database says {:?}", greeting);

    let user_id = match cli.user_id {
        Some(id) => id,
        None => Catalog::builtin()
            .users
            .first()
            .map(|user| user.id)
            .ok_or(FixtureError::EmptyCatalog("user"))?,
    };
    let history = report::retrieve_data_for_user(&pool, user_id).await?;

    export(&history, cli.output)?;

    pool.close().await?;
    Ok(())
}

fn export(history: &TransactionHistory, output: Option<PathBuf>) -> FixtureResult<()> {
    match output {
        Some(path) => {
            report::write_csv(history, File::create(&path)?)?;
            info!("Wrote {} rows to {}", history.len(), path.display());
        }
        None => report::write_csv(history, io::stdout().lock())?,
    }

    Ok(())
}
