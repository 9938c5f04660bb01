//! Seeding orchestration

pub mod reference;
pub mod transactions;

use rand::Rng;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{error, info, warn};

use crate::catalog::{Catalog, UserRecord};
use crate::error::FixtureResult;
use crate::generator::TransactionGenerator;
use crate::schema;

pub use reference::{seed_assets, seed_users};
pub use transactions::{generate_transactions_for_user, truncate_transactions};

/// Transactions generated for each catalog user, in catalog order
pub const STANDARD_COUNTS: [usize; 2] = [1_000, 10_000];

/// Which users get how many generated transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub entries: Vec<(UserRecord, usize)>,
}

impl SeedPlan {
    /// 1000 transactions for the first catalog user, 10000 for the second
    pub fn standard(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .users
                .iter()
                .cloned()
                .zip(STANDARD_COUNTS)
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// Rows written by a committed seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_inserted: u64,
    pub assets_inserted: u64,
    pub transactions_inserted: usize,
}

/// Reset the schema and repopulate it inside a single transaction.
///
/// Any failure rolls the whole batch back, including the schema reset, and
/// is returned unchanged. Nothing is retried.
pub async fn run<R: Rng>(
    db: &DatabaseConnection,
    catalog: &Catalog,
    plan: &SeedPlan,
    generator: &mut TransactionGenerator<R>,
) -> FixtureResult<SeedSummary> {
    let txn = db.begin().await?;
    info!("begin");

    match populate(&txn, catalog, plan, generator).await {
        Ok(summary) => {
            txn.commit().await?;
            info!("commit");
            Ok(summary)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                error!("Rollback failed: {}", rollback_err);
            }
            warn!("rolled back");
            Err(e)
        }
    }
}

async fn populate<R: Rng>(
    txn: &DatabaseTransaction,
    catalog: &Catalog,
    plan: &SeedPlan,
    generator: &mut TransactionGenerator<R>,
) -> FixtureResult<SeedSummary> {
    schema::reset_schema(txn).await?;

    let users_inserted = seed_users(txn, &catalog.users).await?;
    let assets_inserted = seed_assets(txn, &catalog.assets).await?;

    truncate_transactions(txn).await?;

    let mut transactions_inserted = 0;
    for (user, count) in &plan.entries {
        transactions_inserted +=
            generate_transactions_for_user(txn, generator, user, &catalog.assets, *count).await?;
    }
    info!("Transactions inserted: {}", transactions_inserted);

    Ok(SeedSummary {
        users_inserted,
        assets_inserted,
        transactions_inserted,
    })
}
