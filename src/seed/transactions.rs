//! Random transaction history for one user

use rand::Rng;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait, Set, Statement};
use tracing::info;

use crate::catalog::{AssetRecord, UserRecord};
use crate::entity::transaction;
use crate::error::FixtureResult;
use crate::generator::{NewTransaction, TransactionGenerator};

/// Remove every row from the transaction table
pub async fn truncate_transactions<C>(conn: &C) -> FixtureResult<()>
where
    C: ConnectionTrait,
{
    conn.execute(Statement::from_string(
        conn.get_database_backend(),
        r#"TRUNCATE TABLE "transaction""#.to_owned(),
    ))
    .await?;

    info!("Transaction table truncated");
    Ok(())
}

/// Generate and insert `count` transactions for `user`, one row at a time.
///
/// The first failing insert aborts the loop; rows inserted so far are only
/// kept if the caller commits.
pub async fn generate_transactions_for_user<C, R>(
    conn: &C,
    generator: &mut TransactionGenerator<R>,
    user: &UserRecord,
    assets: &[AssetRecord],
    count: usize,
) -> FixtureResult<usize>
where
    C: ConnectionTrait,
    R: Rng,
{
    info!("{} transactions to insert for user {}", count, user.id);

    for i in 0..count {
        let new_tx = generator.generate(user, assets)?;
        insert_transaction(conn, new_tx).await?;
        info!("done {}/{}", i + 1, count);
    }

    Ok(count)
}

async fn insert_transaction<C>(conn: &C, new_tx: NewTransaction) -> FixtureResult<()>
where
    C: ConnectionTrait,
{
    let model = transaction::ActiveModel {
        id: Set(new_tx.id),
        user_id: Set(new_tx.user_id),
        timestamp: Set(new_tx.timestamp.into()),
        direction: Set(new_tx.direction),
        volume: Set(Decimal::from(new_tx.volume)),
        asset_id: Set(new_tx.asset_id),
    };

    transaction::Entity::insert(model)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sea_orm::{DbBackend, MockDatabase, MockExecResult};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test]
    async fn test_progress_is_logged_at_info_after_each_insert() {
        let count = 3;
        let conn = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results((0..count).map(|_| MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }))
            .into_connection();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let catalog = Catalog::builtin();
        let mut generator = TransactionGenerator::new(StdRng::seed_from_u64(7));
        let inserted = generate_transactions_for_user(
            &conn,
            &mut generator,
            &catalog.users[0],
            &catalog.assets,
            count,
        )
        .await
        .unwrap();
        assert_eq!(inserted, count);

        let text = logs.text();
        assert!(text.contains("3 transactions to insert for user"));
        for i in 1..=count {
            assert!(text.contains(&format!("done {}/{}", i, count)), "{text}");
        }
        assert_eq!(conn.into_transaction_log().len(), count);
    }

    #[tokio::test]
    async fn test_failed_insert_stops_progress() {
        let conn = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_exec_errors([sea_orm::DbErr::Custom("insert rejected".to_owned())])
            .into_connection();

        let catalog = Catalog::builtin();
        let mut generator = TransactionGenerator::new(StdRng::seed_from_u64(7));
        let result = generate_transactions_for_user(
            &conn,
            &mut generator,
            &catalog.users[0],
            &catalog.assets,
            5,
        )
        .await;

        match result.unwrap_err() {
            crate::error::FixtureError::Database(e) => {
                assert!(e.to_string().contains("insert rejected"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
