mod common;

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, Set};
use uuid::Uuid;

use tx_history::catalog::Catalog;
use tx_history::entity::direction::Direction;
use tx_history::entity::transaction;
use tx_history::generator::TransactionGenerator;
use tx_history::report;
use tx_history::seed::{self, SeedPlan};

use common::{reset_schema, setup_test_db};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_ping() {
    let (_resource, db) = setup_test_db().await;

    assert_eq!(report::ping(&db).await.unwrap(), "Hello!");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_history_is_ordered_and_scaled() {
    let (_resource, db) = setup_test_db().await;
    let catalog = Catalog::builtin();
    let plan = SeedPlan {
        entries: vec![(catalog.users[0].clone(), 40), (catalog.users[1].clone(), 15)],
    };
    let mut generator = TransactionGenerator::new(StdRng::seed_from_u64(3));
    seed::run(&db, &catalog, &plan, &mut generator).await.unwrap();

    let history = report::retrieve_data_for_user(&db, catalog.users[0].id)
        .await
        .unwrap();
    assert_eq!(history.len(), 40);

    let symbols: Vec<&str> = catalog.assets.iter().map(|a| a.symbol.as_str()).collect();
    for pair in history.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
    for entry in &history {
        assert!(symbols.contains(&entry.symbol.as_str()));
        assert!(entry.timestamp.ends_with('Z'));
        let volume: Decimal = entry.volume.parse().unwrap();
        assert!(volume > Decimal::ZERO);
        assert!(volume < Decimal::ONE);
    }
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_history_renders_known_rows() {
    let (_resource, db) = setup_test_db().await;
    reset_schema(&db).await;
    let catalog = Catalog::builtin();
    seed::seed_users(&db, &catalog.users).await.unwrap();
    seed::seed_assets(&db, &catalog.assets).await.unwrap();

    let user_id = catalog.users[1].id;
    let btc = &catalog.assets[0];
    let eth = &catalog.assets[1];
    let rows = [
        (Utc.with_ymd_and_hms(2022, 5, 1, 9, 0, 0).unwrap(), Direction::Out, 42_000u64, eth.id),
        (Utc.with_ymd_and_hms(2021, 2, 3, 4, 5, 6).unwrap(), Direction::In, 150_000_000u64, btc.id),
    ];
    for (timestamp, direction, volume, asset_id) in rows {
        transaction::Entity::insert(transaction::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            timestamp: Set(timestamp.into()),
            direction: Set(direction),
            volume: Set(Decimal::from(volume)),
            asset_id: Set(asset_id),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();
    }

    let history = report::retrieve_data_for_user(&db, user_id).await.unwrap();

    let mut csv = Vec::new();
    report::write_csv(&history, &mut csv).unwrap();
    assert_eq!(
        String::from_utf8(csv).unwrap(),
        "timestamp,direction,volume,symbol\n\
         2021-02-03T04:05:06.000Z,in,1.5,BTC\n\
         2022-05-01T09:00:00.000Z,out,0.000000000000042,ETH\n"
    );
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_unknown_user_has_empty_history() {
    let (_resource, db) = setup_test_db().await;
    let catalog = Catalog::builtin();
    let plan = SeedPlan {
        entries: vec![(catalog.users[0].clone(), 5)],
    };
    let mut generator = TransactionGenerator::new(StdRng::seed_from_u64(9));
    seed::run(&db, &catalog, &plan, &mut generator).await.unwrap();

    let history = report::retrieve_data_for_user(&db, Uuid::new_v4()).await.unwrap();
    assert!(history.is_empty());

    let idle = report::retrieve_data_for_user(&db, catalog.users[1].id).await.unwrap();
    assert!(idle.is_empty());
}
