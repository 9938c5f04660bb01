//! Drops and recreates the fixture schema.
//!
//! Everything here runs on the caller's `DatabaseTransaction`, so a failed
//! statement rolls back to whatever schema existed before.

use sea_orm::sea_query::extension::postgres::Type;
use sea_orm::DatabaseTransaction;
use sea_orm_migration::prelude::*;
use tracing::{debug, info};

use crate::error::FixtureResult;

/// Reset the `user`, `asset` and `transaction` tables and the `direction` type
pub async fn reset_schema(txn: &DatabaseTransaction) -> FixtureResult<()> {
    let manager = SchemaManager::new(txn);

    drop_schema(&manager).await?;
    debug!("Previous schema dropped");

    create_schema(&manager).await?;
    info!("Schema ok");

    Ok(())
}

async fn drop_schema(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    // Dependents first
    manager
        .drop_table(Table::drop().table(Transaction::Table).if_exists().to_owned())
        .await?;
    manager
        .drop_table(Table::drop().table(Asset::Table).if_exists().to_owned())
        .await?;
    manager
        .drop_table(Table::drop().table(User::Table).if_exists().to_owned())
        .await?;
    manager
        .drop_type(Type::drop().if_exists().name(Direction::Enum).to_owned())
        .await?;

    Ok(())
}

async fn create_schema(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Asset::Table)
                .if_not_exists()
                .col(ColumnDef::new(Asset::Id).uuid().unique_key().not_null())
                .col(ColumnDef::new(Asset::Name).text().not_null())
                .col(ColumnDef::new(Asset::Symbol).text().not_null())
                .col(ColumnDef::new(Asset::Decimals).decimal().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(User::Table)
                .if_not_exists()
                .col(ColumnDef::new(User::Id).uuid().unique_key().not_null())
                .col(ColumnDef::new(User::FirstName).text().not_null())
                .col(ColumnDef::new(User::LastName).text().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_type(
            Type::create()
                .as_enum(Direction::Enum)
                .values([Direction::In, Direction::Out])
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(Transaction::Table)
                .if_not_exists()
                .col(ColumnDef::new(Transaction::Id).uuid().unique_key().not_null())
                .col(ColumnDef::new(Transaction::UserId).uuid().not_null())
                .col(
                    ColumnDef::new(Transaction::Timestamp)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Transaction::Direction)
                        .enumeration(Direction::Enum, [Direction::In, Direction::Out])
                        .not_null(),
                )
                .col(ColumnDef::new(Transaction::Volume).decimal().not_null())
                .col(ColumnDef::new(Transaction::AssetId).uuid().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_transaction_user")
                        .from(Transaction::Table, Transaction::UserId)
                        .to(User::Table, User::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_transaction_asset")
                        .from(Transaction::Table, Transaction::AssetId)
                        .to(Asset::Table, Asset::Id),
                )
                .to_owned(),
        )
        .await?;

    Ok(())
}

#[derive(DeriveIden)]
enum Asset {
    Table,
    Id,
    Name,
    Symbol,
    Decimals,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(DeriveIden)]
enum Direction {
    #[sea_orm(iden = "direction")]
    Enum,
    In,
    Out,
}

#[derive(DeriveIden)]
enum Transaction {
    Table,
    Id,
    UserId,
    Timestamp,
    Direction,
    Volume,
    AssetId,
}
