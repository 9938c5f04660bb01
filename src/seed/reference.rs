//! Insert-or-ignore seeding of the fixed catalogs

use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{debug, info};

use crate::catalog::{AssetRecord, UserRecord};
use crate::entity::{asset, user};
use crate::error::FixtureResult;

/// Insert every catalog user that is not already present.
///
/// Existing rows are left untouched even if the catalog values differ.
/// Returns the number of rows actually inserted.
pub async fn seed_users<C>(conn: &C, users: &[UserRecord]) -> FixtureResult<u64>
where
    C: ConnectionTrait,
{
    let mut inserted = 0;

    for record in users {
        let model = user::ActiveModel {
            id: Set(record.id),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
        };

        let rows = user::Entity::insert(model)
            .on_conflict(OnConflict::column(user::Column::Id).do_nothing().to_owned())
            .exec_without_returning(conn)
            .await?;

        debug!("User {} ({} row inserted)", record.id, rows);
        inserted += rows;
    }

    info!("Users created: {} new of {}", inserted, users.len());
    Ok(inserted)
}

/// Insert every catalog asset that is not already present.
///
/// Same insert-or-ignore contract as [`seed_users`].
pub async fn seed_assets<C>(conn: &C, assets: &[AssetRecord]) -> FixtureResult<u64>
where
    C: ConnectionTrait,
{
    let mut inserted = 0;

    for record in assets {
        let model = asset::ActiveModel {
            id: Set(record.id),
            name: Set(record.name.clone()),
            symbol: Set(record.symbol.clone()),
            decimals: Set(Decimal::from(record.decimals)),
        };

        let rows = asset::Entity::insert(model)
            .on_conflict(OnConflict::column(asset::Column::Id).do_nothing().to_owned())
            .exec_without_returning(conn)
            .await?;

        debug!("Asset {} ({} row inserted)", record.symbol, rows);
        inserted += rows;
    }

    info!("Assets created: {} new of {}", inserted, assets.len());
    Ok(inserted)
}
