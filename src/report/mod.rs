//! Transaction history retrieval for CSV reports

pub mod export;

use chrono::{SecondsFormat, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Statement,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::entity::direction::Direction;
use crate::entity::{asset, transaction};
use crate::error::{FixtureError, FixtureResult};

pub use export::write_csv;

/// One row of a user's report, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionHistoryEntry {
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
    pub direction: Direction,
    /// Raw volume scaled by the asset's decimals
    pub volume: String,
    pub symbol: String,
}

pub type TransactionHistory = Vec<TransactionHistoryEntry>;

/// Liveness check, returns the greeting selected by the server
pub async fn ping<C>(conn: &C) -> FixtureResult<String>
where
    C: ConnectionTrait,
{
    let row = conn
        .query_one(Statement::from_string(
            conn.get_database_backend(),
            "select 'Hello!' as greeting".to_owned(),
        ))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("liveness query returned no row".to_owned()))?;

    Ok(row.try_get::<String>("", "greeting")?)
}

/// Fetch a user's transactions joined with their assets, oldest first.
///
/// An unknown user yields an empty history.
pub async fn retrieve_data_for_user<C>(conn: &C, user_id: Uuid) -> FixtureResult<TransactionHistory>
where
    C: ConnectionTrait,
{
    let rows = transaction::Entity::find()
        .filter(transaction::Column::UserId.eq(user_id))
        .order_by_asc(transaction::Column::Timestamp)
        .order_by_asc(transaction::Column::Id)
        .find_also_related(asset::Entity)
        .all(conn)
        .await?;

    debug!("Fetched {} transactions for user {}", rows.len(), user_id);

    let history = rows
        .into_iter()
        .map(|(tx, asset)| {
            let asset = asset.ok_or(FixtureError::MissingAsset(tx.id))?;
            history_entry(tx, &asset)
        })
        .collect::<FixtureResult<TransactionHistory>>()?;

    info!("History for user {}: {} entries", user_id, history.len());
    Ok(history)
}

fn history_entry(
    tx: transaction::Model,
    asset: &asset::Model,
) -> FixtureResult<TransactionHistoryEntry> {
    let decimals = asset
        .decimals
        .to_u32()
        .filter(|_| asset.decimals.fract().is_zero())
        .ok_or(FixtureError::InvalidDecimals {
            asset: asset.id,
            decimals: asset.decimals,
        })?;

    Ok(TransactionHistoryEntry {
        timestamp: tx
            .timestamp
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        direction: tx.direction,
        volume: format_volume(tx.volume, decimals)?,
        symbol: asset.symbol.clone(),
    })
}

/// Render a raw integer volume as `raw / 10^decimals`, trailing zeros trimmed
pub fn format_volume(raw: Decimal, decimals: u32) -> FixtureResult<String> {
    let mut scaled = raw;
    scaled
        .set_scale(raw.scale() + decimals)
        .map_err(|_| FixtureError::Scale { decimals })?;

    Ok(scaled.normalize().to_string())
}
