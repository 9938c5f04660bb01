// Error types shared by the seed and report utilities

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while seeding or reporting
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A required configuration value is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Random generation was asked to pick from an empty catalog
    #[error("Cannot generate transactions: the {0} catalog is empty")]
    EmptyCatalog(&'static str),

    /// A raw volume cannot be rendered with the asset's decimals
    #[error("Cannot scale volume by {decimals} decimals")]
    Scale { decimals: u32 },

    /// An asset row holds a decimals value that is not a small non-negative integer
    #[error("Asset {asset} has invalid decimals {decimals}")]
    InvalidDecimals { asset: Uuid, decimals: Decimal },

    /// A history row referenced an asset that could not be loaded
    #[error("Transaction {0} has no matching asset")]
    MissingAsset(Uuid),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FixtureResult<T> = Result<T, FixtureError>;
