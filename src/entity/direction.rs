//! Postgres `direction` enum

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether a transaction credits (`in`) or debits (`out`) its owner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "direction")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[sea_orm(string_value = "in")]
    In,
    #[sea_orm(string_value = "out")]
    Out,
}
