//! Fixture seeding and transaction history reporting for a PostgreSQL
//! development database.

pub mod catalog;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod generator;
pub mod logging;
pub mod report;
pub mod schema;
pub mod seed;

pub use error::{FixtureError, FixtureResult};
