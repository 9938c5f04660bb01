//! Entity module for database models

pub mod asset;
pub mod direction;
pub mod transaction;
pub mod user;
