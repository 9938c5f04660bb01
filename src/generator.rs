//! Synthetic transaction generation

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::catalog::{AssetRecord, UserRecord};
use crate::entity::direction::Direction;
use crate::error::{FixtureError, FixtureResult};

/// 2020-01-01T00:00:00.000Z
const HISTORY_START_MS: i64 = 1_577_836_800_000;
/// 2023-09-15T12:30:00.000Z
const HISTORY_END_MS: i64 = 1_694_781_000_000;

pub const MIN_VOLUME: u64 = 1;
pub const MAX_VOLUME: u64 = 1_000_000;

/// Inclusive time range random timestamps are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The historical window used for seeded data
    pub fn history() -> Self {
        Self {
            start: Utc.timestamp_nanos(HISTORY_START_MS * 1_000_000),
            end: Utc.timestamp_nanos(HISTORY_END_MS * 1_000_000),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// A transaction ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub volume: u64,
    pub asset_id: Uuid,
}

/// Draws random transactions for catalog users
pub struct TransactionGenerator<R> {
    rng: R,
    window: TimeWindow,
}

impl<R: Rng> TransactionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            window: TimeWindow::history(),
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Generate one transaction for `user` against a random asset
    pub fn generate(
        &mut self,
        user: &UserRecord,
        assets: &[AssetRecord],
    ) -> FixtureResult<NewTransaction> {
        let asset = assets
            .choose(&mut self.rng)
            .ok_or(FixtureError::EmptyCatalog("asset"))?;

        let direction = if self.rng.gen_bool(0.5) {
            Direction::In
        } else {
            Direction::Out
        };

        Ok(NewTransaction {
            id: Uuid::new_v4(),
            user_id: user.id,
            timestamp: self.random_timestamp(),
            direction,
            volume: self.rng.gen_range(MIN_VOLUME..=MAX_VOLUME),
            asset_id: asset.id,
        })
    }

    fn random_timestamp(&mut self) -> DateTime<Utc> {
        let span = (self.window.end - self.window.start).num_milliseconds();
        let offset = self.rng.gen_range(0..=span);
        self.window.start + Duration::milliseconds(offset)
    }
}
