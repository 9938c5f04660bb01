use std::io;

use csv::WriterBuilder;

use super::TransactionHistoryEntry;
use crate::error::FixtureResult;

pub const CSV_HEADER: [&str; 4] = ["timestamp", "direction", "volume", "symbol"];

/// Write a history as CSV. The header is always written, even for an
/// empty history.
pub fn write_csv<W: io::Write>(history: &[TransactionHistoryEntry], writer: W) -> FixtureResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for entry in history {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    Ok(())
}
