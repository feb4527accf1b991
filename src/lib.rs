pub mod accumulator;
pub mod error;
pub mod models;
pub mod money;
pub mod planner;

use std::io::{Read, Write};

use error::Result;
use models::{BalanceChange, SettlementRequest};

pub use planner::plan_settlement;

/// Read a settlement snapshot as JSON and write the resulting plan as CSV
pub fn process_request<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let request: SettlementRequest = serde_json::from_reader(reader)?;

    let entries = request.plan();

    write_entries(&entries, writer)?;

    Ok(())
}

/// Write plan entries to CSV, in plan order
fn write_entries<W: Write>(entries: &[BalanceChange], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in entries {
        csv_writer.serialize(entry)?;
    }

    csv_writer.flush()?;
    Ok(())
}
