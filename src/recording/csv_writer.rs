//! CSV export of recorded events.
//!
//! Format: seq,kind,tile_id,row,col,value with `kind` written as the variant
//! name (`TileCreated`, `TileUpdated`, `TileRemoved`).

use crate::recording::event_log::{EventLog, EventRecord};
use crate::Result;
use std::fs;
use std::path::Path;

/// Write every record of `events` to `path`, replacing any existing file.
pub fn write_events_csv<P: AsRef<Path>>(path: P, events: &EventLog) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    let records = events.records();
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("wrote {} events to {}", records.len(), path.display());
    Ok(())
}

/// Load events written by [`write_events_csv`].
pub fn read_events_csv<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: EventRecord = result?;
        records.push(record);
    }
    Ok(records)
}
