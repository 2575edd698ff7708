//! Event recording.
//!
//! # Components
//!
//! - `event_log`: listener that appends every event it sees to a shared log
//! - `csv_writer`: CSV export and import of recorded events

pub mod csv_writer;
pub mod event_log;

pub use csv_writer::{read_events_csv, write_events_csv};
pub use event_log::{EventLog, EventRecord};
