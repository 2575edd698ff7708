use crate::data::Snapshot;
use crate::game::board::{Board, ValueMatrix};
use crate::{Result, Twenty48Error};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON snapshot and return its value matrix.
///
/// The declared dimensions must match the matrix itself.
pub fn load_value_matrix<P: AsRef<Path>>(path: P) -> Result<ValueMatrix> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;

    let ragged = snapshot.values.iter().find(|row| row.len() != snapshot.cols);
    if snapshot.values.len() != snapshot.rows || ragged.is_some() {
        return Err(Twenty48Error::DimensionMismatch {
            expected_rows: snapshot.rows,
            expected_cols: snapshot.cols,
            rows: snapshot.values.len(),
            cols: ragged.map_or(snapshot.cols, Vec::len),
        });
    }

    log::info!("loaded {}x{} board from {}", snapshot.rows, snapshot.cols, path.display());
    Ok(snapshot.values)
}

impl Board {
    /// Replace the board contents with the snapshot stored at `path`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let values = load_value_matrix(path)?;
        self.load_value_matrix(&values)
    }
}
