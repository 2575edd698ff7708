use crate::data::Snapshot;
use crate::game::board::Board;
use crate::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `values` as a JSON snapshot, creating parent directories as needed.
pub fn save_value_matrix<P: AsRef<Path>>(path: P, values: &[Vec<u32>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let snapshot = Snapshot {
        rows: values.len(),
        cols: values.first().map_or(0, Vec::len),
        values: values.to_vec(),
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.flush()?;

    log::info!("saved {}x{} board to {}", snapshot.rows, snapshot.cols, path.display());
    Ok(())
}

impl Board {
    /// Save the current value matrix to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_value_matrix(path, &self.to_value_matrix())
    }
}
