//! Value-matrix snapshots on disk.
//!
//! A snapshot is a JSON document holding the board dimensions and the dense
//! value matrix, 0 meaning an empty cell. It is the only persisted form of a
//! game.

pub mod load_data;
pub mod save_data;

pub use load_data::load_value_matrix;
pub use save_data::save_value_matrix;

use crate::game::board::ValueMatrix;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    pub values: ValueMatrix,
}
