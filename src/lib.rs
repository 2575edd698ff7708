//! # Slide Merge Game Library
//!
//! Game model for a 2048-style sliding tile puzzle.
//!
//! ## Features
//!
//! - **Game Model**: board, tiles, slide and merge rules, random spawning and scoring
//! - **Change Events**: synchronous listeners so a view can follow every tile
//! - **Persistence**: value-matrix snapshots saved and loaded as JSON
//! - **Recording**: an event log listener for views, tests and debugging
//!
//! ## Usage
//!
//! ```rust
//! use slide_merge::{Board, Direction};
//!
//! let mut board = Board::default();
//! board.load_value_matrix(&[
//!     vec![0, 2, 2, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ]).unwrap();
//! board.shift(Direction::Left);
//! assert_eq!(board.to_value_matrix()[0], vec![4, 0, 0, 0]);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game model and rules
pub mod game;

/// Value-matrix persistence
pub mod data;

/// Event recording
pub mod recording;

/// Logger setup for binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use recording::{EventLog, EventRecord};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum Twenty48Error {
    #[error("value matrix is {rows}x{cols}, board is {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid move '{0}', expected one of L, R, U, D")]
    InvalidMove(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Twenty48Error>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
