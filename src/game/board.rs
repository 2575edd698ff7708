//! The game grid.
//!
//! Every cell owns at most one [`Tile`]. Moving a tile moves the owned value
//! to its new cell and then restamps the tile's position, so a tile's
//! `position()` always names the cell that holds it.

use crate::game::direction::Direction;
use crate::game::event::{EventKind, GameEvent, Listener, Notifier};
use crate::game::position::Position;
use crate::game::tile::{tile_value_equals, Tile, TileId};
use crate::{Result, Twenty48Error};
use rand::Rng;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// Side length of the standard board.
pub const GRID_SIZE: usize = 4;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Dense snapshot of a board: tile values, 0 for an empty cell.
pub type ValueMatrix = Vec<Vec<u32>>;

/// Outcome of looking one step ahead during a slide.
enum Step {
    Move,
    Merge,
    Blocked,
}

pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Tile>>,
    notifier: Notifier,
    tile_listeners: Vec<Listener>,
    next_id: u64,
}

fn at(row: usize, col: usize) -> Position {
    Position::new(row as i32, col as i32)
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Board {
            rows,
            cols,
            cells,
            notifier: Notifier::new(),
            tile_listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Listen for board-level events (tile creation).
    pub fn add_listener(&mut self, listener: Listener) {
        self.notifier.add_listener(listener);
    }

    /// Attach `listener` to every tile on the board now and every tile the
    /// board creates later.
    pub fn add_tile_listener(&mut self, listener: Listener) {
        for tile in self.cells.iter_mut().flatten() {
            tile.add_listener(Rc::clone(&listener));
        }
        self.tile_listeners.push(listener);
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    fn cell_index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {pos} is outside the {}x{} board",
            self.rows,
            self.cols
        );
        pos.row as usize * self.cols + pos.col as usize
    }

    /// Tile at `pos`, if any. Panics when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.cells[self.cell_index(pos)].as_ref()
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let idx = self.cell_index(pos);
        self.cells[idx].as_mut()
    }

    /// Store `tile` at `pos`, returning whatever was there. The stored tile's
    /// position is restamped to `pos` without an event.
    pub fn set(&mut self, pos: Position, tile: Option<Tile>) -> Option<Tile> {
        let idx = self.cell_index(pos);
        let tile = tile.map(|mut tile| {
            tile.set_position(pos);
            tile
        });
        std::mem::replace(&mut self.cells[idx], tile)
    }

    /// Unlink and return the tile at `pos`. No event is emitted.
    pub fn take(&mut self, pos: Position) -> Option<Tile> {
        let idx = self.cell_index(pos);
        self.cells[idx].take()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Is there at least one cell without a tile?
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| at(r, c)))
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    fn allocate_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a tile at `pos`, wire up the tile listeners and announce it.
    fn spawn_at(&mut self, pos: Position, value: u32) -> TileId {
        let id = self.allocate_id();
        let mut tile = Tile::new(id, pos, value);
        for listener in &self.tile_listeners {
            tile.add_listener(Rc::clone(listener));
        }
        let idx = self.cell_index(pos);
        let tile = self.cells[idx].insert(tile);
        self.notifier
            .notify_all(&GameEvent::new(EventKind::TileCreated, tile));
        id
    }

    /// Place a tile on a uniformly chosen empty cell and return that cell.
    ///
    /// With no `value` the tile is a 4 with probability [`FOUR_PROBABILITY`],
    /// otherwise a 2.
    ///
    /// # Panics
    ///
    /// Panics if the board is full. Check [`Board::has_empty`] first.
    pub fn place_tile<R: Rng + ?Sized>(&mut self, rng: &mut R, value: Option<u32>) -> Position {
        let empties = self.empty_positions();
        assert!(!empties.is_empty(), "place_tile called on a full board");
        let pos = empties[rng.random_range(0..empties.len())];
        let value = value.unwrap_or_else(|| {
            if rng.random_bool(FOUR_PROBABILITY) {
                4
            } else {
                2
            }
        });
        let id = self.spawn_at(pos, value);
        log::debug!("spawned tile {:?} with value {} at {}", id, value, pos);
        pos
    }

    /// [`Board::place_tile`] driven by the thread-local generator.
    pub fn place_random_tile(&mut self, value: Option<u32>) -> Position {
        self.place_tile(&mut rand::rng(), value)
    }

    /// Sum of all tile values. This scores the board state, not the history
    /// of merges.
    pub fn score(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value())).sum()
    }

    pub fn to_value_matrix(&self) -> ValueMatrix {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.get(at(r, c)).map_or(0, Tile::value))
                    .collect()
            })
            .collect()
    }

    /// Replace the board contents with `values` (0 = empty).
    ///
    /// A tile already sitting in a cell announces its removal before that
    /// cell is cleared or refilled. Fails without touching the board if the matrix is
    /// not `rows x cols`.
    pub fn load_value_matrix(&mut self, values: &[Vec<u32>]) -> Result<()> {
        let ragged = values.iter().find(|row| row.len() != self.cols);
        if values.len() != self.rows || ragged.is_some() {
            return Err(Twenty48Error::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: values.len(),
                cols: ragged.map_or(self.cols, Vec::len),
            });
        }

        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let pos = at(r, c);
                if let Some(old) = self.take(pos) {
                    old.notify(EventKind::TileRemoved);
                }
                if value != 0 {
                    self.spawn_at(pos, value);
                }
            }
        }
        log::debug!("loaded {}x{} value matrix, score {}", self.rows, self.cols, self.score());
        Ok(())
    }

    /// Remove every tile, announcing each removal.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Some(tile) = cell.take() {
                tile.notify(EventKind::TileRemoved);
            }
        }
    }

    /// Relocate the tile at `from` to the empty cell `to`.
    fn move_tile(&mut self, from: Position, to: Position) {
        let Some(tile) = self.take(from) else {
            return;
        };
        let idx = self.cell_index(to);
        self.cells[idx].insert(tile).move_to(to);
    }

    /// Slide the tile at `pos` (if any) one step at a time along `direction`
    /// until it hits the edge or another tile. A tile of equal value is
    /// absorbed and the slide stops there: a tile merges at most once per
    /// slide.
    pub fn slide(&mut self, mut pos: Position, direction: Position) {
        if self.get(pos).is_none() {
            return;
        }
        loop {
            let next = pos + direction;
            if !self.in_bounds(next) {
                break;
            }
            let Some(moving_value) = self.get(pos).map(Tile::value) else {
                break;
            };
            let step = match self.get(next) {
                None => Step::Move,
                Some(target) if tile_value_equals(target, moving_value) => Step::Merge,
                Some(_) => Step::Blocked,
            };
            match step {
                Step::Move => {
                    log::trace!("slide {} -> {}", pos, next);
                    self.move_tile(pos, next);
                }
                Step::Merge => {
                    let Some(absorbed) = self.take(next) else {
                        break;
                    };
                    if let Some(mover) = self.get_mut(pos) {
                        mover.merge(absorbed);
                    }
                    self.move_tile(pos, next);
                    log::debug!(
                        "merged into {} at {}",
                        self.get(next).map_or(0, Tile::value),
                        next
                    );
                    break;
                }
                Step::Blocked => break,
            }
            pos = next;
        }
    }

    pub fn move_left(&mut self) {
        let delta = Direction::Left.delta();
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.slide(at(r, c), delta);
            }
        }
    }

    pub fn move_right(&mut self) {
        let delta = Direction::Right.delta();
        for r in 0..self.rows {
            for c in (0..self.cols).rev() {
                self.slide(at(r, c), delta);
            }
        }
    }

    pub fn move_up(&mut self) {
        let delta = Direction::Up.delta();
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.slide(at(r, c), delta);
            }
        }
    }

    pub fn move_down(&mut self) {
        let delta = Direction::Down.delta();
        for c in 0..self.cols {
            for r in (0..self.rows).rev() {
                self.slide(at(r, c), delta);
            }
        }
    }

    pub fn shift(&mut self, direction: Direction) {
        log::debug!("move {}", direction);
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(GRID_SIZE, GRID_SIZE)
    }
}

impl Index<Position> for Board {
    type Output = Option<Tile>;

    fn index(&self, pos: Position) -> &Option<Tile> {
        &self.cells[self.cell_index(pos)]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("values", &self.to_value_matrix())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_value_matrix() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { format!("{:>5}", ".") } else { format!("{v:>5}") })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}
