use crate::game::event::{EventKind, GameEvent, Listener, Notifier};
use crate::game::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board-unique identity of a tile, stable across moves and merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u64);

/// A slidy numbered thing.
///
/// No `PartialEq`: compare values with [`tile_value_equals`] and identities
/// with [`Tile::id`].
#[derive(Debug)]
pub struct Tile {
    id: TileId,
    position: Position,
    value: u32,
    notifier: Notifier,
}

impl Tile {
    pub fn new(id: TileId, position: Position, value: u32) -> Self {
        Tile {
            id,
            position,
            value,
            notifier: Notifier::new(),
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.notifier.add_listener(listener);
    }

    pub(crate) fn notify(&self, kind: EventKind) {
        self.notifier.notify_all(&GameEvent::new(kind, self));
    }

    /// Restamp the position without an event. Only the board uses this, when a
    /// tile is stored directly into a cell.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn move_to(&mut self, new_pos: Position) {
        self.position = new_pos;
        self.notify(EventKind::TileUpdated);
    }

    /// Absorb `other`. The caller guarantees both tiles hold equal values and
    /// has already unlinked `other` from the grid; it is dropped here after
    /// announcing its removal. The value saturates at `u32::MAX`.
    pub fn merge(&mut self, other: Tile) {
        self.value = self.value.saturating_add(other.value);
        self.notify(EventKind::TileUpdated);
        other.notify(EventKind::TileRemoved);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile[{},{}]:{}", self.position.row, self.position.col, self.value)
    }
}

/// True iff `tile` holds exactly `value`.
pub fn tile_value_equals(tile: &Tile, value: u32) -> bool {
    tile.value == value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<(EventKind, TileId, Position, u32)>>>;

    fn recording_listener(seen: &Seen) -> Listener {
        let seen = Rc::clone(seen);
        Rc::new(move |event: &GameEvent<'_>| {
            seen.borrow_mut().push((
                event.kind,
                event.tile.id(),
                event.tile.position(),
                event.tile.value(),
            ));
        })
    }

    #[test]
    fn test_move_to_updates_position_and_notifies() {
        let seen: Seen = Rc::default();
        let mut tile = Tile::new(TileId(7), Position::new(0, 0), 2);
        tile.add_listener(recording_listener(&seen));

        tile.move_to(Position::new(0, 3));

        assert_eq!(tile.position(), Position::new(0, 3));
        assert_eq!(
            *seen.borrow(),
            vec![(EventKind::TileUpdated, TileId(7), Position::new(0, 3), 2)]
        );
    }

    #[test]
    fn test_merge_accumulates_and_removes_partner() {
        let seen: Seen = Rc::default();
        let mut survivor = Tile::new(TileId(1), Position::new(1, 1), 4);
        let mut absorbed = Tile::new(TileId(2), Position::new(1, 2), 4);
        survivor.add_listener(recording_listener(&seen));
        absorbed.add_listener(recording_listener(&seen));

        survivor.merge(absorbed);

        assert_eq!(survivor.value(), 8);
        assert_eq!(
            *seen.borrow(),
            vec![
                (EventKind::TileUpdated, TileId(1), Position::new(1, 1), 8),
                (EventKind::TileRemoved, TileId(2), Position::new(1, 2), 4),
            ]
        );
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        let mut survivor = Tile::new(TileId(1), Position::new(0, 1), 1 << 31);
        let absorbed = Tile::new(TileId(2), Position::new(0, 0), 1 << 31);
        survivor.merge(absorbed);
        assert_eq!(survivor.value(), u32::MAX);
    }

    #[test]
    fn test_tile_value_equals() {
        let tile = Tile::new(TileId(0), Position::new(2, 2), 16);
        assert!(tile_value_equals(&tile, 16));
        assert!(!tile_value_equals(&tile, 8));
    }

    #[test]
    fn test_display() {
        let tile = Tile::new(TileId(0), Position::new(2, 3), 32);
        assert_eq!(tile.to_string(), "Tile[2,3]:32");
    }
}
