//! Change notifications emitted by tiles and the board.
//!
//! Delivery is synchronous: `notify_all` calls every listener, in the order
//! they were added, before it returns. Listeners only get a shared reference
//! to the affected tile, so any state they keep lives behind a `Cell` or
//! `RefCell` they capture.

use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TileCreated,
    TileUpdated,
    TileRemoved,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::TileCreated => write!(f, "tile_created"),
            EventKind::TileUpdated => write!(f, "tile_updated"),
            EventKind::TileRemoved => write!(f, "tile_removed"),
        }
    }
}

/// A state change of one tile. Borrowed for the duration of the callback only.
#[derive(Debug, Clone, Copy)]
pub struct GameEvent<'a> {
    pub kind: EventKind,
    pub tile: &'a Tile,
}

impl<'a> GameEvent<'a> {
    pub fn new(kind: EventKind, tile: &'a Tile) -> Self {
        GameEvent { kind, tile }
    }
}

/// Shared listener callback. Cloning shares the same closure.
pub type Listener = Rc<dyn Fn(&GameEvent<'_>)>;

/// Ordered set of listeners owned by a tile or the board.
#[derive(Clone, Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn notify_all(&self, event: &GameEvent<'_>) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.len())
            .finish()
    }
}
