use crate::game::event::{EventKind, GameEvent, Listener};
use crate::game::position::Position;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Flat copy of one event, taken while the tile was borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Order in which the log received the event, from 0
    pub seq: usize,
    pub kind: EventKind,
    pub tile_id: u64,
    pub row: i32,
    pub col: i32,
    pub value: u32,
}

impl EventRecord {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Shared, append-only event log.
///
/// Clones share the same storage, so one handle can be registered with a
/// board while another is read from.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Rc<RefCell<Vec<EventRecord>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener that appends to this log.
    pub fn listener(&self) -> Listener {
        let records = Rc::clone(&self.records);
        Rc::new(move |event: &GameEvent<'_>| {
            let mut records = records.borrow_mut();
            let seq = records.len();
            let position = event.tile.position();
            records.push(EventRecord {
                seq,
                kind: event.kind,
                tile_id: event.tile.id().0,
                row: position.row,
                col: position.col,
                value: event.tile.value(),
            });
        })
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.records.borrow().iter().filter(|r| r.kind == kind).count()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}
