//! Controller events
//!
//! Listeners subscribe to `AfterMove` (fired once per committed move on a
//! real controller) and `Promote` (fired when a pawn is promoted). Sandbox
//! clones never fire either.

use crate::game::components::Movement;
use crate::game::types::{PieceId, PieceKind};
use serde::{Deserialize, Serialize};

/// Kind of event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    AfterMove,
    Promote,
}

/// Event payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AfterMove { movement: Movement },
    Promote { pawn: PieceId, piece: PieceId, kind: PieceKind },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::AfterMove { .. } => EventKind::AfterMove,
            GameEvent::Promote { .. } => EventKind::Promote,
        }
    }
}

/// Handle returned by [`EventBus::on`], used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&GameEvent) + Send>;

/// Registered listeners, dispatched synchronously in registration order
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, EventKind, Listener)>,
    next_id: u64,
}

impl EventBus {
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&GameEvent) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false when it was not registered
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &GameEvent) {
        let kind = event.kind();
        for (_, _, listener) in self.listeners.iter_mut().filter(|(_, k, _)| *k == kind) {
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

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
