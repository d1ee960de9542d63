//! Snapshot history with an undo/redo cursor
//!
//! Stores one full [`BoardState`] per committed move. The board is a small
//! grid plus scalars, so value snapshots are used instead of diffs.
//!
//! # Cursor
//!
//! `index()` is `None` before the first game starts. After
//! [`History::reset`] it is `Some(0)` and always points at a valid snapshot.
//! Pushing after an undo discards the redo tail.
//!
//! ```text
//! [s0, s1, s2, s3]   cursor = 3
//! undo, undo         cursor = 1
//! push(s4)           [s0, s1, s4]   cursor = 2   (s2, s3 unreachable)
//! ```

use crate::game::rules::BoardState;
use tracing::debug;

/// Ordered board snapshots plus the active position
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<BoardState>,
    cursor: Option<usize>,
}

impl History {
    /// Start over with `board` as the only snapshot
    pub fn reset(&mut self, board: &BoardState) {
        self.snapshots.clear();
        self.snapshots.push(board.clone());
        self.cursor = Some(0);
    }

    /// Append a snapshot after the cursor, truncating any redo tail
    pub fn push(&mut self, board: &BoardState) {
        let Some(cursor) = self.cursor else {
            self.reset(board);
            return;
        };
        let dropped = self.snapshots.len() - (cursor + 1);
        if dropped > 0 {
            debug!("[HISTORY] Discarding {} redo snapshot(s)", dropped);
        }
        self.snapshots.truncate(cursor + 1);
        self.snapshots.push(board.clone());
        self.cursor = Some(cursor + 1);
    }

    /// Step back one snapshot, returning it, or `None` at the start
    pub fn undo(&mut self) -> Option<&BoardState> {
        let cursor = self.cursor.filter(|c| *c > 0)?;
        self.cursor = Some(cursor - 1);
        self.snapshots.get(cursor - 1)
    }

    /// Step forward one snapshot, returning it, or `None` at the end
    pub fn redo(&mut self) -> Option<&BoardState> {
        let cursor = self.cursor.filter(|c| c + 1 < self.snapshots.len())?;
        self.cursor = Some(cursor + 1);
        self.snapshots.get(cursor + 1)
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&BoardState> {
        self.snapshots.get(self.cursor?)
    }

    /// Overwrite the snapshot under the cursor (used after promotion)
    pub fn replace_current(&mut self, board: &BoardState) {
        if let Some(slot) = self.cursor.and_then(|c| self.snapshots.get_mut(c)) {
            *slot = board.clone();
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    pub fn snapshots(&self) -> &[BoardState] {
        &self.snapshots
    }
}
