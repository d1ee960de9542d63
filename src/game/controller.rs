//! Game controller
//!
//! Orchestrates one game slot: turns, selection, move execution, check
//! detection, promotion and a linear undo/redo history.
//!
//! # Turn Flow
//!
//! ```text
//! NoSelection → set_selected_piece → Selected → execute_movement → NoSelection
//! ```
//!
//! Every committed move flips the turn, appends a snapshot to history and
//! fires `AfterMove`. A sandbox made with [`Controller::clone_sandbox`] owns
//! an independent copy of the board and does neither, which is what lets the
//! king-safety filter simulate moves without side effects.

use crate::game::components::{resolve_movements, Movement, Piece};
use crate::game::config::{ControllerConfig, SANDBOX_NAME};
use crate::game::error::{GameError, GameResult};
use crate::game::events::{EventBus, EventKind, GameEvent, ListenerId};
use crate::game::resources::{default_promotion_choices, is_promotable, GameState, History};
use crate::game::rules::{self, Attack, BoardState, Layout, MoveContext};
use crate::game::types::{Cell, Color, PieceId, PieceKind};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

pub struct Controller {
    config: Arc<ControllerConfig>,
    board: BoardState,
    history: History,
    events: EventBus,
}

impl Controller {
    /// Controller with an empty board of the configured shape and no history
    ///
    /// Call [`new_game`](Self::new_game) to set up pieces.
    pub fn new(config: ControllerConfig) -> GameResult<Self> {
        let board = BoardState::new(config.rows, config.columns)?;
        Ok(Controller {
            config: Arc::new(config),
            board,
            history: History::default(),
            events: EventBus::default(),
        })
    }

    /// Set up the starting position and reset history to that single snapshot
    pub fn new_game(&mut self) -> GameResult<()> {
        let (rows, columns) = (self.config.rows, self.config.columns);
        let layout = match &self.config.layout {
            Some(hook) => hook(rows, columns),
            None => Layout::standard(rows, columns),
        };
        self.board = BoardState::from_layout(&layout, rows, columns)?;
        self.history.reset(&self.board);
        info!(
            "[CONTROLLER] New game '{}' ({}x{}), {} pieces",
            self.config.name,
            rows,
            columns,
            self.board.pieces().count()
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn is_sandbox(&self) -> bool {
        self.config.is_sandbox()
    }

    /// Piece on (row, column); out-of-range cells yield `None`
    pub fn piece_at(&self, row: usize, column: usize) -> Option<&Piece> {
        self.board.piece_at(Cell::new(row, column))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.pieces()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id)
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.board.selected.and_then(|id| self.board.piece(id))
    }

    pub fn turn(&self) -> Color {
        self.board.turn.color
    }

    pub fn en_passant(&self) -> Option<PieceId> {
        self.board.en_passant
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Kinds a pawn of `color` may promote to
    pub fn promotion_choices(&self, color: Color) -> Vec<PieceKind> {
        match &self.config.promotion_choices {
            Some(hook) => hook(color),
            None => default_promotion_choices(color),
        }
    }

    /// A pawn standing on its farthest row, if any
    pub fn promotable_piece(&self) -> Option<&Piece> {
        self.board
            .pieces()
            .find(|p| is_promotable(p, self.board.rows()))
    }

    /// Resolved movements of the piece `id`, grouped by destination
    ///
    /// Candidates pass the shared legality filter inside the rule function,
    /// then the configured `remove_illegal_moves` hook.
    pub fn movements(&self, id: PieceId) -> Vec<Movement> {
        let Some(piece) = self.board.piece(id) else {
            return Vec::new();
        };
        let ctx = MoveContext::new(&self.board, &self.config);
        let mut raw = rules::candidate_moves(&ctx, piece);
        if let Some(filter) = &self.config.remove_illegal_moves {
            raw = filter(self, piece, raw);
        }
        resolve_movements(piece, raw)
    }

    /// Every movement available to `color`
    pub fn legal_movements(&self, color: Color) -> Vec<Movement> {
        let ids: Vec<PieceId> = self
            .board
            .pieces()
            .filter(|p| p.color == color)
            .map(|p| p.id)
            .collect();
        ids.into_iter().flat_map(|id| self.movements(id)).collect()
    }

    fn has_legal_movement(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|p| p.color == color)
            .any(|p| !self.movements(p.id).is_empty())
    }

    /// Tiles threatened by every piece not of `color`
    pub fn get_attacks_against(&self, color: Color) -> Vec<Attack> {
        rules::attacks_against(&self.board, &self.config, color)
    }

    /// King of `color` that is currently attacked, if any
    pub fn get_checked_king(&self, color: Color) -> Option<&Piece> {
        rules::checked_king(&self.board, &self.config, color)
    }

    /// Outcome for the side to move
    ///
    /// Two playing colors are assumed: a checkmated side to move means the
    /// other side wins.
    pub fn get_game_state(&self) -> GameState {
        let color = self.board.turn.color;
        if !self.has_legal_movement(color) {
            if self.get_checked_king(color).is_some() {
                return GameState::Won(color.opponent());
            }
            return GameState::Stalemate;
        }
        match &self.config.game_state {
            Some(hook) => hook(self),
            None => GameState::Active,
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Select `id` if it belongs to the side to move and can move; otherwise
    /// clear the selection
    pub fn set_selected_piece(&mut self, id: Option<PieceId>) {
        self.board.selected = None;
        let Some(id) = id else {
            return;
        };
        let selectable = self
            .board
            .piece(id)
            .is_some_and(|p| p.color == self.board.turn.color);
        if selectable && !self.movements(id).is_empty() {
            self.board.selected = Some(id);
            debug!("[CONTROLLER] Selected {}", id);
        } else {
            debug!("[CONTROLLER] Selection cleared, {} can't move", id);
        }
    }

    /// Handle a click on `cell`
    ///
    /// Default behavior: play the selected piece's movement to `cell` when
    /// there is one, otherwise (re)select whatever stands on `cell`.
    pub fn click(&mut self, cell: Cell) -> GameResult<()> {
        if let Some(hook) = self.config.on_click.clone() {
            return hook(self, cell);
        }
        if let Some(selected) = self.board.selected {
            if let Some(movement) = self
                .movements(selected)
                .into_iter()
                .find(|m| m.to == cell)
            {
                return self.execute_movement(&movement);
            }
        }
        let target = self.board.piece_at(cell).map(|p| p.id);
        self.set_selected_piece(target);
        Ok(())
    }

    /// Play `movement`, through the configured override when there is one
    pub fn execute_movement(&mut self, movement: &Movement) -> GameResult<()> {
        if let Some(hook) = self.config.execute_movement.clone() {
            return hook(self, movement);
        }
        self.commit_movement(movement)
    }

    /// Default move execution
    ///
    /// Applies the movement to the board, updates the counters and flips the
    /// turn. Real controllers then push a snapshot (dropping any redo tail)
    /// and fire `AfterMove`. Fails without touching anything when a
    /// relocation names a piece that isn't on the board.
    pub fn commit_movement(&mut self, movement: &Movement) -> GameResult<()> {
        let summary = match self.board.apply(movement) {
            Ok(summary) => summary,
            Err(e) => {
                if !self.is_sandbox() {
                    warn!("[CONTROLLER] Rejected movement to {:?}: {}", movement.to, e);
                }
                return Err(e);
            }
        };

        match &self.config.turn_count {
            Some(rule) => rule(&mut self.board.turn, &summary),
            None => self.board.turn.count(&summary),
        }
        self.board.turn.switch();

        if self.is_sandbox() {
            trace!("[CONTROLLER] Sandbox move to {:?}", movement.to);
            return Ok(());
        }

        self.history.push(&self.board);
        debug!(
            "[CONTROLLER] {:?} {:?} to {}, {:?} to move (move {})",
            summary.mover_kind,
            movement.mover(),
            movement.to.to_algebraic(self.board.rows()),
            self.board.turn.color,
            self.board.turn.full_move
        );
        self.events.emit(&GameEvent::AfterMove {
            movement: movement.clone(),
        });
        Ok(())
    }

    /// Replace the pawn `pawn` with a new piece of `kind` on the same tile
    ///
    /// The current history snapshot is rewritten so undo/redo see the
    /// promoted piece. Returns the new piece's id.
    pub fn promote_pawn(&mut self, pawn: PieceId, kind: PieceKind) -> GameResult<PieceId> {
        let piece = self.board.piece(pawn).ok_or(GameError::PieceNotFound { id: pawn })?;
        if !is_promotable(piece, self.board.rows()) {
            return Err(GameError::NotPromotable { id: pawn });
        }

        let promoted = self.board.replace(pawn, kind)?;
        if self.is_sandbox() {
            return Ok(promoted);
        }

        self.history.replace_current(&self.board);
        info!("[CONTROLLER] Promoted {} to {:?} ({})", pawn, kind, promoted);
        self.events.emit(&GameEvent::Promote {
            pawn,
            piece: promoted,
            kind,
        });
        Ok(promoted)
    }

    /// Step back one snapshot; returns false at the start of history
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.board = snapshot.clone();
                debug!("[CONTROLLER] Undo to snapshot {:?}", self.history.index());
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot; returns false at the end of history
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.board = snapshot.clone();
                debug!("[CONTROLLER] Redo to snapshot {:?}", self.history.index());
                true
            }
            None => false,
        }
    }

    /// Independent controller for probing hypothetical moves
    ///
    /// Shares the configuration (renamed to [`SANDBOX_NAME`]), deep-copies
    /// the board, and has no history or listeners.
    pub fn clone_sandbox(&self) -> Controller {
        let config = if self.is_sandbox() {
            self.config.clone()
        } else {
            let mut config = (*self.config).clone();
            config.name = SANDBOX_NAME.to_string();
            Arc::new(config)
        };
        Controller {
            config,
            board: self.board.clone(),
            history: History::default(),
            events: EventBus::default(),
        }
    }

    /// Count leaf positions reachable in `depth` plies
    ///
    /// Every legal movement of the side to move is played on a sandbox clone
    /// and the walk recurses from there. The last ply is counted without
    /// being played.
    pub fn perft(&self, depth: u32) -> GameResult<u64> {
        if depth == 0 {
            return Ok(1);
        }
        let movements = self.legal_movements(self.turn());
        if depth == 1 {
            return Ok(movements.len() as u64);
        }
        let mut nodes = 0;
        for movement in &movements {
            let mut child = self.clone_sandbox();
            child.execute_movement(movement)?;
            nodes += child.perft(depth - 1)?;
        }
        Ok(nodes)
    }

    /// Hand the board to the configured draw hook, if any
    pub fn draw(&self) {
        if let Some(hook) = &self.config.draw {
            hook(&self.board);
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&GameEvent) + Send + 'static,
    ) -> ListenerId {
        self.events.on(kind, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("turn", &self.board.turn)
            .field("history_index", &self.history.index())
            .field("history_len", &self.history.len())
            .field("events", &self.events)
            .finish()
    }
}
