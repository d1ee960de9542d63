//! Controller configuration
//!
//! A [`ControllerConfig`] is built once per game slot and shared by the
//! controller and all of its sandbox clones. Optional hooks let a variant
//! swap in its own layout, outcome rule, promotion set, extra legality
//! filtering, custom piece movement, drawing, click handling, move execution
//! and move counting. Unset hooks fall back to standard chess behavior.
//!
//! # Examples
//!
//! ```
//! use xfchess_rules::game::config::ControllerConfig;
//! use xfchess_rules::game::resources::GameState;
//! use xfchess_rules::game::types::Color;
//!
//! // A variant where Light wins as soon as the full-move number reaches 40
//! let config = ControllerConfig::standard("Endurance", "endurance")
//!     .with_dimensions(8, 8)
//!     .with_game_state(|controller| {
//!         if controller.board().turn.full_move >= 40 {
//!             GameState::Won(Color::Light)
//!         } else {
//!             GameState::Active
//!         }
//!     });
//! assert_eq!(config.rows, 8);
//! assert!(config.game_state.is_some());
//! ```

use crate::game::components::{MoveSummary, Movement, Piece, RawMove};
use crate::game::controller::Controller;
use crate::game::error::GameResult;
use crate::game::resources::{CastlingConfig, GameState, TurnState};
use crate::game::rules::{legality, BoardState, Layout, MoveContext};
use crate::game::types::{Cell, Color, PieceKind};
use std::fmt;
use std::sync::Arc;

/// Name given to sandbox clones; suppresses history and events
pub const SANDBOX_NAME: &str = "__sandbox__";

/// Default maximum ray length for bishops, rooks and queens
pub const DEFAULT_SLIDE_RANGE: usize = 7;

pub type LayoutHook = Arc<dyn Fn(usize, usize) -> Layout + Send + Sync>;
pub type GameStateHook = Arc<dyn Fn(&Controller) -> GameState + Send + Sync>;
pub type PromotionHook = Arc<dyn Fn(Color) -> Vec<PieceKind> + Send + Sync>;
pub type LegalityHook =
    Arc<dyn Fn(&Controller, &Piece, Vec<RawMove>) -> Vec<RawMove> + Send + Sync>;
pub type CustomMovesHook = Arc<dyn Fn(&MoveContext<'_>, &Piece) -> Vec<RawMove> + Send + Sync>;
pub type DrawHook = Arc<dyn Fn(&BoardState) + Send + Sync>;
pub type ClickHook = Arc<dyn Fn(&mut Controller, Cell) -> GameResult<()> + Send + Sync>;
pub type ExecuteHook = Arc<dyn Fn(&mut Controller, &Movement) -> GameResult<()> + Send + Sync>;
pub type TurnCountHook = Arc<dyn Fn(&mut TurnState, &MoveSummary) + Send + Sync>;

/// Immutable bag of parameters and hooks resolved at construction
#[derive(Clone)]
pub struct ControllerConfig {
    /// Display name; [`SANDBOX_NAME`] marks a disposable clone
    pub name: String,
    /// Route slug for the game slot
    pub slug: String,
    pub rows: usize,
    pub columns: usize,
    pub castling: CastlingConfig,
    /// Maximum ray length for sliding pieces
    pub slide_range: usize,

    pub layout: Option<LayoutHook>,
    pub game_state: Option<GameStateHook>,
    pub promotion_choices: Option<PromotionHook>,
    pub remove_illegal_moves: Option<LegalityHook>,
    pub custom_moves: Option<CustomMovesHook>,
    pub draw: Option<DrawHook>,
    pub on_click: Option<ClickHook>,
    /// Replaces the default commit. The hook may call
    /// [`Controller::commit_movement`] but must not call
    /// [`Controller::execute_movement`], which would re-enter it.
    pub execute_movement: Option<ExecuteHook>,
    pub turn_count: Option<TurnCountHook>,
}

impl ControllerConfig {
    /// 8x8 chess without the king-safety filter
    pub fn base(name: impl Into<String>, slug: impl Into<String>) -> Self {
        ControllerConfig {
            name: name.into(),
            slug: slug.into(),
            rows: 8,
            columns: 8,
            castling: CastlingConfig::default(),
            slide_range: DEFAULT_SLIDE_RANGE,
            layout: None,
            game_state: None,
            promotion_choices: None,
            remove_illegal_moves: None,
            custom_moves: None,
            draw: None,
            on_click: None,
            execute_movement: None,
            turn_count: None,
        }
    }

    /// 8x8 chess where moves leaving the mover's king attacked are removed
    pub fn standard(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::base(name, slug).with_remove_illegal_moves(legality::remove_self_check)
    }

    pub fn is_sandbox(&self) -> bool {
        self.name == SANDBOX_NAME
    }

    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_castling(mut self, castling: CastlingConfig) -> Self {
        self.castling = castling;
        self
    }

    pub fn with_slide_range(mut self, range: usize) -> Self {
        self.slide_range = range;
        self
    }

    pub fn with_layout(
        mut self,
        hook: impl Fn(usize, usize) -> Layout + Send + Sync + 'static,
    ) -> Self {
        self.layout = Some(Arc::new(hook));
        self
    }

    pub fn with_game_state(
        mut self,
        hook: impl Fn(&Controller) -> GameState + Send + Sync + 'static,
    ) -> Self {
        self.game_state = Some(Arc::new(hook));
        self
    }

    pub fn with_promotion_choices(
        mut self,
        hook: impl Fn(Color) -> Vec<PieceKind> + Send + Sync + 'static,
    ) -> Self {
        self.promotion_choices = Some(Arc::new(hook));
        self
    }

    pub fn with_remove_illegal_moves(
        mut self,
        hook: impl Fn(&Controller, &Piece, Vec<RawMove>) -> Vec<RawMove> + Send + Sync + 'static,
    ) -> Self {
        self.remove_illegal_moves = Some(Arc::new(hook));
        self
    }

    /// Drop any extra legality hook, e.g. to turn a standard config into a base one
    pub fn without_remove_illegal_moves(mut self) -> Self {
        self.remove_illegal_moves = None;
        self
    }

    pub fn with_custom_moves(
        mut self,
        hook: impl Fn(&MoveContext<'_>, &Piece) -> Vec<RawMove> + Send + Sync + 'static,
    ) -> Self {
        self.custom_moves = Some(Arc::new(hook));
        self
    }

    pub fn with_draw(mut self, hook: impl Fn(&BoardState) + Send + Sync + 'static) -> Self {
        self.draw = Some(Arc::new(hook));
        self
    }

    pub fn with_on_click(
        mut self,
        hook: impl Fn(&mut Controller, Cell) -> GameResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.on_click = Some(Arc::new(hook));
        self
    }

    pub fn with_execute_movement(
        mut self,
        hook: impl Fn(&mut Controller, &Movement) -> GameResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.execute_movement = Some(Arc::new(hook));
        self
    }

    pub fn with_turn_count(
        mut self,
        hook: impl Fn(&mut TurnState, &MoveSummary) + Send + Sync + 'static,
    ) -> Self {
        self.turn_count = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: Vec<&str> = [
            ("layout", self.layout.is_some()),
            ("game_state", self.game_state.is_some()),
            ("promotion_choices", self.promotion_choices.is_some()),
            ("remove_illegal_moves", self.remove_illegal_moves.is_some()),
            ("custom_moves", self.custom_moves.is_some()),
            ("draw", self.draw.is_some()),
            ("on_click", self.on_click.is_some()),
            ("execute_movement", self.execute_movement.is_some()),
            ("turn_count", self.turn_count.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();

        f.debug_struct("ControllerConfig")
            .field("name", &self.name)
            .field("slug", &self.slug)
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("castling", &self.castling)
            .field("slide_range", &self.slide_range)
            .field("hooks", &hooks)
            .finish()
    }
}
