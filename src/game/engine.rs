//! The game engine: board, turn order, win detection, and the computer
//! opponent behind one façade.
//!
//! ## Turn flow
//!
//! 1. The human's move arrives through `make_move`.
//! 2. If the game continues and it is the computer's turn, the collaborator
//!    asks for `compute_computer_move` (or runs a `search_task` elsewhere).
//! 3. The chosen index goes back through `make_move`.
//!
//! Invalid moves are rejected with `EngineError::InvalidMove` and leave the
//! engine untouched.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::core::{
    Board, Cell, EngineConfig, EngineError, FirstMover, GameRng, MoveRejection, Player, Result,
};
use crate::rules::{evaluate, GameResult, WinningLine};
use crate::search::{
    Minimax, ScoreCache, SearchOutcome, SearchStats, SearchTask, TranspositionCache,
};

use super::snapshot::EngineSnapshot;

/// Observer invoked once per terminal transition.
pub type GameOverObserver = Box<dyn FnMut(GameResult, Option<WinningLine>) + Send>;

/// What a successful `make_move` did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on.
    InProgress,
    /// This move ended the game.
    GameOver {
        /// Terminal result.
        result: GameResult,
        /// The completed line on a win, `None` on a tie.
        winning_line: Option<WinningLine>,
    },
}

impl MoveOutcome {
    /// Check if the move ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver { .. })
    }
}

/// Tic-tac-toe game engine with a minimax computer opponent.
pub struct GameEngine {
    board: Board,
    current_player: Player,
    is_over: bool,
    result: GameResult,
    winning_line: Option<WinningLine>,
    next_computer_move: Option<usize>,
    last_search: SearchStats,
    config: EngineConfig,
    rng: GameRng,
    cache: Arc<dyn TranspositionCache>,
    observer: Option<GameOverObserver>,
}

impl GameEngine {
    /// Create an engine backed by the process-wide score cache.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_cache(config, ScoreCache::global())
    }

    /// Create an engine with an injected score cache.
    pub fn with_cache(config: EngineConfig, cache: Arc<dyn TranspositionCache>) -> Self {
        let mut rng = GameRng::new(config.seed);
        let current_player = roll_first_mover(config.first_mover, &mut rng);

        Self {
            board: Board::new(),
            current_player,
            is_over: false,
            result: GameResult::Continue,
            winning_line: None,
            next_computer_move: None,
            last_search: SearchStats::default(),
            config,
            rng,
            cache,
            observer: None,
        }
    }

    /// Register the game-over observer, replacing any previous one.
    pub fn set_game_over_observer<F>(&mut self, observer: F)
    where
        F: FnMut(GameResult, Option<WinningLine>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the game-over observer.
    pub fn clear_game_over_observer(&mut self) {
        self.observer = None;
    }

    /// Mark `position` for the current player and pass the turn.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, position: usize) -> Result<MoveOutcome> {
        if let Err(reason) = self.check_move(position) {
            warn!(position, %reason, "rejected move");
            return Err(EngineError::invalid_move(position, reason));
        }

        let mover = self.current_player;
        self.board.place(position, mover);
        self.current_player = mover.opponent();
        self.next_computer_move = None;

        let evaluation = evaluate(&self.board, position);
        self.result = evaluation.result;
        self.winning_line = evaluation.line;

        if !evaluation.result.is_terminal() {
            debug!(position, board = %self.board.to_grid(), "move applied");
            return Ok(MoveOutcome::InProgress);
        }

        self.is_over = true;
        debug!(result = ?self.result, line = ?self.winning_line, "game over");
        if let Some(observer) = self.observer.as_mut() {
            observer(self.result, self.winning_line);
        }

        Ok(MoveOutcome::GameOver {
            result: self.result,
            winning_line: self.winning_line,
        })
    }

    fn check_move(&self, position: usize) -> std::result::Result<(), MoveRejection> {
        if self.is_over {
            return Err(MoveRejection::GameOver);
        }
        match self.board.get(position) {
            None => Err(MoveRejection::OutOfRange),
            Some(Cell::Marked(_)) => Err(MoveRejection::Occupied),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Pick the computer's next move without touching the board.
    ///
    /// The index is also kept for `next_computer_move`. Fails with
    /// `InvalidMove(GameOver)` once the game has ended, and with
    /// `NoMovesAvailable` on a full board that was never marked over.
    #[instrument(skip(self))]
    pub fn compute_computer_move(&mut self) -> Result<usize> {
        self.ensure_searchable()?;

        let opening_shortcut = self.config.opening_shortcut;
        let outcome = Minimax::new(self.cache.as_ref(), &mut self.rng)
            .choose(&self.board, opening_shortcut)
            .ok_or(EngineError::NoMovesAvailable)?;

        Ok(self.record_search(outcome))
    }

    /// Hand out a detached search of the current position.
    ///
    /// The task owns a board copy, a cache handle, and a forked RNG, so it
    /// can run on a worker thread while the engine stays where it is.
    pub fn search_task(&mut self) -> Result<SearchTask> {
        self.ensure_searchable()?;
        Ok(SearchTask::new(
            self.board,
            Arc::clone(&self.cache),
            self.rng.fork(),
            self.config.opening_shortcut,
        ))
    }

    /// Play the move found by a finished `SearchTask`, keeping its stats.
    pub fn apply_search_outcome(&mut self, outcome: SearchOutcome) -> Result<MoveOutcome> {
        self.last_search = outcome.stats;
        self.make_move(outcome.index)
    }

    fn ensure_searchable(&self) -> Result<()> {
        if self.is_over {
            return Err(EngineError::invalid_move(0, MoveRejection::GameOver));
        }
        if self.board.is_full() {
            return Err(EngineError::NoMovesAvailable);
        }
        Ok(())
    }

    fn record_search(&mut self, outcome: SearchOutcome) -> usize {
        self.next_computer_move = Some(outcome.index);
        self.last_search = outcome.stats;
        outcome.index
    }

    /// Clear the board and start a new game.
    ///
    /// The first mover is chosen again. The score cache is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = roll_first_mover(self.config.first_mover, &mut self.rng);
        self.is_over = false;
        self.result = GameResult::Continue;
        self.winning_line = None;
        self.next_computer_move = None;
        self.last_search.reset();
        debug!(first = ?self.current_player, "game restarted");
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Result of the last move.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The completed line, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// The last move chosen by the computer, until the next move is played.
    #[must_use]
    pub fn next_computer_move(&self) -> Option<usize> {
        self.next_computer_move
    }

    /// Counters from the most recent computer search.
    #[must_use]
    pub fn last_search_stats(&self) -> &SearchStats {
        &self.last_search
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The score cache this engine searches with.
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn TranspositionCache> {
        &self.cache
    }

    // === Mutators ===
    //
    // Raw setters for collaborators restoring state field by field. They do
    // not cross-check each other; `restore` sets everything at once.

    /// Replace the board.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Set the player to move.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Set the over flag.
    pub fn set_over(&mut self, is_over: bool) {
        self.is_over = is_over;
    }

    /// Set the recorded result.
    pub fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    /// Set the recorded winning line.
    pub fn set_winning_line(&mut self, line: Option<WinningLine>) {
        self.winning_line = line;
    }

    // === Save / restore ===

    /// Capture the game state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board,
            current_player: self.current_player,
            is_over: self.is_over,
            result: self.result,
            winning_line: self.winning_line,
            rng: self.rng.state(),
        }
    }

    /// Replace the game state with a snapshot.
    ///
    /// The RNG resumes from the captured stream, so a restored game makes the
    /// same random choices as the original. Cache, config, and observer are
    /// kept.
    pub fn restore(&mut self, snapshot: &EngineSnapshot) {
        self.board = snapshot.board;
        self.current_player = snapshot.current_player;
        self.is_over = snapshot.is_over;
        self.result = snapshot.result;
        self.winning_line = snapshot.winning_line;
        self.rng = GameRng::from_state(&snapshot.rng);
        self.next_computer_move = None;
    }
}

fn roll_first_mover(policy: FirstMover, rng: &mut GameRng) -> Player {
    match policy {
        FirstMover::Fixed(player) => player,
        FirstMover::Random => {
            if rng.coin() {
                Player::One
            } else {
                Player::Two
            }
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board.to_grid())
            .field("current_player", &self.current_player)
            .field("is_over", &self.is_over)
            .field("result", &self.result)
            .field("winning_line", &self.winning_line)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} to move", self.current_player)?;
        write!(f, "{}", self.board)
    }
}
