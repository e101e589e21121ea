//! A game session: one board, one random source, and the turn rules.

use log::{debug, info};

use crate::board::{Board, Direction};
use crate::constants::INITIAL_TILES;
use crate::rng::TileRng;

/// Session state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Board is full with no adjacent equal tiles.
    Over,
}

/// What a single turn did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game had already ended; nothing happened.
    Ignored,
    /// Nothing could slide or merge that way. No tile was spawned.
    Blocked,
    /// The board changed and a tile was spawned.
    Moved,
    /// The board changed, a tile was spawned, and no moves remain.
    Over,
}

pub struct Game<R: TileRng> {
    board: Board,
    rng: R,
    state: GameState,
    moves: usize,
}

impl<R: TileRng> Game<R> {
    /// Start a game on an empty `size`x`size` board with two spawned tiles.
    pub fn new(size: usize, rng: R) -> Self {
        let mut game = Self {
            board: Board::with_size(size),
            rng,
            state: GameState::Playing,
            moves: 0,
        };
        game.seed_board();
        game
    }

    /// Continue from an existing board. Useful for replaying positions.
    pub fn from_board(board: Board, rng: R) -> Self {
        let state = if board.is_game_over() {
            GameState::Over
        } else {
            GameState::Playing
        };
        Self {
            board,
            rng,
            state,
            moves: 0,
        }
    }

    fn seed_board(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.board.add_random_tile(&mut self.rng);
        }
        // A 1x1 board is already exhausted after the first spawn.
        if self.board.is_game_over() {
            self.state = GameState::Over;
        }
    }

    /// Clear the board and start over with the same random source.
    pub fn restart(&mut self) {
        self.board = Board::with_size(self.board.size());
        self.state = GameState::Playing;
        self.moves = 0;
        self.seed_board();
        debug!("game restarted");
    }

    /// Play one turn in `dir`.
    pub fn step(&mut self, dir: Direction) -> TurnOutcome {
        if self.state == GameState::Over {
            return TurnOutcome::Ignored;
        }
        if !self.board.apply(dir) {
            debug!("move {dir} blocked");
            return TurnOutcome::Blocked;
        }
        self.moves += 1;
        self.board.add_random_tile(&mut self.rng);
        debug!("move {dir} accepted (turn {})", self.moves);

        if self.board.is_game_over() {
            self.state = GameState::Over;
            info!(
                "game over after {} moves, max tile {}",
                self.moves,
                self.board.max_tile()
            );
            return TurnOutcome::Over;
        }
        TurnOutcome::Moved
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    /// Accepted moves since the last (re)start.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
