//! Constants for board dimensions, tile spawning, and console tokens.
//!
//! The board size is chosen at construction time; [`DEFAULT_SIZE`] is what
//! the CLI and [`Board::new`](crate::board::Board::new) use when nothing else
//! is asked for.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 4;

/// Empty cell marker.
pub const EMPTY: u32 = 0;

/// Largest tile a `u32` cell can hold. A pair of these never merges.
pub const MAX_TILE: u32 = 1 << 31;

/// Largest board size the CLI accepts.
pub const MAX_SIZE: usize = 16;

// =============================================================================
// Tile Spawning
// =============================================================================

/// Number of tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Tile spawned most of the time.
pub const SPAWN_LOW: u32 = 2;

/// Tile spawned the rest of the time.
pub const SPAWN_HIGH: u32 = 4;

/// Probability threshold below which [`SPAWN_LOW`] is spawned.
pub const SPAWN_LOW_PROB: f64 = 0.9;

// =============================================================================
// Console
// =============================================================================

/// Restart the current game.
pub const TOKEN_RESTART: &str = "r";

/// Leave the game loop.
pub const TOKEN_QUIT: &str = "q";

/// Separator printed above and below the rendered board.
pub const SEPARATOR: &str = "---------------------";

/// Default cap on moves for the self-playing demo.
pub const DEMO_MAX_MOVES: usize = 10_000;
