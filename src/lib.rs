//! Twenty48: the sliding-tile puzzle in a terminal.
//!
//! Equal neighbouring tiles merge when slid together; after every move that
//! changes the board a new 2 or 4 drops onto an empty cell. The game ends
//! when the board is full and nothing can merge.
//!
//! ## Modules
//!
//! - [`constants`] - Board size default, spawn odds, console tokens
//! - [`line`] - Compress and merge a single row or column
//! - [`board`] - The grid, directional moves, spawning, game-over check
//! - [`rng`] - Random source injected into tile spawning
//! - [`game`] - A session: board, random source, turn rules
//! - [`console`] - Text front end over any reader/writer
//!
//! ## Example
//!
//! ```
//! use twenty48::board::{Board, Direction};
//! use twenty48::rng::Lcg;
//!
//! let mut board = Board::from_rows(&[[0u32, 2, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
//! assert!(board.apply(Direction::Left));
//! assert_eq!(board.row(0), &[4, 0, 0, 0]);
//!
//! let mut rng = Lcg::new(7);
//! board.add_random_tile(&mut rng);
//! assert_eq!(board.empty_cells().len(), 14);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod line;
pub mod rng;
