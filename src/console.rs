//! Line-oriented console front end.
//!
//! Each turn reads one line: `w`/`a`/`s`/`d` slide the tiles, `r` restarts,
//! `q` quits. Anything else, or a direction that moves nothing, is rejected
//! and the player is prompted again without losing the turn.
//!
//! ## Example
//!
//! ```
//! use twenty48::console::{Console, SessionEnd};
//! use twenty48::game::Game;
//! use twenty48::rng::Lcg;
//!
//! let mut console = Console::new(Game::new(4, Lcg::new(7)));
//! let mut screen = Vec::new();
//! let end = console.run_with("x\nq\n".as_bytes(), &mut screen).unwrap();
//! assert_eq!(end, SessionEnd::Quit);
//! assert!(String::from_utf8(screen).unwrap().contains("Invalid input"));
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::board::Direction;
use crate::constants::{SEPARATOR, TOKEN_QUIT, TOKEN_RESTART};
use crate::game::{Game, TurnOutcome};
use crate::rng::TileRng;

const PROMPT: &str = "Move (w:up, a:left, s:down, d:right, r:restart, q:quit): ";
const MSG_INVALID: &str = "Invalid input, try again.";
const MSG_BLOCKED: &str = "Cannot move that way, try another direction.";
const MSG_GAME_OVER: &str = "Game over!";

/// Result of handling one input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// The turn was played.
    Played(TurnOutcome),
    /// Not a known token.
    Invalid,
    Restarted,
    Quit,
}

/// How a session finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
    /// Input ran out.
    Eof,
}

pub struct Console<R: TileRng> {
    game: Game<R>,
}

impl<R: TileRng> Console<R> {
    pub fn new(game: Game<R>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Play on stdin/stdout.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Play reading turns from `input` and rendering to `output`.
    pub fn run_with<I: BufRead, O: Write>(
        &mut self,
        input: I,
        mut output: O,
    ) -> Result<SessionEnd> {
        let mut lines = input.lines();
        loop {
            if self.game.is_over() {
                self.print_board(&mut output)?;
                writeln!(output, "{MSG_GAME_OVER}")?;
                output.flush()?;
                return Ok(SessionEnd::GameOver);
            }

            self.print_board(&mut output)?;
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(output)?;
                    output.flush()?;
                    return Ok(SessionEnd::Eof);
                }
            };

            match self.execute(&line) {
                Response::Invalid => writeln!(output, "{MSG_INVALID}")?,
                Response::Played(TurnOutcome::Blocked) => writeln!(output, "{MSG_BLOCKED}")?,
                Response::Quit => return Ok(SessionEnd::Quit),
                Response::Played(_) | Response::Restarted => {}
            }
        }
    }

    /// Handle one line of input.
    pub fn execute(&mut self, line: &str) -> Response {
        let token = line.trim();
        if token == TOKEN_QUIT {
            return Response::Quit;
        }
        if token == TOKEN_RESTART {
            self.game.restart();
            return Response::Restarted;
        }
        match Direction::from_token(token) {
            Some(dir) => Response::Played(self.game.step(dir)),
            None => {
                debug!("rejected input {token:?}");
                Response::Invalid
            }
        }
    }

    fn print_board<O: Write>(&self, output: &mut O) -> io::Result<()> {
        writeln!(output, "{SEPARATOR}")?;
        write!(output, "{}", self.game.board())?;
        writeln!(output, "{SEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rng::Lcg;

    fn console_with(rows: &[[u32; 4]]) -> Console<Lcg> {
        let board = Board::from_rows(rows).unwrap();
        Console::new(Game::from_board(board, Lcg::new(11)))
    }

    #[test]
    fn test_execute_invalid() {
        let mut console = Console::new(Game::new(4, Lcg::new(1)));
        let before = console.game().board().clone();
        assert_eq!(console.execute("x"), Response::Invalid);
        assert_eq!(console.execute(""), Response::Invalid);
        assert_eq!(console.execute("up"), Response::Invalid);
        assert_eq!(console.game().board(), &before);
    }

    #[test]
    fn test_execute_quit_and_restart() {
        let mut console = Console::new(Game::new(4, Lcg::new(1)));
        assert_eq!(console.execute("q"), Response::Quit);
        assert_eq!(console.execute(" r "), Response::Restarted);
        assert_eq!(console.game().board().empty_cells().len(), 14);
    }

    #[test]
    fn test_execute_blocked() {
        let mut console = console_with(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(console.execute("a"), Response::Played(TurnOutcome::Blocked));
        assert_eq!(console.execute("s"), Response::Played(TurnOutcome::Moved));
    }

    #[test]
    fn test_run_reports_rejections() {
        let mut console = console_with(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut out = Vec::new();
        let end = console.run_with("z\na\nq\n".as_bytes(), &mut out).unwrap();
        assert_eq!(end, SessionEnd::Quit);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(MSG_INVALID));
        assert!(text.contains(MSG_BLOCKED));
        assert!(text.contains("2\t4\t8\t16\n"));
        assert_eq!(text.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_run_eof() {
        let mut console = Console::new(Game::new(4, Lcg::new(1)));
        let mut out = Vec::new();
        let end = console.run_with("".as_bytes(), &mut out).unwrap();
        assert_eq!(end, SessionEnd::Eof);
    }
}
