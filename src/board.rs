//! The sliding-tile board.
//!
//! Cells are stored row-major in a flat `Vec<u32>`; `0` is an empty cell and
//! every other value is a power of two. All four moves reduce to sliding
//! lines toward index 0 (see [`crate::line`]): right reverses each row,
//! up and down go through [`Board::transpose`].

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use log::debug;

use crate::constants::{DEFAULT_SIZE, EMPTY, SPAWN_HIGH, SPAWN_LOW, SPAWN_LOW_PROB};
use crate::line::{can_merge, reverse, slide};
use crate::rng::TileRng;

/// Move direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a console token (`w`, `a`, `s`, `d`) to a direction.
    ///
    /// Surrounding whitespace, including a trailing `\r\n`, is ignored.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token.trim() {
            "w" => Some(Direction::Up),
            "a" => Some(Direction::Left),
            "s" => Some(Direction::Down),
            "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Direction::from_token(s) {
            Some(dir) => Ok(dir),
            None => bail!("unknown direction {s:?}, expected one of w, a, s, d"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board of [`DEFAULT_SIZE`].
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Empty `size`x`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_size(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a board from literal rows.
    ///
    /// Fails if the rows don't form a square or a cell holds something other
    /// than zero or a power of two of at least 2.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> anyhow::Result<Self> {
        let size = rows.len();
        if size == 0 {
            bail!("board needs at least one row");
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                bail!("row {r} has {} cells, expected {size}", row.len());
            }
            for (c, &v) in row.iter().enumerate() {
                if v != EMPTY && (v < SPAWN_LOW || !v.is_power_of_two()) {
                    bail!("cell ({r}, {c}) holds {v}, expected 0 or a power of two >= 2");
                }
                cells.push(v);
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let i = self.idx(row, col);
        self.cells[i] = value;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    fn set_row(&mut self, row: usize, values: &[u32]) {
        let start = row * self.size;
        self.cells[start..start + self.size].copy_from_slice(values);
    }

    /// Copy of the grid as nested rows.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|&(r, c)| self.get(r, c) == EMPTY)
            .collect()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// New board with cell `(i, j)` moved to `(j, i)`.
    pub fn transpose(&self) -> Board {
        let mut out = Board::with_size(self.size);
        for r in 0..self.size {
            for c in 0..self.size {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    pub fn move_left(&mut self) -> bool {
        let mut changed = false;
        for r in 0..self.size {
            let (row, moved) = slide(self.row(r));
            self.set_row(r, &row);
            changed |= moved;
        }
        changed
    }

    pub fn move_right(&mut self) -> bool {
        let mut changed = false;
        for r in 0..self.size {
            let (row, moved) = slide(&reverse(self.row(r)));
            self.set_row(r, &reverse(&row));
            changed |= moved;
        }
        changed
    }

    pub fn move_up(&mut self) -> bool {
        let mut t = self.transpose();
        let changed = t.move_left();
        *self = t.transpose();
        changed
    }

    pub fn move_down(&mut self) -> bool {
        let mut t = self.transpose();
        let changed = t.move_right();
        *self = t.transpose();
        changed
    }

    /// Slide in `dir`. Returns whether anything moved or merged.
    pub fn apply(&mut self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    /// Drop a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the cell filled, or `None` when the board is full.
    pub fn add_random_tile<R: TileRng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let empties = self.empty_cells();
        if empties.is_empty() {
            return None;
        }
        let (r, c) = empties[rng.next_index(empties.len())];
        let value = if rng.next_unit() < SPAWN_LOW_PROB {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        };
        self.set(r, c, value);
        debug!("spawned {value} at ({r}, {c})");
        Some((r, c))
    }

    /// True when the board is full and no two orthogonal neighbours can merge.
    pub fn is_game_over(&self) -> bool {
        if self.cells.contains(&EMPTY) {
            return false;
        }
        for r in 0..self.size {
            for c in 0..self.size {
                let v = self.get(r, c);
                if c + 1 < self.size && can_merge(v, self.get(r, c + 1)) {
                    return false;
                }
                if r + 1 < self.size && can_merge(v, self.get(r + 1, c)) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                if c > 0 {
                    write!(f, "\t")?;
                }
                match self.get(r, c) {
                    EMPTY => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
