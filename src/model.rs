//! Core data models for Lights Out.
//! The board is a flat row-major buffer of lit/unlit cells. Flips never touch
//! a previous snapshot: `Board::flipped` clones the buffer and mutates the copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

/// Address of a single cell, zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Text identifier handed to cells, `"{row}-{col}"`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordParseError {
    MissingSeparator,
    InvalidRow(String),
    InvalidCol(String),
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::MissingSeparator => write!(f, "coordinate has no '-' separator"),
            CoordParseError::InvalidRow(s) => write!(f, "invalid row in coordinate: {:?}", s),
            CoordParseError::InvalidCol(s) => write!(f, "invalid col in coordinate: {:?}", s),
        }
    }
}

impl std::error::Error for CoordParseError {}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s.split_once('-').ok_or(CoordParseError::MissingSeparator)?;
        let row = r
            .trim()
            .parse::<usize>()
            .map_err(|_| CoordParseError::InvalidRow(r.to_string()))?;
        let col = c
            .trim()
            .parse::<usize>()
            .map_err(|_| CoordParseError::InvalidCol(c.to_string()))?;
        Ok(Coord { row, col })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells; length = rows * cols. `true` = lit.
    cells: Vec<bool>,
}

impl Board {
    /// Random layout using the browser's `Math.random`. Only callable from wasm.
    pub fn random(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        Self::from_draws(rows, cols, chance_light_starts_on, js_sys::Math::random)
    }

    /// Builds a board drawing one value in [0, 1) per cell from `draw`.
    /// A cell starts lit iff `chance_light_starts_on` is strictly greater than its draw.
    /// The chance is not validated; values outside [0, 1] just bias every cell.
    pub fn from_draws(
        rows: usize,
        cols: usize,
        chance_light_starts_on: f64,
        mut draw: impl FnMut() -> f64,
    ) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            cells.push(chance_light_starts_on > draw());
        }
        Self { rows, cols, cells }
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cells grouped by row, with their coordinates, for rendering.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Coord, bool)> + '_> + '_ {
        (0..self.rows).map(move |r| {
            (0..self.cols).map(move |c| (Coord::new(r, c), self.cells[self.idx(r, c)]))
        })
    }

    fn toggle(&mut self, row: Option<usize>, col: Option<usize>) {
        if let (Some(row), Some(col)) = (row, col) {
            if self.in_bounds(row, col) {
                let i = self.idx(row, col);
                self.cells[i] = !self.cells[i];
            }
        }
    }

    /// Toggles `coord` and its four orthogonal neighbours in place.
    /// Positions off the board, including ones that would wrap, are skipped.
    pub fn flip_around(&mut self, coord: Coord) {
        let Coord { row: r, col: c } = coord;
        self.toggle(Some(r), Some(c));
        self.toggle(r.checked_sub(1), Some(c));
        self.toggle(r.checked_add(1), Some(c));
        self.toggle(Some(r), c.checked_sub(1));
        self.toggle(Some(r), c.checked_add(1));
    }

    /// Copy-on-write flip: returns a new board, `self` is left untouched.
    pub fn flipped(&self, coord: Coord) -> Self {
        let mut next = self.clone();
        next.flip_around(coord);
        next
    }

    /// True iff the board has cells and none of them is lit.
    pub fn has_won(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|&lit| !lit)
    }
}

// Test-only constructors and views.
#[cfg(test)]
impl Board {
    /// Builds a board from explicit rows. Ragged input is truncated/padded
    /// with unlit cells to the width of the first row.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend((0..cols).map(|c| row.get(c).copied().unwrap_or(false)));
        }
        Self { rows: rows.len(), cols, cells }
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// Flips applied since the board was created.
    pub moves: u32,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self { board, moves: 0 }
    }

    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Flip(Coord),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GameAction::Flip(coord) => {
                if self.has_won() {
                    return self;
                }
                Rc::new(GameState {
                    board: self.board.flipped(coord),
                    moves: self.moves.saturating_add(1),
                })
            }
        }
    }
}
