//! Board engine: sliding, merging, spawning and the terminal check.
//! Every transformation takes a board by value and hands back a new one.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

pub const SIZE: usize = 4;

pub type Row = [u32; SIZE];
/// Row-major 4x4 grid; 0 is an empty cell, anything else is a power of two.
pub type Board = [Row; SIZE];

pub const EMPTY_BOARD: Board = [[0; SIZE]; SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Maps a `KeyboardEvent::key()` value; anything other than the arrows is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser RNG (`Math.random`). Only callable from wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowMerge {
    pub row: Row,
    /// Sum of the tiles created by merges.
    pub gained: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub gained: u64,
}

impl MoveOutcome {
    pub fn changed(&self, prior: &Board) -> bool {
        self.board != *prior
    }
}

/// Slides a row towards index 0. Each pair merges at most once per move.
pub fn merge_row_left(row: Row) -> RowMerge {
    let mut out = [0; SIZE];
    let mut len = 0;
    let mut gained = 0u64;
    let mut pending: Option<u32> = None;
    for value in row.into_iter().filter(|&v| v != 0) {
        match pending.take() {
            Some(prev) if prev == value => {
                let merged = prev * 2;
                out[len] = merged;
                len += 1;
                gained += u64::from(merged);
            }
            Some(prev) => {
                out[len] = prev;
                len += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(prev) = pending {
        out[len] = prev;
    }
    RowMerge { row: out, gained }
}

pub fn merge_row_right(mut row: Row) -> RowMerge {
    row.reverse();
    let mut merged = merge_row_left(row);
    merged.row.reverse();
    merged
}

pub fn transpose(board: Board) -> Board {
    let mut out = EMPTY_BOARD;
    for (r, row) in board.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            out[c][r] = value;
        }
    }
    out
}

fn merge_rows(board: Board, merge: fn(Row) -> RowMerge) -> MoveOutcome {
    let mut out = EMPTY_BOARD;
    let mut gained = 0;
    for (dst, row) in out.iter_mut().zip(board) {
        let m = merge(row);
        *dst = m.row;
        gained += m.gained;
    }
    MoveOutcome { board: out, gained }
}

/// Candidate board and score delta for a move. Does not spawn.
pub fn slide(board: Board, dir: Direction) -> MoveOutcome {
    match dir {
        Direction::Left => merge_rows(board, merge_row_left),
        Direction::Right => merge_rows(board, merge_row_right),
        Direction::Up | Direction::Down => {
            let merge = if dir == Direction::Up { merge_row_left } else { merge_row_right };
            let m = merge_rows(transpose(board), merge);
            MoveOutcome {
                board: transpose(m.board),
                gained: m.gained,
            }
        }
    }
}

pub fn empty_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(SIZE * SIZE);
    for (r, row) in board.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value == 0 {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// Writes one tile into a uniformly chosen empty cell. A full board comes back unchanged.
pub fn spawn_tile<R: RandomSource + ?Sized>(
    board: Board,
    score: u64,
    config: &GameConfig,
    rng: &mut R,
) -> Board {
    let empty = empty_cells(&board);
    if empty.is_empty() {
        return board;
    }
    let pick = ((rng.next_unit() * empty.len() as f64).floor() as usize).min(empty.len() - 1);
    let (r, c) = empty[pick];
    let mut next = board;
    next[r][c] = config.spawn_value(score, rng);
    next
}

/// Empty board seeded with `config.starting_tiles` tiles.
pub fn new_board<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Board {
    (0..config.starting_tiles).fold(EMPTY_BOARD, |board, _| spawn_tile(board, 0, config, rng))
}

pub fn has_moves(board: &Board) -> bool {
    if board.iter().any(|row| row.contains(&0)) {
        return true;
    }
    for r in 0..SIZE {
        for c in 0..SIZE - 1 {
            if board[r][c] == board[r][c + 1] {
                return true;
            }
        }
    }
    for c in 0..SIZE {
        for r in 0..SIZE - 1 {
            if board[r][c] == board[r + 1][c] {
                return true;
            }
        }
    }
    false
}

pub fn is_terminal(board: &Board) -> bool {
    !has_moves(board)
}

pub fn max_tile(board: &Board) -> u32 {
    board.iter().flatten().copied().max().unwrap_or(0)
}
