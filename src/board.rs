use std::{
    fmt::{Display, Write},
    ops::Index,
};

use itertools::Itertools;

use crate::error::{Error, Result};

/// Width and height of the puzzle.
pub const SIDE: usize = 4;
pub const CELLS: usize = SIDE * SIDE;
pub const BLANK: u8 = 0;

/// A direction on the grid, as seen on screen.
///
/// In [`Board::feasible_moves`] the direction names the side of the blank
/// a candidate tile sits on. As a move label it names the direction the
/// tile slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Slot order shared by move generation and label reconstruction.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Down => 'D',
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The neighbouring cell in this direction, if it is on the board.
    pub fn step(self, (i, j): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Direction::Up => i.checked_sub(1).map(|i| (i, j)),
            Direction::Left => j.checked_sub(1).map(|j| (i, j)),
            Direction::Right => (j + 1 < SIDE).then(|| (i, j + 1)),
            Direction::Down => (i + 1 < SIDE).then(|| (i + 1, j)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.letter())
    }
}

/// A 4×4 arrangement of the tiles 0..15, where 0 is the blank.
///
/// Construction validates that every tile appears exactly once, and moves
/// only ever swap two cells, so every `Board` is a permutation.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    pub fn new(tiles: [u8; CELLS]) -> Result<Board> {
        let mut seen = [false; CELLS];
        for &t in &tiles {
            let slot = seen
                .get_mut(t as usize)
                .ok_or_else(|| Error::invalid_input(format!("tile {} is outside 0..15", t)))?;
            if *slot {
                return Err(Error::invalid_input(format!("tile {} appears twice", t)));
            }
            *slot = true;
        }

        // all 16 values seen once means the blank is present
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default() as u8;
        Ok(Board { tiles, blank })
    }

    /// Builds a board from raw integers in row-major order.
    pub fn from_values(values: &[i64]) -> Result<Board> {
        if values.len() != CELLS {
            return Err(Error::invalid_input(format!(
                "a board needs {} tiles, got {}",
                CELLS,
                values.len()
            )));
        }

        let mut tiles = [0; CELLS];
        for (cell, &v) in tiles.iter_mut().zip_eq(values) {
            *cell = u8::try_from(v)
                .ok()
                .filter(|&t| (t as usize) < CELLS)
                .ok_or_else(|| Error::invalid_input(format!("tile {} is outside 0..15", v)))?;
        }

        Board::new(tiles)
    }

    /// The conventional goal: 1..15 in order with the blank last.
    pub fn solved() -> Board {
        let mut tiles = [BLANK; CELLS];
        for (ix, t) in tiles.iter_mut().take(CELLS - 1).enumerate() {
            *t = ix as u8 + 1;
        }

        Board {
            tiles,
            blank: (CELLS - 1) as u8,
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(SIDE)
    }

    pub fn blank(&self) -> (usize, usize) {
        to_pos(self.blank as usize)
    }

    /// Scans row-major for `tile`.
    pub fn locate(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles.iter().position(|&t| t == tile).map(to_pos)
    }

    /// Swaps `tile` with the blank. A tile that is not on the board leaves
    /// the arrangement unchanged.
    pub fn apply_move(&self, tile: u8) -> Board {
        let mut next = *self;
        if let Some(ix) = self.tiles.iter().position(|&t| t == tile) {
            next.tiles.swap(ix, self.blank as usize);
            next.blank = ix as u8;
        }

        next
    }

    /// The tile that would slide into the blank from each side, in
    /// [`Direction::ALL`] order, or `None` where that side is off the board.
    pub fn feasible_moves(&self) -> [Option<u8>; 4] {
        let blank = self.blank();
        Direction::ALL.map(|d| d.step(blank).map(|p| self[p]))
    }

    /// Whether some sequence of slides turns `self` into `goal`.
    ///
    /// Every slide is a transposition that also moves the blank by one
    /// cell, so the permutation parity must match the parity of the
    /// blank's displacement.
    pub fn can_reach(&self, goal: &Board) -> bool {
        let mut target = [0usize; CELLS];
        for (ix, &t) in goal.tiles.iter().enumerate() {
            target[t as usize] = ix;
        }

        let mut visited = [false; CELLS];
        let mut cycles = 0;
        for start in 0..CELLS {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut ix = start;
            while !visited[ix] {
                visited[ix] = true;
                ix = target[self.tiles[ix] as usize];
            }
        }

        let permutation_parity = (CELLS - cycles) % 2;
        let (bi, bj) = self.blank();
        let (gi, gj) = goal.blank();
        let blank_parity = (bi.abs_diff(gi) + bj.abs_diff(gj)) % 2;

        permutation_parity == blank_parity
    }
}

fn to_pos(ix: usize) -> (usize, usize) {
    (ix / SIDE, ix % SIDE)
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for row in self.rows() {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            write!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.tiles[index.0 * SIDE + index.1]
    }
}
