use itertools::Itertools;

use crate::board::{Board, BLANK, CELLS, SIDE};

/// Manhattan distance between `tile`'s cell in `state` and its cell in
/// `goal`. The blank carries no cost.
pub fn manhattan(state: &Board, tile: u8, goal: &Board) -> u32 {
    if tile == BLANK {
        return 0;
    }

    match (state.locate(tile), goal.locate(tile)) {
        (Some((si, sj)), Some((gi, gj))) => (si.abs_diff(gi) + sj.abs_diff(gj)) as u32,
        _ => 0,
    }
}

/// Sum of [`manhattan`] over every tile, taking `goal` as the reference.
pub fn manhattan_sum(state: &Board, goal: &Board) -> u32 {
    Positions::of(state).distance(&Positions::of(goal))
}

/// `manhattan_sum(initial, current) + manhattan_sum(current, goal)`.
///
/// The first term stands in for the path cost: it measures how far
/// `current` has drifted from the starting arrangement, not how many
/// slides were taken to get there.
pub fn evaluation(initial: &Board, current: &Board, goal: &Board) -> u32 {
    manhattan_sum(initial, current) + manhattan_sum(current, goal)
}

/// Cell of every tile on a board, indexed by tile.
#[derive(Clone, Copy, Debug)]
struct Positions([(usize, usize); CELLS]);

impl Positions {
    fn of(board: &Board) -> Positions {
        let mut cells = [(0, 0); CELLS];
        for (ix, &t) in board.tiles().iter().enumerate() {
            cells[t as usize] = (ix / SIDE, ix % SIDE);
        }
        Positions(cells)
    }

    fn distance(&self, other: &Positions) -> u32 {
        self.0
            .iter()
            .zip_eq(&other.0)
            .enumerate()
            .filter(|&(tile, _)| tile != BLANK as usize)
            .map(|(_, (&(ai, aj), &(bi, bj)))| (ai.abs_diff(bi) + aj.abs_diff(bj)) as u32)
            .sum()
    }
}

/// Scores boards against a fixed initial/goal pair.
#[derive(Clone, Debug)]
pub struct Evaluator {
    initial: Positions,
    goal: Positions,
}

impl Evaluator {
    pub fn new(initial: &Board, goal: &Board) -> Evaluator {
        Evaluator {
            initial: Positions::of(initial),
            goal: Positions::of(goal),
        }
    }

    /// Distance of `board` from the initial arrangement.
    pub fn cost_proxy(&self, board: &Board) -> u32 {
        self.initial.distance(&Positions::of(board))
    }

    pub fn heuristic(&self, board: &Board) -> u32 {
        Positions::of(board).distance(&self.goal)
    }

    pub fn evaluate(&self, board: &Board) -> u32 {
        let here = Positions::of(board);
        self.initial.distance(&here) + here.distance(&self.goal)
    }
}
