use log::debug;

use crate::{
    board::{Board, Direction},
    error::{Error, Result},
    heuristic::evaluation,
    search::SearchOutcome,
};

/// A solved puzzle: the boards from initial to goal and what it took to
/// find them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub initial: Board,
    pub goal: Board,
    /// Every board on the way, both ends included.
    pub path: Vec<Board>,
    /// Direction each slid tile travelled, one per transition.
    pub moves: Vec<Direction>,
    /// Evaluation of each board in `path`.
    pub evaluations: Vec<u32>,
    pub nodes_produced: usize,
    pub nodes_expanded: usize,
    pub depth: usize,
}

impl Solution {
    pub fn from_outcome(initial: &Board, goal: &Board, outcome: &SearchOutcome) -> Result<Self> {
        let tree = &outcome.tree;
        let mut path: Vec<Board> = tree.ancestry(outcome.goal).map(|n| tree[n].board).collect();
        path.reverse();

        let moves = move_labels(&path)?;
        let evaluations = path.iter().map(|b| evaluation(initial, b, goal)).collect();
        debug!("reconstructed a path of {} boards", path.len());

        Ok(Solution {
            initial: *initial,
            goal: *goal,
            depth: path.len() - 1,
            path,
            moves,
            evaluations,
            nodes_produced: outcome.nodes_produced,
            nodes_expanded: outcome.nodes_expanded,
        })
    }
}

/// Labels the slide that turned `previous` into `current`.
///
/// The slide is undone by moving one of `current`'s feasible tiles back;
/// that tile sits on the side of the blank it slid towards.
pub fn move_label(previous: &Board, current: &Board) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .zip(current.feasible_moves())
        .find_map(|(side, tile)| {
            let tile = tile?;
            (current.apply_move(tile) == *previous).then(|| side)
        })
}

pub fn move_labels(path: &[Board]) -> Result<Vec<Direction>> {
    path.windows(2)
        .enumerate()
        .map(|(ix, pair)| {
            move_label(&pair[0], &pair[1]).ok_or(Error::Reconstruction { step: ix + 1 })
        })
        .collect()
}
