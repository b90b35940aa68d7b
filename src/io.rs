//! Reading puzzles from text and writing solutions back out.

use std::{fmt::Display, fs, path::Path};

use itertools::Itertools;
use log::warn;

use crate::{
    board::{Board, CELLS},
    error::{Error, Result},
    path::Solution,
};

/// Parses the initial and goal boards from whitespace-separated integers,
/// 16 for each in row-major order.
///
/// Reading stops at the first token that is not an integer; anything after
/// the first 32 integers is ignored.
pub fn parse_puzzle(text: &str) -> Result<(Board, Board)> {
    let mut tokens = text.split_whitespace();
    let values: Vec<i64> = tokens
        .by_ref()
        .map_while(|t| t.parse().ok())
        .collect();

    if values.len() < 2 * CELLS {
        return Err(Error::invalid_input(format!(
            "expected {} integers, got {}",
            2 * CELLS,
            values.len()
        )));
    }

    let ignored = values.len() - 2 * CELLS + tokens.count();
    if ignored > 0 {
        warn!("ignoring {} trailing tokens", ignored);
    }

    let initial = Board::from_values(&values[..CELLS])?;
    let goal = Board::from_values(&values[CELLS..2 * CELLS])?;
    Ok((initial, goal))
}

pub fn read_puzzle(path: &Path) -> Result<(Board, Board)> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("read {}", path.display()), e))?;
    parse_puzzle(&text)
}

/// The output file layout: initial board, blank line, goal board, blank
/// line, depth, nodes produced, move letters, evaluations.
pub struct Report<'a>(pub &'a Solution);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let solution = self.0;
        writeln!(f, "{}\n", solution.initial)?;
        writeln!(f, "{}\n", solution.goal)?;
        writeln!(f, "{}", solution.depth)?;
        writeln!(f, "{}", solution.nodes_produced)?;
        writeln!(f, "{}", solution.moves.iter().join(" "))?;
        writeln!(f, "{}", solution.evaluations.iter().join(" "))
    }
}

pub fn render_solution(solution: &Solution) -> String {
    Report(solution).to_string()
}

/// Every board on the path, each followed by a blank line.
pub fn render_path(solution: &Solution) -> String {
    solution
        .path
        .iter()
        .map(|b| format!("{}\n\n", b))
        .collect()
}

pub fn write_solution(path: &Path, solution: &Solution) -> Result<()> {
    fs::write(path, render_solution(solution))
        .map_err(|e| Error::io(format!("write {}", path.display()), e))
}
