pub mod board;
pub mod error;
pub mod heuristic;
pub mod io;
pub mod path;
pub mod search;

pub use board::{Board, Direction};
pub use error::{Error, Result, Unsolvable};
pub use io::{parse_puzzle, read_puzzle, render_path, render_solution, write_solution};
pub use path::Solution;
pub use search::{search, DuplicatePolicy, SearchConfig};

/// Searches from `initial` to `goal` and reconstructs the path found.
pub fn solve(initial: &Board, goal: &Board, config: &SearchConfig) -> Result<Solution> {
    let outcome = search(initial, goal, config)?;
    Solution::from_outcome(initial, goal, &outcome)
}

#[cfg(test)]
mod test {
    use pathfinding::directed::bfs::bfs;

    use super::*;
    use crate::heuristic::evaluation;

    const TEST_INPUT: &str = "
5 1 3 4
9 2 7 8
0 6 11 12
13 10 14 15

1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 0
";

    fn setup_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // deterministic walk: at each step take the n-th feasible tile
    fn scramble(from: Board, steps: &[usize]) -> Board {
        steps.iter().fold(from, |b, &n| {
            let tiles: Vec<u8> = b.feasible_moves().into_iter().flatten().collect();
            b.apply_move(tiles[n % tiles.len()])
        })
    }

    fn neighbours(b: &Board) -> Vec<Board> {
        b.feasible_moves()
            .into_iter()
            .flatten()
            .map(|t| b.apply_move(t))
            .collect()
    }

    fn check_solution(initial: &Board, goal: &Board, solution: &Solution) {
        assert_eq!(solution.path.first(), Some(initial));
        assert_eq!(solution.path.last(), Some(goal));
        assert_eq!(solution.depth, solution.path.len() - 1);
        assert_eq!(solution.moves.len(), solution.depth);
        assert_eq!(solution.evaluations.len(), solution.path.len());

        for (b, &e) in solution.path.iter().zip(&solution.evaluations) {
            assert_eq!(evaluation(initial, b, goal), e);
        }

        for pair in solution.path.windows(2) {
            let changed: Vec<usize> = (0..16)
                .filter(|&ix| pair[0].tiles()[ix] != pair[1].tiles()[ix])
                .collect();
            assert_eq!(changed.len(), 2);
            let (a, b) = (changed[0], changed[1]);
            assert!(pair[0].tiles()[a] == 0 || pair[0].tiles()[b] == 0);
            let (ai, aj, bi, bj) = (a / 4, a % 4, b / 4, b % 4);
            assert_eq!(ai.abs_diff(bi) + aj.abs_diff(bj), 1);
        }
    }

    #[test]
    fn check_expected() {
        setup_logger();
        let (initial, goal) = parse_puzzle(TEST_INPUT).unwrap();

        let solution = solve(&initial, &goal, &SearchConfig::default()).unwrap();
        check_solution(&initial, &goal, &solution);

        let optimal = bfs(&initial, neighbours, |b| *b == goal).unwrap();
        assert!(solution.depth >= optimal.len() - 1);
        assert_eq!(solution.moves.len(), solution.depth);
    }

    #[test]
    fn identical_boards_need_no_moves() {
        let goal = Board::solved();
        let solution = solve(&goal, &goal, &SearchConfig::default()).unwrap();

        assert_eq!(solution.depth, 0);
        assert_eq!(solution.nodes_produced, 0);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.evaluations, vec![0]);
    }

    #[test]
    fn single_slide() {
        let goal = Board::solved();
        // blank swapped with its left neighbour
        let initial = goal.apply_move(15);
        let solution = solve(&initial, &goal, &SearchConfig::default()).unwrap();

        check_solution(&initial, &goal, &solution);
        assert_eq!(solution.depth, 1);
        assert_eq!(solution.path.len(), 2);
        assert_eq!(solution.moves, vec![Direction::Left]);
        assert_eq!(solution.evaluations, vec![1, 1]);
    }

    #[test]
    fn transposed_pair_has_no_solution() {
        let (initial, goal) = parse_puzzle(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 15 14 0
             1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0",
        )
        .unwrap();

        assert!(matches!(
            solve(&initial, &goal, &SearchConfig::default()),
            Err(Error::NoSolutionFound {
                reason: Unsolvable::ParityMismatch
            })
        ));
    }

    #[test]
    fn scrambles_solve_under_both_policies() {
        setup_logger();
        let goal = Board::solved();
        let walks: &[&[usize]] = &[
            &[0, 1, 0, 2, 1, 3, 0, 0],
            &[1, 1, 2, 0, 3, 2, 1, 0, 1, 2],
            &[2, 0, 1, 1, 0, 2, 3, 1, 0],
        ];

        for walk in walks {
            let initial = scramble(goal, walk);
            let optimal = bfs(&initial, neighbours, |b| *b == goal).unwrap();

            for policy in [DuplicatePolicy::Literal, DuplicatePolicy::Dedup] {
                let config = SearchConfig::default().with_policy(policy);
                let solution = solve(&initial, &goal, &config).unwrap();
                check_solution(&initial, &goal, &solution);
                assert!(solution.depth >= optimal.len() - 1);
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        let goal = Board::solved();
        let initial = scramble(goal, &[1, 0, 2, 2, 1, 0, 3, 1]);
        let config = SearchConfig::default();

        let first = solve(&initial, &goal, &config).unwrap();
        let second = solve(&initial, &goal, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn goal_need_not_be_the_standard_arrangement() {
        let start = Board::solved();
        let goal = scramble(start, &[0, 2, 1, 1, 3, 0]);
        let solution = solve(&start, &goal, &SearchConfig::default()).unwrap();
        check_solution(&start, &goal, &solution);
    }
}
