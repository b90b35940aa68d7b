use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use fifteen_solver::{
    read_puzzle, render_path, solve, write_solution, DuplicatePolicy, SearchConfig,
};

// Input format:
// 32 whitespace-separated integers, the initial board then the goal board,
// each 4 rows of 4 tiles in row-major order with 0 for the blank.
#[derive(Parser)]
#[command(name = "fifteen-solver")]
#[command(version, about = "Solve the 15-puzzle by best-first search", long_about = None)]
struct Cli {
    /// Puzzle file; prompts for one when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where to write the solution
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Handling of boards that are already waiting in the open set
    #[arg(long, default_value = "literal")]
    policy: Policy,

    /// Give up after this many expansions
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Search even when the boards have mismatched parity
    #[arg(long)]
    no_parity_check: bool,

    /// Do not print the boards on the solution path
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Literal,
    Dedup,
}

impl From<Policy> for DuplicatePolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Literal => DuplicatePolicy::Literal,
            Policy::Dedup => DuplicatePolicy::Dedup,
        }
    }
}

// asks for a file name until one can be read
fn prompt_for_puzzle() -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("Enter file name: ");
    loop {
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => bail!("no file name given"),
        };
        let path = PathBuf::from(line.trim());
        if path.is_file() {
            return Ok(path);
        }
        print!("Invalid filename, re-enter file name: ");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_puzzle()?,
    };
    let (initial, goal) =
        read_puzzle(&input).with_context(|| format!("loading {}", input.display()))?;

    let config = SearchConfig::default()
        .with_policy(cli.policy.into())
        .with_expansion_limit(cli.max_expansions)
        .with_parity_check(!cli.no_parity_check);

    let solution = solve(&initial, &goal, &config).context("solving puzzle")?;

    if !cli.quiet {
        print!("{}", render_path(&solution));
    }

    write_solution(&cli.output, &solution)?;
    info!(
        "wrote a {}-move solution to {}",
        solution.depth,
        cli.output.display()
    );

    println!(
        "Found a solution in {} moves ({} nodes produced).",
        solution.depth, solution.nodes_produced
    );

    Ok(())
}
