//! Best-First Search Puzzle Runner
//!
//! Solves state-space puzzles (elevator logistics, mazes, hash-gated rooms,
//! travelling-salesman tours) with a shared Dijkstra/A* engine. Input is read
//! from a text file; answers go to stdout and diagnostics to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use frontier::input::{owned_lines, read_lines, save_report};
use frontier::puzzles::{self, PARTS, PUZZLES};
use frontier::{Error, SearchConfig};

/// Solves search puzzles with a shared best-first search engine.
#[derive(Parser)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one puzzle part from an input file.
    Solve {
        /// Puzzle name (see `frontier list`).
        puzzle: String,
        /// Path to the puzzle input.
        input: PathBuf,
        /// Which part to answer.
        #[arg(short, long, default_value_t = 1)]
        part: u8,
        /// Give up after expanding this many states.
        #[arg(long)]
        max_expansions: Option<usize>,
    },
    /// Solve every built-in sample and print a report.
    Samples {
        /// Also write the report to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available puzzles.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Command::Solve {
            puzzle,
            input,
            part,
            max_expansions,
        }) => run_solve(&puzzle, &input, part, SearchConfig { max_expansions }),
        Some(Command::Samples { output }) => run_samples(output),
        Some(Command::List) => {
            run_list();
            Ok(())
        }
        // default: solve the samples
        None => run_samples(None),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Sends tracing output to stderr at a level picked by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Solves one part of one puzzle and prints the answer.
fn run_solve(name: &str, input: &Path, part: u8, config: SearchConfig) -> Result<(), Error> {
    let puzzle = puzzles::find(name).ok_or_else(|| Error::UnknownPuzzle(name.to_string()))?;
    let lines = read_lines(input)?;
    let answer = puzzle.solve(&lines, part, config)?;
    println!("{answer}");
    Ok(())
}

/// Prints the sample report and optionally saves it.
fn run_samples(output: Option<PathBuf>) -> Result<(), Error> {
    let report = sample_report(SearchConfig::default());
    print!("{report}");

    if let Some(path) = output {
        save_report(&path, &report)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Prints each puzzle's name and description.
fn run_list() {
    for puzzle in PUZZLES {
        println!("{:<10} {}", puzzle.name(), puzzle.description());
    }
}

/// Solves both parts of every sample, one line per part.
///
/// Failures are reported inline so one bad sample does not hide the rest.
fn sample_report(config: SearchConfig) -> String {
    let mut report = String::new();
    for puzzle in PUZZLES {
        let lines = owned_lines(puzzle.sample());
        for part in PARTS {
            let outcome = match puzzle.solve(&lines, part, config) {
                Ok(answer) => answer.to_string(),
                Err(e) => format!("error: {e}"),
            };
            report.push_str(&format!("{} part {}: {}\n", puzzle.name(), part, outcome));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_report_snapshot() {
        let report = sample_report(SearchConfig::default());
        insta::assert_snapshot!(report, @r"
        facility part 1: 11
        facility part 2: error: invalid state: a microchip on floor 1 is exposed to a foreign generator
        cubicles part 1: 11
        cubicles part 2: 151
        vault part 1: DDRRRD
        vault part 2: 370
        ducts part 1: 14
        ducts part 2: 20
        ");
    }

    #[test]
    fn test_unknown_part_is_reported() {
        let puzzle = puzzles::find("ducts").unwrap();
        let err = puzzle
            .solve(&owned_lines(puzzle.sample()), 3, SearchConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "puzzle 'ducts' has no part 3");
    }

    #[test]
    fn test_cli_parses_solve_flags() {
        let cli = Cli::try_parse_from([
            "frontier",
            "-v",
            "solve",
            "vault",
            "input.txt",
            "--part",
            "2",
            "--max-expansions",
            "500",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Command::Solve {
                puzzle,
                part,
                max_expansions,
                ..
            }) => {
                assert_eq!(puzzle, "vault");
                assert_eq!(part, 2);
                assert_eq!(max_expansions, Some(500));
            }
            _ => panic!("expected the solve subcommand"),
        }
    }
}
