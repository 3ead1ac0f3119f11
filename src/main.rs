//! CLI entry point: reads a DIMACS CNF document, runs the solver, prints the
//! `SAT`/`UNSAT` result line.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rcdcl::solver::SolveResult;
use rcdcl::{dimacs, Solver};

/// A CDCL SAT solver: reads a DIMACS CNF formula and reports SAT/UNSAT.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a DIMACS CNF file. Reads from stdin if omitted.
    input: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn read_input(path: &Option<PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let contents = read_input(&cli.input)?;
    let parsed = dimacs::parse(&contents).context("failed to parse DIMACS input")?;

    let solver = Solver::new(parsed.formula, parsed.already_unsat);

    match solver.solve() {
        SolveResult::Sat(model) => {
            println!("SAT");
            for (idx, &value) in model.iter().enumerate() {
                let var = (idx + 1) as i64;
                print!("{} ", if value { var } else { -var });
            }
            println!("0");
        }
        SolveResult::Unsat => {
            println!("UNSAT");
        }
    }

    Ok(0)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
