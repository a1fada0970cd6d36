//! Zombie Chess Headless Balance Simulator
//!
//! Plays many games with the greedy bot and prints win/loss statistics for
//! tuning spawn rates and the difficulty ramp.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N          Number of games (default: 1000)
//!   --seed N          RNG seed; run i uses seed + i (default: random)
//!   --difficulty D    easy | medium | hard (default: easy)
//!   --max-turns N     Turn limit before a game counts as timed out (default: 200)
//!   --config FILE     JSON rules config
//!   --json            Print the report as JSON
//!   --verbose         Per-run and per-turn logging
//!   --quiet           Only the final summary line

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;
use zombie_chess::config::RulesConfig;
use zombie_chess::game::Difficulty;
use zombie_chess::simulator::{run_simulation, SimConfig};

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Default)]
struct CliArgs {
    sim: SimConfig,
    config_path: Option<String>,
    json: bool,
    verbose: bool,
    quiet: bool,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn parse_args() -> Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                cli.sim.num_runs = next_value(&args, &mut i, "--runs")?
                    .parse()
                    .context("--runs requires a number")?;
            }
            "--seed" => {
                let seed = next_value(&args, &mut i, "--seed")?
                    .parse()
                    .context("--seed requires a number")?;
                cli.sim.seed = Some(seed);
            }
            "--difficulty" => {
                cli.sim.difficulty = next_value(&args, &mut i, "--difficulty")?
                    .parse::<Difficulty>()
                    .map_err(|e| anyhow!(e))?;
            }
            "--max-turns" => {
                cli.sim.max_turns = next_value(&args, &mut i, "--max-turns")?
                    .parse()
                    .context("--max-turns requires a number")?;
            }
            "--config" => {
                cli.config_path = Some(next_value(&args, &mut i, "--config")?.to_string());
            }
            "--json" => cli.json = true,
            "--verbose" => cli.verbose = true,
            "--quiet" => cli.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    Ok(cli)
}

fn print_usage() {
    eprintln!(
        "Zombie Chess Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N          Number of games (default: 1000)\n\
         \x20 --seed N          RNG seed; run i uses seed + i (default: random)\n\
         \x20 --difficulty D    easy | medium | hard (default: easy)\n\
         \x20 --max-turns N     Turn limit per game (default: 200)\n\
         \x20 --config FILE     JSON rules config\n\
         \x20 --json            Print the report as JSON\n\
         \x20 --verbose         Per-run and per-turn logging\n\
         \x20 --quiet           Only the final summary line\n\
         \x20 --help, -h        Show this help"
    );
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "zombie_chess=debug"
    } else {
        "zombie_chess=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut cli = parse_args()?;
    init_logging(cli.verbose);

    if let Some(path) = &cli.config_path {
        cli.sim.rules = RulesConfig::load(path)
            .with_context(|| format!("failed to load rules config from {path}"))?;
    }
    cli.sim.verbosity = match (cli.quiet, cli.verbose) {
        (true, _) => 0,
        (false, true) => 2,
        (false, false) => 1,
    };

    if cli.sim.verbosity >= 1 {
        eprintln!(
            "Zombie Chess Simulator: {} run(s), difficulty={}, max_turns={}, seed={}",
            cli.sim.num_runs,
            cli.sim.difficulty.name(),
            cli.sim.max_turns,
            cli.sim
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
        );
    }

    let report = run_simulation(&cli.sim);

    if cli.json {
        println!("{}", report.to_json());
    } else if cli.quiet {
        println!(
            "{}: {}/{} won ({:.1}%), {} king captured, {} army lost, {} timed out, avg {:.1} turns",
            report.difficulty.name(),
            report.wins,
            report.num_runs,
            report.win_rate(),
            report.losses_king_captured,
            report.losses_all_pieces,
            report.runs_timed_out,
            report.avg_turns,
        );
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
