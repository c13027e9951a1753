//! Count knight paths for a built-in or file-backed scenario.
//!
//! Usage:
//!   knight_paths                                  # keypad, 9 moves, at most 2 vowels
//!   knight_paths --scenario keypad_short --json
//!   knight_paths --config my_board.json --steps 4 --parallel
//!   knight_paths --start 1,1 --steps 2 --list

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use knight_paths::config::load_scenario;
use knight_paths::core::coord::Coord;
use knight_paths::scenario::Scenario;
use knight_paths::scenarios;
use knight_paths::search::survey::survey;

#[derive(Parser, Debug)]
#[command(name = "knight_paths")]
#[command(about = "Enumerate knight paths that avoid missing cells and cap limited-cell visits")]
struct Args {
    /// Built-in scenario name
    #[arg(long, short = 's', default_value = "keypad", conflicts_with = "config")]
    scenario: String,

    /// JSON scenario file (overrides --scenario)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the number of moves
    #[arg(long)]
    steps: Option<usize>,

    /// Override the visit cap on limited cells
    #[arg(long)]
    cap: Option<u32>,

    /// Only enumerate from this start cell, given as `row,col`
    #[arg(long, value_parser = parse_cell)]
    start: Option<Coord>,

    /// Print every path (only with --start)
    #[arg(long, requires = "start")]
    list: bool,

    /// Extend each generation on all cores
    #[arg(long)]
    parallel: bool,

    /// Override the per-generation path budget
    #[arg(long)]
    max_paths: Option<usize>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_cell(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = r.trim().parse::<i32>().map_err(|e| format!("bad row `{r}`: {e}"))?;
    let col = c.trim().parse::<i32>().map_err(|e| format!("bad col `{c}`: {e}"))?;
    Ok(Coord::new(row, col))
}

fn resolve_scenario(args: &Args) -> Result<Scenario, String> {
    let mut scn = match &args.config {
        Some(path) => load_scenario(path).map_err(|e| e.to_string())?,
        None => scenarios::by_name(&args.scenario).ok_or_else(|| {
            format!(
                "Unknown scenario: {}\n\nAvailable scenarios:\n  - {}",
                args.scenario,
                scenarios::names().join("\n  - ")
            )
        })?,
    };

    if let Some(steps) = args.steps {
        scn = scn.with_steps(steps);
    }
    if args.cap.is_some() {
        scn = scn.with_cap(args.cap);
    }
    if let Some(max_paths) = args.max_paths {
        let mut limits = scn.limits;
        limits.max_paths = max_paths;
        scn = scn.with_limits(limits);
    }
    scn.validate().map_err(|e| e.to_string())?;
    Ok(scn)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let scn = match resolve_scenario(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Some(start) = args.start {
        let run = match scn.paths_from(start, args.parallel) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Enumeration failed: {e}");
                std::process::exit(1);
            }
        };
        if args.json {
            let paths = if args.list {
                serde_json::to_value(&run.paths).unwrap_or_default()
            } else {
                serde_json::Value::Null
            };
            let out = serde_json::json!({
                "scenario": scn.name,
                "start": start,
                "steps": scn.steps,
                "count": run.paths.len(),
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
            return;
        }
        if args.list {
            for p in &run.paths {
                let cells: Vec<String> = p.cells().iter().map(|c| c.to_string()).collect();
                println!("{}", cells.join(" "));
            }
        }
        println!("Scenario: {}", scn.name);
        println!("  start: {start}");
        println!("  moves: {}", scn.steps);
        println!("  paths: {}", run.paths.len());
        return;
    }

    let report = match survey(&scn, args.parallel) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Survey failed: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        return;
    }

    println!("Scenario: {}", report.scenario);
    println!("  moves: {} ({} keys per path)", report.steps, report.steps + 1);
    if let Some(cap) = report.cap {
        println!("  limited-cell visits: at most {cap}");
    }
    for s in report.per_start.iter().filter(|s| s.paths > 0) {
        println!("  start {}: {} paths", s.start, s.paths);
    }
    println!("  total paths: {}", report.total);
}
