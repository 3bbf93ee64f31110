//! atsipp: plan a path through a grid with moving obstacles.
//!
//! The time-dependent graph comes either from a compiled graph file
//! (`--graph`) or from a grid map with randomly generated safe intervals
//! (`--map`, optionally with start and goal taken from a scenario file).
//!
//! ```text
//! atsipp -m maps/room.map -x 1 -y 2 -X 30 -Y 29 -s rtas -b 16 -o 0.2 -u 500
//! atsipp --graph room.graph -x 1 -y 2 -X 30 -Y 29 -s asipp --json
//! ```

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atsipp_core::{Connectivity, Location, SearchStats, Time};
use atsipp_graph::{
    GridMap, RandomGraphConfig, SafeIntervalGraph, Scenario, TimeDependentGraph, generate, load_compiled,
    write_compiled,
};
use atsipp_output::{CsvWriter, PlanOutputObserver};
use atsipp_planner::{NoopObserver, PlanObserver, PlanOutcome, Problem, SearchVariant, plan};
use atsipp_search::ExpansionBudget;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "atsipp")]
#[command(about = "Real-time safe-interval path planning with arrival-time functions")]
struct Args {
    #[arg(short = 'x', long)]
    startx: Option<u16>,

    #[arg(short = 'y', long)]
    starty: Option<u16>,

    #[arg(short = 'X', long)]
    goalx: Option<u16>,

    #[arg(short = 'Y', long)]
    goaly: Option<u16>,

    /// Grid map in octile format.
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Compiled time-dependent graph; replaces `--map` and the generator.
    #[arg(long, conflicts_with = "map")]
    graph: Option<PathBuf>,

    /// Scenario file supplying start, goal and (unless `--map` is given) the map.
    #[arg(long, conflicts_with = "graph")]
    scen: Option<PathBuf>,

    /// Record of the scenario file to run.
    #[arg(long, default_value = "0", requires = "scen")]
    scen_index: usize,

    /// Search variant: sipp, asipp, rtas, plrts, maxatfs or medatfs.
    #[arg(short, long, default_value = "asipp", value_parser = parse_variant)]
    search: SearchVariant,

    #[arg(short = 't', long, default_value = "0")]
    start_time: Time,

    /// Horizon of the generated safe intervals.
    #[arg(short, long, default_value = "10")]
    until: Time,

    /// Expected fraction of time a cell is occupied.
    #[arg(short, long, default_value = "0")]
    occupancy: f64,

    #[arg(long, default_value = "1")]
    min_duration: Time,

    #[arg(long, default_value = "10")]
    max_duration: Time,

    /// Expansions per real-time search; negative means unbounded.
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    budget: i64,

    #[arg(long, default_value = "0")]
    seed: u64,

    /// Allow diagonal moves in the generated graph.
    #[arg(long)]
    diagonal: bool,

    /// Directory for `path.csv` and `iterations.csv`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the generated graph in compiled form.
    #[arg(long, conflicts_with = "graph")]
    save_graph: Option<PathBuf>,

    /// Print a JSON summary instead of the counters.
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_variant(s: &str) -> Result<SearchVariant, String> {
    s.parse().map_err(|e: atsipp_planner::PlanError| e.to_string())
}

// ── Graph construction ────────────────────────────────────────────────────────

struct Query {
    start: Location,
    goal:  Location,
}

/// The time-dependent graph plus, when it was generated here, its
/// safe-interval source.
struct Graphs {
    td:        TimeDependentGraph,
    intervals: Option<SafeIntervalGraph>,
}

fn location(x: Option<u16>, y: Option<u16>, what: &str) -> Result<Location> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Location::new(x, y)),
        _ => bail!("{what} needs both coordinates"),
    }
}

fn scenario(path: &Path, index: usize) -> Result<Scenario> {
    let mut all = Scenario::load_all(path).with_context(|| format!("reading {}", path.display()))?;
    if index >= all.len() {
        bail!("{} has {} records, asked for #{index}", path.display(), all.len());
    }
    Ok(all.swap_remove(index))
}

fn query_and_map(args: &Args) -> Result<(Query, Option<PathBuf>)> {
    let Some(scen_path) = &args.scen else {
        let query = Query {
            start: location(args.startx, args.starty, "start")?,
            goal:  location(args.goalx, args.goaly, "goal")?,
        };
        return Ok((query, args.map.clone()));
    };
    let scen = scenario(scen_path, args.scen_index)?;
    // Scenario map paths are relative to the scenario file.
    let map = args.map.clone().unwrap_or_else(|| {
        scen_path.parent().map_or_else(|| PathBuf::from(&scen.map), |dir| dir.join(&scen.map))
    });
    Ok((Query { start: scen.start, goal: scen.goal }, Some(map)))
}

fn build_graphs(args: &Args, query: &Query, map: Option<&Path>) -> Result<Graphs> {
    if let Some(path) = &args.graph {
        let td = load_compiled(path).with_context(|| format!("loading {}", path.display()))?;
        return Ok(Graphs { td, intervals: None });
    }
    let Some(map_path) = map else {
        bail!("one of --map, --graph or --scen is required");
    };
    let map = GridMap::load(map_path).with_context(|| format!("loading {}", map_path.display()))?;
    let config = RandomGraphConfig {
        until:        args.until,
        occupancy:    args.occupancy,
        min_duration: args.min_duration,
        max_duration: args.max_duration,
        seed:         args.seed,
        connectivity: if args.diagonal { Connectivity::EightWay } else { Connectivity::FourWay },
    };
    let t0 = Instant::now();
    let intervals = generate(&map, &config, query.start, query.goal)?;
    let td = TimeDependentGraph::compile(&intervals);
    info!(states = td.state_count(), edges = td.edge_count(), elapsed_ms = t0.elapsed().as_millis(), "graph ready");

    if let Some(out) = &args.save_graph {
        let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
        write_compiled(&td, BufWriter::new(file))?;
    }
    Ok(Graphs { td, intervals: Some(intervals) })
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    variant:      String,
    start:        Location,
    goal:         Location,
    start_time:   Time,
    budget:       i64,
    arrival_time: Time,
    iterations:   usize,
    path_length:  usize,
    stats:        &'a SearchStats,
}

fn run_with<O: PlanObserver>(
    args: &Args,
    problem: &Problem<'_>,
    stats: &mut SearchStats,
    observer: &mut O,
) -> Result<PlanOutcome> {
    let budget = ExpansionBudget::from_signed(args.budget);
    Ok(plan(args.search, problem, budget, stats, observer)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (query, map) = query_and_map(&args)?;
    let graphs = build_graphs(&args, &query, map.as_deref())?;

    let mut problem = Problem::new(&graphs.td, query.start, query.goal, args.start_time)?;
    if let Some(intervals) = &graphs.intervals {
        problem = problem.with_intervals(intervals);
    }

    let mut stats = SearchStats::new();
    let outcome = match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let writer = CsvWriter::new(dir)?;
            let mut observer = PlanOutputObserver::new(writer, &graphs.td, args.start_time);
            let outcome = run_with(&args, &problem, &mut stats, &mut observer)?;
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing CSV output");
            }
            outcome
        }
        None => run_with(&args, &problem, &mut stats, &mut NoopObserver)?,
    };

    if args.json {
        let summary = Summary {
            variant:      args.search.to_string(),
            start:        query.start,
            goal:         query.goal,
            start_time:   args.start_time,
            budget:       args.budget,
            arrival_time: outcome.arrival_time,
            iterations:   outcome.iterations,
            path_length:  outcome.path.len(),
            stats:        &stats,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{stats}");
        println!("Arrival time: {}", outcome.arrival_time);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use atsipp_search::ExpansionBudget;

    use super::Args;

    #[test]
    fn budget_defaults_to_one_expansion() {
        let args = Args::try_parse_from(["atsipp", "-m", "a.map", "-s", "rtas"]).unwrap();
        assert_eq!(args.budget, 1);
        assert_eq!(ExpansionBudget::from_signed(args.budget), ExpansionBudget::Expansions(1));
    }

    #[test]
    fn negative_budget_is_unbounded() {
        let args = Args::try_parse_from(["atsipp", "-m", "a.map", "-b", "-1"]).unwrap();
        assert_eq!(ExpansionBudget::from_signed(args.budget), ExpansionBudget::Unbounded);
    }
}
