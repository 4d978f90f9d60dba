//! War Simulator Binary
//!
//! Plays a batch of games and prints game-length statistics and a histogram.

use anyhow::Context;
use clap::Parser;
use war_sim::{PlayerId, Simulation, SimulationConfig, SimulationReport};

#[derive(Parser, Debug)]
#[command(name = "war-sim", version, about = "Simulate games of War and report how long they last")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    games: u64,

    /// Batch seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Histogram bins
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    bins: u64,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Stop any game after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Width of the longest histogram bar
    #[arg(short, long, default_value_t = 60)]
    width: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Narrate a single game of the batch instead of running it
    #[arg(long, value_name = "INDEX")]
    replay: Option<u64>,
}

fn log(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn print_report(report: &SimulationReport, width: usize) {
    println!(
        "Ran {} games in {:3.1} seconds",
        report.rounds.len(),
        report.elapsed.as_secs_f64()
    );
    if let Some(summary) = &report.summary {
        println!("Game statistics:");
        println!("  Mean   = {:3.0} rounds", summary.mean);
        println!("  Median = {:3.0} rounds", summary.median);
        println!("  Longest  = {} rounds", summary.max);
        println!("  Shortest = {} rounds", summary.min);
        println!("  95% = {:.0} rounds", summary.p95);
        println!("  99% = {:3.0} rounds", summary.p99);
        println!("  99.9% = {:3.0} rounds", summary.p999);
    }
    println!("Wins:");
    for player in PlayerId::both() {
        println!("  {} = {}", player, report.wins_for(player));
    }
    if report.round_limited > 0 {
        println!("  stopped at round limit = {}", report.round_limited);
    }
    println!("Wars = {} (longest {} in a row)", report.wars, report.longest_war);
    println!();
    println!("Number of rounds | Games");
    print!("{}", report.histogram.render(width));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut config = SimulationConfig::new()
        .with_games(usize::try_from(args.games).context("game count does not fit in memory")?)
        .with_seed(seed)
        .with_bins(usize::try_from(args.bins).context("bin count does not fit in memory")?)
        .with_threads(args.threads);
    if let Some(max) = args.max_rounds {
        config = config.with_max_rounds(max);
    }
    let simulation = Simulation::new(config);

    if let Some(index) = args.replay {
        let outcome = simulation.replay(index);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        return Ok(());
    }

    let report = simulation.run().context("build worker pool")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.width);
    }
    Ok(())
}
