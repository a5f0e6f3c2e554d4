mod cli;
mod logging;
mod render;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use cli::{Args, Command as CliCommand};
use logging::Logger;
use pathfinder::{
    Algorithm, Grid, JsonLinesSink, MemorySink, Position, SearchOutcome, SearchRecord,
    SearchRunner, Sequencer, Settings,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let settings = args.settings();
    if settings.size != args.size {
        warn!("grid size {} clamped to {}", args.size, settings.size);
    }

    let mut grid = build_grid(&args, &settings)?;

    match args.command {
        CliCommand::Run { algorithm } => {
            run_single(&args, &settings, &mut grid, algorithm.into()).await?;
        }
        CliCommand::Benchmark => {
            run_benchmark(&args, &settings, &mut grid).await?;
        }
    }

    Ok(())
}

fn build_grid(args: &Args, settings: &Settings) -> Result<Grid> {
    let size = settings.size;
    let mut grid = Grid::new(size.rows, size.cols)?;
    debug!("built {} grid ({} cells)", size, size.cell_count());

    let start = args.start.unwrap_or(Position::new(0, 0));
    let end = args
        .end
        .unwrap_or(Position::new(size.rows - 1, size.cols - 1));
    grid.set_start(start).wrap_err("invalid --start")?;
    grid.set_end(end).wrap_err("invalid --end")?;

    if args.random_walls {
        let placed = match args.seed {
            Some(seed) => grid.generate_random_walls_with(
                settings.wall_density,
                &mut StdRng::seed_from_u64(seed),
            )?,
            None => grid.generate_random_walls(settings.wall_density)?,
        };
        info!("generated {} random walls", placed);
    }

    for &wall in &args.walls {
        grid.set_wall(wall, true)
            .wrap_err_with(|| format!("invalid --wall {}", wall))?;
    }

    if !args.events.is_empty() {
        grid.set_edit_tool(args.tool.into());
        for event in &args.events {
            let mode = grid.handle_pointer(*event);
            debug!("{:?} -> {:?}", event, mode);
        }
        grid.release();
    }

    Ok(grid)
}

fn build_runner(args: &Args, settings: &Settings) -> Result<SearchRunner> {
    let mut runner = SearchRunner::new(Sequencer::new(settings.speed));

    if let Some(ref path) = args.history {
        let sink = JsonLinesSink::open(path)?;
        debug!("recording runs to {}", sink.path().display());
        runner = runner.with_sink(sink);
    }

    if let Some(delay) = settings.speed.delay() {
        debug!("delay: {:?} per expansion", delay);
    }

    Ok(runner)
}

// ========== Single run ==========

async fn run_single(
    args: &Args,
    settings: &Settings,
    grid: &mut Grid,
    algorithm: Algorithm,
) -> Result<()> {
    let mut runner = build_runner(args, settings)?;
    let listener = render::spawn_listener(runner.sequencer_mut().subscribe());

    let outcome = runner
        .execute(grid, algorithm)
        .await
        .wrap_err_with(|| format!("{} could not run", algorithm))?;

    let seen = listener.await?;
    debug!("renderer saw {} expansions", seen);

    print_result(algorithm, &outcome);

    if let (true, Some(start)) = (outcome.success, grid.start()) {
        debug!("route: {}", render::describe_route(start, &outcome.path));
    }

    if !args.no_draw {
        println!("{}", render::draw(grid));
    }

    Ok(())
}

// ========== Benchmark ==========

async fn run_benchmark(args: &Args, settings: &Settings, grid: &mut Grid) -> Result<()> {
    info!("benchmarking all algorithms on a {} grid", grid.size());

    let history = MemorySink::new();
    let mut runner = build_runner(args, settings)?.with_sink(history.clone());

    for algorithm in Algorithm::all() {
        info!("testing {}", algorithm.name());

        match runner.execute(grid, algorithm).await {
            Ok(outcome) => print_result(algorithm, &outcome),
            Err(e) => {
                log::error!("{} failed: {}", algorithm.name(), e);
            }
        }
    }

    print_benchmark_summary(&history.records());

    if !args.no_draw {
        println!("{}", render::draw(grid));
    }

    Ok(())
}

// ========== Utilities ==========

fn print_result(algorithm: Algorithm, outcome: &SearchOutcome) {
    if outcome.success {
        info!(
            "{}: path of {} cells, {} visited ({:.2}ms)",
            algorithm.name(),
            outcome.path_length(),
            outcome.visited_count,
            outcome.execution_time_ms()
        );
    } else {
        warn!(
            "{}: no path found, {} visited ({:.2}ms)",
            algorithm.name(),
            outcome.visited_count,
            outcome.execution_time_ms()
        );
    }
}

fn print_benchmark_summary(records: &[SearchRecord]) {
    info!("\nbenchmark results:");
    info!(
        "{:<10} {:>6}  {:>8}  {:>8}  {:>10}",
        "algorithm", "found", "path", "visited", "time"
    );
    info!("{:-<50}", "");

    for record in records {
        info!(
            "{:<10} {:>6}  {:>8}  {:>8}  {:>8.2}ms",
            record.algorithm.name(),
            record.path_found,
            record.path_length,
            record.visited_count,
            record.execution_time,
        );
    }

    if let Some(record) = records
        .iter()
        .filter(|r| r.path_found)
        .min_by_key(|r| r.path_length)
    {
        info!(
            "\nshortest: {} ({} cells)",
            record.algorithm.name(),
            record.path_length
        );
    }

    if let Some(record) = records
        .iter()
        .min_by_key(|r| r.visited_count)
    {
        info!(
            "fewest visits: {} ({} cells)",
            record.algorithm.name(),
            record.visited_count
        );
    }

    if let Some(record) = records
        .iter()
        .min_by(|a, b| a.execution_time.total_cmp(&b.execution_time))
    {
        info!(
            "fastest: {} ({:.2}ms)",
            record.algorithm.name(),
            record.execution_time
        );
    }
}
