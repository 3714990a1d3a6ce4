// main.rs - Prints a Game of Life grid to the terminal, one generation after another

use anyhow::Context;
use clap::{Parser, ValueEnum};
use conway::config::{GRID_SIZE, HISTORY_LEN, UPDATE_INTERVAL_MS};
use conway::{coro, patterns, Grid, History};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    /// Evolve every cell in one sweep
    Sequential,
    /// One tokio task per row
    Rows,
}

#[derive(Debug, Parser)]
#[command(name = "grid_display", about = "Conway's Game of Life in the terminal")]
struct Args {
    #[arg(long, env = "CONWAY_ROWS", default_value_t = GRID_SIZE)]
    rows: usize,

    #[arg(long, env = "CONWAY_COLUMNS", default_value_t = GRID_SIZE)]
    columns: usize,

    /// Named starting pattern
    #[arg(long, default_value = "Glider", conflicts_with_all = ["seed", "file"])]
    pattern: String,

    /// Random start from this seed
    #[arg(long, conflicts_with = "file")]
    seed: Option<u32>,

    /// Start from a file of '+' (alive) and '-' (dead) rows; sets the grid size
    #[arg(long)]
    file: Option<PathBuf>,

    /// Stop after this many generations
    #[arg(long, default_value_t = 100)]
    generations: u32,

    /// Delay between generations
    #[arg(long, env = "CONWAY_INTERVAL_MS", default_value_t = UPDATE_INTERVAL_MS)]
    delay_ms: u64,

    #[arg(long, value_enum, default_value_t = Engine::Sequential)]
    engine: Engine,

    /// Recent grids remembered for cycle detection
    #[arg(long, env = "CONWAY_HISTORY", default_value_t = HISTORY_LEN)]
    history: usize,

    /// Log filter
    #[arg(long, env = "RUST_LOG", default_value = "conway=info,grid_display=info")]
    log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Limit,
    Cycle(u32),
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(tracing_subscriber::EnvFilter::try_new(filter)?),
    )?;
    Ok(())
}

fn initial_grid(args: &Args) -> anyhow::Result<Grid> {
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return text
            .parse::<Grid>()
            .with_context(|| format!("failed to parse {}", path.display()));
    }

    let mut grid = Grid::new(args.rows, args.columns)?;
    match args.seed {
        Some(seed) => patterns::apply_random_pattern(&mut grid, seed),
        None => patterns::apply_pattern(&mut grid, patterns::find(&args.pattern)?),
    }
    Ok(grid)
}

fn render<W: Write>(out: &mut W, generation: u32, grid: &Grid) -> std::io::Result<()> {
    writeln!(out, "Generation {} (live cells: {})", generation, grid.population())?;
    write!(out, "{grid}")?;
    writeln!(out)
}

/// Steps `grid` until `generations` have run or the grid starts repeating.
async fn run<W: Write>(
    grid: &mut Grid,
    engine: Engine,
    generations: u32,
    delay: Duration,
    history: &mut History,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    history.record(grid);
    render(out, 0, grid)?;

    for generation in 1..=generations {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match engine {
            Engine::Sequential => grid.step(),
            Engine::Rows => coro::step_rows(grid).await?,
        }
        render(out, generation, grid)?;

        if history.record(grid) {
            return Ok(Outcome::Cycle(generation));
        }
    }

    Ok(Outcome::Limit)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;
    debug!(?args, "parsed arguments");

    let mut grid = initial_grid(&args)?;
    let mut history = History::new(args.history);
    let mut stdout = std::io::stdout().lock();

    let outcome = run(
        &mut grid,
        args.engine,
        args.generations,
        Duration::from_millis(args.delay_ms),
        &mut history,
        &mut stdout,
    )
    .await?;

    match outcome {
        Outcome::Limit => info!(generations = args.generations, "generation limit reached"),
        Outcome::Cycle(generation) => info!(generation, "grid repeats an earlier state, stopping"),
    }
    Ok(())
}
