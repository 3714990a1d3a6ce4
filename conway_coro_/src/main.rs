// main.rs - Async Conway's Game of Life with Row Coroutines

use anyhow::Context;
use clap::Parser;
use conway::config::{GRID_SIZE, HISTORY_LEN, UPDATE_INTERVAL_MS};
use conway::{coro, patterns, Grid, History, SimConfig};
use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{error, info};

mod ui;

#[derive(Debug, Parser)]
#[command(name = "conway_coro", about = "Async Conway's Game of Life")]
struct Args {
    /// Grid height in cells
    #[arg(long, env = "CONWAY_ROWS", default_value_t = GRID_SIZE)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, env = "CONWAY_COLUMNS", default_value_t = GRID_SIZE)]
    columns: usize,

    /// Delay between generations while running
    #[arg(long, env = "CONWAY_INTERVAL_MS", default_value_t = UPDATE_INTERVAL_MS)]
    interval_ms: u64,

    /// Recent grids remembered for cycle detection
    #[arg(long, env = "CONWAY_HISTORY", default_value_t = HISTORY_LEN)]
    history: usize,

    /// Pattern applied at start-up
    #[arg(long, env = "CONWAY_PATTERN")]
    pattern: Option<String>,

    /// Log filter
    #[arg(long, env = "RUST_LOG", default_value = "conway=info,conway_coro=info")]
    log: String,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            rows: self.rows,
            columns: self.columns,
            update_interval: Duration::from_millis(self.interval_ms),
            history_len: self.history,
        }
    }
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::try_new(filter)?),
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let mut game = GameOfLife::new(args.config(), runtime)?;
    if let Some(name) = &args.pattern {
        game.select_pattern(name)?;
        game.apply_selected_pattern();
    }
    info!(rows = args.rows, columns = args.columns, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Async Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(game)),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}

/// Async Conway's Game of Life
pub struct GameOfLife {
    pub grid: Grid,
    pub config: SimConfig,
    pub is_running: bool,
    pub last_update: Instant,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    runtime: tokio::runtime::Runtime,
    history: History,
}

impl GameOfLife {
    pub fn new(config: SimConfig, runtime: tokio::runtime::Runtime) -> anyhow::Result<Self> {
        let grid = Grid::from_config(&config).context("invalid grid size")?;
        Ok(Self {
            grid,
            history: History::new(config.history_len),
            config,
            is_running: false,
            last_update: Instant::now(),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            runtime,
        })
    }

    /// Selects a catalogue pattern by name, ignoring case.
    pub fn select_pattern(&mut self, name: &str) -> conway::Result<()> {
        let pattern = patterns::find(name)?;
        if let Some(index) = patterns::PATTERNS.iter().position(|p| std::ptr::eq(p, pattern)) {
            self.selected_pattern = index;
        }
        Ok(())
    }
}

/// Operations the UI module drives
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, row: usize, col: usize);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        let stepped = self.runtime.block_on(coro::step_rows(&mut self.grid));
        if let Err(err) = stepped {
            error!(error = %err, generation = self.generation, "generation failed, pausing");
            self.is_running = false;
            return;
        }

        self.generation += 1;
        if self.check_for_cycle() {
            info!(generation = self.generation, "grid is cycling, pausing");
            self.is_running = false;
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.record(&self.grid)
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.history.reset();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.generation = 0;
            self.history.reset();
        }
    }

    fn apply_random_pattern(&mut self) {
        let seed = self.last_update.elapsed().subsec_nanos() ^ self.generation;
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        self.history.reset();
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.grid.toggle(row, col) {
            self.history.reset();
        }
    }
}
