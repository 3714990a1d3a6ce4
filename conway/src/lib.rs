// lib.rs - Conway's Game of Life on a fixed-size, non-wrapping grid

pub mod cell;       // Cell state and Conway's rules
pub mod config;     // Shared simulation settings
pub mod coro;       // Row-coroutine generation step
pub mod error;
pub mod grid;       // Grid ownership and the two-phase step
pub mod history;    // Cycle detection
pub mod patterns;   // Starting patterns

pub use cell::{next_state, Cell, Neighborhood, ALIVE_GLYPH, DEAD_GLYPH};
pub use config::SimConfig;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use history::History;
pub use patterns::{Pattern, PATTERNS};
