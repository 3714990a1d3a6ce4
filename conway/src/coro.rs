// coro.rs - Generation step with one tokio task per row
//
// Each row task evolves a copy of its row against a shared snapshot. The grid
// itself is only written once every task has been joined.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{trace, warn};

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::{Generation, Grid};

/// Row coroutine: evolves every cell of one row
async fn evolve_row(row_index: usize, mut row: Vec<Cell>, generation: Arc<Generation>) -> (usize, Vec<Cell>) {
    for cell in row.iter_mut() {
        cell.evolve(&*generation);
        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, row)
}

/// Advances `grid` by one generation, evolving rows concurrently.
///
/// Produces the same grid as [`Grid::step`]. The grid is left as it was if a
/// row task fails or the returned future is dropped before it completes; any
/// row tasks still running are aborted.
pub async fn step_rows(grid: &mut Grid) -> Result<()> {
    let generation = Arc::new(grid.snapshot());

    // Spawn all row coroutines at once
    let mut tasks = JoinSet::new();
    for (row_index, row) in grid.clone_rows().into_iter().enumerate() {
        tasks.spawn(evolve_row(row_index, row, Arc::clone(&generation)));
    }

    // Wait for every row before anything advances
    let mut evolved = vec![Vec::new(); grid.rows()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((row_index, row)) => evolved[row_index] = row,
            Err(err) => {
                warn!(error = %err, "row task failed, keeping previous generation");
                return Err(err.into());
            }
        }
    }
    trace!(rows = evolved.len(), "joined row tasks");

    grid.replace_rows(evolved);
    grid.advance();
    Ok(())
}
