use conway::patterns::{apply_pattern, find};
use conway::{Cell, Grid};
use proptest::prelude::*;

fn seeded(rows: usize, columns: usize, live: &[(isize, isize)]) -> Grid {
    let mut grid = Grid::new(rows, columns).unwrap();
    for &(row, column) in live {
        grid.get_cell_mut(row, column).unwrap().make_alive();
    }
    grid
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|cell| cell.is_alive())
        .map(|cell| (cell.row(), cell.column()))
        .collect()
}

#[test]
fn blinker() {
    let mut grid = seeded(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    grid.step();
    assert_eq!(live_cells(&grid), vec![(0, 1), (1, 1), (2, 1)]);
    assert!(!grid.get_cell(1, 0).unwrap().is_alive());
    assert!(!grid.get_cell(1, 2).unwrap().is_alive());
}

#[test]
fn block_is_a_still_life() {
    let mut grid = seeded(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    let start = grid.clone();
    for _ in 0..25 {
        grid.step();
        assert_eq!(grid, start);
    }
}

#[test]
fn block_in_a_corner_is_a_still_life() {
    let mut grid = seeded(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    let start = grid.to_string();
    grid.step();
    grid.step();
    assert_eq!(grid.to_string(), start);
}

#[test]
fn glider_moves_diagonally() {
    let mut grid = seeded(10, 10, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    for _ in 0..4 {
        grid.step();
    }
    assert_eq!(live_cells(&grid), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn edges_do_not_wrap() {
    // On a torus the top and bottom rows would feed each other.
    let mut grid = seeded(4, 3, &[(0, 0), (0, 1), (0, 2)]);
    grid.step();
    assert_eq!(live_cells(&grid), vec![(0, 1), (1, 1)]);
}

#[test]
fn corner_and_edge_neighborhoods() {
    let mut grid = Grid::new(5, 5).unwrap();
    for row in 0..5 {
        for column in 0..5 {
            grid.toggle(row, column);
        }
    }
    let count = |row, column| grid.get_cell(row, column).unwrap().count_live_neighbors(&grid);
    assert_eq!(count(0, 0), 3);
    assert_eq!(count(0, 4), 3);
    assert_eq!(count(4, 0), 3);
    assert_eq!(count(0, 2), 5);
    assert_eq!(count(3, 0), 5);
    assert_eq!(count(2, 2), 8);
}

#[test]
fn pulsar_has_period_three() {
    let mut grid = Grid::new(17, 17).unwrap();
    apply_pattern(&mut grid, find("Pulsar").unwrap());
    let start = grid.clone();
    grid.step();
    assert_ne!(grid, start);
    grid.step();
    grid.step();
    assert_eq!(grid, start);
}

proptest! {
    #[test]
    fn lookups_outside_the_grid_are_absent(
        rows in 1usize..20,
        columns in 1usize..20,
        row in -30isize..30,
        column in -30isize..30,
    ) {
        let grid = Grid::new(rows, columns).unwrap();
        let inside = row >= 0 && column >= 0 && (row as usize) < rows && (column as usize) < columns;
        prop_assert_eq!(grid.get_cell(row, column).is_some(), inside);
    }

    #[test]
    fn centre_cell_follows_the_rules(alive in any::<bool>(), mask in any::<u8>()) {
        let neighbors: [(isize, isize); 8] = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let live: Vec<_> = neighbors
            .iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &coordinate)| coordinate)
            .collect();
        let mut grid = seeded(3, 3, &live);
        if alive {
            grid.get_cell_mut(1, 1).unwrap().make_alive();
        }

        grid.step();

        let expected = if alive { live.len() == 2 || live.len() == 3 } else { live.len() == 3 };
        prop_assert_eq!(grid.get_cell(1, 1).map(Cell::is_alive), Some(expected));
    }

    #[test]
    fn dead_grid_stays_dead(rows in 1usize..30, columns in 1usize..30) {
        let mut grid = Grid::new(rows, columns).unwrap();
        grid.step();
        prop_assert_eq!(grid.population(), 0);
    }
}
