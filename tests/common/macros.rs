/// Asserts that the cell at `(col, row)` is alive.
#[macro_export]
macro_rules! assert_alive {
    ($grid:expr, $col:expr, $row:expr) => {
        let cell = $grid.cell($col, $row).expect("cell in range");
        assert!(
            cell.is_alive,
            "Cell ({}, {}) should be alive: {:?}",
            $col,
            $row,
            cell
        );
    };
}

/// Asserts that the cell at `(col, row)` is dead.
#[macro_export]
macro_rules! assert_dead {
    ($grid:expr, $col:expr, $row:expr) => {
        let cell = $grid.cell($col, $row).expect("cell in range");
        assert!(
            !cell.is_alive,
            "Cell ({}, {}) should be dead: {:?}",
            $col,
            $row,
            cell
        );
    };
}

/// Asserts that the living cell count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($grid:expr, $count:expr) => {
        assert_eq!($grid.population(), $count, "Population count mismatch");
    };
}
