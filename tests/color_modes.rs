mod common;

use common::GridBuilder;
use moser_core::color::{DEFAULT_BIRTH_COLOR, NO_NEIGHBOR_COLOR};
use moser_core::{ColorBehavior, Rgb, SharedColorBehavior};

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

/// An L-tromino whose only birth is at (2, 2).
fn tromino(behavior: ColorBehavior, a: Rgb, b: Rgb, c: Rgb) -> moser_core::Grid {
    GridBuilder::new(6, 6)
        .with_behavior(behavior)
        .with_cell(1, 1, a)
        .with_cell(2, 1, b)
        .with_cell(1, 2, c)
        .build()
}

#[test]
fn test_default_births_use_fixed_color() {
    let mut grid = tromino(ColorBehavior::Default, RED, RED, BLUE);
    grid.update();
    assert_alive!(grid, 2, 2);
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), DEFAULT_BIRTH_COLOR);
    assert_eq!(grid.last_stats().births, 1);
}

#[test]
fn test_average_color_truncates() {
    let mut grid = tromino(ColorBehavior::AverageColor, RED, GREEN, BLUE);
    grid.update();
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), Rgb::new(85, 85, 85));

    let mut grid = tromino(
        ColorBehavior::AverageColor,
        Rgb::new(10, 0, 0),
        Rgb::new(0, 0, 0),
        Rgb::new(0, 0, 0),
    );
    grid.update();
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), Rgb::new(3, 0, 0));
}

#[test]
fn test_majority_color_picks_most_frequent() {
    let mut grid = tromino(ColorBehavior::MajorityColor, BLUE, RED, RED);
    grid.update();
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), RED);
}

#[test]
fn test_majority_tie_goes_to_first_neighbor_in_scan_order() {
    // Scan order from (2, 2) meets (1, 1), then (1, 2), then (2, 1).
    let mut grid = tromino(ColorBehavior::MajorityColor, BLUE, RED, GREEN);
    grid.update();
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), BLUE);

    let mut grid = tromino(ColorBehavior::MajorityColor, RED, BLUE, GREEN);
    grid.update();
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), RED);
}

#[test]
fn test_survivors_keep_their_color() {
    let mut grid = tromino(ColorBehavior::AverageColor, RED, GREEN, BLUE);
    grid.update();
    assert_eq!(grid.cell(1, 1).unwrap().rgb(), RED);
    assert_eq!(grid.cell(2, 1).unwrap().rgb(), GREEN);
    assert_eq!(grid.cell(1, 2).unwrap().rgb(), BLUE);
}

#[test]
fn test_zero_neighbor_birth_is_gray() {
    let mut grid = GridBuilder::new(3, 3)
        .with_behavior(ColorBehavior::MajorityColor)
        .with_rules("B0/S")
        .build();
    grid.update();
    assert!(grid
        .cells()
        .iter()
        .all(|c| c.is_alive && c.rgb() == NO_NEIGHBOR_COLOR));
}

#[test]
fn test_behavior_change_applies_next_generation() {
    let shared = SharedColorBehavior::new(ColorBehavior::Default);
    let mut grid = GridBuilder::new(5, 5)
        .with_shared_behavior(shared.clone())
        .with_cell(1, 2, RED)
        .with_cell(2, 2, RED)
        .with_cell(3, 2, RED)
        .build();

    grid.update();
    assert_eq!(grid.cell(2, 1).unwrap().rgb(), DEFAULT_BIRTH_COLOR);

    shared.set(ColorBehavior::MajorityColor);
    grid.update();
    // The vertical blinker is green at both ends and red in the middle, so
    // the new horizontal ends inherit green by majority.
    assert_eq!(grid.cell(1, 2).unwrap().rgb(), DEFAULT_BIRTH_COLOR);
    assert_eq!(grid.cell(2, 2).unwrap().rgb(), RED);
}

#[test]
fn test_one_handle_drives_many_grids() {
    let shared = SharedColorBehavior::new(ColorBehavior::Default);
    let mut a = tromino(ColorBehavior::Default, RED, RED, RED);
    let mut b = GridBuilder::new(6, 6)
        .with_shared_behavior(shared.clone())
        .with_cell(1, 1, BLUE)
        .with_cell(2, 1, BLUE)
        .with_cell(1, 2, BLUE)
        .build();
    shared.set(ColorBehavior::AverageColor);
    a.update();
    b.update();
    assert_eq!(a.cell(2, 2).unwrap().rgb(), DEFAULT_BIRTH_COLOR);
    assert_eq!(b.cell(2, 2).unwrap().rgb(), BLUE);
}
