mod common;

use common::GridBuilder;
use moser_core::{Rgb, TrailSettings};

#[test]
fn test_trail_fades_out_after_twenty_six_generations() {
    let mut grid = GridBuilder::new(5, 5)
        .with_cell(2, 2, Rgb::new(0, 255, 0))
        .build();

    grid.update();
    let cell = *grid.cell(2, 2).unwrap();
    assert!(!cell.is_alive);
    assert_eq!(cell.a, 254);
    assert_eq!(cell.rgb(), Rgb::new(0, 255, 0));

    grid.step(25);
    let cell = *grid.cell(2, 2).unwrap();
    assert_eq!(cell.a, 4);
    assert!(cell.has_trail());
    assert_eq!(grid.last_stats().trails, 1);

    grid.update();
    let cell = *grid.cell(2, 2).unwrap();
    assert_eq!(cell.a, 0);
    assert!(!cell.has_trail());
    assert_eq!(cell.rgb(), Rgb::new(0, 125, 0));
    assert_eq!(grid.last_stats().trails, 0);
}

#[test]
fn test_trail_alpha_is_monotonic() {
    let mut grid = GridBuilder::new(6, 6)
        .with_cell(1, 1, Rgb::new(200, 100, 50))
        .build();
    grid.update();
    let mut last = grid.cell(1, 1).unwrap().a;
    for _ in 0..40 {
        grid.update();
        let a = grid.cell(1, 1).unwrap().a;
        assert!(a <= last);
        last = a;
    }
    assert_eq!(last, 0);
}

#[test]
fn test_rebirth_replaces_trail() {
    let mut grid = GridBuilder::new(5, 5)
        .with_pattern(&[(1, 1), (3, 1), (2, 3)])
        .build();
    grid.set_cell_state(2, 2, false, 50, 50, 50, 200);
    assert!(grid.cell(2, 2).unwrap().has_trail());

    grid.update();
    let reborn = *grid.cell(2, 2).unwrap();
    assert!(reborn.is_alive);
    assert!(!reborn.has_trail());
    assert_eq!(reborn.a, 255);
    assert_eq!(reborn.rgb(), moser_core::color::DEFAULT_BIRTH_COLOR);
}

#[test]
fn test_custom_trail_settings_flow_through_update() {
    let trail = TrailSettings {
        death_opacity: 100,
        fade_step: 40,
        color_fade_step: 0,
    };
    let mut grid = GridBuilder::new(4, 4)
        .with_trail(trail)
        .with_cell(0, 0, Rgb::new(9, 9, 9))
        .build();
    grid.update();
    assert_eq!(grid.cell(0, 0).unwrap().a, 100);
    grid.update();
    assert_eq!(grid.cell(0, 0).unwrap().a, 60);
    grid.step(2);
    let cell = grid.cell(0, 0).unwrap();
    assert_eq!(cell.a, 0);
    assert_eq!(cell.rgb(), Rgb::new(9, 9, 9));
}
