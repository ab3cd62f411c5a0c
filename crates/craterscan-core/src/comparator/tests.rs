//! Tests for the reveal comparator geometry

use super::*;

#[test]
fn test_initial_state_is_centered_and_unmeasured() {
    let state = ComparatorState::new();

    assert_eq!(state.split_percent(), 50);
    assert_eq!(state.container_width(), 0.0);
    assert_eq!(state.clip_boundary(), 0.0);
}

#[test]
fn test_clip_boundary_is_proportional() {
    let mut state = ComparatorState::new();
    state.set_container_width(800.0);

    state.set_split_percent(25);
    assert_eq!(state.clip_boundary(), 200.0);

    state.set_split_percent(75);
    assert_eq!(state.clip_boundary(), 600.0);
}

#[test]
fn test_clip_boundary_stays_within_container() {
    let widths = [0.0, 1.0, 320.0, 799.5, 2560.0];

    for width in widths {
        for percent in 0..=100u8 {
            let mut state = ComparatorState::new();
            state.set_container_width(width);
            state.set_split_percent(percent);

            let boundary = state.clip_boundary();
            assert!(
                (0.0..=width).contains(&boundary),
                "boundary {} outside [0, {}] at {}%",
                boundary,
                width,
                percent
            );
            assert_eq!(boundary, f64::from(percent) / 100.0 * width);
        }
    }
}

#[test]
fn test_extremes_reveal_exactly_one_image() {
    let mut state = ComparatorState::new();
    state.set_container_width(1024.0);

    state.set_split_percent(0);
    assert_eq!(state.clip_boundary(), 0.0);
    assert_eq!(state.right_inset(), 1024.0);

    state.set_split_percent(100);
    assert_eq!(state.clip_boundary(), 1024.0);
    assert_eq!(state.right_inset(), 0.0);
}

#[test]
fn test_resize_recomputes_boundary_without_drifting_percent() {
    let mut state = ComparatorState::new();
    state.set_container_width(600.0);
    state.set_split_percent(30);
    assert_eq!(state.clip_boundary(), 180.0);

    state.set_container_width(900.0);

    // The percentage is the durable quantity
    assert_eq!(state.split_percent(), 30);
    assert_eq!(state.clip_boundary(), 270.0);

    state.set_container_width(0.0);
    assert_eq!(state.split_percent(), 30);
    assert_eq!(state.clip_boundary(), 0.0);
}

#[test]
fn test_negative_measurement_collapses_to_zero() {
    let mut state = ComparatorState::new();
    state.set_container_width(-50.0);

    assert_eq!(state.container_width(), 0.0);
    assert_eq!(state.clip_boundary(), 0.0);
}

#[test]
fn test_boundary_and_inset_partition_the_container() {
    let mut state = ComparatorState::new();
    state.set_container_width(777.0);

    for percent in [0u8, 13, 50, 87, 100] {
        state.set_split_percent(percent);
        let total = state.clip_boundary() + state.right_inset();
        assert!((total - 777.0).abs() < 1e-9);
    }
}
