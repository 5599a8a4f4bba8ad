//! Road scrolling and the vehicle exit/re-enter sequence.

use std::time::Duration;

use bevy::prelude::Visibility;

use crate::params::ShowcaseParams;
use crate::test_harness::TestShowcase;
use crate::tween::TweenSlot;
use crate::vehicle::VehicleKind;

/// Defaults with a backdrop that never loops on its own.
fn no_auto_loop() -> ShowcaseParams {
    ShowcaseParams {
        backdrop_loop_threshold: 1_000.0,
        ..Default::default()
    }
}

#[test]
fn test_road_scrolls_left_every_frame() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Car);
    let start = showcase.road_x().expect("road spawned");
    showcase.tick(10);
    let moved = start - showcase.road_x().expect("road spawned");
    assert!((moved - 7.0).abs() < 1e-3, "road moved {moved}");
}

#[test]
fn test_next_hides_vehicle_and_resets_road() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Truck);
    showcase.tick(20);
    assert!(showcase.road_x().unwrap() < 0.0);

    showcase.next_backdrop();

    assert_eq!(showcase.backdrop().index(), 1);
    assert_eq!(showcase.road_x(), Some(0.0));
    assert_eq!(showcase.vehicle_visibility(), Some(Visibility::Hidden));
    assert!(showcase.tweens().get(TweenSlot::VehicleExit).is_some());
}

#[test]
fn test_exit_moves_monotonically_to_target() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Car);
    showcase.next_backdrop();

    let mut last = showcase.vehicle_x().unwrap();
    assert!(last <= 100.0);
    while showcase.tweens().get(TweenSlot::VehicleExit).is_some() {
        showcase.tick(1);
        let x = showcase.vehicle_x().unwrap();
        if showcase.tweens().get(TweenSlot::VehicleExit).is_none() {
            break;
        }
        assert!(x <= last, "exit went backwards: {last} -> {x}");
        assert!(x >= -500.0);
        last = x;
    }
}

#[test]
fn test_vehicle_reappears_and_crosses_after_exit() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Van);
    showcase.next_backdrop();
    showcase.tick_for(Duration::from_millis(500));

    assert_eq!(showcase.vehicle_visibility(), Some(Visibility::Inherited));
    assert!(showcase.tweens().get(TweenSlot::VehicleExit).is_none());
    assert!(showcase.tweens().get(TweenSlot::VehicleCross).is_some());
    let x = showcase.vehicle_x().unwrap();
    assert!((-1200.0..-1100.0).contains(&x), "cross started at {x}");

    let mut last = x;
    for _ in 0..200 {
        showcase.tick(1);
        let x = showcase.vehicle_x().unwrap();
        assert!(x >= last && x <= 1400.0);
        last = x;
    }
}

#[test]
fn test_cross_ends_at_far_right() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Car);
    showcase.next_backdrop();
    showcase.tick_for(Duration::from_millis(500));
    showcase.tick_for(Duration::from_millis(17_000));

    assert_eq!(showcase.vehicle_x(), Some(1400.0));
    assert!(showcase.tweens().is_empty());
}

#[test]
fn test_next_mid_cross_supersedes_running_tweens() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.travel_with(VehicleKind::Truck);
    showcase.next_backdrop();
    showcase.tick_for(Duration::from_millis(500));
    showcase.tick(60);
    assert!(showcase.tweens().get(TweenSlot::VehicleCross).is_some());

    showcase.next_backdrop();

    assert_eq!(showcase.tweens().len(), 1);
    assert!(showcase.tweens().get(TweenSlot::VehicleExit).is_some());
    assert_eq!(showcase.vehicle_visibility(), Some(Visibility::Hidden));
    assert_eq!(showcase.backdrop().index(), 2);
}

#[test]
fn test_backdrop_loops_on_its_own() {
    let params = ShowcaseParams {
        backdrop_scroll_step: 0.125,
        backdrop_loop_threshold: 0.5,
        ..Default::default()
    };
    let mut showcase = TestShowcase::with_params(params);
    showcase.travel_with(VehicleKind::Car);
    // The offset passes 0.5 on the fifth travelling frame.
    showcase.tick(6);
    assert_eq!(showcase.backdrop().index(), 1);
    assert!(showcase.tweens().get(TweenSlot::VehicleExit).is_some());
    assert_eq!(showcase.vehicle_visibility(), Some(Visibility::Hidden));
}

#[test]
fn test_next_before_vehicle_loads_only_changes_backdrop() {
    let mut showcase = TestShowcase::with_params(no_auto_loop());
    showcase.select(VehicleKind::Car);
    showcase.wait_for_travel();
    showcase.next_backdrop();
    assert_eq!(showcase.backdrop().index(), 1);
    assert!(showcase.tweens().is_empty());
}

#[test]
fn test_next_ignored_on_selection_screen() {
    let mut showcase = TestShowcase::new();
    showcase.next_backdrop();
    assert_eq!(showcase.backdrop().index(), 0);
    assert!(showcase.tweens().is_empty());
}
