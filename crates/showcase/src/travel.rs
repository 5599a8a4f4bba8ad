//! Travel choreographer.
//!
//! Every frame the road scrolls left. Whenever the backdrop changes by
//! "next" or by looping, the vehicle runs a three-phase sequence:
//!
//! 1. it is hidden,
//! 2. it slides to the exit X over the short exit duration,
//! 3. it reappears at the far left and drives across to the far right over
//!    the long cross duration.
//!
//! The road snaps back to X = 0 at the same time. Starting a sequence cancels
//! whatever vehicle tweens were still running, so two sequences never fight
//! over the vehicle transform.

use bevy::prelude::*;

use crate::background::BackdropChanged;
use crate::params::ShowcaseParams;
use crate::tween::{Tween, TweenFinish, TweenFinished, TweenSlot, VehicleTweens};
use crate::vehicle::{ActiveVehicle, Road};

/// Per frame: scroll the road towards -X.
pub fn scroll_road(params: Res<ShowcaseParams>, mut roads: Query<&mut Transform, With<Road>>) {
    for mut transform in &mut roads {
        transform.translation.x -= params.road_scroll_step;
    }
}

/// Starts the exit phase for every backdrop change that asks for it.
pub fn start_loop_sequence(
    time: Res<Time>,
    params: Res<ShowcaseParams>,
    mut changes: EventReader<BackdropChanged>,
    mut tweens: ResMut<VehicleTweens>,
    mut roads: Query<&mut Transform, (With<Road>, Without<ActiveVehicle>)>,
    mut vehicles: Query<(&mut Transform, &mut Visibility), With<ActiveVehicle>>,
) {
    let Some(change) = changes
        .read()
        .filter(|change| change.cause.runs_loop_sequence())
        .last()
    else {
        return;
    };

    for mut road in &mut roads {
        road.translation.x = 0.0;
    }

    let Ok((transform, mut visibility)) = vehicles.get_single_mut() else {
        debug!(
            "Backdrop {} changed before the vehicle loaded; skipping sequence",
            change.backdrop().name
        );
        return;
    };

    tweens.cancel_all();
    *visibility = Visibility::Hidden;
    tweens.start(
        TweenSlot::VehicleExit,
        Tween::new(
            transform.translation.x,
            params.exit_target_x,
            params.exit_duration(),
            time.elapsed(),
        ),
        TweenFinish::RevealAndCross,
    );
}

/// Applies every in-flight tween to the vehicle and retires finished ones.
pub fn drive_vehicle_tweens(
    time: Res<Time>,
    mut tweens: ResMut<VehicleTweens>,
    mut vehicles: Query<&mut Transform, With<ActiveVehicle>>,
    mut finished: EventWriter<TweenFinished>,
) {
    if tweens.is_empty() {
        return;
    }
    let now = time.elapsed();
    for mut transform in &mut vehicles {
        for (_, x) in tweens.samples(now) {
            transform.translation.x = x;
        }
    }
    for done in tweens.retire_finished(now) {
        finished.send(done);
    }
}

/// Runs tween continuations: after the exit, show the vehicle and drive it
/// across the new backdrop.
pub fn continue_after_tween(
    time: Res<Time>,
    params: Res<ShowcaseParams>,
    mut finished: EventReader<TweenFinished>,
    mut tweens: ResMut<VehicleTweens>,
    mut vehicles: Query<(&mut Transform, &mut Visibility), With<ActiveVehicle>>,
) {
    for done in finished.read() {
        if done.finish != TweenFinish::RevealAndCross {
            continue;
        }
        for (mut transform, mut visibility) in &mut vehicles {
            *visibility = Visibility::Inherited;
            transform.translation.x = params.cross_from_x;
        }
        tweens.start(
            TweenSlot::VehicleCross,
            Tween::new(
                params.cross_from_x,
                params.cross_to_x,
                params.cross_duration(),
                time.elapsed(),
            ),
            TweenFinish::Nothing,
        );
    }
}
