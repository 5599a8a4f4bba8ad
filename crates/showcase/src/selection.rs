//! Selection controller: picking a vehicle, the staging delay, and going back.
//!
//! ```text
//! SelectingVehicle --select--> Transitioning --delay--> Traveling
//!        ^                                                  |
//!        +----------------------back------------------------+
//! ```
//!
//! Triggers that arrive in the wrong state are dropped with a debug log.

use bevy::prelude::*;

use crate::app_state::ShowcaseState;
use crate::assets::{staged_preview_transform, ModelLoadCommand, ModelSlot};
use crate::background::BackdropPlane;
use crate::controls::{BackRequested, SelectVehicleRequested};
use crate::params::ShowcaseParams;
use crate::tween::VehicleTweens;
use crate::vehicle::{ActiveVehicle, Road, VehicleKind, VehiclePreview};

/// The vehicle picked on the selection screen, if any.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChosenVehicle(pub Option<VehicleKind>);

/// Counts down from the pick to the start of travel mode.
#[derive(Resource, Debug)]
pub struct SelectionDelay {
    pub kind: VehicleKind,
    pub timer: Timer,
}

// =============================================================================
// Systems
// =============================================================================

/// `OnEnter(SelectingVehicle)`: (re)load the three previews.
pub fn request_previews(
    mut chosen: ResMut<ChosenVehicle>,
    mut loads: EventWriter<ModelLoadCommand>,
) {
    chosen.0 = None;
    for slot in ModelSlot::previews() {
        loads.send(ModelLoadCommand::Load(slot));
    }
    info!("Selecting vehicle");
}

/// Handles a pick: drops the other previews, stages the chosen one and
/// starts the delay.
#[allow(clippy::too_many_arguments)]
pub fn handle_vehicle_selection(
    mut commands: Commands,
    state: Res<State<ShowcaseState>>,
    mut next_state: ResMut<NextState<ShowcaseState>>,
    params: Res<ShowcaseParams>,
    mut requests: EventReader<SelectVehicleRequested>,
    mut chosen: ResMut<ChosenVehicle>,
    mut previews: Query<(Entity, &VehiclePreview, &mut Transform)>,
    mut loads: EventWriter<ModelLoadCommand>,
) {
    let Some(SelectVehicleRequested(kind)) = requests.read().last().copied() else {
        return;
    };
    if *state.get() != ShowcaseState::SelectingVehicle {
        debug!("Ignoring {kind} selection in {:?}", state.get());
        return;
    }

    for other in kind.others() {
        loads.send(ModelLoadCommand::Discard(ModelSlot::Preview(other)));
    }
    for (entity, preview, mut transform) in &mut previews {
        if preview.0 == kind {
            *transform = staged_preview_transform(kind, *transform);
        } else {
            commands.entity(entity).despawn_recursive();
        }
    }

    chosen.0 = Some(kind);
    commands.insert_resource(SelectionDelay {
        kind,
        timer: Timer::new(params.selection_delay(), TimerMode::Once),
    });
    next_state.set(ShowcaseState::Transitioning);
    info!("Selected {kind}");
}

/// Once the delay elapses, removes the staged preview and enters travel mode.
pub fn finish_selection_delay(
    mut commands: Commands,
    time: Res<Time>,
    delay: Option<ResMut<SelectionDelay>>,
    previews: Query<Entity, With<VehiclePreview>>,
    mut loads: EventWriter<ModelLoadCommand>,
    mut next_state: ResMut<NextState<ShowcaseState>>,
) {
    let Some(mut delay) = delay else {
        return;
    };
    delay.timer.tick(time.delta());
    if !delay.timer.finished() {
        return;
    }

    loads.send(ModelLoadCommand::Discard(ModelSlot::Preview(delay.kind)));
    for entity in &previews {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<SelectionDelay>();
    next_state.set(ShowcaseState::Traveling);
}

/// `OnEnter(Traveling)`: load the road and the chosen vehicle.
pub fn request_travel_models(
    chosen: Res<ChosenVehicle>,
    mut loads: EventWriter<ModelLoadCommand>,
) {
    let Some(kind) = chosen.0 else {
        warn!("Entered travel mode without a chosen vehicle");
        return;
    };
    loads.send(ModelLoadCommand::Load(ModelSlot::Road));
    loads.send(ModelLoadCommand::Load(ModelSlot::Vehicle(kind)));
    info!("Traveling with {kind}");
}

/// Handles "back": only valid while travelling.
pub fn handle_back(
    state: Res<State<ShowcaseState>>,
    mut requests: EventReader<BackRequested>,
    mut next_state: ResMut<NextState<ShowcaseState>>,
) {
    if requests.read().last().is_none() {
        return;
    }
    if *state.get() != ShowcaseState::Traveling {
        debug!("Ignoring back in {:?}", state.get());
        return;
    }
    next_state.set(ShowcaseState::SelectingVehicle);
}

/// `OnExit(Traveling)`: clears the vehicle, road and backdrop, cancels
/// animations and drops any travel models still loading.
pub fn tear_down_travel(
    mut commands: Commands,
    chosen: Res<ChosenVehicle>,
    mut tweens: ResMut<VehicleTweens>,
    scenery: Query<Entity, Or<(With<ActiveVehicle>, With<Road>, With<BackdropPlane>)>>,
    mut loads: EventWriter<ModelLoadCommand>,
) {
    tweens.cancel_all();
    for entity in &scenery {
        commands.entity(entity).despawn_recursive();
    }
    loads.send(ModelLoadCommand::Discard(ModelSlot::Road));
    if let Some(kind) = chosen.0 {
        loads.send(ModelLoadCommand::Discard(ModelSlot::Vehicle(kind)));
    }
    info!("Left travel mode");
}
