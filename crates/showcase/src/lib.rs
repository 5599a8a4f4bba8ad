use bevy::prelude::*;

pub mod app_state;
pub mod app_state_plugin;
pub mod assets;
pub mod background;
pub mod config;
pub mod controls;
pub mod error;
pub mod params;
pub mod selection;
pub mod showcase_rng;
pub mod travel;
pub mod tween;
pub mod vehicle;
pub mod weather;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use app_state::ShowcaseState;
use params::ShowcaseParams;
use showcase_rng::ShowcaseRng;

// ---------------------------------------------------------------------------
// Update phases
// ---------------------------------------------------------------------------

/// Ordered phases for showcase systems in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Choreography` → `Visual`. Rendering and
/// UI plugins place their systems relative to these sets.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShowcaseUpdateSet {
    /// Visitor triggers (select, back, next).
    Input,
    /// Timers, tweens, road and backdrop scrolling, weather.
    Choreography,
    /// Visual-only updates that read choreography state.
    Visual,
}

pub struct ShowcasePlugin;

impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        // The binary may insert an overridden ShowcaseParams before this plugin.
        app.init_resource::<ShowcaseParams>();
        let seed = app.world().resource::<ShowcaseParams>().rng_seed;

        app.add_plugins(app_state_plugin::ShowcaseStatePlugin)
            .insert_resource(ShowcaseRng::from_seed(seed))
            .init_resource::<background::BackgroundCycle>()
            .init_resource::<tween::VehicleTweens>()
            .init_resource::<selection::ChosenVehicle>()
            .init_resource::<vehicle::PointerPosition>()
            .add_event::<assets::ModelLoadCommand>()
            .add_event::<controls::SelectVehicleRequested>()
            .add_event::<controls::BackRequested>()
            .add_event::<controls::NextBackdropRequested>()
            .add_event::<background::BackdropChanged>()
            .add_event::<tween::TweenFinished>()
            .configure_sets(
                Update,
                (
                    ShowcaseUpdateSet::Input,
                    ShowcaseUpdateSet::Choreography,
                    ShowcaseUpdateSet::Visual,
                )
                    .chain(),
            );

        // State transitions
        app.add_systems(
            OnEnter(ShowcaseState::SelectingVehicle),
            selection::request_previews,
        )
        .add_systems(
            OnEnter(ShowcaseState::Traveling),
            (
                background::activate_backdrop,
                selection::request_travel_models,
            ),
        )
        .add_systems(
            OnExit(ShowcaseState::Traveling),
            (
                selection::tear_down_travel,
                background::deactivate_backdrop,
                weather::clear_snow,
            ),
        );

        // Visitor triggers
        app.add_systems(
            Update,
            (
                selection::handle_vehicle_selection,
                selection::handle_back,
                background::advance_backdrop_on_request,
            )
                .in_set(ShowcaseUpdateSet::Input),
        );

        // Per-frame choreography
        app.add_systems(
            Update,
            (
                selection::finish_selection_delay
                    .run_if(in_state(ShowcaseState::Transitioning)),
                travel::scroll_road.run_if(in_state(ShowcaseState::Traveling)),
                background::scroll_backdrop.run_if(in_state(ShowcaseState::Traveling)),
                travel::start_loop_sequence,
                travel::drive_vehicle_tweens,
                travel::continue_after_tween,
                weather::sync_snow_with_backdrop,
                weather::fall_snow,
            )
                .chain()
                .in_set(ShowcaseUpdateSet::Choreography),
        );

        app.add_systems(
            Update,
            vehicle::steer_vehicles_with_pointer.in_set(ShowcaseUpdateSet::Visual),
        );
    }
}
