//! # TestShowcase: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`ShowcasePlugin`] and a
//! fixed frame time, so tests can drive the choreography frame by frame
//! without a window, renderer or asset server. Loaded models are simulated
//! with [`TestShowcase::spawn_loaded`].

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::app_state::ShowcaseState;
use crate::assets::{ModelLoadCommand, ModelSlot};
use crate::background::{BackdropPlane, BackgroundCycle};
use crate::controls::{BackRequested, NextBackdropRequested, SelectVehicleRequested};
use crate::params::ShowcaseParams;
use crate::tween::VehicleTweens;
use crate::vehicle::{ActiveVehicle, Road, VehicleKind, VehiclePreview};
use crate::weather::SnowField;
use crate::{ShowcasePlugin, ShowcaseUpdateSet};

/// Simulated frame time (~60 fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// Every [`ModelLoadCommand`] sent since the harness started.
#[derive(Resource, Default)]
struct RecordedLoads(Vec<ModelLoadCommand>);

fn record_loads(mut events: EventReader<ModelLoadCommand>, mut recorded: ResMut<RecordedLoads>) {
    recorded.0.extend(events.read().copied());
}

pub struct TestShowcase {
    app: App,
}

impl Default for TestShowcase {
    fn default() -> Self {
        Self::new()
    }
}

impl TestShowcase {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A showcase on the selection screen with default parameters.
    pub fn new() -> Self {
        Self::with_params(ShowcaseParams::default())
    }

    pub fn with_params(params: ShowcaseParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(params);
        app.add_plugins(ShowcasePlugin);
        app.init_resource::<RecordedLoads>();
        app.add_systems(Update, record_loads.after(ShowcaseUpdateSet::Visual));

        // First update applies the initial state and runs its OnEnter systems.
        app.update();
        Self { app }
    }

    /// Start the backdrop rotation at `index` (must be called before travel).
    pub fn with_backdrop_index(mut self, index: usize) -> Self {
        self.app
            .world_mut()
            .insert_resource(BackgroundCycle::with_index(index));
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Run enough frames to cover `duration` of app time, plus the frames
    /// needed for a resulting state change to apply.
    pub fn tick_for(&mut self, duration: Duration) {
        let frames = duration.as_millis().div_ceil(FRAME.as_millis()) as u32;
        self.tick(frames + 2);
    }

    pub fn select(&mut self, kind: VehicleKind) {
        self.app.world_mut().send_event(SelectVehicleRequested(kind));
        self.app.update();
    }

    pub fn back(&mut self) {
        self.app.world_mut().send_event(BackRequested);
        self.app.update();
    }

    pub fn next_backdrop(&mut self) {
        self.app.world_mut().send_event(NextBackdropRequested);
        self.app.update();
    }

    /// Run frames until the staging delay after a pick has elapsed.
    pub fn wait_for_travel(&mut self) {
        let delay = self.app.world().resource::<ShowcaseParams>().selection_delay();
        self.tick_for(delay);
    }

    /// Select `kind`, wait out the staging delay, and simulate the road and
    /// vehicle finishing loading.
    pub fn travel_with(&mut self, kind: VehicleKind) {
        self.select(kind);
        self.wait_for_travel();
        assert_eq!(self.state(), ShowcaseState::Traveling);
        self.spawn_loaded(ModelSlot::Road);
        self.spawn_loaded(ModelSlot::Vehicle(kind));
    }

    /// Spawn what the asset loader would spawn once `slot` finishes loading,
    /// minus the scene itself.
    pub fn spawn_loaded(&mut self, slot: ModelSlot) -> Entity {
        let world = self.app.world_mut();
        let id = {
            let mut commands = world.commands();
            let mut entity = commands.spawn((slot.transform(), Visibility::default()));
            slot.insert_markers(&mut entity);
            entity.id()
        };
        world.flush();
        id
    }

    /// Spawn what the renderer would spawn for the backdrop.
    pub fn spawn_backdrop_plane(&mut self) -> Entity {
        self.app
            .world_mut()
            .spawn((BackdropPlane, Transform::default()))
            .id()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> ShowcaseState {
        *self.app.world().resource::<State<ShowcaseState>>().get()
    }

    pub fn count<C: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<(), With<C>>().iter(world).count()
    }

    pub fn previews(&mut self) -> Vec<VehicleKind> {
        let world = self.app.world_mut();
        let mut kinds: Vec<VehicleKind> = world
            .query::<&VehiclePreview>()
            .iter(world)
            .map(|p| p.0)
            .collect();
        kinds.sort_by_key(|k| k.asset_name());
        kinds
    }

    pub fn active_vehicles(&mut self) -> Vec<VehicleKind> {
        let world = self.app.world_mut();
        world
            .query::<&ActiveVehicle>()
            .iter(world)
            .map(|v| v.0)
            .collect()
    }

    pub fn vehicle_x(&mut self) -> Option<f32> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Transform, With<ActiveVehicle>>()
            .iter(world)
            .next()
            .map(|t| t.translation.x)
    }

    pub fn vehicle_visibility(&mut self) -> Option<Visibility> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Visibility, With<ActiveVehicle>>()
            .iter(world)
            .next()
            .copied()
    }

    pub fn road_x(&mut self) -> Option<f32> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Transform, With<Road>>()
            .iter(world)
            .next()
            .map(|t| t.translation.x)
    }

    pub fn snow_particles(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query::<&SnowField>()
            .iter(world)
            .map(|f| f.len())
            .sum()
    }

    pub fn backdrop(&self) -> &BackgroundCycle {
        self.app.world().resource::<BackgroundCycle>()
    }

    pub fn tweens(&self) -> &VehicleTweens {
        self.app.world().resource::<VehicleTweens>()
    }

    pub fn load_commands(&self) -> &[ModelLoadCommand] {
        &self.app.world().resource::<RecordedLoads>().0
    }

    pub fn clear_load_commands(&mut self) {
        self.app.world_mut().resource_mut::<RecordedLoads>().0.clear();
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
