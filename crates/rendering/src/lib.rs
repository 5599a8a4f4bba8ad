use bevy::prelude::*;

pub mod backdrop;
pub mod model_loader;
pub mod pointer;
pub mod scene_host;
pub mod snow;

use showcase::ShowcaseUpdateSet;

use backdrop::BackdropTextures;
use model_loader::{LoadProgress, PendingModels};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingModels>()
            .init_resource::<LoadProgress>()
            .init_resource::<BackdropTextures>()
            .add_systems(Startup, scene_host::setup_scene);

        // Pointer feeds steering, so it runs before the showcase reads it.
        app.add_systems(
            Update,
            pointer::track_pointer.before(ShowcaseUpdateSet::Visual),
        );

        // Model loading reacts to requests sent during choreography.
        app.add_systems(
            Update,
            (
                model_loader::handle_load_commands,
                model_loader::spawn_loaded_models,
            )
                .chain()
                .after(ShowcaseUpdateSet::Choreography),
        );

        app.add_systems(
            Update,
            (
                backdrop::sync_backdrop_plane,
                backdrop::scroll_backdrop_texture,
                backdrop::report_texture_failures,
                snow::draw_snow,
            )
                .chain()
                .after(ShowcaseUpdateSet::Visual),
        );
    }
}
