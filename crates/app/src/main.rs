use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;

use showcase::config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use showcase::params::ShowcaseParams;

/// Default log filter; `RUST_LOG` overrides it on native builds.
const LOG_FILTER: &str = "info,wgpu=error,naga=warn";

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Vehicle Showcase".to_string(),
                    resolution: (DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT).into(),
                    present_mode: PresentMode::AutoVsync,
                    canvas: Some("#showcase".to_string()),
                    transparent: true,
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    );

    // Must be in place before ShowcasePlugin seeds its RNG from it.
    app.insert_resource(load_params());

    app.add_plugins((
        showcase::ShowcasePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}

/// Reads a JSON override from `SHOWCASE_PARAMS`, falling back to the
/// defaults when it is unset or invalid.
#[cfg(not(target_arch = "wasm32"))]
fn load_params() -> ShowcaseParams {
    let Ok(path) = std::env::var("SHOWCASE_PARAMS") else {
        return ShowcaseParams::default();
    };
    match ShowcaseParams::from_json_file(&path) {
        Ok(params) => {
            info!("Loaded showcase params from {path}");
            params
        }
        Err(e) => {
            warn!("Ignoring showcase params from {path}: {e}");
            ShowcaseParams::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_params() -> ShowcaseParams {
    ShowcaseParams::default()
}
