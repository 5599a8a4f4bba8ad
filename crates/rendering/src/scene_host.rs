//! Camera, lights and clear colour for the showcase scene.

use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;

use showcase::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_Z};

/// Soft white fill so unlit sides of the models are still readable.
const AMBIENT_BRIGHTNESS: f32 = 800.0;

/// Key light from the upper right front.
const DIRECTIONAL_ILLUMINANCE: f32 = 5000.0;
const DIRECTIONAL_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Fully transparent, so the page behind the canvas shows through on the
/// selection screen. Needs a transparent window.
pub const CLEAR_COLOR: Color = Color::NONE;

/// Marker for the single showcase camera.
#[derive(Component)]
pub struct ShowcaseCamera;

pub fn camera_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

/// Startup: spawn the camera looking down -Z and the two lights.
pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(ClearColor(CLEAR_COLOR));

    commands.spawn((
        ShowcaseCamera,
        Camera3d::default(),
        camera_projection(),
        Transform::from_xyz(0.0, 0.0, CAMERA_Z),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
