//! Snowflake rendering.
//!
//! Each particle of a [`SnowField`] is drawn as a short vertical gizmo streak
//! at its current position. Nothing is drawn when no field exists.

use bevy::prelude::*;

use showcase::weather::SnowField;

/// Length of each flake streak in world units.
const FLAKE_LENGTH: f32 = 1.5;

const FLAKE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);

/// Endpoints of the streak drawn for a flake at `position`.
pub fn flake_segment(position: Vec3) -> (Vec3, Vec3) {
    (position, position + Vec3::Y * FLAKE_LENGTH)
}

/// System: draw every flake of every snow field.
pub fn draw_snow(fields: Query<(&SnowField, &Transform)>, mut gizmos: Gizmos) {
    for (field, transform) in &fields {
        for &p in &field.positions {
            let (bottom, top) = flake_segment(transform.transform_point(p));
            gizmos.line(bottom, top, FLAKE_COLOR);
        }
    }
}
