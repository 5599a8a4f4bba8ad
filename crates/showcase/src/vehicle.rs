//! Vehicle kinds, their scene markers and pointer steering.

use std::fmt;

use bevy::prelude::*;

use crate::config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// The three vehicles a visitor can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Van,
    Truck,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Van, VehicleKind::Truck];

    /// Asset directory name under `models/`.
    pub fn asset_name(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Van => "van",
            VehicleKind::Truck => "truck",
        }
    }

    /// Yaw (radians) added to the pointer fraction when steering this model.
    pub fn pointer_yaw_offset(self) -> f32 {
        match self {
            VehicleKind::Car => 0.0,
            VehicleKind::Van => -0.8,
            VehicleKind::Truck => -1.5,
        }
    }

    /// The two kinds that are not `self`.
    pub fn others(self) -> impl Iterator<Item = VehicleKind> {
        VehicleKind::ALL.into_iter().filter(move |k| *k != self)
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

// ---------------------------------------------------------------------------
// Scene markers
// ---------------------------------------------------------------------------

/// A vehicle shown on the selection screen.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehiclePreview(pub VehicleKind);

/// The vehicle driving along the road in travel mode. At most one exists.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveVehicle(pub VehicleKind);

/// The scrolling road under the active vehicle.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Road;

/// Entities whose yaw follows the pointer.
///
/// `pitch` and `heading` are the model's fixed base rotation; the pointer
/// adds `kind offset + pointer_x / viewport_width` on top of `heading`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PointerSteered {
    pub kind: VehicleKind,
    pub pitch: f32,
    pub heading: f32,
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

/// Last known pointer position in window pixels, plus the viewport size
/// used to normalise it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self {
            x: DEFAULT_VIEWPORT_WIDTH / 2.0,
            y: DEFAULT_VIEWPORT_HEIGHT / 2.0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl PointerPosition {
    /// Pointer X as a fraction of the viewport width. A zero-width viewport
    /// (minimised window) reads as the left edge.
    pub fn x_fraction(&self) -> f32 {
        if self.viewport_width <= 0.0 {
            return 0.0;
        }
        self.x / self.viewport_width
    }
}

/// Yaw for a steered model: a linear map of pointer X across the viewport
/// onto the model's offset.
pub fn pointer_yaw(kind: VehicleKind, pointer: &PointerPosition) -> f32 {
    kind.pointer_yaw_offset() + pointer.x_fraction()
}

/// System: point every steered vehicle according to the pointer.
pub fn steer_vehicles_with_pointer(
    pointer: Res<PointerPosition>,
    mut steered: Query<(&PointerSteered, &mut Transform)>,
) {
    for (steer, mut transform) in &mut steered {
        let yaw = steer.heading + pointer_yaw(steer.kind, &pointer);
        transform.rotation = Quat::from_euler(EulerRot::XYZ, steer.pitch, yaw, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = VehicleKind::Van.others().collect();
        assert_eq!(others, vec![VehicleKind::Car, VehicleKind::Truck]);
    }

    #[test]
    fn test_pointer_yaw_is_linear_in_x() {
        let mut pointer = PointerPosition {
            x: 0.0,
            viewport_width: 1000.0,
            ..Default::default()
        };
        assert_eq!(pointer_yaw(VehicleKind::Car, &pointer), 0.0);
        pointer.x = 500.0;
        assert!((pointer_yaw(VehicleKind::Car, &pointer) - 0.5).abs() < 1e-6);
        pointer.x = 1000.0;
        assert!((pointer_yaw(VehicleKind::Truck, &pointer) - (-0.5)).abs() < 1e-6);
        assert!((pointer_yaw(VehicleKind::Van, &pointer) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_width_viewport_reads_left_edge() {
        let pointer = PointerPosition {
            x: 300.0,
            viewport_width: 0.0,
            ..Default::default()
        };
        assert_eq!(pointer.x_fraction(), 0.0);
    }

    #[test]
    fn test_steering_keeps_pitch() {
        let mut app = App::new();
        app.insert_resource(PointerPosition {
            x: 640.0,
            viewport_width: 1280.0,
            ..Default::default()
        });
        app.add_systems(Update, steer_vehicles_with_pointer);
        let pitch = 10f32.to_radians();
        let entity = app
            .world_mut()
            .spawn((
                PointerSteered {
                    kind: VehicleKind::Van,
                    pitch,
                    heading: 0.0,
                },
                Transform::default(),
            ))
            .id();
        app.update();

        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        let (x, y, _) = rotation.to_euler(EulerRot::XYZ);
        assert!((x - pitch).abs() < 1e-4, "pitch changed: {x}");
        assert!((y - (-0.8 + 0.5)).abs() < 1e-4, "unexpected yaw {y}");
    }
}
