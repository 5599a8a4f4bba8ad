//! Model slots: which glTF scenes the showcase loads and where they go.
//!
//! The asset loader in the `rendering` crate owns the actual
//! `AssetServer` handles. This module describes the slots, their fixed
//! transforms, and the [`ModelLoadCommand`] event the choreography uses to
//! request or discard them.

use std::fmt;

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;

use crate::vehicle::{ActiveVehicle, PointerSteered, Road, VehicleKind, VehiclePreview};

/// Every model the showcase can place in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    /// A vehicle on the selection screen.
    Preview(VehicleKind),
    /// The road in travel mode.
    Road,
    /// The vehicle driving in travel mode.
    Vehicle(VehicleKind),
}

impl ModelSlot {
    pub fn previews() -> impl Iterator<Item = ModelSlot> {
        VehicleKind::ALL.into_iter().map(ModelSlot::Preview)
    }

    /// Asset path of the slot's glTF file, relative to the asset root.
    pub fn scene_path(self) -> String {
        let dir = match self {
            ModelSlot::Preview(kind) | ModelSlot::Vehicle(kind) => kind.asset_name(),
            ModelSlot::Road => "road",
        };
        format!("models/{dir}/scene.gltf")
    }

    /// Fixed placement applied once the model has loaded.
    pub fn transform(self) -> Transform {
        match self {
            ModelSlot::Preview(VehicleKind::Car) => {
                Transform::from_xyz(-500.0, -100.0, 10.0).with_scale(Vec3::splat(2.0))
            }
            ModelSlot::Preview(VehicleKind::Van) => Transform::from_xyz(0.0, 0.0, 10.0)
                .with_scale(Vec3::splat(50.0))
                .with_rotation(euler_degrees(10.0, -20.0)),
            ModelSlot::Preview(VehicleKind::Truck) => Transform::from_xyz(450.0, -100.0, 10.0)
                .with_scale(Vec3::splat(2.0))
                .with_rotation(euler_degrees(0.0, -60.0)),
            ModelSlot::Road => Transform::from_xyz(0.0, -220.0, 0.0)
                .with_scale(Vec3::new(12.0, 15.0, 15.0))
                .with_rotation(euler_degrees(15.0, 90.0)),
            ModelSlot::Vehicle(kind) => {
                let (x, scale) = match kind {
                    VehicleKind::Car => (100.0, 4.0),
                    VehicleKind::Van => (-200.0, 100.0),
                    VehicleKind::Truck => (0.0, 4.0),
                };
                Transform::from_xyz(x, -220.0, 0.0)
                    .with_scale(Vec3::splat(scale))
                    .with_rotation(euler_degrees(0.0, 90.0))
            }
        }
    }

    /// Pointer steering for the slot, if its yaw follows the pointer.
    pub fn steering(self) -> Option<PointerSteered> {
        match self {
            ModelSlot::Preview(kind) => Some(PointerSteered {
                kind,
                pitch: if kind == VehicleKind::Van {
                    10f32.to_radians()
                } else {
                    0.0
                },
                heading: 0.0,
            }),
            ModelSlot::Vehicle(kind) => Some(PointerSteered {
                kind,
                pitch: 0.0,
                heading: 90f32.to_radians(),
            }),
            ModelSlot::Road => None,
        }
    }
}

impl ModelSlot {
    /// Attach the marker components (and steering, if any) the slot's
    /// entity carries once its model is in the scene.
    pub fn insert_markers(self, entity: &mut EntityCommands) {
        match self {
            ModelSlot::Preview(kind) => {
                entity.insert(VehiclePreview(kind));
            }
            ModelSlot::Road => {
                entity.insert(Road);
            }
            ModelSlot::Vehicle(kind) => {
                entity.insert(ActiveVehicle(kind));
            }
        }
        if let Some(steer) = self.steering() {
            entity.insert(steer);
        }
    }
}

impl fmt::Display for ModelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSlot::Preview(kind) => write!(f, "{kind} preview"),
            ModelSlot::Road => f.write_str("road"),
            ModelSlot::Vehicle(kind) => write!(f, "{kind}"),
        }
    }
}

/// Placement of the picked preview while the selection delay runs.
pub fn staged_preview_transform(kind: VehicleKind, current: Transform) -> Transform {
    let mut staged = current;
    match kind {
        VehicleKind::Car => {
            staged.translation.x = 0.0;
            staged.scale = Vec3::splat(4.0);
        }
        VehicleKind::Van => {
            staged.translation.x = 30.0;
            staged.translation.y = -10.0;
            staged.scale = Vec3::splat(60.0);
        }
        VehicleKind::Truck => {
            staged.translation.x = 0.0;
            staged.scale = Vec3::splat(3.0);
        }
    }
    staged
}

fn euler_degrees(pitch: f32, yaw: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, pitch.to_radians(), yaw.to_radians(), 0.0)
}

/// Request to the asset loader.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLoadCommand {
    /// Start loading the slot; supersedes a pending load of the same slot.
    Load(ModelSlot),
    /// Drop a pending load so it never spawns. Spawned entities are
    /// despawned by their owner, not by the loader.
    Discard(ModelSlot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_paths() {
        assert_eq!(
            ModelSlot::Preview(VehicleKind::Car).scene_path(),
            "models/car/scene.gltf"
        );
        assert_eq!(
            ModelSlot::Vehicle(VehicleKind::Truck).scene_path(),
            "models/truck/scene.gltf"
        );
        assert_eq!(ModelSlot::Road.scene_path(), "models/road/scene.gltf");
    }

    #[test]
    fn test_active_vehicle_placement() {
        let car = ModelSlot::Vehicle(VehicleKind::Car).transform();
        assert_eq!(car.translation, Vec3::new(100.0, -220.0, 0.0));
        assert_eq!(car.scale, Vec3::splat(4.0));

        let van = ModelSlot::Vehicle(VehicleKind::Van).transform();
        assert_eq!(van.translation.x, -200.0);
        assert_eq!(van.scale, Vec3::splat(100.0));

        let truck = ModelSlot::Vehicle(VehicleKind::Truck).transform();
        assert_eq!(truck.translation.x, 0.0);
    }

    #[test]
    fn test_previews_are_spread_across_the_screen() {
        let xs: Vec<f32> = ModelSlot::previews()
            .map(|slot| slot.transform().translation.x)
            .collect();
        assert_eq!(xs, vec![-500.0, 0.0, 450.0]);
    }

    #[test]
    fn test_road_is_not_steered() {
        assert!(ModelSlot::Road.steering().is_none());
        let steer = ModelSlot::Vehicle(VehicleKind::Van).steering().unwrap();
        assert!((steer.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_staging_van_moves_and_grows() {
        let current = ModelSlot::Preview(VehicleKind::Van).transform();
        let staged = staged_preview_transform(VehicleKind::Van, current);
        assert_eq!(staged.translation, Vec3::new(30.0, -10.0, 10.0));
        assert_eq!(staged.scale, Vec3::splat(60.0));
        assert_eq!(staged.rotation, current.rotation);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(ModelSlot::Preview(VehicleKind::Truck).to_string(), "truck preview");
        assert_eq!(ModelSlot::Vehicle(VehicleKind::Car).to_string(), "car");
        assert_eq!(ModelSlot::Road.to_string(), "road");
    }

    #[test]
    fn test_markers_follow_slot() {
        let mut world = World::new();
        let ids: Vec<Entity> = {
            let mut commands = world.commands();
            [
                ModelSlot::Preview(VehicleKind::Truck),
                ModelSlot::Road,
                ModelSlot::Vehicle(VehicleKind::Van),
            ]
            .into_iter()
            .map(|slot| {
                let mut entity = commands.spawn_empty();
                slot.insert_markers(&mut entity);
                entity.id()
            })
            .collect()
        };
        world.flush();

        assert_eq!(
            world.get::<VehiclePreview>(ids[0]).map(|p| p.0),
            Some(VehicleKind::Truck)
        );
        assert!(world.get::<PointerSteered>(ids[0]).is_some());
        assert!(world.get::<Road>(ids[1]).is_some());
        assert!(world.get::<PointerSteered>(ids[1]).is_none());
        assert_eq!(
            world.get::<ActiveVehicle>(ids[2]).map(|v| v.0),
            Some(VehicleKind::Van)
        );
        assert!(world.get::<VehiclePreview>(ids[2]).is_none());
    }
}
