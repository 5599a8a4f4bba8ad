//! The scrolling backdrop plane behind the road.
//!
//! The plane is an unlit textured quad whose UV offset follows
//! [`BackgroundCycle::offset`]. A looped backdrop gets a fresh plane; a manual
//! "next" swaps the texture on the existing one. While travelling a plane is
//! always present.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;

use showcase::background::{
    BackdropChangeCause, BackdropChanged, BackdropPlane, BackgroundCycle, BACKDROPS,
};
use showcase::error::AssetLoadError;

const PLANE_SIZE: f32 = 100.0;
const PLANE_POSITION: Vec3 = Vec3::new(720.0, 233.0, 0.0);
const PLANE_SCALE: Vec3 = Vec3::new(30.0, 7.0, 10.0);

/// Shared quad mesh and one texture handle per backdrop, loaded on first use.
#[derive(Resource, Default)]
pub struct BackdropTextures {
    mesh: Option<Handle<Mesh>>,
    images: HashMap<usize, Handle<Image>>,
    /// Textures whose load state has not settled yet.
    watching: Vec<usize>,
}

impl BackdropTextures {
    fn image(&mut self, asset_server: &AssetServer, index: usize) -> Handle<Image> {
        if let Some(handle) = self.images.get(&index) {
            return handle.clone();
        }
        let handle = asset_server.load_with_settings(
            BACKDROPS[index].image,
            |settings: &mut ImageLoaderSettings| {
                settings.sampler = ImageSampler::Descriptor(repeating_sampler());
            },
        );
        self.images.insert(index, handle.clone());
        self.watching.push(index);
        handle
    }

    fn mesh(&mut self, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.mesh
            .get_or_insert_with(|| meshes.add(Rectangle::new(PLANE_SIZE, PLANE_SIZE)))
            .clone()
    }
}

/// The texture wraps horizontally as the offset scrolls.
fn repeating_sampler() -> ImageSamplerDescriptor {
    ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..default()
    }
}

/// UV transform for a horizontal texture offset.
pub fn offset_uv_transform(offset: f32) -> Affine2 {
    Affine2::from_translation(Vec2::new(offset, 0.0))
}

pub fn plane_transform() -> Transform {
    Transform::from_translation(PLANE_POSITION).with_scale(PLANE_SCALE)
}

fn spawn_plane(
    commands: &mut Commands,
    textures: &mut BackdropTextures,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cycle: &BackgroundCycle,
) {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(textures.image(asset_server, cycle.index())),
        unlit: true,
        uv_transform: offset_uv_transform(cycle.offset),
        ..default()
    });
    commands.spawn((
        Name::new("backdrop_plane"),
        BackdropPlane,
        Mesh3d(textures.mesh(meshes)),
        MeshMaterial3d(material),
        plane_transform(),
    ));
    debug!("Backdrop plane spawned for {}", cycle.current().name);
}

/// Rebuilds or retextures the plane on backdrop changes, and makes sure a
/// plane exists while the cycle is active.
#[allow(clippy::too_many_arguments)]
pub fn sync_backdrop_plane(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cycle: Res<BackgroundCycle>,
    mut changes: EventReader<BackdropChanged>,
    mut textures: ResMut<BackdropTextures>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    planes: Query<(Entity, &MeshMaterial3d<StandardMaterial>), With<BackdropPlane>>,
) {
    let change = changes.read().last().copied();
    if !cycle.active {
        return;
    }

    let mut have_plane = !planes.is_empty();
    match change.map(|c| c.cause) {
        Some(BackdropChangeCause::Looped) => {
            for (entity, _) in &planes {
                commands.entity(entity).despawn_recursive();
            }
            have_plane = false;
        }
        Some(BackdropChangeCause::Manual) => {
            let image = textures.image(&asset_server, cycle.index());
            for (_, material) in &planes {
                if let Some(material) = materials.get_mut(&material.0) {
                    material.base_color_texture = Some(image.clone());
                    material.uv_transform = offset_uv_transform(cycle.offset);
                }
            }
        }
        Some(BackdropChangeCause::Entered) | None => {}
    }

    if !have_plane {
        spawn_plane(
            &mut commands,
            &mut textures,
            &asset_server,
            &mut meshes,
            &mut materials,
            &cycle,
        );
    }
}

/// Per frame: slide the texture by the cycle's offset.
pub fn scroll_backdrop_texture(
    cycle: Res<BackgroundCycle>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    planes: Query<&MeshMaterial3d<StandardMaterial>, With<BackdropPlane>>,
) {
    if !cycle.is_changed() {
        return;
    }
    for material in &planes {
        if let Some(material) = materials.get_mut(&material.0) {
            material.uv_transform = offset_uv_transform(cycle.offset);
        }
    }
}

/// Logs backdrop textures that failed to load.
pub fn report_texture_failures(
    asset_server: Res<AssetServer>,
    mut textures: ResMut<BackdropTextures>,
) {
    if textures.watching.is_empty() {
        return;
    }
    let BackdropTextures {
        images, watching, ..
    } = &mut *textures;
    watching.retain(|index| {
        let Some(handle) = images.get(index) else {
            return false;
        };
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => false,
            Some(LoadState::Failed(err)) => {
                let err = AssetLoadError::Texture {
                    path: BACKDROPS[*index].image.to_string(),
                    reason: err.to_string(),
                };
                error!("{err}");
                false
            }
            _ => true,
        }
    });
}
