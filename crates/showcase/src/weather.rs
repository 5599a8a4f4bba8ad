//! Snow overlay for the winter backdrop.
//!
//! Whenever a backdrop is set up, the overlay is reconciled with it: the
//! "Winter" backdrop gets a [`SnowField`] (spawned once, however many times
//! the backdrop is re-applied) and every other backdrop removes it. A single
//! per-frame system lets the flakes fall; it has nothing to do once the
//! field is gone.

use bevy::prelude::*;
use rand::Rng;

use crate::background::BackdropChanged;
use crate::config::SNOW_BACKDROP;
use crate::params::ShowcaseParams;
use crate::showcase_rng::ShowcaseRng;

/// Positions of every snow particle, in world units.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct SnowField {
    pub positions: Vec<Vec3>,
}

impl SnowField {
    /// Scatter `count` flakes uniformly in the box `[-half, half)` on each axis.
    pub fn scatter(rng: &mut impl Rng, count: usize, half_extents: Vec3) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half_extents.x..half_extents.x),
                    rng.gen_range(-half_extents.y..half_extents.y),
                    rng.gen_range(-half_extents.z..half_extents.z),
                )
            })
            .collect();
        Self { positions }
    }

    /// Move every flake down by `step`; flakes below `floor` restart at
    /// `ceiling`.
    pub fn fall(&mut self, step: f32, floor: f32, ceiling: f32) {
        for p in &mut self.positions {
            p.y -= step;
            if p.y < floor {
                p.y = ceiling;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub fn wants_snow(backdrop_name: &str) -> bool {
    backdrop_name == SNOW_BACKDROP
}

// =============================================================================
// Systems
// =============================================================================

/// Adds or removes the snow field to match the newest backdrop.
pub fn sync_snow_with_backdrop(
    mut commands: Commands,
    params: Res<ShowcaseParams>,
    mut rng: ResMut<ShowcaseRng>,
    mut changes: EventReader<BackdropChanged>,
    fields: Query<Entity, With<SnowField>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    let present = !fields.is_empty();
    let snowing = wants_snow(change.backdrop().name);

    if snowing && !present {
        let field = SnowField::scatter(
            &mut rng.0,
            params.snow_particle_count,
            Vec3::from_array(params.snow_half_extents),
        );
        info!("Snow overlay on ({} particles)", field.len());
        commands.spawn((Name::new("snow_particles"), field, Transform::default()));
    } else if !snowing && present {
        for entity in &fields {
            commands.entity(entity).despawn_recursive();
        }
        info!("Snow overlay off");
    }
}

/// Per frame: let every flake fall.
pub fn fall_snow(params: Res<ShowcaseParams>, mut fields: Query<&mut SnowField>) {
    let floor = params.snow_floor();
    let ceiling = params.snow_ceiling();
    for mut field in &mut fields {
        field.fall(params.snow_fall_step, floor, ceiling);
    }
}

/// `OnExit(Traveling)`: no snow on the selection screen.
pub fn clear_snow(mut commands: Commands, fields: Query<Entity, With<SnowField>>) {
    for entity in &fields {
        commands.entity(entity).despawn_recursive();
    }
}
