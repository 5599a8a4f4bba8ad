//! glTF scene loading for the showcase's model slots.
//!
//! The choreography asks for models with [`ModelLoadCommand`]s. Each slot
//! holds at most one pending handle; a new `Load` supersedes it and a
//! `Discard` drops it. Pending handles are polled every frame: a loaded scene
//! is spawned with the slot's transform and marker components, a failed one
//! is logged and forgotten.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use showcase::assets::{ModelLoadCommand, ModelSlot};
use showcase::error::AssetLoadError;

/// Scene handles still being fetched, keyed by slot.
#[derive(Resource, Default)]
pub struct PendingModels {
    pending: HashMap<ModelSlot, Handle<Scene>>,
}

impl PendingModels {
    pub fn is_pending(&self, slot: ModelSlot) -> bool {
        self.pending.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Loaded/requested counters for the current batch of loads. Reset once
/// nothing is pending.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub requested: usize,
    pub settled: usize,
}

impl LoadProgress {
    /// Percentage of the batch that has loaded or failed.
    pub fn percent(&self) -> f32 {
        if self.requested == 0 {
            return 100.0;
        }
        self.settled as f32 / self.requested as f32 * 100.0
    }
}

/// Starts or drops loads as the choreography requests.
pub fn handle_load_commands(
    asset_server: Res<AssetServer>,
    mut commands_in: EventReader<ModelLoadCommand>,
    mut models: ResMut<PendingModels>,
    mut progress: ResMut<LoadProgress>,
) {
    for command in commands_in.read() {
        match *command {
            ModelLoadCommand::Load(slot) => {
                let path = slot.scene_path();
                let handle = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));
                if models.pending.insert(slot, handle).is_none() {
                    progress.requested += 1;
                }
                debug!("Loading {slot}");
            }
            ModelLoadCommand::Discard(slot) => {
                if models.pending.remove(&slot).is_some() {
                    progress.settled += 1;
                    debug!("Discarded pending {slot}");
                }
            }
        }
    }
}

/// Spawns every scene that finished loading and logs every failure.
///
/// A scene already present in `Assets<Scene>` counts as loaded even if the
/// server does not track it.
pub fn spawn_loaded_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    scenes: Res<Assets<Scene>>,
    mut models: ResMut<PendingModels>,
    mut progress: ResMut<LoadProgress>,
) {
    if models.is_empty() {
        return;
    }
    let before = progress.settled;

    models.pending.retain(|&slot, handle| {
        let state = if scenes.contains(handle.id()) {
            Some(LoadState::Loaded)
        } else {
            asset_server.get_load_state(handle.id())
        };
        match state {
            Some(LoadState::Loaded) => {
                let mut entity = commands.spawn((
                    Name::new(slot.to_string()),
                    SceneRoot(handle.clone()),
                    slot.transform(),
                ));
                slot.insert_markers(&mut entity);
                info!("Spawned {slot}");
                progress.settled += 1;
                false
            }
            Some(LoadState::Failed(err)) => {
                let err = AssetLoadError::Model {
                    slot,
                    path: slot.scene_path(),
                    reason: err.to_string(),
                };
                error!("{err}");
                progress.settled += 1;
                false
            }
            _ => true,
        }
    });

    if progress.settled != before {
        info!("Models loaded: {:.0}%", progress.percent());
    }
    if models.is_empty() {
        *progress = LoadProgress::default();
    }
}
