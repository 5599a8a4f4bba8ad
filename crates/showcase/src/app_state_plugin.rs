//! Plugin that registers the [`ShowcaseState`] state machine.
//!
//! Kept in its own file following the one-plugin-per-file convention.

use bevy::prelude::*;

use crate::app_state::ShowcaseState;

/// Initializes the [`ShowcaseState`] state resource.
///
/// The state defaults to `SelectingVehicle`, so the first `StateTransition`
/// runs its `OnEnter` systems and requests the three preview models.
pub struct ShowcaseStatePlugin;

impl Plugin for ShowcaseStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ShowcaseState>();
    }
}
