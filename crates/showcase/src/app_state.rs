//! Top-level showcase state machine.
//!
//! Defines [`ShowcaseState`], a Bevy [`States`] enum that governs the flow
//! from picking a vehicle to watching it travel. Every scene and UI mutation
//! hangs off a transition of this state rather than off scattered flags.
//!
//! The state lives in the `showcase` crate so that `rendering` and `ui` can
//! gate their systems on it without depending on each other.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowcaseState {
    /// Three vehicle previews are on screen with the selection buttons.
    #[default]
    SelectingVehicle,
    /// A vehicle was picked; its preview is staged until the delay elapses.
    Transitioning,
    /// The chosen vehicle drives along the road in front of the backdrop.
    Traveling,
}
