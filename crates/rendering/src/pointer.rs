//! Feeds cursor movement into [`PointerPosition`].

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

use showcase::vehicle::PointerPosition;

/// Tracks the latest cursor position and the primary window size.
pub fn track_pointer(
    mut moves: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerPosition>,
) {
    let Some(moved) = moves.read().last() else {
        return;
    };
    pointer.x = moved.position.x;
    pointer.y = moved.position.y;
    if let Ok(window) = windows.get_single() {
        pointer.viewport_width = window.width();
        pointer.viewport_height = window.height();
    }
}
