//! Keyboard shortcuts mirroring the on-screen controls.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use showcase::controls::{BackRequested, NextBackdropRequested, SelectVehicleRequested};
use showcase::vehicle::VehicleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Select(VehicleKind),
    NextBackdrop,
    Back,
}

/// `1`/`2`/`3` pick a vehicle, `→` cycles the backdrop, `Esc`/`Backspace`
/// goes back.
pub fn shortcut_for(key: KeyCode) -> Option<ShortcutAction> {
    match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(ShortcutAction::Select(VehicleKind::Car)),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(ShortcutAction::Select(VehicleKind::Van)),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(ShortcutAction::Select(VehicleKind::Truck)),
        KeyCode::ArrowRight => Some(ShortcutAction::NextBackdrop),
        KeyCode::Escape | KeyCode::Backspace => Some(ShortcutAction::Back),
        _ => None,
    }
}

/// Turns shortcut presses into the same requests the buttons send. The
/// showcase drops requests that do not fit the current state.
pub fn shortcut_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut select: EventWriter<SelectVehicleRequested>,
    mut next: EventWriter<NextBackdropRequested>,
    mut back: EventWriter<BackRequested>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    for key in keyboard.get_just_pressed() {
        match shortcut_for(*key) {
            Some(ShortcutAction::Select(kind)) => {
                select.send(SelectVehicleRequested(kind));
            }
            Some(ShortcutAction::NextBackdrop) => {
                next.send(NextBackdropRequested);
            }
            Some(ShortcutAction::Back) => {
                back.send(BackRequested);
            }
            None => {}
        }
    }
}
