//! Header caption and the idle bobbing of on-screen controls.

use showcase::app_state::ShowcaseState;
use showcase::vehicle::VehicleKind;

pub const SELECT_CAPTION: &str = "Select a vehicle";

/// Vertical bob amplitude of the selection buttons, in points.
const BOB_AMPLITUDE: f32 = 10.0;
/// Angular speed of the bob, in radians per second.
const BOB_SPEED: f32 = 2.0;

pub fn ride_caption(kind: VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Car => "Let's take a car ride",
        VehicleKind::Van => "Let's take a van ride",
        VehicleKind::Truck => "Let's take a cab ride",
    }
}

/// Caption for the current state. Travel mode shows none; staging without a
/// chosen vehicle falls back to the selection prompt.
pub fn caption(state: ShowcaseState, chosen: Option<VehicleKind>) -> Option<&'static str> {
    match (state, chosen) {
        (ShowcaseState::Traveling, _) => None,
        (ShowcaseState::SelectingVehicle, _) | (_, None) => Some(SELECT_CAPTION),
        (ShowcaseState::Transitioning, Some(kind)) => Some(ride_caption(kind)),
    }
}

/// Vertical offset of the bobbing controls after `seconds` of app time.
pub fn bob_offset(seconds: f32) -> f32 {
    (seconds * BOB_SPEED).sin() * BOB_AMPLITUDE
}

/// Button label for a vehicle kind.
pub fn vehicle_button_label(kind: VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Car => "Car",
        VehicleKind::Van => "Van",
        VehicleKind::Truck => "Truck",
    }
}
