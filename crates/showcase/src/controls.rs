//! Visitor triggers. The `ui` crate sends these from buttons and keyboard
//! shortcuts; the choreography decides whether they are valid in the
//! current [`ShowcaseState`](crate::app_state::ShowcaseState).

use bevy::prelude::*;

use crate::vehicle::VehicleKind;

/// Pick a vehicle. Ignored outside `SelectingVehicle`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectVehicleRequested(pub VehicleKind);

/// Return to the selection screen. Ignored outside `Traveling`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackRequested;

/// Skip to the next backdrop. Ignored outside `Traveling`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NextBackdropRequested;
