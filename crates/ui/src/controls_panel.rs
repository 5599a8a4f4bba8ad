//! On-screen header and buttons.
//!
//! - Header caption at the top centre until travel starts.
//! - Car / van / truck buttons, bobbing gently, on the selection screen.
//! - Next / back buttons while travelling.
//!
//! Buttons only send requests; the showcase decides what they do.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use showcase::app_state::ShowcaseState;
use showcase::controls::{BackRequested, NextBackdropRequested, SelectVehicleRequested};
use showcase::selection::ChosenVehicle;
use showcase::vehicle::VehicleKind;

use crate::caption::{bob_offset, caption, vehicle_button_label};

const HEADER_SIZE: f32 = 32.0;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(120.0, 44.0);
const BOTTOM_MARGIN: f32 = 48.0;

/// Draws the caption for the current state, if it has one.
pub fn header_ui(
    mut contexts: EguiContexts,
    state: Res<State<ShowcaseState>>,
    chosen: Res<ChosenVehicle>,
) {
    let Some(text) = caption(*state.get(), chosen.0) else {
        return;
    };
    egui::Area::new(egui::Id::new("showcase_header"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 24.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(HEADER_SIZE)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
        });
}

/// Selection screen: one bobbing button per vehicle.
pub fn vehicle_buttons_ui(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut select: EventWriter<SelectVehicleRequested>,
) {
    let bob = bob_offset(time.elapsed_secs());
    egui::Area::new(egui::Id::new("vehicle_buttons"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -BOTTOM_MARGIN + bob))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                for kind in VehicleKind::ALL {
                    let button = egui::Button::new(
                        egui::RichText::new(vehicle_button_label(kind)).size(20.0),
                    )
                    .min_size(BUTTON_SIZE);
                    if ui.add(button).clicked() {
                        select.send(SelectVehicleRequested(kind));
                    }
                }
            });
        });
}

/// Travel mode: next backdrop and back to selection.
pub fn travel_buttons_ui(
    mut contexts: EguiContexts,
    mut next: EventWriter<NextBackdropRequested>,
    mut back: EventWriter<BackRequested>,
) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("back_button"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(24.0, -BOTTOM_MARGIN))
        .show(ctx, |ui| {
            if ui
                .add(egui::Button::new("\u{2190} Back").min_size(BUTTON_SIZE))
                .clicked()
            {
                back.send(BackRequested);
            }
        });

    egui::Area::new(egui::Id::new("next_button"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -BOTTOM_MARGIN))
        .show(ctx, |ui| {
            if ui
                .add(egui::Button::new("Next \u{2192}").min_size(BUTTON_SIZE))
                .clicked()
            {
                next.send(NextBackdropRequested);
            }
        });
}
