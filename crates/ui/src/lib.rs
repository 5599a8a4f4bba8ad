use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use showcase::app_state::ShowcaseState;

pub mod caption;
pub mod controls_panel;
pub mod shortcuts;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_showcase_theme)
            .add_systems(
                Update,
                (
                    controls_panel::header_ui,
                    controls_panel::vehicle_buttons_ui
                        .run_if(in_state(ShowcaseState::SelectingVehicle)),
                    controls_panel::travel_buttons_ui.run_if(in_state(ShowcaseState::Traveling)),
                    shortcuts::shortcut_keybinds,
                )
                    .before(showcase::ShowcaseUpdateSet::Input),
            );
    }
}
