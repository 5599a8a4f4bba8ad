use bevy_egui::{egui, EguiContexts};

/// Translucent dark buttons over the 3D scene, with large rounded corners.
pub fn apply_showcase_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgba_unmultiplied(20, 24, 32, 180);
    let hover = egui::Color32::from_rgba_unmultiplied(45, 60, 85, 210);
    let active = egui::Color32::from_rgb(255, 170, 40);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);

    // Nothing but the buttons should cover the scene.
    style.visuals.window_fill = egui::Color32::TRANSPARENT;
    style.visuals.panel_fill = egui::Color32::TRANSPARENT;

    let rounding = egui::CornerRadius::same(22);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    ctx.set_style(style);
}
