use eframe::egui::{self, Color32};

// ── Palette ──────────────────────────────────────────────────────────────
pub const BLUE: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const ORANGE: Color32 = Color32::from_rgb(0xf3, 0x9c, 0x12);
pub const TEXT: Color32 = Color32::WHITE;
/// Backdrop of the video region; visible until the engine paints over it.
pub const SURFACE: Color32 = Color32::BLACK;

pub fn background(orange: bool) -> Color32 {
    if orange {
        ORANGE
    } else {
        BLUE
    }
}

/// Restyle the whole shell for the selected palette. Called at startup and
/// on every theme toggle.
pub fn apply(ctx: &egui::Context, orange: bool) {
    let bg = background(orange);

    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(TEXT);
    visuals.panel_fill = bg;
    visuals.window_fill = bg;
    visuals.extreme_bg_color = bg.gamma_multiply(0.55);

    visuals.widgets.inactive.weak_bg_fill = bg.gamma_multiply(0.8);
    visuals.widgets.hovered.weak_bg_fill = bg.gamma_multiply(0.65);
    visuals.widgets.active.weak_bg_fill = bg.gamma_multiply(0.5);

    ctx.set_visuals(visuals);
}
