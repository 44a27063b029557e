//! Theme for the transfer window.

use eframe::egui;

#[derive(Clone, Copy)]
pub struct AppTheme {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub accent: egui::Color32,

    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,

    pub row_height: f32,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(8, 8, 8),
            surface: egui::Color32::from_rgb(15, 15, 15),
            panel_fill: egui::Color32::from_rgb(12, 12, 12),
            text_primary: egui::Color32::from_rgb(0, 221, 119), // #00dd77
            text_secondary: egui::Color32::from_rgb(170, 170, 170),
            accent: egui::Color32::from_rgb(0, 221, 119),

            spacing_xs: 6.0,
            spacing_sm: 12.0,
            spacing_md: 20.0,

            row_height: 20.0,
        }
    }
}

impl AppTheme {
    /// Frame around the transfer table
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .rounding(2.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(2.0, self.accent))
    }
}

/// Configure the egui context style with the given theme
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = theme.background;
    visuals.panel_fill = theme.panel_fill;
    visuals.override_text_color = Some(theme.text_primary);
    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.faint_bg_color = theme.surface;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(20.0, egui::FontFamily::Monospace),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(14.0, egui::FontFamily::Monospace),
    );
    ctx.set_style(style);
}
