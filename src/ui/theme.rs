use egui::{epaint::Shadow, Color32, Margin, Stroke, Vec2};

// Midnight theme, deep slate with cyber accents
pub const COLOR_BG_APP: Color32 = Color32::from_rgb(10, 12, 18);
pub const COLOR_BG_PANEL: Color32 = Color32::from_rgb(18, 20, 30);
pub const COLOR_BG_CARD: Color32 = Color32::from_rgb(26, 29, 44);
pub const COLOR_BG_HOVER: Color32 = Color32::from_rgb(38, 42, 62);
pub const COLOR_BG_ACTIVE: Color32 = Color32::from_rgb(45, 50, 75);
pub const COLOR_BG_LOG: Color32 = Color32::from_rgb(8, 10, 14);

pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(0, 220, 255);
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(0, 255, 140);
pub const COLOR_WARNING: Color32 = Color32::from_rgb(255, 200, 50);
pub const COLOR_ERROR: Color32 = Color32::from_rgb(255, 70, 100);

pub const COLOR_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const COLOR_TEXT_DIM: Color32 = Color32::from_rgb(160, 175, 200);
pub const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(90, 105, 125);
pub const COLOR_LOG_TEXT: Color32 = Color32::from_rgb(0, 255, 100);

pub const COLOR_BORDER: Color32 = Color32::from_rgb(45, 52, 70);
pub const COLOR_BORDER_LIGHT: Color32 = Color32::from_rgb(70, 80, 110);

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = Vec2::new(12.0, 12.0);
    style.spacing.button_padding = Vec2::new(20.0, 10.0);
    style.spacing.interact_size = Vec2::new(44.0, 36.0);
    style.spacing.window_margin = Margin::same(0);

    style.visuals.dark_mode = true;
    style.visuals.override_text_color = Some(COLOR_TEXT);
    style.visuals.window_fill = COLOR_BG_APP;
    style.visuals.panel_fill = COLOR_BG_PANEL;

    let corner_radius = egui::CornerRadius::same(10);
    style.visuals.window_corner_radius = corner_radius;
    style.visuals.menu_corner_radius = corner_radius;

    style.visuals.window_shadow = Shadow {
        offset: [0, 12],
        blur: 32,
        spread: 0,
        color: Color32::from_black_alpha(180),
    };

    style.visuals.selection.bg_fill = COLOR_PRIMARY.gamma_multiply(0.2);
    style.visuals.selection.stroke = Stroke::new(2.0, COLOR_PRIMARY);

    style.visuals.widgets.noninteractive.bg_fill = COLOR_BG_PANEL;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, COLOR_TEXT_DIM);
    style.visuals.widgets.noninteractive.corner_radius = corner_radius;
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COLOR_BORDER);

    style.visuals.widgets.inactive.bg_fill = COLOR_BG_CARD;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COLOR_TEXT_DIM);
    style.visuals.widgets.inactive.corner_radius = corner_radius;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, COLOR_BORDER);

    style.visuals.widgets.hovered.bg_fill = COLOR_BG_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COLOR_TEXT);
    style.visuals.widgets.hovered.corner_radius = corner_radius;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, COLOR_BORDER_LIGHT);

    style.visuals.widgets.active.bg_fill = COLOR_BG_ACTIVE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, COLOR_TEXT);
    style.visuals.widgets.active.corner_radius = corner_radius;
    style.visuals.widgets.active.bg_stroke = Stroke::new(2.0, COLOR_PRIMARY);

    ctx.set_style(style);
}
