use crate::ui::theme::*;
use egui::{Color32, Stroke, Ui, Vec2};

/// Draw a status indicator dot
pub fn status_dot(ui: &mut Ui, ok: bool) -> egui::Response {
    let size = Vec2::new(10.0, 10.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let color = if ok { COLOR_SUCCESS } else { COLOR_TEXT_MUTED };

        if ok {
            ui.painter()
                .circle_filled(center, 6.0, COLOR_SUCCESS.gamma_multiply(0.3));
        }
        ui.painter().circle_filled(center, 4.0, color);
    }

    response
}

/// Draw a card container
pub fn card_frame(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(COLOR_BG_CARD)
        .corner_radius(egui::CornerRadius::same(12))
        .stroke(Stroke::new(1.0, COLOR_BORDER))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            add_contents(ui);
        });
}

/// Draw a styled button - Primary
pub fn primary_button(ui: &mut Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .color(COLOR_BG_APP)
            .size(15.0)
            .strong(),
    )
    .fill(COLOR_SUCCESS)
    .corner_radius(egui::CornerRadius::same(10))
    .min_size(Vec2::new(220.0, 48.0))
    .stroke(Stroke::NONE);

    ui.add(button)
}

/// Draw a styled button - Secondary (ghost)
pub fn secondary_button(ui: &mut Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).color(COLOR_TEXT).size(13.0))
        .fill(Color32::TRANSPARENT)
        .corner_radius(egui::CornerRadius::same(8))
        .min_size(Vec2::new(0.0, 34.0))
        .stroke(Stroke::new(1.0, COLOR_BORDER));

    ui.add(button)
}
