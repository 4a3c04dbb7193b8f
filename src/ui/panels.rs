use crate::ui::theme;
use crate::ui::widgets;
use egui::{RichText, ScrollArea, Ui};

pub const FEATURES: &[&str] = &[
    "Privacy-first internet access",
    "Connect to the global decentralized network",
    "Bypass censorship and restrictions",
    "Web dashboard for your node",
    "Automatic updates and maintenance",
    "Completely free, no subscriptions",
];

pub fn render_system_info(ui: &mut Ui, lines: &[String], runtime_available: bool) {
    widgets::card_frame(ui, |ui| {
        ui.horizontal(|ui| {
            widgets::status_dot(ui, runtime_available);
            ui.label(
                RichText::new("System Information")
                    .size(15.0)
                    .strong()
                    .color(theme::COLOR_TEXT),
            );
        });
        ui.add_space(4.0);
        for line in lines {
            ui.label(RichText::new(line).size(12.0).color(theme::COLOR_TEXT_DIM));
        }
    });
}

pub fn render_features(ui: &mut Ui) {
    widgets::card_frame(ui, |ui| {
        ui.label(
            RichText::new("What you get")
                .size(15.0)
                .strong()
                .color(theme::COLOR_TEXT),
        );
        ui.add_space(4.0);
        for feature in FEATURES {
            ui.label(
                RichText::new(format!("• {}", feature))
                    .size(12.0)
                    .color(theme::COLOR_TEXT_DIM),
            );
        }
    });
}

pub fn render_log(ui: &mut Ui, lines: &[String]) {
    ui.label(
        RichText::new("Installation Log")
            .size(14.0)
            .strong()
            .color(theme::COLOR_TEXT),
    );
    egui::Frame::new()
        .fill(theme::COLOR_BG_LOG)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("install_log")
                .max_height(220.0)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if lines.is_empty() {
                        ui.label(
                            RichText::new("Waiting for installation to start...")
                                .monospace()
                                .size(11.0)
                                .color(theme::COLOR_TEXT_MUTED),
                        );
                    }
                    for line in lines {
                        ui.label(
                            RichText::new(line)
                                .monospace()
                                .size(11.0)
                                .color(theme::COLOR_LOG_TEXT),
                        );
                    }
                });
        });
}

pub fn help_text(docs_url: &str, support_url: &str, issues_url: &str) -> String {
    format!(
        "Need help?\n\n\
         Documentation: {}\n\
         Community support: {}\n\
         Report a bug: {}\n\n\
         Common issues:\n\
         • Docker permission denied: restart your computer after installation\n\
         • Installer hangs: check your internet connection\n\
         • Windows users: use WSL2 or Docker Desktop",
        docs_url, support_url, issues_url
    )
}
