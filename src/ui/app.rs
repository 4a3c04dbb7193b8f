use eframe::egui::{self, RichText, Vec2};

use crate::config::InstallerConfig;
use crate::installer::{InstallEvent, InstallPhase, Installer};
use crate::probe::{self, SystemProfile};
use crate::ui::{panels, theme, widgets};
use crate::utils;

enum Dialog {
    Success,
    Error(String),
    Help,
}

pub struct InstallerApp {
    config: InstallerConfig,
    installer: Installer,
    profile: SystemProfile,

    // Cached for the info card; recomputed when a run finishes.
    host_lines: Vec<String>,

    // UI state
    status_line: String,
    phase: InstallPhase,
    dialog: Option<Dialog>,
}

impl InstallerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        let config = InstallerConfig::load();
        let installer = Installer::new();
        let profile = probe::detect(&config.runtime_bin, config.probe_timeout());
        let host_lines = probe::host_summary(&profile);

        log::info!(
            "Detected {} {} (runtime available: {})",
            profile.os.label(),
            profile.arch,
            profile.runtime_available
        );

        Self {
            config,
            installer,
            profile,
            host_lines,
            status_line: "Ready to install".to_string(),
            phase: InstallPhase::Idle,
            dialog: None,
        }
    }

    fn process_installer_events(&mut self) {
        while let Ok(event) = self.installer.event_rx.try_recv() {
            match event {
                // The log buffer is shared; rendering reads it directly.
                InstallEvent::Log(_) => {}
                InstallEvent::Status(status) => self.status_line = status,
                InstallEvent::Phase(phase) => self.phase = phase,
                InstallEvent::Error(message) => {
                    log::error!("Installation error: {}", message);
                    self.dialog = Some(Dialog::Error(message));
                }
                InstallEvent::Finished(ok) => {
                    if ok {
                        // Verification just saw running containers.
                        self.profile.runtime_available = true;
                        self.host_lines = probe::host_summary(&self.profile);
                        self.dialog = Some(Dialog::Success);
                    }
                }
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("VX0 Network")
                    .size(28.0)
                    .strong()
                    .color(theme::COLOR_TEXT),
            );
            ui.label(
                RichText::new("Join the censorship-resistant internet")
                    .size(14.0)
                    .color(theme::COLOR_TEXT_DIM),
            );
        });
        ui.add_space(12.0);
    }

    fn render_install_controls(&mut self, ui: &mut egui::Ui) {
        let running = self.installer.is_running();

        ui.vertical_centered(|ui| {
            if running {
                ui.add(egui::Spinner::new().size(28.0).color(theme::COLOR_PRIMARY));
                ui.add_space(4.0);
            } else {
                ui.add_enabled_ui(!running, |ui| {
                    if widgets::primary_button(ui, "Install VX0 Node").clicked() {
                        self.phase = InstallPhase::PreppingRuntime;
                        self.installer.start(&self.config);
                    }
                });
            }

            let status_color = match self.phase {
                InstallPhase::Succeeded => theme::COLOR_SUCCESS,
                InstallPhase::Failed => theme::COLOR_ERROR,
                InstallPhase::Idle => theme::COLOR_TEXT_DIM,
                _ => theme::COLOR_WARNING,
            };
            ui.label(
                RichText::new(&self.status_line)
                    .size(13.0)
                    .color(status_color),
            );
        });
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if widgets::secondary_button(ui, "Need Help?").clicked() {
                self.dialog = Some(Dialog::Help);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.phase == InstallPhase::Succeeded
                    && widgets::secondary_button(ui, "Open Dashboard").clicked()
                {
                    utils::open_url(&self.config.dashboard_url);
                }
            });
        });
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let mut close = false;
        match &self.dialog {
            None => return,
            Some(Dialog::Success) => {
                egui::Window::new("Installation Complete")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(
                            "Your VX0 edge node is now running and connected to the global network.",
                        );
                        ui.label(format!(
                            "Open the dashboard to monitor your node: {}",
                            self.config.dashboard_url
                        ));
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if widgets::secondary_button(ui, "Open Dashboard").clicked() {
                                utils::open_url(&self.config.dashboard_url);
                            }
                            if widgets::secondary_button(ui, "Close").clicked() {
                                close = true;
                            }
                        });
                    });
            }
            Some(Dialog::Error(message)) => {
                let message = message.clone();
                egui::Window::new("Installation Failed")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(RichText::new("Sorry, the installation failed:").strong());
                        ui.label(RichText::new(message).color(theme::COLOR_ERROR));
                        ui.add_space(4.0);
                        ui.label("Check the log for details or use Need Help? for support.");
                        ui.add_space(8.0);
                        if widgets::secondary_button(ui, "Close").clicked() {
                            close = true;
                        }
                    });
            }
            Some(Dialog::Help) => {
                let text = panels::help_text(
                    &self.config.docs_url,
                    &self.config.support_url,
                    &self.config.issues_url,
                );
                egui::Window::new("Help & Support")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(text);
                        ui.add_space(8.0);
                        if widgets::secondary_button(ui, "Close").clicked() {
                            close = true;
                        }
                    });
            }
        }
        if close {
            self.dialog = None;
        }
    }
}

impl eframe::App for InstallerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll faster while the worker is streaming output.
        let repaint = if self.installer.is_running() {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(250)
        };
        ctx.request_repaint_after(repaint);

        self.process_installer_events();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::COLOR_BG_APP))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(24, 20))
                    .show(ui, |ui| {
                        self.render_header(ui);
                        panels::render_system_info(
                            ui,
                            &self.host_lines,
                            self.profile.runtime_available,
                        );
                        panels::render_features(ui);
                        ui.add_space(8.0);
                        self.render_install_controls(ui);
                        ui.add_space(8.0);
                        {
                            let mut logs = self.installer.logs.lock().unwrap();
                            panels::render_log(ui, logs.make_contiguous());
                        }
                        ui.add_space(8.0);
                        self.render_footer(ui);
                    });
            });

        self.render_dialog(ctx);
    }
}
