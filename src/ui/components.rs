//! Shared UI components for the portal

use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

use crate::platform::Platform;
use crate::ui::theme::Theme;

/// Render a card with an optional title
pub fn card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: Option<&str>,
    content: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_card)
        .corner_radius(12.0)
        .inner_margin(20.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(title) = title {
                ui.label(RichText::new(title).color(theme.text_primary).size(18.0).strong());
                ui.add_space(12.0);
            }
            content(ui)
        })
        .inner
}

/// Render an inset block inside a card
pub fn inset<R>(ui: &mut egui::Ui, theme: &Theme, content: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme.bg_inset)
        .corner_radius(10.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content(ui)
        })
        .inner
}

/// Render a platform tab button. Returns true when clicked.
pub fn platform_tab(ui: &mut egui::Ui, theme: &Theme, platform: Platform, active: bool) -> bool {
    let (bg, text_color) = if active {
        (theme.accent, theme.accent_content)
    } else {
        (Color32::TRANSPARENT, theme.text_secondary)
    };

    let button = egui::Button::new(RichText::new(platform.name()).color(text_color).size(16.0))
        .fill(bg)
        .corner_radius(CornerRadius::same(10))
        .min_size(Vec2::new(120.0, 40.0));

    ui.add(button).clicked()
}

/// Small colored badge
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.2))
        .corner_radius(8.0)
        .inner_margin(egui::vec2(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).size(11.0));
        });
}

/// Full-width download button; disabled buttons never report clicks
pub fn download_button(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    primary: bool,
    enabled: bool,
) -> bool {
    let (fill, text_color) = match (enabled, primary) {
        (false, _) => (theme.bg_inset, theme.text_muted),
        (true, true) => (theme.accent, theme.accent_content),
        (true, false) => (Color32::TRANSPARENT, theme.accent),
    };

    let button = egui::Button::new(
        RichText::new(format!("⬇ {}", label))
            .color(text_color)
            .size(15.0)
            .strong(),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(1.0, if enabled { theme.accent } else { theme.border }))
    .min_size(Vec2::new(ui.available_width(), 40.0))
    .corner_radius(8.0);

    ui.add_enabled(enabled, button).clicked()
}

/// Command in a code block with an optional copy button.
/// Returns true when the copy button was clicked.
pub fn command_block(
    ui: &mut egui::Ui,
    theme: &Theme,
    command: &str,
    copyable: bool,
    copied: bool,
) -> bool {
    let mut clicked = false;

    egui::Frame::new()
        .fill(theme.bg_inset)
        .corner_radius(8.0)
        .inner_margin(10.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(command).monospace().size(12.0).color(theme.text_primary));
                if copyable {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if copied {
                            RichText::new("✔").color(theme.success)
                        } else {
                            RichText::new("📋").color(theme.text_muted)
                        };
                        clicked = ui
                            .add(egui::Button::new(label).frame(false))
                            .on_hover_text("Copy to clipboard")
                            .clicked();
                    });
                }
            });
        });

    clicked
}

/// Checklist row
pub fn check_item(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("✔").color(theme.success));
        ui.label(RichText::new(text).color(theme.text_secondary).size(13.0));
    });
}

/// Hyperlink-styled text; disabled links never report clicks
pub fn link(ui: &mut egui::Ui, theme: &Theme, text: &str, enabled: bool) -> bool {
    let color = if enabled { theme.accent } else { theme.text_muted };
    ui.add_enabled(enabled, egui::Link::new(RichText::new(text).color(color).size(12.0)))
        .clicked()
}
