//! Countdown modal shown while a download is gated

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, FontId, Pos2, RichText, Sense, Stroke, Vec2};

use crate::page::DownloadPage;
use crate::ui::ad_unit::render_ad_unit;
use crate::ui::theme::Theme;

const RING_RADIUS: f32 = 40.0;
const RING_WIDTH: f32 = 8.0;

/// Render the modal if the gate is open
pub fn render_gate_modal(ctx: &egui::Context, page: &mut DownloadPage, theme: &Theme) {
    if !page.gate.is_open() {
        return;
    }

    let remaining = page.gate.seconds_remaining();
    let fraction = page.gate.elapsed_fraction();
    let mut cancel = false;

    let frame = egui::Frame::new()
        .fill(theme.bg_card)
        .corner_radius(16.0)
        .inner_margin(24.0)
        .stroke(Stroke::new(1.0, theme.border));

    egui::Modal::new(egui::Id::new("download_gate"))
        .backdrop_color(theme.bg_overlay)
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_width(640.0);

            ui.horizontal(|ui| {
                let title = if remaining > 0 {
                    format!("Downloading in {} seconds...", remaining)
                } else {
                    "Please wait...".to_string()
                };
                ui.label(RichText::new(title).color(theme.text_primary).size(20.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                        cancel = true;
                    }
                });
            });

            ui.add_space(16.0);

            ui.vertical_centered(|ui| {
                ad_frame(ui, theme, |ui| render_ad_unit(ui, &mut page.modal_ads.top, theme, 90.0));

                ui.add_space(16.0);
                if remaining > 0 {
                    countdown_ring(ui, theme, remaining, fraction);
                } else {
                    ui.add(egui::Spinner::new().size(56.0).color(theme.accent));
                }
                ui.add_space(16.0);

                ad_frame(ui, theme, |ui| render_ad_unit(ui, &mut page.modal_ads.bottom, theme, 90.0));
            });
        });

    if cancel {
        page.cancel_download();
    }
}

fn ad_frame(ui: &mut egui::Ui, theme: &Theme, content: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme.bg_inset)
        .corner_radius(12.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_height(100.0);
            content(ui);
        });
}

/// Numeric readout inside a ring whose sweep tracks the elapsed fraction
fn countdown_ring(ui: &mut egui::Ui, theme: &Theme, remaining: u8, fraction: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    painter.circle_stroke(center, RING_RADIUS, Stroke::new(RING_WIDTH, theme.border));
    if fraction > 0.0 {
        let points = arc_points(center, RING_RADIUS, fraction, 64);
        painter.add(egui::Shape::line(points, Stroke::new(RING_WIDTH, theme.accent)));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        remaining.to_string(),
        FontId::proportional(30.0),
        theme.text_primary,
    );
}

/// Points of a clockwise arc starting at twelve o'clock
fn arc_points(center: Pos2, radius: f32, fraction: f32, segments: usize) -> Vec<Pos2> {
    let sweep = fraction.clamp(0.0, 1.0) * TAU;
    (0..=segments)
        .map(|i| {
            let angle = -FRAC_PI_2 + sweep * i as f32 / segments as f32;
            center + radius * Vec2::angled(angle)
        })
        .collect()
}
