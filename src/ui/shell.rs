//! Navbar, footer and window-level painting around the page

use eframe::egui::{self, Align2, FontId, RichText};

use crate::state::StateEvent;
use crate::ui::theme::{Theme, ThemeMode};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "https://floorp.app/"),
    ("Blog", "https://blog.floorp.app/"),
    ("Docs", "https://docs.floorp.app/"),
    ("GitHub", "https://github.com/Floorp-Projects/Floorp"),
];

/// Render the top navigation bar
pub fn render_navbar(ui: &mut egui::Ui, theme: &Theme, mode: ThemeMode) -> Vec<StateEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Floorp").color(theme.accent).size(22.0).strong());
        ui.add_space(24.0);

        for (label, url) in NAV_LINKS {
            if ui
                .add(egui::Link::new(RichText::new(*label).color(theme.text_secondary)))
                .clicked()
            {
                events.push(StateEvent::OpenUrl(url.to_string()));
            }
            ui.add_space(8.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(mode.toggle_label())
                .on_hover_text("Switch theme")
                .clicked()
            {
                events.push(StateEvent::ToggleTheme);
            }
        });
    });

    events
}

/// Render the footer with the status line
pub fn render_footer(ui: &mut egui::Ui, theme: &Theme, status: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(status).color(theme.text_muted).size(12.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new("© Ablaze. Floorp is licensed under MPL 2.0.")
                    .color(theme.text_muted)
                    .size(12.0),
            );
        });
    });
}

/// Soft accent glow behind the page header
pub fn paint_background(ui: &egui::Ui, theme: &Theme) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    let center = egui::pos2(rect.center().x, rect.top() + 120.0);

    for (radius, alpha) in [(260.0, 0.04), (180.0, 0.06), (100.0, 0.08)] {
        painter.circle_filled(center, radius, theme.glow.gamma_multiply(alpha));
    }
}

/// Full-window overlay shown until the first frames settle
pub fn paint_loading_overlay(ctx: &egui::Context, theme: &Theme, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }

    let screen = ctx.content_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("loading_overlay"),
    ));

    painter.rect_filled(screen, 0.0, theme.bg_base.gamma_multiply(opacity));
    painter.text(
        screen.center(),
        Align2::CENTER_CENTER,
        "Floorp",
        FontId::proportional(36.0),
        theme.accent.gamma_multiply(opacity),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_shapes(opacity: f32) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let theme = Theme::dark();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| paint_loading_overlay(ctx, &theme, opacity));
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    #[test]
    fn test_overlay_covers_window() {
        let shapes = overlay_shapes(1.0);
        let window = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        assert!(shapes
            .iter()
            .any(|shape| matches!(shape, egui::Shape::Rect(rect) if rect.rect == window)));
    }

    #[test]
    fn test_faded_overlay_paints_nothing() {
        assert!(overlay_shapes(0.0).is_empty());
    }
}
