//! Drawing for ad placements

use eframe::egui::{self, Align2, Color32, FontId, Sense, Shape, Stroke, Vec2};

use crate::ads::AdUnit;
use crate::ui::theme::Theme;

/// Draw an ad unit, mounting it on first display.
///
/// Live units reserve their box for the network; inert units draw a dashed
/// placeholder naming the slot.
pub fn render_ad_unit(ui: &mut egui::Ui, unit: &mut AdUnit, theme: &Theme, min_height: f32) {
    unit.mount();

    let size = Vec2::new(ui.available_width(), min_height);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    if unit.is_live() {
        painter.rect_filled(rect, 8.0, theme.bg_inset);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Advertisement",
            FontId::proportional(11.0),
            theme.text_muted,
        );
        return;
    }

    painter.rect_filled(rect, 4.0, Color32::from_gray(229));

    let stroke = Stroke::new(2.0, Color32::from_gray(156));
    let r = rect.shrink(1.0);
    let outline = [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom(), r.left_top()];
    painter.extend(Shape::dashed_line(&outline, stroke, 6.0, 4.0));

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("AdSense Placeholder\n(Slot: {})", unit.slot().slot),
        FontId::monospace(13.0),
        Color32::from_gray(107),
    );
}
