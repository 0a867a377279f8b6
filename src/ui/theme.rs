use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the toggle button, naming the mode it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    // Base colors
    pub bg_base: Color32,
    pub bg_card: Color32,
    pub bg_inset: Color32,
    pub bg_overlay: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_content: Color32,

    // Semantic colors
    pub success: Color32,
    pub info: Color32,
    pub warning: Color32,
    pub error: Color32,

    pub border: Color32,
    /// Soft glow painted behind the page
    pub glow: Color32,
}

impl Theme {
    /// Dark theme - the default
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            bg_base: Color32::from_rgb(15, 17, 26),
            bg_card: Color32::from_rgb(27, 30, 43),
            bg_inset: Color32::from_rgb(20, 22, 33),
            bg_overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 128),

            text_primary: Color32::from_rgb(236, 239, 244),
            text_secondary: Color32::from_rgb(196, 201, 214),
            text_muted: Color32::from_rgb(130, 137, 155),

            accent: Color32::from_rgb(59, 130, 246),        // Blue-500
            accent_content: Color32::from_rgb(255, 255, 255),

            success: Color32::from_rgb(34, 197, 94),  // Green-500
            info: Color32::from_rgb(56, 189, 248),    // Sky-400
            warning: Color32::from_rgb(234, 179, 8),  // Yellow-500
            error: Color32::from_rgb(239, 68, 68),    // Red-500

            border: Color32::from_rgb(48, 53, 72),
            glow: Color32::from_rgba_unmultiplied(59, 130, 246, 28),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            bg_base: Color32::from_rgb(248, 250, 252),
            bg_card: Color32::from_rgb(255, 255, 255),
            bg_inset: Color32::from_rgb(241, 245, 249),
            bg_overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 128),

            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(51, 65, 85),
            text_muted: Color32::from_rgb(100, 116, 139),

            accent: Color32::from_rgb(37, 99, 235),         // Blue-600
            accent_content: Color32::from_rgb(255, 255, 255),

            success: Color32::from_rgb(22, 163, 74),  // Green-600
            info: Color32::from_rgb(2, 132, 199),     // Sky-600
            warning: Color32::from_rgb(202, 138, 4),  // Yellow-600
            error: Color32::from_rgb(220, 38, 38),    // Red-600

            border: Color32::from_rgb(226, 232, 240),
            glow: Color32::from_rgba_unmultiplied(37, 99, 235, 18),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.mode {
            ThemeMode::Light => Visuals::light(),
            ThemeMode::Dark => Visuals::dark(),
        };

        // Window and panel backgrounds
        visuals.window_fill = self.bg_card;
        visuals.panel_fill = self.bg_base;
        visuals.faint_bg_color = self.bg_inset;
        visuals.extreme_bg_color = self.bg_inset;

        visuals.widgets.noninteractive.bg_fill = self.bg_card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_inset;
        visuals.widgets.inactive.weak_bg_fill = self.bg_inset;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.accent_content);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);
    }
}
