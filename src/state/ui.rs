//! Shell-level UI state

use std::time::Duration;

use crate::ui::theme::{Theme, ThemeMode};

/// Current theme; the shell is its only writer
pub struct ThemeStore {
    mode: ThemeMode,
    theme: Theme,
    /// Whether the theme needs to be applied to egui
    dirty: bool,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            theme: mode.theme(),
            dirty: true, // Apply theme on first frame
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette handed to pages for rendering
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = self.mode.theme();
        self.dirty = true;
        tracing::debug!("Theme switched to {:?}", self.mode);
    }

    /// Returns true once after each change
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Minimum time the startup overlay stays up
const OVERLAY_HOLD: Duration = Duration::from_millis(500);

/// Fade-out after the hold
const OVERLAY_FADE: Duration = Duration::from_millis(300);

/// Full-page overlay covering the window while the first frames settle
#[derive(Debug, Default)]
pub struct LoadingOverlay {
    content_ready_at: Option<Duration>,
}

impl LoadingOverlay {
    /// Mark the page content as rendered. Only the first call counts.
    pub fn content_ready(&mut self, now: Duration) {
        self.content_ready_at.get_or_insert(now);
    }

    /// Overlay opacity at `now`, from 1.0 (opaque) to 0.0 (gone)
    pub fn opacity(&self, now: Duration) -> f32 {
        let Some(ready) = self.content_ready_at else {
            return 1.0;
        };
        let shown = now.saturating_sub(ready);
        if shown <= OVERLAY_HOLD {
            return 1.0;
        }
        let fading = (shown - OVERLAY_HOLD).as_secs_f32() / OVERLAY_FADE.as_secs_f32();
        (1.0 - fading).clamp(0.0, 1.0)
    }

    pub fn is_visible(&self, now: Duration) -> bool {
        self.opacity(now) > 0.0
    }
}
