//! Copy-to-clipboard with a transient "copied" indicator.

use std::time::Duration;

use thiserror::Error;

use crate::timer::{TimerHandle, TimerQueue};

/// How long the copied indicator stays on
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard of the egui platform integration
///
/// `copy_text` hands the text to the integration and cannot fail, so this
/// always returns `Ok`. Write errors only come from other backends.
pub struct EguiClipboard<'a>(pub &'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}

/// Tracks which command was copied last
#[derive(Debug, Default)]
pub struct CopyFeedback {
    last_copied: Option<String>,
    timers: TimerQueue<()>,
    pending: Option<TimerHandle>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_copied(&self) -> Option<&str> {
        self.last_copied.as_deref()
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.last_copied.as_deref() == Some(text)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Write `text` to the clipboard and show the indicator for it.
    ///
    /// A clipboard failure is logged; the indicator still flips.
    pub fn copy(&mut self, now: Duration, text: &str, clipboard: &mut dyn Clipboard) {
        match clipboard.write_text(text) {
            Ok(()) => tracing::debug!("Copied to clipboard: {}", text),
            Err(e) => tracing::error!("Failed to copy {:?}: {}", text, e),
        }

        // A newer copy restarts the indicator
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        self.last_copied = Some(text.to_string());
        self.pending = Some(self.timers.schedule(now, COPIED_INDICATOR, ()));
    }

    /// Clear the indicator once its delay has passed
    pub fn update(&mut self, now: Duration) {
        while self.timers.pop_due(now).is_some() {
            self.pending = None;
            self.last_copied = None;
        }
    }
}
