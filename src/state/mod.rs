//! Application state modules
//!
//! Each state struct owns its fields and its poll method. Results flow back
//! to the shell as [`StateEvent`]s instead of through direct mutation.

mod release;
mod ui;

pub use release::{format_release_date, ReleaseState, FETCH_ERROR_MESSAGE};
pub use ui::{LoadingOverlay, ThemeStore};

/// Requests from pages and state to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Update the status line
    StatusMessage(String),

    /// Flip between light and dark theme
    ToggleTheme,

    /// Open an ungated link in the system browser
    OpenUrl(String),
}
