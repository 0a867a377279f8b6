//! UI modules for the download portal
//!
//! Rendering only. Pages take their state by `&mut` and report anything the
//! shell must act on as [`crate::state::StateEvent`]s.

mod ad_unit;
mod components;
mod download_page;
mod gate_modal;
mod shell;
pub mod theme;

pub use ad_unit::render_ad_unit;
pub use download_page::{render_download_page, PageFrame};
pub use gate_modal::render_gate_modal;
pub use shell::{paint_background, paint_loading_overlay, render_footer, render_navbar};
