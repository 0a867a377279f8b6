//! Download page UI rendering

use std::time::Duration;

use eframe::egui::{self, RichText};

use crate::clipboard::Clipboard;
use crate::links::{package_commands, Artifact, PackageCommand, PLACEHOLDER, RELEASE_NOTES_URL};
use crate::page::DownloadPage;
use crate::platform::Platform;
use crate::state::StateEvent;
use crate::ui::components::{
    badge, card, check_item, command_block, download_button, inset, link, platform_tab,
};
use crate::ui::theme::Theme;

const TERMS_URL: &str = "https://floorp.app/terms";
const PRIVACY_URL: &str = "https://floorp.app/privacy";

/// Per-frame inputs shared by the page sections
pub struct PageFrame<'a> {
    pub theme: &'a Theme,
    pub now: Duration,
    pub clipboard: &'a mut dyn Clipboard,
    pub events: Vec<StateEvent>,
}

impl PageFrame<'_> {
    fn open(&mut self, url: String) {
        if url != PLACEHOLDER {
            self.events.push(StateEvent::OpenUrl(url));
        }
    }
}

/// Render the download page content
pub fn render_download_page(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Download Floorp").color(theme.text_primary).size(40.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new("A fast, private and flexible browser. Choose your platform to get started.")
                .color(theme.text_secondary)
                .size(16.0),
        );
        ui.add_space(24.0);
    });

    render_error_banner(page, ui, frame);

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            // Center the tab strip
            let strip_width = 3.0 * 128.0;
            ui.add_space(((ui.available_width() - strip_width) / 2.0).max(0.0));
            for platform in Platform::all() {
                if platform_tab(ui, theme, *platform, page.platform == *platform) {
                    page.select_platform(*platform);
                }
            }
        });
    });

    ui.add_space(20.0);
    render_platform_panel(page, ui, frame);

    ui.add_space(24.0);
    ui.separator();
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        render_version_card(page, &mut columns[0], frame);
        render_legal_card(&mut columns[1], frame);
    });
}

/// Render the panel of the selected platform, and only that one.
///
/// Returns the platform rendered.
pub fn render_platform_panel(
    page: &mut DownloadPage,
    ui: &mut egui::Ui,
    frame: &mut PageFrame<'_>,
) -> Platform {
    let platform = page.platform;
    ui.push_id(("platform_panel", platform.name()), |ui| {
        ui.columns(2, |columns| match platform {
            Platform::Windows => {
                render_windows_installers(page, &mut columns[0], frame);
                render_windows_extras(page, &mut columns[1], frame);
            }
            Platform::Mac => {
                render_mac_installer(page, &mut columns[0], frame);
                render_mac_extras(page, &mut columns[1], frame);
            }
            Platform::Linux => {
                render_linux_tarballs(page, &mut columns[0], frame);
                render_linux_extras(page, &mut columns[1], frame);
            }
        });
    });
    platform
}

fn render_error_banner(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    let Some(error) = page.release.error.clone() else {
        return;
    };
    if page.release.error_dismissed {
        return;
    }

    egui::Frame::new()
        .fill(theme.error.gamma_multiply(0.15))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.error))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("ℹ").color(theme.error));
                ui.label(
                    RichText::new(format!(
                        "{} - Please try again later or check the GitHub releases page directly.",
                        error
                    ))
                    .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                        page.release.error_dismissed = true;
                    }
                    if ui.button("View Releases").clicked() {
                        frame.open(page.links().releases_page());
                    }
                });
            });
        });
    ui.add_space(16.0);
}

/// Installer option inside a platform card
fn render_installer_option(
    page: &mut DownloadPage,
    ui: &mut egui::Ui,
    frame: &mut PageFrame<'_>,
    option: InstallerOption,
) {
    let theme = frame.theme;
    let enabled = !page.is_download_disabled();

    inset(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(option.title).color(theme.text_primary).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, option.badge, option.badge_color(theme));
            });
        });
        ui.add_space(4.0);
        ui.label(RichText::new(option.description).color(theme.text_muted).size(13.0));
        ui.add_space(10.0);
        if download_button(ui, theme, option.button, option.primary, enabled) {
            page.request_download(frame.now, option.artifact);
        }
    });
}

fn render_hashes_link(page: &DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        let url = page.hashes_url();
        if link(ui, frame.theme, "Download SHA256 hashes", url != PLACEHOLDER) {
            frame.open(url);
        }
    });
}

fn render_requirements(ui: &mut egui::Ui, theme: &Theme, items: &[&str]) {
    card(ui, theme, Some("System requirements"), |ui| {
        for item in items {
            check_item(ui, theme, item);
        }
    });
}

fn render_package_command(
    page: &mut DownloadPage,
    ui: &mut egui::Ui,
    frame: &mut PageFrame<'_>,
    command: &PackageCommand,
    gated_page: bool,
) {
    let theme = frame.theme;

    ui.horizontal(|ui| {
        ui.label(RichText::new(command.manager).color(theme.text_primary).strong());
        if let Some(url) = command.page {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if link(ui, theme, command.page_label, true) {
                    if gated_page {
                        page.request_gated_link(frame.now, url);
                    } else {
                        frame.open(url.to_string());
                    }
                }
            });
        }
    });
    ui.add_space(6.0);

    let copied = page.copy_feedback.is_copied(command.command);
    if command_block(ui, theme, command.command, command.copyable, copied) {
        page.copy(frame.now, command.command, frame.clipboard);
    }
}

fn render_windows_installers(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("Windows installer"), |ui| {
        render_installer_option(page, ui, frame, InstallerOption {
            title: "Online installer",
            badge: "Small size",
            badge_kind: BadgeKind::Success,
            description: "Downloads the latest components during installation. Recommended for most users.",
            button: "Download online installer",
            primary: true,
            artifact: Artifact::WindowsStubInstaller,
        });

        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("OR").color(theme.text_muted).size(12.0));
            ui.add_space(6.0);
        });

        render_installer_option(page, ui, frame, InstallerOption {
            title: "Offline installer",
            badge: "Full size",
            badge_kind: BadgeKind::Muted,
            description: "Contains everything needed to install without a network connection.",
            button: "Download full installer",
            primary: false,
            artifact: Artifact::WindowsInstaller,
        });

        render_hashes_link(page, ui, frame);
    });
}

fn render_windows_extras(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    render_requirements(ui, theme, &[
        "Windows 10 or later",
        "64-bit (x86_64) processor",
        "4 GB RAM or more",
    ]);
    ui.add_space(16.0);

    card(ui, theme, Some("Other options"), |ui| {
        inset(ui, theme, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Portable version").color(theme.text_primary).strong());
                    ui.label(
                        RichText::new("Runs from any folder or USB drive without installation.")
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Download").clicked() {
                        frame.open(page.artifact_url(Artifact::WindowsPortable));
                    }
                });
            });
        });
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        for command in package_commands(Platform::Windows) {
            render_package_command(page, ui, frame, command, false);
        }
    });
}

fn render_mac_installer(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("macOS installer"), |ui| {
        render_installer_option(page, ui, frame, InstallerOption {
            title: "Universal binary",
            badge: "Intel & Apple Silicon",
            badge_kind: BadgeKind::Info,
            description: "A single disk image that runs natively on every supported Mac.",
            button: "Download for macOS",
            primary: true,
            artifact: Artifact::MacUniversal,
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Open the .dmg and drag Floorp into your Applications folder.")
                    .color(theme.text_muted)
                    .size(13.0),
            );
        });

        render_hashes_link(page, ui, frame);
    });
}

fn render_mac_extras(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    render_requirements(ui, theme, &[
        "macOS 10.15 Catalina or later",
        "Intel or Apple Silicon processor",
    ]);
    ui.add_space(16.0);

    card(ui, theme, Some("Homebrew"), |ui| {
        for command in package_commands(Platform::Mac) {
            render_package_command(page, ui, frame, command, false);
        }
    });
}

fn render_linux_tarballs(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("Linux packages"), |ui| {
        render_installer_option(page, ui, frame, InstallerOption {
            title: "Tarball (x86_64)",
            badge: "Standard",
            badge_kind: BadgeKind::Success,
            description: "Generic build for 64-bit Intel and AMD systems.",
            button: "Download tarball",
            primary: true,
            artifact: Artifact::LinuxX86_64,
        });
        ui.add_space(12.0);
        render_installer_option(page, ui, frame, InstallerOption {
            title: "Tarball (AArch64)",
            badge: "ARM",
            badge_kind: BadgeKind::Muted,
            description: "Generic build for 64-bit ARM systems.",
            button: "Download ARM tarball",
            primary: false,
            artifact: Artifact::LinuxAarch64,
        });

        render_hashes_link(page, ui, frame);
    });
}

fn render_linux_extras(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("Package managers"), |ui| {
        for command in package_commands(Platform::Linux) {
            // Package pages on Linux go through the countdown like downloads
            render_package_command(page, ui, frame, command, true);
            ui.add_space(12.0);
        }
    });
    ui.add_space(16.0);

    egui::Frame::new()
        .fill(theme.info.gamma_multiply(0.15))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Arch Linux users can install Floorp from the AUR (floorp-bin).")
                    .color(theme.text_primary)
                    .size(13.0),
            );
        });
}

fn render_version_card(page: &mut DownloadPage, ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("Latest version"), |ui| {
        if page.release.loading {
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(28.0).color(theme.accent));
            });
        } else if let Some(ref error) = page.release.error {
            ui.label(RichText::new(error).color(theme.warning));
        } else {
            egui::Grid::new("version_table")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    let version = page.release.version();
                    let version = if version.is_empty() { "N/A" } else { version };
                    ui.label(RichText::new("Latest version").color(theme.text_secondary).strong());
                    ui.label(RichText::new(version).monospace().color(theme.text_primary));
                    ui.end_row();

                    ui.label(RichText::new("Release date").color(theme.text_secondary).strong());
                    ui.label(RichText::new(page.release.release_date()).color(theme.text_primary));
                    ui.end_row();
                });
        }

        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("Release notes").clicked() {
                frame.open(RELEASE_NOTES_URL.to_string());
            }
            let hashes_enabled = !page.is_download_disabled();
            if ui.add_enabled(hashes_enabled, egui::Button::new("Hashes")).clicked() {
                frame.open(page.hashes_url());
            }
            if ui.button("Source code").clicked() {
                frame.open(page.links().repository_page());
            }
        });
    });
}

fn render_legal_card(ui: &mut egui::Ui, frame: &mut PageFrame<'_>) {
    let theme = frame.theme;
    card(ui, theme, Some("Legal & privacy"), |ui| {
        ui.label(
            RichText::new("By downloading Floorp, you agree to the Terms of Use and Privacy Policy.")
                .color(theme.text_muted)
                .size(13.0),
        );
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Terms of Use").clicked() {
                frame.open(TERMS_URL.to_string());
            }
            if ui.button("Privacy Policy").clicked() {
                frame.open(PRIVACY_URL.to_string());
            }
        });
    });
}

enum BadgeKind {
    Success,
    Info,
    Muted,
}

struct InstallerOption {
    title: &'static str,
    badge: &'static str,
    badge_kind: BadgeKind,
    description: &'static str,
    button: &'static str,
    primary: bool,
    artifact: Artifact,
}

impl InstallerOption {
    fn badge_color(&self, theme: &Theme) -> egui::Color32 {
        match self.badge_kind {
            BadgeKind::Success => theme.success,
            BadgeKind::Info => theme.info,
            BadgeKind::Muted => theme.text_muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::InertAds;
    use crate::clipboard::ClipboardError;
    use crate::config::Config;
    use crate::github::Release;
    use std::sync::Arc;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    /// Text drawn in a frame, with its screen rect
    type DrawnText = Vec<(String, egui::Rect)>;

    /// Headless egui context kept across frames so clicks can land
    struct Harness {
        ctx: egui::Context,
        theme: Theme,
        clipboard: NullClipboard,
        frames: u32,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                theme: Theme::dark(),
                clipboard: NullClipboard,
                frames: 0,
            }
        }

        fn frame(
            &mut self,
            page: &mut DownloadPage,
            events: Vec<egui::Event>,
            mut draw: impl FnMut(&mut DownloadPage, &mut egui::Ui, &mut PageFrame<'_>),
        ) -> (Vec<StateEvent>, DrawnText) {
            let Self { ctx, theme, clipboard, frames } = self;
            *frames += 1;
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(1200.0, 2000.0),
                )),
                time: Some(f64::from(*frames) * 0.05),
                events,
                ..Default::default()
            };

            let mut emitted = Vec::new();
            let output = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let mut frame = PageFrame {
                        theme: &*theme,
                        now: Duration::ZERO,
                        clipboard: &mut *clipboard,
                        events: Vec::new(),
                    };
                    draw(page, ui, &mut frame);
                    emitted = frame.events;
                });
            });

            let mut texts = Vec::new();
            for clipped in &output.shapes {
                collect_texts(&clipped.shape, &mut texts);
            }
            (emitted, texts)
        }

        /// Press and release the primary button over the text `label`
        fn click_text(
            &mut self,
            page: &mut DownloadPage,
            label: &str,
            mut draw: impl FnMut(&mut DownloadPage, &mut egui::Ui, &mut PageFrame<'_>),
        ) -> Vec<StateEvent> {
            let (_, texts) = self.frame(page, Vec::new(), &mut draw);
            let pos = texts
                .iter()
                .find(|(text, _)| text == label)
                .map(|(_, rect)| rect.center())
                .unwrap_or_else(|| panic!("{:?} not drawn", label));

            let press = vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: egui::Modifiers::default(),
                },
            ];
            let release = vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            }];

            let (mut events, _) = self.frame(page, press, &mut draw);
            events.extend(self.frame(page, release, &mut draw).0);
            events
        }
    }

    fn collect_texts(shape: &egui::Shape, out: &mut DrawnText) {
        match shape {
            egui::Shape::Text(text) => {
                out.push((text.galley.text().to_string(), shape.visual_bounding_rect()))
            }
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_texts(shape, out);
                }
            }
            _ => {}
        }
    }

    fn drawn(texts: &DrawnText, label: &str) -> bool {
        texts.iter().any(|(text, _)| text == label)
    }

    fn page() -> DownloadPage {
        DownloadPage::new(&Config::default(), "Haiku", Arc::new(InertAds))
    }

    fn load(page: &mut DownloadPage) {
        page.release.apply(Ok(Release {
            tag_name: "v11.0".to_string(),
            name: "Floorp 11.0".to_string(),
            published_at: "2024-05-01T12:00:00Z".to_string(),
        }));
    }

    const PANEL_TITLES: [(Platform, &str); 3] = [
        (Platform::Windows, "Windows installer"),
        (Platform::Mac, "macOS installer"),
        (Platform::Linux, "Linux packages"),
    ];

    #[test]
    fn test_each_tab_renders_its_panel_only() {
        let mut page = page();
        let mut harness = Harness::new();

        for platform in Platform::all() {
            page.select_platform(*platform);
            let (_, texts) = harness.frame(&mut page, Vec::new(), |page, ui, frame| {
                render_platform_panel(page, ui, frame);
            });

            for (owner, title) in PANEL_TITLES {
                assert_eq!(
                    drawn(&texts, title),
                    owner == *platform,
                    "{:?} drawn on the {:?} tab",
                    title,
                    platform
                );
            }
        }
    }

    #[test]
    fn test_download_button_inert_without_release() {
        let mut page = page();
        page.select_platform(Platform::Linux);
        let mut harness = Harness::new();

        harness.click_text(&mut page, "⬇ Download tarball", |page, ui, frame| {
            render_platform_panel(page, ui, frame);
        });
        assert!(page.is_download_disabled());
        assert!(!page.gate.is_open());
    }

    #[test]
    fn test_download_button_opens_gate_once_loaded() {
        let mut page = page();
        page.select_platform(Platform::Linux);
        load(&mut page);
        let mut harness = Harness::new();

        harness.click_text(&mut page, "⬇ Download tarball", |page, ui, frame| {
            render_platform_panel(page, ui, frame);
        });
        assert!(page.gate.is_open());
        assert_eq!(
            page.gate.target_url(),
            Some("https://github.com/Floorp-Projects/Floorp/releases/download/v11.0/floorp-linux-x86_64.tar.xz")
        );
    }

    #[test]
    fn test_full_page_while_loading() {
        let mut page = page();
        page.release.loading = true;
        let mut harness = Harness::new();

        let (events, texts) = harness.frame(&mut page, Vec::new(), |page, ui, frame| {
            render_download_page(page, ui, frame)
        });
        assert!(events.is_empty());
        assert!(drawn(&texts, "Latest version"));
        assert!(!drawn(&texts, "View Releases"));
        assert!(!page.gate.is_open());
    }

    #[test]
    fn test_error_banner_links_to_releases() {
        let mut page = page();
        page.release.apply(Err(crate::github::FetchError::Status { status: 500 }));
        let mut harness = Harness::new();

        let events = harness.click_text(&mut page, "View Releases", |page, ui, frame| {
            render_download_page(page, ui, frame)
        });
        assert_eq!(
            events,
            vec![StateEvent::OpenUrl(
                "https://github.com/Floorp-Projects/Floorp/releases".to_string()
            )]
        );
    }

    #[test]
    fn test_placeholder_links_are_not_opened() {
        let mut page = page();
        let mut harness = Harness::new();
        let (events, _) = harness.frame(&mut page, Vec::new(), |page, _ui, frame| {
            let url = page.hashes_url();
            frame.open(url);
        });
        assert!(events.is_empty());
    }
}
