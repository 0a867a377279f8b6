use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::ads::{AdQueue, AdSlot, AdUnit, InertAds, SharedAdNetwork};
use crate::clipboard::EguiClipboard;
use crate::config::Config;
use crate::gate::{Navigator, SystemBrowser};
use crate::github::GitHubClient;
use crate::page::DownloadPage;
use crate::platform::host_signature;
use crate::state::{LoadingOverlay, StateEvent, ThemeStore};
use crate::ui::{
    paint_background, paint_loading_overlay, render_ad_unit, render_download_page,
    render_footer, render_gate_modal, render_navbar, PageFrame,
};

/// Height reserved for the ad below the page content
const SHELL_AD_HEIGHT: f32 = 120.0;

/// Main application state
pub struct PortalApp {
    /// Application configuration
    config: Config,
    /// Current theme
    theme: ThemeStore,
    /// Startup overlay
    overlay: LoadingOverlay,
    /// The download page
    page: DownloadPage,
    /// Ad below the page content
    shell_ad: AdUnit,
    /// Pending display requests, present only in live ad mode
    ad_queue: Option<AdQueue>,
    /// Where gated downloads and external links are opened
    browser: SystemBrowser,
    /// Status message for the footer
    status_message: String,
}

impl PortalApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let (network, ad_queue): (SharedAdNetwork, Option<AdQueue>) = if config.ads.mode.is_live() {
            let queue = AdQueue::new();
            (Arc::new(queue.clone()), Some(queue))
        } else {
            (Arc::new(InertAds), None)
        };

        let environment = config
            .site
            .user_agent
            .clone()
            .unwrap_or_else(host_signature);

        let mut events = Vec::new();
        let page = match GitHubClient::new(&config.site) {
            Ok(client) => {
                let (page, event) = DownloadPage::open(&config, &environment, network.clone(), &client);
                events.extend(event);
                page
            }
            Err(e) => {
                let mut page = DownloadPage::new(&config, &environment, network.clone());
                events.push(page.release.apply(Err(e)));
                page
            }
        };
        tracing::info!("Initial platform: {}", page.platform);

        cc.egui_ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(page.title().to_string()));

        let shell_ad = AdUnit::new(
            AdSlot::new(&config.ads.client, &config.ads.shell_slot),
            network,
        );

        let mut app = Self {
            theme: ThemeStore::new(config.appearance.theme),
            config,
            overlay: LoadingOverlay::default(),
            page,
            shell_ad,
            ad_queue,
            browser: SystemBrowser,
            status_message: "Ready".to_string(),
        };

        for event in events {
            app.handle_event(event);
        }

        app
    }

    fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(message) => self.status_message = message,
            StateEvent::ToggleTheme => {
                self.theme.toggle();
                self.config.appearance.theme = self.theme.mode();
                if let Err(e) = self.config.save() {
                    tracing::warn!("Failed to save theme preference: {}", e);
                }
            }
            StateEvent::OpenUrl(url) => self.browser.navigate(&url),
        }
    }

    /// Hand display requests from mounted units to the network
    fn drain_ad_requests(&self) {
        let Some(queue) = &self.ad_queue else {
            return;
        };
        match queue.drain() {
            Ok(requests) => {
                for request in requests {
                    tracing::info!(client = %request.client, slot = %request.slot, "Ad display requested");
                }
            }
            Err(e) => tracing::error!("Failed to drain ad queue: {}", e),
        }
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));

        if self.theme.take_dirty() {
            self.theme.theme().apply(ctx);
        }

        // Poll async tasks and advance timers
        let mut events = Vec::new();
        events.extend(self.page.release.poll(ctx));
        self.page.update(now, &mut self.browser);

        let theme = self.theme.theme();
        let mode = self.theme.mode();

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(8.0);
            events.extend(render_navbar(ui, theme, mode));
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            render_footer(ui, theme, &self.status_message);
            ui.add_space(4.0);
        });

        let mut clipboard = EguiClipboard(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            paint_background(ui, theme);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut frame = PageFrame {
                        theme,
                        now,
                        clipboard: &mut clipboard,
                        events: Vec::new(),
                    };
                    render_download_page(&mut self.page, ui, &mut frame);
                    events.append(&mut frame.events);

                    ui.add_space(32.0);
                    render_ad_unit(ui, &mut self.shell_ad, theme, SHELL_AD_HEIGHT);
                    ui.add_space(16.0);
                });
        });
        self.overlay.content_ready(now);

        render_gate_modal(ctx, &mut self.page, theme);

        paint_loading_overlay(ctx, theme, self.overlay.opacity(now));
        if self.overlay.is_visible(now) {
            ctx.request_repaint();
        }

        self.drain_ad_requests();

        for event in events {
            self.handle_event(event);
        }

        if let Some(deadline) = self.page.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(now));
        }
    }
}
