//! Download page state.
//!
//! Everything the page does that is not drawing lives here so it can be
//! driven without a window: platform detection and the release fetch run
//! once at construction, download clicks go through the countdown gate, and
//! copy buttons go through the copy indicator.

use std::time::Duration;

use crate::ads::{AdSlot, AdUnit, SharedAdNetwork};
use crate::clipboard::{Clipboard, CopyFeedback};
use crate::config::Config;
use crate::gate::{DownloadGate, Navigator};
use crate::github::GitHubClient;
use crate::links::{Artifact, DownloadLinks};
use crate::platform::Platform;
use crate::state::{ReleaseState, StateEvent};

/// Window title while the download page is shown
pub const PAGE_TITLE: &str = "Download Floorp";

/// Ad units shown inside the countdown modal
pub struct ModalAds {
    pub top: AdUnit,
    pub bottom: AdUnit,
}

pub struct DownloadPage {
    pub release: ReleaseState,
    /// Selected platform tab
    pub platform: Platform,
    pub gate: DownloadGate,
    pub copy_feedback: CopyFeedback,
    pub modal_ads: ModalAds,
    links: DownloadLinks,
}

impl DownloadPage {
    /// Build the page, picking the initial tab from `environment`
    pub fn new(config: &Config, environment: &str, ads: SharedAdNetwork) -> Self {
        let modal_ads = ModalAds {
            top: AdUnit::new(
                AdSlot::new(&config.ads.client, &config.ads.modal_top_slot),
                ads.clone(),
            ),
            bottom: AdUnit::new(
                AdSlot::new(&config.ads.client, &config.ads.modal_bottom_slot),
                ads,
            ),
        };

        Self {
            release: ReleaseState::default(),
            platform: Platform::detect(environment),
            gate: DownloadGate::new(),
            copy_feedback: CopyFeedback::new(),
            modal_ads,
            links: DownloadLinks::new(&config.site),
        }
    }

    /// Build the page and start the one release fetch it performs
    pub fn open(
        config: &Config,
        environment: &str,
        ads: SharedAdNetwork,
        client: &GitHubClient,
    ) -> (Self, Option<StateEvent>) {
        let mut page = Self::new(config, environment, ads);
        let event = page.release.start(client);
        (page, event)
    }

    pub fn title(&self) -> &'static str {
        PAGE_TITLE
    }

    pub fn links(&self) -> &DownloadLinks {
        &self.links
    }

    pub fn select_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn is_download_disabled(&self) -> bool {
        self.release.is_download_disabled()
    }

    /// URL for an artifact of the fetched release, `#` while unknown
    pub fn artifact_url(&self, artifact: Artifact) -> String {
        self.links.artifact_url(self.release.tag(), artifact)
    }

    pub fn hashes_url(&self) -> String {
        self.links.hashes_url(self.release.tag())
    }

    /// Start the countdown for an artifact download.
    ///
    /// Refused while downloads are disabled or the modal is already open.
    pub fn request_download(&mut self, now: Duration, artifact: Artifact) -> bool {
        if self.is_download_disabled() {
            tracing::debug!("Download of {:?} refused: no release", artifact);
            return false;
        }
        let url = self.artifact_url(artifact);
        self.gate.request(now, url)
    }

    /// Start the countdown for an arbitrary external link
    pub fn request_gated_link(&mut self, now: Duration, url: &str) -> bool {
        self.gate.request(now, url)
    }

    pub fn cancel_download(&mut self) {
        self.gate.cancel();
    }

    pub fn copy(&mut self, now: Duration, text: &str, clipboard: &mut dyn Clipboard) {
        self.copy_feedback.copy(now, text, clipboard);
    }

    /// Advance timers to `now`
    pub fn update(&mut self, now: Duration, navigator: &mut dyn Navigator) {
        self.gate.update(now, navigator);
        self.copy_feedback.update(now);

        if !self.gate.is_open() {
            self.modal_ads.top.unmount();
            self.modal_ads.bottom.unmount();
        }
    }

    /// Earliest pending timer, for scheduling the next repaint
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.gate.next_deadline(), self.copy_feedback.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
