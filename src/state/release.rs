//! Latest-release state for the download page

use chrono::{DateTime, Local, TimeZone};
use eframe::egui;
use tokio::task::JoinHandle;

use crate::github::{FetchError, GitHubClient, Release};
use crate::links::format_version;
use crate::state::StateEvent;
use crate::task::{poll_task, PollResult};

/// Shown in place of the release details when the fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch latest release information";

/// One-shot fetch of the latest release
#[derive(Default)]
pub struct ReleaseState {
    /// Latest release, absent until the fetch succeeds
    pub release: Option<Release>,
    /// Whether the fetch is in flight
    pub loading: bool,
    /// User-facing error from the fetch
    pub error: Option<String>,
    /// Whether the user closed the error banner
    pub error_dismissed: bool,
    task: Option<JoinHandle<Result<Release, FetchError>>>,
}

impl ReleaseState {
    /// Spawn the fetch. Does nothing if one is already running.
    pub fn start(&mut self, client: &GitHubClient) -> Option<StateEvent> {
        if self.task.is_some() {
            return None;
        }

        self.loading = true;
        let client = client.clone();
        self.task = Some(tokio::spawn(async move { client.get_latest_release().await }));

        Some(StateEvent::StatusMessage("Fetching latest release...".to_string()))
    }

    /// Poll the fetch task for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<StateEvent> {
        match poll_task(&mut self.task) {
            PollResult::Complete(Ok(result)) => Some(self.apply(result)),
            PollResult::Complete(Err(e)) => {
                tracing::error!("Release task panicked: {}", e);
                self.fail();
                Some(StateEvent::StatusMessage(FETCH_ERROR_MESSAGE.to_string()))
            }
            PollResult::Pending => {
                ctx.request_repaint();
                None
            }
            PollResult::NoTask => None,
        }
    }

    /// Record the outcome of a fetch
    pub fn apply(&mut self, result: Result<Release, FetchError>) -> StateEvent {
        match result {
            Ok(release) => {
                let message = format!("Latest release: {}", release.name);
                self.release = Some(release);
                self.error = None;
                self.loading = false;
                StateEvent::StatusMessage(message)
            }
            Err(e) => {
                tracing::error!("Error fetching release data: {}", e);
                self.fail();
                StateEvent::StatusMessage(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }

    fn fail(&mut self) {
        self.release = None;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    pub fn tag(&self) -> Option<&str> {
        self.release.as_ref().map(|r| r.tag_name.as_str())
    }

    /// Tag without its `v` prefix, empty when unknown
    pub fn version(&self) -> &str {
        format_version(self.tag())
    }

    /// Downloads stay disabled until a release is known and no error occurred
    pub fn is_download_disabled(&self) -> bool {
        self.release.is_none() || self.error.is_some()
    }

    pub fn release_date(&self) -> String {
        self.release
            .as_ref()
            .map(|r| format_release_date(&r.published_at))
            .unwrap_or_default()
    }
}

/// Render an ISO-8601 timestamp as a local calendar date
pub fn format_release_date(timestamp: &str) -> String {
    format_release_date_in(timestamp, &Local)
}

fn format_release_date_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if timestamp.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.with_timezone(tz).format("%B %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
