//! Countdown gate in front of direct downloads.
//!
//! A download click does not navigate immediately. It opens a modal that
//! counts down from [`COUNTDOWN_SECS`] while ad units are on screen, then
//! navigates to the requested URL and closes itself a second later.
//!
//! ```text
//! Closed --request(url)--> Counting(4) --tick--> Counting(3) .. Counting(1)
//!        --tick--> Redirecting(0) [navigate once] --1s--> Closed
//! any --cancel--> Closed
//! ```
//!
//! Ticks are chained: each one is scheduled only when the previous fires,
//! and every pending timer is dropped on cancel so nothing stale can fire
//! into a later session.

use std::time::Duration;

use crate::timer::{TimerHandle, TimerQueue};

/// Seconds counted down before the redirect
pub const COUNTDOWN_SECS: u8 = 4;

const TICK: Duration = Duration::from_secs(1);

/// Delay between the redirect and the modal closing
const CLOSE_DELAY: Duration = Duration::from_secs(1);

/// Performs the full-page navigation to a download URL
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Opens URLs in the system browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::error!("Failed to open {}: {}", url, e);
        }
    }
}

/// Where the gate is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Closed,
    /// Counting down; `seconds_remaining` is between 1 and 4
    Counting,
    /// Countdown hit zero and the redirect was issued
    Redirecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateTimer {
    Tick,
    Close,
}

/// Modal state machine guarding download links
#[derive(Debug)]
pub struct DownloadGate {
    phase: GatePhase,
    seconds_remaining: u8,
    target_url: Option<String>,
    timers: TimerQueue<GateTimer>,
    pending: Option<TimerHandle>,
}

impl Default for DownloadGate {
    fn default() -> Self {
        Self {
            phase: GatePhase::Closed,
            seconds_remaining: COUNTDOWN_SECS,
            target_url: None,
            timers: TimerQueue::new(),
            pending: None,
        }
    }
}

impl DownloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != GatePhase::Closed
    }

    pub fn seconds_remaining(&self) -> u8 {
        self.seconds_remaining
    }

    pub fn target_url(&self) -> Option<&str> {
        self.target_url.as_deref()
    }

    /// Share of the countdown already elapsed, from 0.0 to 1.0
    pub fn elapsed_fraction(&self) -> f32 {
        f32::from(COUNTDOWN_SECS - self.seconds_remaining.min(COUNTDOWN_SECS))
            / f32::from(COUNTDOWN_SECS)
    }

    /// Next deadline, for scheduling a repaint
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Open the modal for `url`.
    ///
    /// Ignored while the gate is already open; returns whether it opened.
    pub fn request(&mut self, now: Duration, url: impl Into<String>) -> bool {
        if self.is_open() {
            tracing::debug!("Download already pending, ignoring request");
            return false;
        }

        let url = url.into();
        tracing::info!("Download requested: {}", url);
        self.phase = GatePhase::Counting;
        self.seconds_remaining = COUNTDOWN_SECS;
        self.target_url = Some(url);
        self.pending = Some(self.timers.schedule(now, TICK, GateTimer::Tick));
        true
    }

    /// Close the modal and drop any pending tick or close timer
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::info!("Download cancelled with {}s remaining", self.seconds_remaining);
        }
        self.reset();
    }

    /// Fire every timer due at `now`, in order.
    ///
    /// A jump spanning several deadlines is processed one event at a time,
    /// each follow-up being scheduled from the deadline that produced it.
    pub fn update(&mut self, now: Duration, navigator: &mut dyn Navigator) {
        while let Some((due, timer)) = self.timers.pop_due(now) {
            self.pending = None;
            match timer {
                GateTimer::Tick => self.on_tick(due, navigator),
                GateTimer::Close => {
                    tracing::debug!("Download modal closed after redirect");
                    self.reset();
                }
            }
        }
    }

    fn on_tick(&mut self, due: Duration, navigator: &mut dyn Navigator) {
        if self.phase != GatePhase::Counting {
            return;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            tracing::trace!("Download countdown: {}s", self.seconds_remaining);
            self.pending = Some(self.timers.schedule(due, TICK, GateTimer::Tick));
            return;
        }

        self.phase = GatePhase::Redirecting;
        match self.target_url.as_deref() {
            Some(url) => {
                tracing::info!("Redirecting to {}", url);
                navigator.navigate(url);
            }
            None => tracing::warn!("Countdown finished without a target URL"),
        }
        self.pending = Some(self.timers.schedule(due, CLOSE_DELAY, GateTimer::Close));
    }

    fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        debug_assert!(self.timers.is_empty());
        self.phase = GatePhase::Closed;
        self.seconds_remaining = COUNTDOWN_SECS;
        self.target_url = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, url: &str) {
            self.visited.push(url.to_string());
        }
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    const URL: &str = "https://github.com/Floorp-Projects/Floorp/releases/download/v11.0/floorp-macOS-universal.dmg";

    #[test]
    fn test_request_opens_countdown() {
        let mut gate = DownloadGate::new();
        assert_eq!(gate.phase(), GatePhase::Closed);

        assert!(gate.request(secs(0), URL));
        assert_eq!(gate.phase(), GatePhase::Counting);
        assert_eq!(gate.seconds_remaining(), 4);
        assert_eq!(gate.target_url(), Some(URL));
        assert_eq!(gate.elapsed_fraction(), 0.0);
    }

    #[test]
    fn test_full_cycle_navigates_once() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);

        for (t, remaining) in [(1, 3), (2, 2), (3, 1)] {
            gate.update(secs(t), &mut nav);
            assert_eq!(gate.phase(), GatePhase::Counting);
            assert_eq!(gate.seconds_remaining(), remaining);
            assert!(nav.visited.is_empty());
        }
        assert_eq!(gate.elapsed_fraction(), 0.75);

        gate.update(secs(4), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Redirecting);
        assert_eq!(gate.seconds_remaining(), 0);
        assert_eq!(nav.visited, vec![URL.to_string()]);

        // Still open until the close delay passes
        gate.update(Duration::from_millis(4_900), &mut nav);
        assert!(gate.is_open());

        gate.update(secs(5), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Closed);
        assert_eq!(gate.target_url(), None);
        assert_eq!(gate.seconds_remaining(), 4);
        assert_eq!(nav.visited.len(), 1);
    }

    #[test]
    fn test_time_jump_processes_ticks_in_order() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(10), URL);

        gate.update(secs(60), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Closed);
        assert_eq!(nav.visited, vec![URL.to_string()]);
    }

    #[test]
    fn test_second_request_is_ignored() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);
        gate.update(secs(1), &mut nav);

        assert!(!gate.request(secs(1), "https://example.org/other"));
        assert_eq!(gate.seconds_remaining(), 3);
        assert_eq!(gate.target_url(), Some(URL));

        gate.update(secs(10), &mut nav);
        assert_eq!(nav.visited, vec![URL.to_string()]);
    }

    #[test]
    fn test_request_ignored_while_redirecting() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);
        gate.update(secs(4), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Redirecting);

        assert!(!gate.request(secs(4), "https://example.org/other"));
        assert_eq!(gate.target_url(), Some(URL));
    }

    #[test]
    fn test_cancel_invalidates_pending_ticks() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);
        gate.update(secs(2), &mut nav);

        gate.cancel();
        assert_eq!(gate.phase(), GatePhase::Closed);
        assert_eq!(gate.target_url(), None);
        assert_eq!(gate.seconds_remaining(), 4);
        assert_eq!(gate.next_deadline(), None);

        gate.update(secs(30), &mut nav);
        assert!(nav.visited.is_empty());
        assert_eq!(gate.phase(), GatePhase::Closed);
    }

    #[test]
    fn test_cancel_during_redirect_drops_close_timer() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);
        gate.update(secs(4), &mut nav);

        gate.cancel();
        assert_eq!(gate.next_deadline(), None);

        // A new session must not be closed by the old close timer
        gate.request(Duration::from_millis(4_500), "https://example.org/next");
        gate.update(secs(5), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Counting);
        assert_eq!(gate.seconds_remaining(), 4);
    }

    #[test]
    fn test_rapid_open_cancel_cycles() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();

        for i in 0..5u64 {
            let start = Duration::from_millis(i * 300);
            assert!(gate.request(start, format!("https://example.org/{}", i)));
            gate.update(start + Duration::from_millis(200), &mut nav);
            gate.cancel();
        }

        gate.request(secs(2), URL);
        gate.update(secs(3), &mut nav);
        assert_eq!(gate.seconds_remaining(), 3);

        gate.update(secs(6), &mut nav);
        assert_eq!(nav.visited, vec![URL.to_string()]);
    }

    #[test]
    fn test_missing_target_skips_navigation_and_closes() {
        let mut gate = DownloadGate::new();
        let mut nav = RecordingNavigator::default();
        gate.request(secs(0), URL);
        gate.target_url = None;

        gate.update(secs(4), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Redirecting);
        assert!(nav.visited.is_empty());

        gate.update(secs(5), &mut nav);
        assert_eq!(gate.phase(), GatePhase::Closed);
    }
}
